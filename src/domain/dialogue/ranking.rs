//! Professor ranking for a class.

use crate::domain::directory::{ClassOfferings, Professor};

/// How many professors a result carries.
pub const TOP_PROFESSORS: usize = 3;

/// How many reviews per professor appear in the reply text.
pub const REVIEWS_SHOWN: usize = 2;

/// Best-rated professors of one class.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub class_name: String,
    pub professors: Vec<Professor>,
}

/// Sorts by rating, highest first, and keeps the top [`TOP_PROFESSORS`].
///
/// The sort is stable: professors with equal ratings keep their source order.
pub fn rank_professors(offerings: &ClassOfferings) -> Vec<Professor> {
    let mut ranked: Vec<Professor> = offerings.professors().to_vec();
    ranked.sort_by(|a, b| a.rating().cmp_desc(&b.rating()));
    ranked.truncate(TOP_PROFESSORS);
    ranked
}
