//! Professor record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Score;

/// One professor teaching a class, as loaded from the directory source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    name: String,
    rating: Score,
    difficulty: Score,
    #[serde(default)]
    reviews: Vec<String>,
}

impl Professor {
    pub fn new(
        name: impl Into<String>,
        rating: Score,
        difficulty: Score,
        reviews: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rating,
            difficulty,
            reviews,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> Score {
        self.rating
    }

    pub fn difficulty(&self) -> Score {
        self.difficulty
    }

    pub fn reviews(&self) -> &[String] {
        &self.reviews
    }

    /// The first `limit` reviews, fewer if the professor has fewer.
    pub fn leading_reviews(&self, limit: usize) -> &[String] {
        &self.reviews[..self.reviews.len().min(limit)]
    }
}
