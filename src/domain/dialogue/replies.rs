//! Reply texts sent back to the user.

use crate::domain::directory::Professor;

use super::ranking::REVIEWS_SHOWN;

pub const GREETING: &str = "Hello! Which university are you looking for professors at?";

pub const UNIVERSITY_REQUIRED: &str =
    "I need to know the university first. Which university are you looking for?";

pub fn ask_for_class(university: &str) -> String {
    format!("Great! What class are you looking for at {university}?")
}

pub fn unknown_university(available: &[&str]) -> String {
    format!(
        "I don't recognize that university. Available universities are: {}. Please try again.",
        available.join(", ")
    )
}

pub fn unknown_class(university: &str, available: &[&str]) -> String {
    format!(
        "I don't recognize that class for {university}. Available classes are: {}. Please try again.",
        available.join(", ")
    )
}

/// Numbered listing of the ranked professors with their leading reviews.
pub fn ranked_professors(class_name: &str, university: &str, professors: &[Professor]) -> String {
    let mut text = format!("Here are the top 3 professors for {class_name} at {university}:\n\n");
    for (position, prof) in professors.iter().enumerate() {
        text.push_str(&format!(
            "{}. {} - Rating: {}/5.0, Difficulty: {}/5.0\n   Reviews: {}\n\n",
            position + 1,
            prof.name(),
            prof.rating(),
            prof.difficulty(),
            prof.leading_reviews(REVIEWS_SHOWN).join(", ")
        ));
    }
    text
}
