//! The professor directory: University -> Class -> Professors.
//!
//! Built once from the startup source and never mutated afterwards. All maps
//! keep source order, which is the order used for listings and for the
//! first-match university search.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::Professor;

/// Professors teaching one class at one university, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassOfferings {
    professors: Vec<Professor>,
}

impl ClassOfferings {
    pub fn new(professors: Vec<Professor>) -> Self {
        Self { professors }
    }

    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    pub fn len(&self) -> usize {
        self.professors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.professors.is_empty()
    }
}

/// A university's classes keyed by class identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct University {
    classes: IndexMap<String, ClassOfferings>,
}

impl University {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a class.
    pub fn with_class(mut self, class_id: impl Into<String>, professors: Vec<Professor>) -> Self {
        self.classes
            .insert(class_id.into(), ClassOfferings::new(professors));
        self
    }

    /// Exact, case-sensitive class lookup.
    pub fn class(&self, class_id: &str) -> Option<&ClassOfferings> {
        self.classes.get(class_id)
    }

    pub fn class_ids(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn professor_count(&self) -> usize {
        self.classes.values().map(ClassOfferings::len).sum()
    }
}

/// The read-only lookup structure shared by every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    universities: IndexMap<String, University>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a university.
    pub fn with_university(mut self, university_id: impl Into<String>, university: University) -> Self {
        self.universities.insert(university_id.into(), university);
        self
    }

    /// Checks that every university and class identifier is non-blank.
    ///
    /// Scores are range-checked when a [`Professor`] is built, so they are
    /// not revisited here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (university_id, university) in &self.universities {
            if university_id.trim().is_empty() {
                return Err(ValidationError::empty_field("university"));
            }
            if university.class_ids().any(|id| id.trim().is_empty()) {
                return Err(ValidationError::empty_field(format!(
                    "{university_id}.class"
                )));
            }
        }
        Ok(())
    }

    /// Fuzzy university search.
    ///
    /// Case-insensitive and bidirectional: a university matches when the
    /// trimmed input is contained in its identifier or its identifier is
    /// contained in the input. The first match in source order wins. Blank
    /// input never matches.
    pub fn find_university(&self, text: &str) -> Option<&str> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.universities
            .keys()
            .find(|id| fuzzy_matches(&needle, id))
            .map(String::as_str)
    }

    /// Exact, case-sensitive class lookup within a university.
    pub fn find_class(&self, university_id: &str, class_id: &str) -> Option<&ClassOfferings> {
        self.universities.get(university_id)?.class(class_id)
    }

    /// Exact university lookup.
    pub fn university(&self, university_id: &str) -> Option<&University> {
        self.universities.get(university_id)
    }

    pub fn contains_university(&self, university_id: &str) -> bool {
        self.universities.contains_key(university_id)
    }

    pub fn list_universities(&self) -> Vec<&str> {
        self.universities.keys().map(String::as_str).collect()
    }

    /// Class identifiers of a university in source order; empty when the
    /// university is unknown.
    pub fn list_classes(&self, university_id: &str) -> Vec<&str> {
        self.universities
            .get(university_id)
            .map(|u| u.class_ids().collect())
            .unwrap_or_default()
    }

    pub fn university_count(&self) -> usize {
        self.universities.len()
    }

    pub fn class_count(&self) -> usize {
        self.universities.values().map(University::class_count).sum()
    }

    pub fn professor_count(&self) -> usize {
        self.universities.values().map(University::professor_count).sum()
    }
}

/// `needle` must already be trimmed and lowercased.
fn fuzzy_matches(needle: &str, candidate: &str) -> bool {
    let candidate = candidate.to_lowercase();
    candidate.contains(needle) || needle.contains(&candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Score;
    use serde_json::json;

    fn prof(name: &str, rating: f64) -> Professor {
        Professor::new(
            name,
            Score::try_new(rating).unwrap(),
            Score::try_new(3.0).unwrap(),
            vec![],
        )
    }

    fn sample() -> Directory {
        Directory::new()
            .with_university(
                "Stanford University",
                University::new()
                    .with_class("CS106A", vec![prof("Ada", 4.8), prof("Bo", 4.5)])
                    .with_class("MATH51", vec![prof("Cy", 3.9)]),
            )
            .with_university(
                "MIT",
                University::new().with_class("6.006", vec![prof("Di", 4.1)]),
            )
    }

    mod find_university {
        use super::*;

        #[test]
        fn partial_lowercase_input_matches() {
            assert_eq!(sample().find_university("stanford"), Some("Stanford University"));
        }

        #[test]
        fn exact_identifier_in_any_case_matches() {
            let dir = sample();
            assert_eq!(dir.find_university("MIT"), Some("MIT"));
            assert_eq!(dir.find_university("mit"), Some("MIT"));
            assert_eq!(dir.find_university("STANFORD UNIVERSITY"), Some("Stanford University"));
        }

        #[test]
        fn identifier_inside_longer_input_matches() {
            assert_eq!(sample().find_university("I go to MIT"), Some("MIT"));
        }

        #[test]
        fn surrounding_whitespace_is_ignored() {
            assert_eq!(sample().find_university("   stanford  "), Some("Stanford University"));
        }

        #[test]
        fn blank_input_never_matches() {
            assert_eq!(sample().find_university(""), None);
            assert_eq!(sample().find_university("   "), None);
        }

        #[test]
        fn unknown_input_does_not_match() {
            assert_eq!(sample().find_university("Harvard"), None);
        }

        #[test]
        fn first_match_in_source_order_wins() {
            let dir = Directory::new()
                .with_university("Ohio State University", University::new())
                .with_university("State University", University::new());
            assert_eq!(dir.find_university("state university"), Some("Ohio State University"));

            let reversed = Directory::new()
                .with_university("State University", University::new())
                .with_university("Ohio State University", University::new());
            assert_eq!(reversed.find_university("state university"), Some("State University"));
        }
    }

    mod find_class {
        use super::*;

        #[test]
        fn exact_class_is_found() {
            let dir = sample();
            let offerings = dir.find_class("Stanford University", "CS106A").unwrap();
            assert_eq!(offerings.len(), 2);
        }

        #[test]
        fn class_match_is_case_sensitive() {
            assert!(sample().find_class("Stanford University", "cs106a").is_none());
        }

        #[test]
        fn class_of_other_university_is_not_found() {
            assert!(sample().find_class("MIT", "CS106A").is_none());
        }

        #[test]
        fn unknown_university_yields_none() {
            assert!(sample().find_class("Nowhere", "CS106A").is_none());
        }
    }

    mod listings {
        use super::*;

        #[test]
        fn universities_listed_in_source_order() {
            assert_eq!(sample().list_universities(), vec!["Stanford University", "MIT"]);
        }

        #[test]
        fn classes_listed_in_source_order() {
            assert_eq!(
                sample().list_classes("Stanford University"),
                vec!["CS106A", "MATH51"]
            );
        }

        #[test]
        fn classes_of_unknown_university_are_empty() {
            assert!(sample().list_classes("Nowhere").is_empty());
        }

        #[test]
        fn counts_cover_whole_directory() {
            let dir = sample();
            assert_eq!(dir.university_count(), 2);
            assert_eq!(dir.class_count(), 3);
            assert_eq!(dir.professor_count(), 4);
            assert!(dir.contains_university("MIT"));
            assert!(!dir.contains_university("mit"));
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn well_formed_directory_is_valid() {
            assert!(sample().validate().is_ok());
        }

        #[test]
        fn blank_university_is_rejected() {
            let dir = Directory::new().with_university(" ", University::new());
            assert_eq!(
                dir.validate(),
                Err(ValidationError::empty_field("university"))
            );
        }

        #[test]
        fn blank_class_is_rejected() {
            let dir = Directory::new()
                .with_university("MIT", University::new().with_class("", vec![]));
            assert_eq!(dir.validate(), Err(ValidationError::empty_field("MIT.class")));
        }
    }

    mod serde_shape {
        use super::*;

        #[test]
        fn deserializes_nested_source_shape_in_order() {
            let dir: Directory = serde_json::from_value(json!({
                "universities": {
                    "Zeta College": { "B101": [], "A100": [] },
                    "Alpha Institute": {
                        "X1": [{ "name": "Eve", "rating": 4.0, "difficulty": 2.0, "reviews": ["ok"] }]
                    }
                }
            }))
            .unwrap();

            assert_eq!(dir.list_universities(), vec!["Zeta College", "Alpha Institute"]);
            assert_eq!(dir.list_classes("Zeta College"), vec!["B101", "A100"]);
            assert_eq!(
                dir.find_class("Alpha Institute", "X1").unwrap().professors()[0].name(),
                "Eve"
            );
        }

        #[test]
        fn missing_universities_key_is_an_error() {
            let result: Result<Directory, _> = serde_json::from_value(json!({ "schools": {} }));
            assert!(result.is_err());
        }
    }
}
