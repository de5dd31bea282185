//! Intent Classification using keyword lexicons.
//!
//! Categories are scanned in lexicon order and the first one with at least
//! one keyword hit wins, regardless of how many hits later categories have.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::lexicon::Lexicon;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Write new code (default when nothing matches)
    #[default]
    CodeGeneration,
    /// Find and fix a defect
    Debugging,
    /// Restructure existing code
    Refactoring,
    /// Critique existing code
    CodeReview,
    /// Write or improve tests
    Testing,
    /// Write docs or comments
    Documentation,
    /// Understand a concept
    Learning,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns the wire label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::CodeGeneration => "code_generation",
            Intent::Debugging => "debugging",
            Intent::Refactoring => "refactoring",
            Intent::CodeReview => "code_review",
            Intent::Testing => "testing",
            Intent::Documentation => "documentation",
            Intent::Learning => "learning",
        }
    }

    /// Title-cased label for display ("code_review" -> "Code Review")
    pub fn display_name(&self) -> String {
        self.label()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Intent classifier over the lexicon's ordered intent categories
pub struct IntentClassifier {
    lexicon: Arc<Lexicon>,
}

impl IntentClassifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Classify an already lower-cased text
    pub fn classify(&self, lower: &str) -> Intent {
        self.lexicon
            .intents
            .iter()
            .find(|category| category.matches(lower))
            .map(|category| category.tag)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(Lexicon::global())
    }

    #[test]
    fn test_default_is_code_generation() {
        assert_eq!(classifier().classify("hello there"), Intent::CodeGeneration);
    }

    #[test]
    fn test_debugging_detection() {
        let c = classifier();
        assert_eq!(c.classify("debug this loop"), Intent::Debugging);
        assert_eq!(c.classify("the app throws an exception"), Intent::Debugging);
    }

    #[test]
    fn test_first_match_wins() {
        // "fix the" (debugging) is declared before "refactor" (refactoring)
        let c = classifier();
        assert_eq!(
            c.classify("refactor the parser and fix the crash"),
            Intent::Debugging
        );
    }

    #[test]
    fn test_review_mentioning_issues_is_code_review() {
        let c = classifier();
        assert_eq!(
            c.classify("review my django views for security issues"),
            Intent::CodeReview
        );
        assert_eq!(c.classify("audit the fixtures module"), Intent::CodeReview);
        assert_eq!(c.classify("there is an issue with the login"), Intent::Debugging);
    }

    #[test]
    fn test_learning_detection() {
        assert_eq!(
            classifier().classify("explain how closures capture variables"),
            Intent::Learning
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Intent::CodeReview.display_name(), "Code Review");
        assert_eq!(Intent::Learning.display_name(), "Learning");
    }
}
