//! # Brain Module
//!
//! Deterministic, keyword-based prompt analysis. Runs before any rewrite
//! strategy and produces the `Profile` every strategy reads.
//!
//! ## Components
//! - `lexicon`: ordered keyword tables (built-in or loaded once from JSON)
//! - `intent`: first-match intent classification
//! - `complexity`: tier tally with stable tie-breaking
//! - `profile`: output data structure
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod complexity;
pub mod intent;
pub mod lexicon;
pub mod profile;

pub use analyzer::PromptAnalyzer;
pub use complexity::{Complexity, ComplexityScorer};
pub use intent::{Intent, IntentClassifier};
pub use lexicon::{Category, Lexicon};
pub use profile::{CodeContext, Domain, Framework, Language, Profile, Requirement};
