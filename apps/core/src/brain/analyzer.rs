//! Prompt Analyzer - Main orchestrator for the Brain module.
//!
//! Coordinates intent classification, complexity tiering, domain and
//! requirement detection and code-context extraction into a single `Profile`.
//! Every check is a case-insensitive substring test against one lower-cased
//! copy of the prompt.

use std::sync::Arc;
use tracing::debug;

use super::complexity::ComplexityScorer;
use super::intent::IntentClassifier;
use super::lexicon::Lexicon;
use super::profile::{CodeContext, Domain, Framework, Language, Profile, Requirement};
use crate::error::AppError;

/// Main analyzer that orchestrates all classification components
pub struct PromptAnalyzer {
    lexicon: Arc<Lexicon>,
    intent_classifier: IntentClassifier,
    complexity_scorer: ComplexityScorer,
}

impl Default for PromptAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptAnalyzer {
    /// Create an analyzer over the built-in lexicon
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::global())
    }

    /// Create an analyzer over a custom lexicon
    pub fn with_lexicon(lexicon: Arc<Lexicon>) -> Self {
        Self {
            intent_classifier: IntentClassifier::new(Arc::clone(&lexicon)),
            complexity_scorer: ComplexityScorer::new(Arc::clone(&lexicon)),
            lexicon,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze a prompt and produce its profile.
    ///
    /// Fails with `InvalidInput` when the prompt is empty after trimming.
    pub fn analyze(&self, prompt: &str) -> Result<Profile, AppError> {
        if prompt.trim().is_empty() {
            return Err(AppError::InvalidInput);
        }

        let lower = prompt.to_lowercase();

        let profile = Profile {
            intent: self.intent_classifier.classify(&lower),
            complexity: self.complexity_scorer.assess(&lower),
            domains: self.identify_domains(&lower),
            code_context: self.extract_code_context(prompt, &lower),
            requirements: self.extract_requirements(&lower),
            original_length: prompt.chars().count(),
        };

        debug!("Prompt analyzed: {}", profile.summary());

        Ok(profile)
    }

    fn identify_domains(&self, lower: &str) -> Vec<Domain> {
        let domains: Vec<Domain> = self
            .lexicon
            .domains
            .iter()
            .filter(|category| category.matches(lower))
            .map(|category| category.tag)
            .collect();

        if domains.is_empty() {
            vec![Domain::General]
        } else {
            domains
        }
    }

    fn extract_requirements(&self, lower: &str) -> Vec<Requirement> {
        self.lexicon
            .requirements
            .iter()
            .filter(|category| category.matches(lower))
            .map(|category| category.tag)
            .collect()
    }

    fn extract_code_context(&self, prompt: &str, lower: &str) -> CodeContext {
        CodeContext {
            language: self.detect_language(lower),
            framework: self.detect_framework(lower),
            // a fence implies a backtick, so one check covers both markers
            has_code: prompt.contains('`'),
        }
    }

    fn detect_language(&self, lower: &str) -> Language {
        self.lexicon
            .languages
            .iter()
            .find(|category| category.matches(lower))
            .map(|category| category.tag)
            .unwrap_or_default()
    }

    fn detect_framework(&self, lower: &str) -> Option<Framework> {
        self.lexicon
            .frameworks
            .iter()
            .find(|category| category.matches(lower))
            .map(|category| category.tag)
    }
}
