//! Brain Module Tests
//!
//! Analyzer behaviour across realistic prompts: classification scenarios,
//! determinism, monotonic domain/requirement detection and custom lexicons.

use std::sync::Arc;

use crate::brain::{
    Complexity, Domain, Framework, Intent, Language, Lexicon, PromptAnalyzer, Requirement,
};
use crate::error::AppError;

const SAMPLE_PROMPTS: &[&str] = &[
    "create a function to sort an array",
    "debug this React component, getting a null pointer error",
    "refactor this enterprise microservice architecture for scalability",
    "explain how closures work in javascript",
    "review my django views for security issues",
    "write unit tests for the payment api",
    "add jsdoc comments to the utils module",
    "build a responsive landing page with html and css",
    "deploy the service to kubernetes on aws",
    "```rust\nfn main() {}\n``` why does this not compile",
];

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_sort_function_prompt() {
        let profile = PromptAnalyzer::new()
            .analyze("create a function to sort an array")
            .unwrap();

        assert_eq!(profile.intent, Intent::CodeGeneration);
        assert_eq!(profile.domains, vec![Domain::General]);
        assert_eq!(profile.code_context.language, Language::JavaScript);
        assert_eq!(profile.complexity, Complexity::Moderate);
        assert_eq!(profile.original_length, 34);
        assert!(!profile.code_context.has_code);
    }

    #[test]
    fn test_react_debugging_prompt() {
        let profile = PromptAnalyzer::new()
            .analyze("debug this React component, getting a null pointer error")
            .unwrap();

        assert_eq!(profile.intent, Intent::Debugging);
        assert!(profile.has_domain(Domain::Web), "react should map to web");
        assert_eq!(profile.code_context.framework, Some(Framework::React));
        assert_eq!(profile.code_context.language, Language::JavaScript);
    }

    #[test]
    fn test_security_review_prompt() {
        let profile = PromptAnalyzer::new()
            .analyze("review my django views for security issues")
            .unwrap();

        assert_eq!(profile.intent, Intent::CodeReview);
        assert_eq!(profile.code_context.language, Language::Python);
        assert_eq!(profile.code_context.framework, Some(Framework::Django));
        assert_eq!(profile.complexity, Complexity::Complex);
    }

    #[test]
    fn test_enterprise_refactor_prompt() {
        let profile = PromptAnalyzer::new()
            .analyze("refactor this enterprise microservice architecture for scalability")
            .unwrap();

        assert_eq!(profile.intent, Intent::Refactoring);
        assert_eq!(profile.complexity, Complexity::Complex);
    }

    #[test]
    fn test_inclusive_domains_and_requirements() {
        let profile = PromptAnalyzer::new()
            .analyze("build a secure react frontend backed by a fast express server")
            .unwrap();

        assert_eq!(profile.domains, vec![Domain::Web, Domain::Backend]);
        assert!(profile.has_requirement(Requirement::Security));
        assert!(profile.has_requirement(Requirement::Performance));
    }

    #[test]
    fn test_code_markers() {
        let analyzer = PromptAnalyzer::new();
        assert!(analyzer.analyze("why does `map` return undefined").unwrap().code_context.has_code);
        assert!(analyzer.analyze(SAMPLE_PROMPTS[9]).unwrap().code_context.has_code);
        assert!(!analyzer.analyze("explain recursion").unwrap().code_context.has_code);
    }

    #[test]
    fn test_blank_prompt_rejected() {
        let analyzer = PromptAnalyzer::new();
        for prompt in ["", "   ", "\n\t"] {
            assert!(
                matches!(analyzer.analyze(prompt), Err(AppError::InvalidInput)),
                "Expected InvalidInput for {:?}",
                prompt
            );
        }
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn test_analysis_is_deterministic() {
        let analyzer = PromptAnalyzer::new();
        for prompt in SAMPLE_PROMPTS {
            let first = analyzer.analyze(prompt).unwrap();
            let second = analyzer.analyze(prompt).unwrap();
            assert_eq!(first, second, "Profile changed between runs for '{}'", prompt);
        }
    }

    #[test]
    fn test_case_does_not_matter() {
        let analyzer = PromptAnalyzer::new();
        for prompt in SAMPLE_PROMPTS {
            let lower = analyzer.analyze(prompt).unwrap();
            let upper = analyzer.analyze(&prompt.to_uppercase()).unwrap();
            assert_eq!(lower.intent, upper.intent, "Intent differs by case for '{}'", prompt);
            assert_eq!(lower.domains, upper.domains, "Domains differ by case for '{}'", prompt);
        }
    }

    #[test]
    fn test_domains_and_requirements_grow_with_appended_text() {
        let analyzer = PromptAnalyzer::new();
        let suffix = " with a secure docker deployment and responsive css";

        for prompt in SAMPLE_PROMPTS {
            let base = analyzer.analyze(prompt).unwrap();
            let extended = analyzer.analyze(&format!("{}{}", prompt, suffix)).unwrap();

            for domain in base.domains.iter().filter(|d| **d != Domain::General) {
                assert!(
                    extended.has_domain(*domain),
                    "Domain {:?} lost after appending text to '{}'",
                    domain,
                    prompt
                );
            }
            for requirement in &base.requirements {
                assert!(
                    extended.has_requirement(*requirement),
                    "Requirement {:?} lost after appending text to '{}'",
                    requirement,
                    prompt
                );
            }
        }
    }

    #[test]
    fn test_general_only_when_nothing_else_matched() {
        let analyzer = PromptAnalyzer::new();
        for prompt in SAMPLE_PROMPTS {
            let profile = analyzer.analyze(prompt).unwrap();
            assert!(!profile.domains.is_empty());
            if profile.has_domain(Domain::General) {
                assert_eq!(profile.domains.len(), 1, "General mixed with others for '{}'", prompt);
            }
        }
    }
}

#[cfg(test)]
mod lexicon_tests {
    use super::*;

    #[test]
    fn test_custom_lexicon_changes_classification() {
        let mut lexicon = Lexicon::builtin();
        lexicon.intents[0].keywords.push("gremlin".to_string());
        let analyzer = PromptAnalyzer::with_lexicon(Arc::new(lexicon));

        let profile = analyzer.analyze("there is a gremlin in the build").unwrap();
        assert_eq!(profile.intent, Intent::Debugging);

        let builtin = PromptAnalyzer::new().analyze("there is a gremlin in the build").unwrap();
        assert_eq!(builtin.intent, Intent::CodeGeneration);
    }

    #[test]
    fn test_complexity_ties_keep_first_tier() {
        // one simple hit, one complex hit
        let profile = PromptAnalyzer::new()
            .analyze("a simple system")
            .unwrap();
        assert_eq!(profile.complexity, Complexity::Simple);
    }
}
