//! Analytical strategy: asks for structured, explained, trade-off aware answers.

use super::text::{char_len, contains_any};
use super::{clamp_score, Optimizer, Rule, RuleContext};
use crate::brain::{Complexity, Intent, Profile};
use crate::models::{Impact, StrategyKind, ToolConfig};

static RULES: [Rule; 3] = [
    Rule::new(
        "Added analytical structure for comprehensive response",
        Impact::High,
        wants_analysis,
        add_analytical_structure,
    ),
    Rule::new(
        "Enhanced for detailed explanations",
        Impact::Medium,
        lacks_explanation,
        add_explanation_checklist,
    ),
    Rule::new(
        "Added comprehensive context for analysis",
        Impact::Medium,
        has_context_elements,
        add_context_block,
    ),
];

pub struct AnalyticalOptimizer {
    tool: ToolConfig,
}

impl AnalyticalOptimizer {
    pub fn new(tool: ToolConfig) -> Self {
        Self { tool }
    }
}

fn wants_analysis(_: &str, ctx: &RuleContext<'_>) -> bool {
    matches!(ctx.profile.intent, Intent::CodeReview | Intent::Learning)
}

fn add_analytical_structure(text: &str, _: &RuleContext<'_>) -> String {
    format!(
        "Please provide a comprehensive analysis of: {text}\n\
         \n\
         Structure your response with:\n\
         1. Initial assessment and understanding\n\
         2. Detailed breakdown of components/logic\n\
         3. Strengths and potential improvements\n\
         4. Best practices and recommendations\n\
         5. Example implementation or fixes\n\
         6. Learning takeaways and next steps\n\
         \n\
         Task: {text}"
    )
}

fn lacks_explanation(text: &str, _: &RuleContext<'_>) -> bool {
    !contains_any(text, &["explain", "analyze"])
}

fn add_explanation_checklist(text: &str, _: &RuleContext<'_>) -> String {
    format!(
        "{text}\n\
         \n\
         Please provide detailed explanations for:\n\
         - Design decisions and rationale\n\
         - Code structure and organization\n\
         - Potential edge cases and considerations\n\
         - Performance and security implications\n\
         - Alternative approaches and trade-offs"
    )
}

fn context_elements(profile: &Profile) -> Vec<String> {
    let mut elements = Vec::new();

    if profile.complexity == Complexity::Complex {
        elements.push("architectural considerations".to_string());
        elements.push("scalability implications".to_string());
        elements.push("maintainability factors".to_string());
    }

    if !profile.domains.is_empty() {
        elements.push(format!("{} best practices", profile.domain_labels().join(", ")));
    }

    elements
}

fn has_context_elements(_: &str, ctx: &RuleContext<'_>) -> bool {
    !context_elements(ctx.profile).is_empty()
}

fn add_context_block(text: &str, ctx: &RuleContext<'_>) -> String {
    format!(
        "Context for analysis: {}\n\n{}\n\nPlease consider the full context and provide comprehensive insights.",
        context_elements(ctx.profile).join(", "),
        text
    )
}

impl Optimizer for AnalyticalOptimizer {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Analytical
    }

    fn tool(&self) -> &ToolConfig {
        &self.tool
    }

    fn rules(&self) -> Vec<&Rule> {
        RULES.iter().collect()
    }

    fn score(&self, original: &str, optimized: &str, _profile: &Profile) -> u8 {
        let mut score = 0.0;

        if contains_any(optimized, &["analyze", "explain"]) {
            score += 25.0;
        }
        if contains_any(optimized, &["comprehensive", "detailed"]) {
            score += 20.0;
        }
        if contains_any(optimized, &["trade-offs", "considerations"]) {
            score += 20.0;
        }
        if optimized.contains("Structure your response") {
            score += 15.0;
        }
        if optimized.contains("best practices") {
            score += 10.0;
        }
        if char_len(optimized) >= char_len(original) * 2 {
            score += 10.0;
        }

        clamp_score(score)
    }

    fn tips(&self, _profile: &Profile) -> Vec<String> {
        [
            "Request detailed explanations and rationale",
            "Ask for multiple approaches and trade-offs",
            "Include context about constraints and requirements",
            "Structure requests for comprehensive analysis",
        ]
        .iter()
        .map(|tip| tip.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::PromptAnalyzer;

    fn optimizer() -> AnalyticalOptimizer {
        AnalyticalOptimizer::new(ToolConfig::new("claude-dev", "Claude (Anthropic)"))
    }

    #[test]
    fn test_length_bonus_starts_at_double() {
        let profile = PromptAnalyzer::new().analyze("abcd").unwrap();
        let optimizer = optimizer();

        assert_eq!(optimizer.score("abcd", "abcdabcd", &profile), 10);
        assert_eq!(optimizer.score("abcd", "abcdabc", &profile), 0);
    }

    #[test]
    fn test_review_gets_numbered_structure() {
        let prompt = "review my login handler";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        let result = optimizer().optimize(prompt, &profile);

        assert!(result.optimized.contains("Structure your response with:"));
        assert!(result.optimized.contains("Task: review my login handler"));
        assert_eq!(
            result.optimizations[0].description,
            "Added analytical structure for comprehensive response"
        );
    }

    #[test]
    fn test_generation_skips_structure() {
        let prompt = "create a function to sort an array";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        let result = optimizer().optimize(prompt, &profile);

        assert!(!result.optimized.contains("Structure your response"));
        assert!(result.optimized.contains("Alternative approaches and trade-offs"));
        assert!(result.optimized.starts_with("Context for analysis: general best practices"));
        assert_eq!(result.optimizations.len(), 2);
    }

    #[test]
    fn test_explain_marker_suppresses_checklist() {
        let prompt = "explain recursion";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        let result = optimizer().optimize(prompt, &profile);

        assert!(!result
            .optimizations
            .iter()
            .any(|o| o.description == "Enhanced for detailed explanations"));
    }

    #[test]
    fn test_complex_prompt_lists_architecture_context() {
        let prompt = "design an enterprise system architecture";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        let result = optimizer().optimize(prompt, &profile);

        assert!(result.optimized.contains("architectural considerations"));
        assert!(result.optimized.contains("scalability implications"));
    }

    #[test]
    fn test_score_for_generation_prompt() {
        let prompt = "create a function to sort an array";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        let result = optimizer().optimize(prompt, &profile);

        // detailed 20 + trade-offs 20 + best practices 10 + length 10
        assert_eq!(result.score, 60);
        assert_eq!(result.tips.len(), 4);
    }
}
