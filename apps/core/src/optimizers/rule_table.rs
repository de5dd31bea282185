//! Rule-table strategy for inline code completion.
//!
//! Rules are grouped by intent; only the group matching the profile's intent
//! runs, followed by a general pass shared by every intent. The rubric
//! rewards prompts close to the tool's optimal length that carry comment,
//! signature and example context.

use super::text::{
    add_type_hints, char_len, contains_any, declared_function_name, expected_output,
    generate_function_name, generate_parameters, mentions_function_name, requirement_summary,
    task_phrase, truncate_lines, usage_example,
};
use super::{clamp_score, Optimizer, Rule, RuleContext};
use crate::brain::{Complexity, Domain, Intent, Language, Profile};
use crate::models::{Impact, StrategyKind, ToolConfig};

/// Used when the tool does not configure an optimal length
pub const DEFAULT_OPTIMAL_PROMPT_LENGTH: usize = 300;

/// Used when the tool does not configure a maximum length
pub const DEFAULT_MAX_PROMPT_LENGTH: usize = 1000;

const WEB_KEYWORDS: &[&str] = &["HTML", "CSS", "JavaScript", "React", "Vue", "Angular"];

const CONTEXT_KEYWORDS: &[&str] = &["function", "example", "expected", "error", "goal"];

static CODE_GENERATION_RULES: [Rule; 3] = [
    Rule::new(
        "Added clear function signature for better code completion",
        Impact::High,
        needs_signature,
        add_function_signature,
    ),
    Rule::new(
        "Added descriptive comments to guide code generation",
        Impact::Medium,
        needs_comment_context,
        add_comment_context,
    ),
    Rule::new(
        "Enhanced with web development context",
        Impact::Medium,
        mentions_web_stack,
        add_web_context,
    ),
];

static DEBUGGING_RULES: [Rule; 2] = [
    Rule::new(
        "Added structured error context for better debugging assistance",
        Impact::High,
        needs_error_context,
        add_error_context,
    ),
    Rule::new(
        "Clarified expected vs actual behavior",
        Impact::High,
        needs_expected_behavior,
        add_expected_behavior,
    ),
];

static REFACTORING_RULES: [Rule; 1] = [Rule::new(
    "Specified clear refactoring objectives",
    Impact::Medium,
    needs_refactoring_goals,
    add_refactoring_goals,
)];

static GENERAL_RULES: [Rule; 3] = [
    Rule::new(
        "Added type hints to the function signature",
        Impact::Low,
        needs_type_hints,
        apply_type_hints,
    ),
    Rule::new(
        "Trimmed to the tool's maximum prompt length",
        Impact::Low,
        exceeds_max_length,
        truncate_to_max,
    ),
    Rule::new(
        "Added usage example",
        Impact::Medium,
        needs_usage_example,
        add_usage_example,
    ),
];

pub struct RuleTableOptimizer {
    tool: ToolConfig,
}

impl RuleTableOptimizer {
    pub fn new(tool: ToolConfig) -> Self {
        Self { tool }
    }

    /// Intent-specific rule group; empty for intents without one
    pub fn intent_rules(intent: Intent) -> &'static [Rule] {
        match intent {
            Intent::CodeGeneration => &CODE_GENERATION_RULES,
            Intent::Debugging => &DEBUGGING_RULES,
            Intent::Refactoring => &REFACTORING_RULES,
            _ => &[],
        }
    }

    fn optimal_length(&self) -> usize {
        self.tool
            .optimal_prompt_length
            .unwrap_or(DEFAULT_OPTIMAL_PROMPT_LENGTH)
    }
}

// --- code generation ---

fn needs_signature(text: &str, ctx: &RuleContext<'_>) -> bool {
    ctx.profile.intent == Intent::CodeGeneration && !mentions_function_name(text)
}

fn add_function_signature(text: &str, ctx: &RuleContext<'_>) -> String {
    let name = generate_function_name(text);
    let params = generate_parameters(text);

    let language = ctx.profile.language();
    if language.is_js_family() {
        format!(
            "// Function to {}\nfunction {}({}) {{\n    // {}\n}}",
            task_phrase(text),
            name,
            params,
            text
        )
    } else if language == Language::Python {
        format!(
            "def {}({}):\n    \"\"\"{}\"\"\"\n    # Implementation here\n    pass",
            name, params, text
        )
    } else {
        text.to_string()
    }
}

fn needs_comment_context(text: &str, ctx: &RuleContext<'_>) -> bool {
    ctx.profile.complexity == Complexity::Simple && !contains_any(text, &["//", "#", "/*"])
}

fn add_comment_context(text: &str, ctx: &RuleContext<'_>) -> String {
    let comment = ctx.profile.language().comment_style();
    format!(
        "{comment} {text}\n\
         {comment} Expected output: {}\n\
         {comment} Requirements: {}\n\
         \n\
         {text}",
        expected_output(text),
        requirement_summary(text)
    )
}

fn web_keywords_in(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    WEB_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(&keyword.to_lowercase()))
        .copied()
        .collect()
}

fn mentions_web_stack(text: &str, ctx: &RuleContext<'_>) -> bool {
    ctx.profile.has_domain(Domain::Web) && !web_keywords_in(text).is_empty()
}

fn add_web_context(text: &str, _: &RuleContext<'_>) -> String {
    format!(
        "// Web development task using {}\n// Browser compatibility: Modern browsers (ES6+)\n// {}",
        web_keywords_in(text).join(", "),
        text
    )
}

// --- debugging ---

fn needs_error_context(text: &str, ctx: &RuleContext<'_>) -> bool {
    ctx.profile.intent == Intent::Debugging && !contains_any(text, &["Error:", "Expected:"])
}

fn add_error_context(text: &str, _: &RuleContext<'_>) -> String {
    format!(
        "// Debug the following issue:\n\
         // Problem: {text}\n\
         // Error: [Include actual error message here]\n\
         // Expected behavior: [Describe the intended outcome]\n\
         // Current behavior: [Describe what actually happens]\n\
         \n\
         {text}"
    )
}

fn needs_expected_behavior(text: &str, _: &RuleContext<'_>) -> bool {
    contains_any(text, &["error", "bug"]) && !contains_any(text, &["expected", "should"])
}

fn add_expected_behavior(text: &str, _: &RuleContext<'_>) -> String {
    format!(
        "{text}\n\
         \n\
         // Expected behavior: [Describe what the code is meant to do]\n\
         // Actual behavior: [Describe what's currently happening]\n\
         // Steps to reproduce: [List steps to trigger the issue]"
    )
}

// --- refactoring ---

fn needs_refactoring_goals(text: &str, ctx: &RuleContext<'_>) -> bool {
    ctx.profile.intent == Intent::Refactoring && !contains_any(text, &["goal", "improve"])
}

fn add_refactoring_goals(text: &str, _: &RuleContext<'_>) -> String {
    format!(
        "// Refactoring objective: {text}\n\
         // Goals:\n\
         // - Improve readability\n\
         // - Enhance maintainability\n\
         // - Optimize performance\n\
         // - Follow best practices\n\
         \n\
         {text}"
    )
}

// --- general pass ---

/// Only TypeScript gets hints: the annotations are written in its syntax
fn needs_type_hints(text: &str, ctx: &RuleContext<'_>) -> bool {
    ctx.profile.language() == Language::TypeScript && !text.contains(':')
}

fn apply_type_hints(text: &str, _: &RuleContext<'_>) -> String {
    add_type_hints(text)
}

fn max_length(tool: &ToolConfig) -> usize {
    tool.max_prompt_length.unwrap_or(DEFAULT_MAX_PROMPT_LENGTH)
}

fn exceeds_max_length(text: &str, ctx: &RuleContext<'_>) -> bool {
    char_len(text) > max_length(ctx.tool)
}

fn truncate_to_max(text: &str, ctx: &RuleContext<'_>) -> String {
    truncate_lines(text, ctx.original, max_length(ctx.tool))
}

fn needs_usage_example(text: &str, ctx: &RuleContext<'_>) -> bool {
    ctx.profile.complexity != Complexity::Simple && !text.contains("example")
}

fn add_usage_example(text: &str, ctx: &RuleContext<'_>) -> String {
    let name = declared_function_name(text)
        .unwrap_or_else(|| generate_function_name(ctx.original));
    format!(
        "{}\n\n// Example usage:\n// {}",
        text,
        usage_example(&name, ctx.profile.language())
    )
}

impl Optimizer for RuleTableOptimizer {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RuleTable
    }

    fn tool(&self) -> &ToolConfig {
        &self.tool
    }

    fn rules(&self) -> Vec<&Rule> {
        CODE_GENERATION_RULES
            .iter()
            .chain(DEBUGGING_RULES.iter())
            .chain(REFACTORING_RULES.iter())
            .chain(GENERAL_RULES.iter())
            .collect()
    }

    fn rules_for(&self, profile: &Profile) -> Vec<&Rule> {
        Self::intent_rules(profile.intent)
            .iter()
            .chain(GENERAL_RULES.iter())
            .collect()
    }

    fn score(&self, _original: &str, optimized: &str, _profile: &Profile) -> u8 {
        let mut score = 0.0;

        let length_ratio = (char_len(optimized) as f64 / self.optimal_length() as f64).min(2.0);
        score += (2.0 - length_ratio) * 25.0;

        let lower = optimized.to_lowercase();
        let context_hits = CONTEXT_KEYWORDS
            .iter()
            .filter(|keyword| lower.contains(*keyword))
            .count();
        score += context_hits as f64 / CONTEXT_KEYWORDS.len() as f64 * 25.0;

        if contains_any(optimized, &["//", "#"]) {
            score += 15.0;
        }
        if contains_any(optimized, &["function", "def"]) {
            score += 15.0;
        }
        if optimized.contains("example") {
            score += 10.0;
        }
        if contains_any(optimized, &["Expected:", "Error:"]) {
            score += 10.0;
        }

        clamp_score(score)
    }

    fn tips(&self, profile: &Profile) -> Vec<String> {
        let mut tips = Vec::new();

        if profile.intent == Intent::Debugging {
            tips.push("Include error messages and expected behavior");
            tips.push("Provide minimal reproducible code examples");
        }
        if profile.complexity == Complexity::Complex {
            tips.push("Break complex tasks into smaller, focused prompts");
            tips.push("Include architectural context and constraints");
        }

        tips.extend([
            "Use descriptive function names and parameter names",
            "Include type hints for better IntelliSense support",
            "Add comments explaining the intended behavior",
            "Provide usage examples in comments",
        ]);

        tips.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::PromptAnalyzer;

    fn optimizer() -> RuleTableOptimizer {
        RuleTableOptimizer::new(
            ToolConfig::new("github-copilot", "GitHub Copilot").with_limits(200, 1000),
        )
    }

    fn labels(result: &crate::models::RewriteResult) -> Vec<&str> {
        result
            .optimizations
            .iter()
            .map(|o| o.description.as_str())
            .collect()
    }

    #[test]
    fn test_debugging_scenario_fires_error_and_expected_scaffolds() {
        let prompt = "debug this React component, getting a null pointer error";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        let result = optimizer().optimize(prompt, &profile);

        let applied = labels(&result);
        assert!(applied.contains(&"Added structured error context for better debugging assistance"));
        assert!(applied.contains(&"Clarified expected vs actual behavior"));
        assert!(result.optimized.contains("// Steps to reproduce:"));
        assert!(result.optimized.contains(prompt));
    }

    #[test]
    fn test_signature_synthesis_for_javascript() {
        let prompt = "sort numbers descending";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        assert_eq!(profile.intent, Intent::CodeGeneration);

        let result = optimizer().optimize(prompt, &profile);

        assert!(result
            .optimized
            .contains("function sortNumbersDescending(num) {"));
        assert!(result.optimized.contains("    // sort numbers descending"));
        assert_eq!(
            labels(&result)[0],
            "Added clear function signature for better code completion"
        );
    }

    #[test]
    fn test_signature_synthesis_for_python() {
        let prompt = "python: sum the list values";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        let result = optimizer().optimize(prompt, &profile);

        assert!(result.optimized.starts_with("def pythonSumList"));
        assert!(result.optimized.contains("\"\"\"python: sum the list values\"\"\""));
    }

    #[test]
    fn test_named_function_skips_signature_but_gets_usage_example() {
        let prompt = "create a function to sort an array";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        let result = optimizer().optimize(prompt, &profile);

        assert!(!labels(&result).contains(&"Added clear function signature for better code completion"));
        // moderate complexity: no comment context, but a usage example
        assert!(result.optimized.contains("// Example usage:"));
    }

    #[test]
    fn test_python_skeleton_suppresses_comment_context() {
        let prompt = "write a quick python script that renames files";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        assert_eq!(profile.complexity, Complexity::Simple);

        let result = optimizer().optimize(prompt, &profile);

        // the python skeleton carries '#', so the comment rule stays quiet
        assert!(result.optimized.contains("# Implementation here"));
        assert!(!labels(&result).contains(&"Added descriptive comments to guide code generation"));
    }

    #[test]
    fn test_simple_prompt_without_skeleton_gets_comment_context() {
        let prompt = "write a small java helper";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        assert_eq!(profile.language(), Language::Java);
        assert_eq!(profile.complexity, Complexity::Simple);

        let result = optimizer().optimize(prompt, &profile);

        assert_eq!(
            labels(&result),
            vec!["Added descriptive comments to guide code generation"]
        );
        assert!(result.optimized.starts_with("// write a small java helper\n"));
        assert!(result
            .optimized
            .contains("// Expected output: Working code solution"));
        assert!(result
            .optimized
            .contains("// Requirements: Clean, maintainable code"));
    }

    #[test]
    fn test_web_prompt_gets_web_context() {
        let prompt = "build a responsive landing page with html and css";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        assert!(profile.has_domain(Domain::Web));

        let result = optimizer().optimize(prompt, &profile);

        assert_eq!(
            labels(&result),
            vec![
                "Added clear function signature for better code completion",
                "Enhanced with web development context",
            ]
        );
        assert!(result
            .optimized
            .starts_with("// Web development task using HTML, CSS\n"));
        assert!(result
            .optimized
            .contains("// Browser compatibility: Modern browsers (ES6+)"));
    }

    #[test]
    fn test_type_hints_for_typescript() {
        let prompt = "typescript merge two lists";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        let result = optimizer().optimize(prompt, &profile);

        assert!(result.optimized.contains("function typescriptMergeTwoLists(items: any): any {"));
    }

    #[test]
    fn test_refactoring_goals() {
        let prompt = "refactor the payment module";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        let result = optimizer().optimize(prompt, &profile);

        assert!(result.optimized.starts_with("// Refactoring objective: refactor the payment module"));
        assert!(result.optimized.contains("// Goals:"));
    }

    #[test]
    fn test_overlong_output_is_truncated_without_losing_prompt() {
        let tool = ToolConfig::new("github-copilot", "GitHub Copilot").with_limits(100, 250);
        let optimizer = RuleTableOptimizer::new(tool);
        let prompt = "debug the billing api, it throws an error on retries";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();

        let result = optimizer.optimize(prompt, &profile);

        assert!(labels(&result).contains(&"Trimmed to the tool's maximum prompt length"));
        assert!(result.optimized.contains(prompt));
        assert!(result.optimized.contains("truncated for optimal length"));
    }

    #[test]
    fn test_long_generation_prompt_is_trimmed_within_limit() {
        let prompt = format!("sort numbers {}", "descending ".repeat(50));
        let profile = PromptAnalyzer::new().analyze(&prompt).unwrap();
        let optimizer = RuleTableOptimizer::new(
            ToolConfig::new("github-copilot", "GitHub Copilot").with_limits(300, 1000),
        );

        let result = optimizer.optimize(&prompt, &profile);

        assert!(
            char_len(&result.optimized) <= 1000,
            "trimmed output is {} chars",
            char_len(&result.optimized)
        );
        assert!(labels(&result).contains(&"Trimmed to the tool's maximum prompt length"));
        assert!(result.optimized.contains(&prompt));
        assert!(result.optimized.starts_with("function sortNumbersDescendingDescending(num) {"));
        assert!(result.optimized.contains(&format!("    // {}\n}}\n", prompt)));
    }

    #[test]
    fn test_prompt_too_long_to_fit_is_not_trimmed() {
        let prompt = format!("sort numbers {}", "descending ".repeat(100));
        let profile = PromptAnalyzer::new().analyze(&prompt).unwrap();

        let result = optimizer().optimize(&prompt, &profile);

        assert!(!labels(&result).contains(&"Trimmed to the tool's maximum prompt length"));
        assert!(result.optimized.ends_with("\n}"), "skeleton must stay closed");
        assert!(!result.optimized.contains("truncated for optimal length"));
    }

    #[test]
    fn test_tips_prefer_profile_specific_advice() {
        let prompt = "debug the crash";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        let tips = optimizer().optimize(prompt, &profile).tips;

        assert_eq!(tips.len(), 4);
        assert_eq!(tips[0], "Include error messages and expected behavior");
    }

    #[test]
    fn test_rules_for_unmapped_intent_is_general_pass_only() {
        let prompt = "review this module";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();
        assert_eq!(profile.intent, Intent::CodeReview);

        assert_eq!(optimizer().rules_for(&profile).len(), GENERAL_RULES.len());
        assert_eq!(optimizer().rules().len(), 9);
    }
}
