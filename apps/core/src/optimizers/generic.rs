//! Fallback strategy for tools without a dedicated one. Framing is chosen
//! from the tool's declared strengths.

use super::{Optimizer, Rule, RuleContext};
use crate::brain::Profile;
use crate::models::{Impact, StrategyKind, ToolConfig};

/// Score reported for every generic rewrite
pub const GENERIC_SCORE: u8 = 75;

static RULES: [Rule; 2] = [
    Rule::new(
        "Framed as a code completion task",
        Impact::Medium,
        completes_code,
        add_completion_framing,
    ),
    Rule::new(
        "Framed as a debugging task",
        Impact::Medium,
        debugs_code,
        add_debugging_framing,
    ),
];

pub struct GenericOptimizer {
    tool: ToolConfig,
}

impl GenericOptimizer {
    pub fn new(tool: ToolConfig) -> Self {
        Self { tool }
    }
}

fn completes_code(_: &str, ctx: &RuleContext<'_>) -> bool {
    ctx.tool.has_strength("code completion")
}

fn add_completion_framing(text: &str, _: &RuleContext<'_>) -> String {
    format!("// Code completion task:\n{text}\n\n// Please provide implementation:")
}

fn debugs_code(_: &str, ctx: &RuleContext<'_>) -> bool {
    ctx.tool.has_strength("debugging")
}

fn add_debugging_framing(text: &str, _: &RuleContext<'_>) -> String {
    format!(
        "// Debug this issue:\n{text}\n\n// Expected behavior:\n// Actual behavior:\n// Solution:"
    )
}

impl Optimizer for GenericOptimizer {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Generic
    }

    fn tool(&self) -> &ToolConfig {
        &self.tool
    }

    fn rules(&self) -> Vec<&Rule> {
        RULES.iter().collect()
    }

    fn score(&self, _original: &str, _optimized: &str, _profile: &Profile) -> u8 {
        GENERIC_SCORE
    }

    fn tips(&self, _profile: &Profile) -> Vec<String> {
        if self.tool.strengths.is_empty() {
            return vec![format!("Optimized for {}", self.tool.name)];
        }
        vec![format!(
            "Optimized for {} strengths: {}",
            self.tool.name,
            self.tool.strengths.join(", ")
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::PromptAnalyzer;

    #[test]
    fn test_strengths_drive_framing() {
        let tool = ToolConfig::new("tabnine", "Tabnine")
            .with_strengths(&["code completion", "debugging"]);
        let prompt = "parse a csv file";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();

        let result = GenericOptimizer::new(tool).optimize(prompt, &profile);

        assert!(result.optimized.starts_with("// Debug this issue:\n// Code completion task:\nparse a csv file"));
        assert!(result.optimized.ends_with("// Solution:"));
        assert_eq!(result.optimizations.len(), 2);
        assert_eq!(result.score, GENERIC_SCORE);
        assert_eq!(
            result.tips,
            vec!["Optimized for Tabnine strengths: code completion, debugging".to_string()]
        );
    }

    #[test]
    fn test_no_strengths_leaves_prompt_untouched() {
        let prompt = "parse a csv file";
        let profile = PromptAnalyzer::new().analyze(prompt).unwrap();

        let result = GenericOptimizer::new(ToolConfig::new("aider", "Aider")).optimize(prompt, &profile);

        assert_eq!(result.optimized, prompt);
        assert!(result.optimizations.is_empty());
        assert_eq!(result.tips, vec!["Optimized for Aider".to_string()]);
    }
}
