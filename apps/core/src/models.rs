use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::brain::Profile;

/// Rewrite strategy family a tool is served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Numbered analysis structure and explanation checklists.
    Analytical,
    /// Synthetic file paths, project tree and architecture notes.
    FileAware,
    /// Intent-keyed rule table tuned for inline completion.
    RuleTable,
    /// Beginner tutorial framing with setup steps.
    Tutorial,
    /// Strength-driven framing for tools without a dedicated strategy.
    Generic,
}

impl StrategyKind {
    /// Dedicated strategy for a well-known tool identifier, if any.
    pub fn for_tool_id(id: &str) -> Option<Self> {
        match id {
            "claude-dev" => Some(StrategyKind::Analytical),
            "cursor" => Some(StrategyKind::FileAware),
            "github-copilot" => Some(StrategyKind::RuleTable),
            "replit-ai" => Some(StrategyKind::Tutorial),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::Analytical => "analytical",
            StrategyKind::FileAware => "file_aware",
            StrategyKind::RuleTable => "rule_table",
            StrategyKind::Tutorial => "tutorial",
            StrategyKind::Generic => "generic",
        }
    }
}

/// Describes a target coding assistant and its per-tool limits.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
#[validate(schema(function = "validate_prompt_limits"))]
pub struct ToolConfig {
    /// Stable identifier used to look the tool up (e.g. "cursor").
    #[validate(length(min = 1))]
    pub id: String,
    /// Human-readable name shown next to results.
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Strength tags; the generic strategy keys its rules off these.
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    /// Explicit strategy; inferred from `id` when absent.
    #[serde(default)]
    pub strategy: Option<StrategyKind>,
    /// Rewritten prompts longer than this are trimmed (whole lines only).
    #[serde(default)]
    #[validate(range(min = 1))]
    pub max_prompt_length: Option<usize>,
    /// Length the rule-table rubric rewards most.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub optimal_prompt_length: Option<usize>,
}

fn validate_prompt_limits(tool: &ToolConfig) -> Result<(), ValidationError> {
    if let (Some(max), Some(optimal)) = (tool.max_prompt_length, tool.optimal_prompt_length) {
        if optimal > max {
            return Err(ValidationError::new("optimal_prompt_length_exceeds_max"));
        }
    }
    Ok(())
}

impl ToolConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            strategy: None,
            max_prompt_length: None,
            optimal_prompt_length: None,
        }
    }

    pub fn with_strengths(mut self, strengths: &[&str]) -> Self {
        self.strengths = strengths.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_limits(mut self, optimal: usize, max: usize) -> Self {
        self.optimal_prompt_length = Some(optimal);
        self.max_prompt_length = Some(max);
        self
    }

    /// Strategy serving this tool: explicit, then well-known id, then generic.
    pub fn resolved_strategy(&self) -> StrategyKind {
        self.strategy
            .or_else(|| StrategyKind::for_tool_id(&self.id))
            .unwrap_or(StrategyKind::Generic)
    }

    pub fn has_strength(&self, strength: &str) -> bool {
        self.strengths.iter().any(|s| s.eq_ignore_ascii_case(strength))
    }
}

/// Estimated effect of a single transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// One transformation that actually changed the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimization {
    pub description: String,
    pub impact: Impact,
}

/// Outcome of rewriting one prompt for one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteResult {
    /// Verbatim input text.
    pub original: String,
    /// Rewritten text; always contains `original`.
    pub optimized: String,
    /// Applied transformations, in pipeline order.
    pub optimizations: Vec<Optimization>,
    /// Rubric score in `0..=100`.
    pub score: u8,
    /// Up to four strategy-specific tips.
    pub tips: Vec<String>,
}

/// A rewrite tagged with the tool it was produced for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_id: String,
    pub tool_name: String,
    #[serde(flatten)]
    pub result: RewriteResult,
}

/// Result of running every registered strategy over one prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub profile: Profile,
    /// One entry per registered tool, in registry order.
    pub results: Vec<ToolResult>,
}

impl BatchResult {
    pub fn get(&self, tool_id: &str) -> Option<&ToolResult> {
        self.results.iter().find(|r| r.tool_id == tool_id)
    }

    /// Results by non-increasing score; ties keep registry order.
    pub fn ranked(&self) -> Vec<&ToolResult> {
        let mut ranked: Vec<&ToolResult> = self.results.iter().collect();
        ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
        ranked
    }

    pub fn best(&self) -> Option<&ToolResult> {
        self.ranked().into_iter().next()
    }
}
