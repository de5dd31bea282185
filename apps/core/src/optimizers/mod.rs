//! # Optimizers
//!
//! One rewrite strategy per target tool family, all behind the `Optimizer`
//! trait. A strategy is an ordered list of guarded rules plus a private
//! scoring rubric.
//!
//! Rules only ever add scaffolding around the caller's text. The pipeline
//! enforces this: a rule whose output no longer contains the original prompt
//! is discarded.

pub mod analytical;
pub mod file_aware;
pub mod generic;
pub mod rule_table;
pub mod text;
pub mod tutorial;

pub use analytical::AnalyticalOptimizer;
pub use file_aware::FileAwareOptimizer;
pub use generic::GenericOptimizer;
pub use rule_table::RuleTableOptimizer;
pub use tutorial::TutorialOptimizer;

use tracing::{debug, warn};

use crate::brain::Profile;
use crate::models::{Impact, Optimization, RewriteResult, StrategyKind, ToolConfig};

/// Maximum number of tips attached to a result
pub const MAX_TIPS: usize = 4;

/// Inputs every guard and transform can read
pub struct RuleContext<'a> {
    /// Caller text as submitted, before any rule ran
    pub original: &'a str,
    pub profile: &'a Profile,
    pub tool: &'a ToolConfig,
}

/// Guard over the evolving text
pub type Guard = fn(&str, &RuleContext<'_>) -> bool;

/// Transform of the evolving text
pub type Transform = fn(&str, &RuleContext<'_>) -> String;

/// A single guarded transformation step
pub struct Rule {
    /// Human-readable explanation recorded when the rule changes the text
    pub label: &'static str,
    pub impact: Impact,
    guard: Guard,
    transform: Transform,
}

impl Rule {
    pub const fn new(label: &'static str, impact: Impact, guard: Guard, transform: Transform) -> Self {
        Self {
            label,
            impact,
            guard,
            transform,
        }
    }

    /// Apply the rule; `None` when the guard is false or the text is unchanged
    pub fn apply(&self, text: &str, ctx: &RuleContext<'_>) -> Option<String> {
        if !(self.guard)(text, ctx) {
            return None;
        }
        let next = (self.transform)(text, ctx);
        if next == text {
            None
        } else {
            Some(next)
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("label", &self.label)
            .field("impact", &self.impact)
            .finish()
    }
}

/// Run rules in order over `ctx.original`, threading the evolving text through.
pub fn run_pipeline<'r>(
    rules: impl IntoIterator<Item = &'r Rule>,
    ctx: &RuleContext<'_>,
) -> (String, Vec<Optimization>) {
    let prompt = ctx.original;
    let mut text = prompt.to_string();
    let mut optimizations = Vec::new();

    for rule in rules {
        let Some(next) = rule.apply(&text, ctx) else {
            continue;
        };

        if !next.contains(prompt) {
            warn!(
                "Rule '{}' for {} would drop caller text; skipped",
                rule.label, ctx.tool.id
            );
            continue;
        }

        debug!("Rule applied for {}: {}", ctx.tool.id, rule.label);
        text = next;
        optimizations.push(Optimization {
            description: rule.label.to_string(),
            impact: rule.impact,
        });
    }

    (text, optimizations)
}

/// Capability shared by every rewrite strategy
pub trait Optimizer: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Tool this instance was configured for
    fn tool(&self) -> &ToolConfig;

    /// Every rule this strategy can apply, in declaration order
    fn rules(&self) -> Vec<&Rule>;

    /// Rules that apply for a given profile, in application order
    fn rules_for(&self, _profile: &Profile) -> Vec<&Rule> {
        self.rules()
    }

    /// Rubric over the rewritten text, clamped to `0..=100`
    fn score(&self, original: &str, optimized: &str, profile: &Profile) -> u8;

    fn tips(&self, profile: &Profile) -> Vec<String>;

    fn optimize(&self, prompt: &str, profile: &Profile) -> RewriteResult {
        let ctx = RuleContext {
            original: prompt,
            profile,
            tool: self.tool(),
        };
        let (optimized, optimizations) = run_pipeline(self.rules_for(profile), &ctx);
        let score = self.score(prompt, &optimized, profile);
        let mut tips = self.tips(profile);
        tips.truncate(MAX_TIPS);

        RewriteResult {
            original: prompt.to_string(),
            optimized,
            optimizations,
            score,
            tips,
        }
    }
}

/// Build the strategy serving `tool`
pub fn build_optimizer(tool: ToolConfig) -> Box<dyn Optimizer> {
    match tool.resolved_strategy() {
        StrategyKind::Analytical => Box::new(AnalyticalOptimizer::new(tool)),
        StrategyKind::FileAware => Box::new(FileAwareOptimizer::new(tool)),
        StrategyKind::RuleTable => Box::new(RuleTableOptimizer::new(tool)),
        StrategyKind::Tutorial => Box::new(TutorialOptimizer::new(tool)),
        StrategyKind::Generic => Box::new(GenericOptimizer::new(tool)),
    }
}

/// Clamp an accumulated rubric to the score range
pub(crate) fn clamp_score(points: f64) -> u8 {
    points.round().clamp(0.0, 100.0) as u8
}
