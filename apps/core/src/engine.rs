//! # Prompt Optimizer Engine
//!
//! Entry point for callers: analyze a prompt, rewrite it for one tool, or
//! rewrite it for every registered tool at once.
//!
//! ## Flow
//! ```text
//! prompt → PromptAnalyzer → Profile ─┬→ Optimizer (one tool)   → RewriteResult
//!                                    └→ Optimizer × N (rayon)  → BatchResult
//! ```

use rayon::prelude::*;
use tracing::{debug, info};

use crate::brain::{Profile, PromptAnalyzer};
use crate::error::AppError;
use crate::models::{BatchResult, RewriteResult, ToolConfig, ToolResult};
use crate::registry::ToolRegistry;

pub struct PromptOptimizer {
    analyzer: PromptAnalyzer,
    registry: ToolRegistry,
}

impl PromptOptimizer {
    pub fn new(analyzer: PromptAnalyzer, registry: ToolRegistry) -> Self {
        info!("Prompt optimizer ready with {} tools", registry.len());
        Self { analyzer, registry }
    }

    /// Built-in lexicon and tool set
    pub fn with_defaults() -> Result<Self, AppError> {
        Ok(Self::new(PromptAnalyzer::new(), ToolRegistry::builtin()?))
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Configuration of a registered tool
    pub fn tool_info(&self, tool_id: &str) -> Option<&ToolConfig> {
        self.registry.get(tool_id).map(|o| o.tool())
    }

    pub fn analyze(&self, prompt: &str) -> Result<Profile, AppError> {
        self.analyzer.analyze(prompt)
    }

    /// Rewrite `prompt` for one tool, reusing `profile` when the caller has one.
    pub fn optimize(
        &self,
        prompt: &str,
        tool_id: &str,
        profile: Option<&Profile>,
    ) -> Result<RewriteResult, AppError> {
        let optimizer = self
            .registry
            .get(tool_id)
            .ok_or_else(|| AppError::UnknownTool(tool_id.to_string()))?;

        if prompt.trim().is_empty() {
            return Err(AppError::InvalidInput);
        }

        let result = match profile {
            Some(profile) => optimizer.optimize(prompt, profile),
            None => optimizer.optimize(prompt, &self.analyzer.analyze(prompt)?),
        };

        debug!(
            "Optimized for {}: score {}, {} rules applied",
            tool_id,
            result.score,
            result.optimizations.len()
        );
        Ok(result)
    }

    /// Analyze once, then rewrite for every registered tool in parallel.
    /// Results keep registry order.
    pub fn optimize_all(&self, prompt: &str) -> Result<BatchResult, AppError> {
        let profile = self.analyzer.analyze(prompt)?;

        let results: Vec<ToolResult> = self
            .registry
            .optimizers()
            .par_iter()
            .map(|optimizer| {
                let tool = optimizer.tool();
                ToolResult {
                    tool_id: tool.id.clone(),
                    tool_name: tool.name.clone(),
                    result: optimizer.optimize(prompt, &profile),
                }
            })
            .collect();

        let batch = BatchResult { profile, results };
        if let Some(best) = batch.best() {
            info!(
                "Batch optimized for {} tools; best: {} ({})",
                batch.results.len(),
                best.tool_id,
                best.result.score
            );
        }
        Ok(batch)
    }
}
