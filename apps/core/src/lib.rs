//! Prompt Optimizer Core
//!
//! Keyword-driven prompt profiling and per-tool prompt rewriting.
//!
//! - `brain`: lexicon tables and the prompt analyzer producing a `Profile`
//! - `optimizers`: one rewrite strategy per tool family behind `Optimizer`
//! - `registry`: the ordered set of tools and their strategies
//! - `engine`: single-tool and batch optimization over a registry
//! - `config`: startup settings from flags, environment and files

pub mod brain;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod optimizers;
pub mod registry;

pub use brain::{Profile, PromptAnalyzer};
pub use engine::PromptOptimizer;
pub use error::AppError;
pub use models::{BatchResult, RewriteResult, ToolConfig, ToolResult};
pub use registry::ToolRegistry;

#[cfg(test)]
mod tests;
