//! Startup configuration.
//!
//! Paths come from CLI flags first, then the environment (a `.env` file is
//! honoured), then the compiled-in defaults. Everything is loaded once and
//! handed to the engine; nothing here is consulted after startup.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::brain::{Lexicon, PromptAnalyzer};
use crate::engine::PromptOptimizer;
use crate::error::AppError;
use crate::registry::ToolRegistry;

pub const TOOLS_ENV: &str = "PROMPT_OPTIMIZER_TOOLS";
pub const LEXICON_ENV: &str = "PROMPT_OPTIMIZER_LEXICON";
pub const LOG_FORMAT_ENV: &str = "PROMPT_OPTIMIZER_LOG_FORMAT";

/// Log output format for the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Tool registry file; built-in tools when `None`
    pub tools_path: Option<PathBuf>,
    /// Lexicon override file; built-in lexicon when `None`
    pub lexicon_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

impl Settings {
    /// Read settings from the process environment after loading `.env`
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_current_env()
    }

    /// Read settings from the process environment as it is now
    pub fn from_current_env() -> Self {
        Self {
            tools_path: env_path(TOOLS_ENV),
            lexicon_path: env_path(LEXICON_ENV),
            log_format: std::env::var(LOG_FORMAT_ENV)
                .map(|value| LogFormat::parse(&value))
                .unwrap_or_default(),
        }
    }

    /// Explicit paths win over whatever the environment provided
    pub fn with_overrides(mut self, tools: Option<PathBuf>, lexicon: Option<PathBuf>) -> Self {
        if tools.is_some() {
            self.tools_path = tools;
        }
        if lexicon.is_some() {
            self.lexicon_path = lexicon;
        }
        self
    }

    pub fn load_lexicon(&self) -> Result<Arc<Lexicon>, AppError> {
        match &self.lexicon_path {
            Some(path) => Ok(Arc::new(Lexicon::load(path)?)),
            None => Ok(Lexicon::global()),
        }
    }

    pub fn load_registry(&self) -> Result<ToolRegistry, AppError> {
        match &self.tools_path {
            Some(path) => ToolRegistry::load(path),
            None => ToolRegistry::builtin(),
        }
    }

    /// Build the engine these settings describe; fails fast on bad files
    pub fn build_engine(&self) -> Result<PromptOptimizer, AppError> {
        let analyzer = PromptAnalyzer::with_lexicon(self.load_lexicon()?);
        let registry = self.load_registry()?;
        info!(
            "Configuration loaded (tools: {}, lexicon: {})",
            describe(&self.tools_path),
            describe(&self.lexicon_path)
        );
        Ok(PromptOptimizer::new(analyzer, registry))
    }
}

fn describe(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string())
}
