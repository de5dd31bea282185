//! Tool registry: ordered tool id → strategy mapping, built once at startup.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};
use validator::Validate;

use crate::error::AppError;
use crate::models::ToolConfig;
use crate::optimizers::{build_optimizer, Optimizer};

const BUILTIN_TOOLS: &str = include_str!("../config/tools.json");

#[derive(Debug, Deserialize)]
struct RegistryFile {
    tools: Vec<ToolConfig>,
}

/// Registered tools in declaration order. Immutable once built.
pub struct ToolRegistry {
    optimizers: Vec<Box<dyn Optimizer>>,
}

impl ToolRegistry {
    /// Validate every tool and build its strategy. Duplicate ids are rejected.
    pub fn new(tools: Vec<ToolConfig>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        let mut optimizers = Vec::with_capacity(tools.len());

        for tool in tools {
            tool.validate()
                .map_err(|e| AppError::Validation(format!("tool '{}': {}", tool.id, e)))?;
            if !seen.insert(tool.id.clone()) {
                return Err(AppError::Config(format!("duplicate tool id '{}'", tool.id)));
            }
            debug!(
                "Registered tool {} ({} strategy)",
                tool.id,
                tool.resolved_strategy().label()
            );
            optimizers.push(build_optimizer(tool));
        }

        Ok(Self { optimizers })
    }

    /// Registry described by a JSON document with a `tools` array
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let file: RegistryFile = serde_json::from_str(json)?;
        if file.tools.is_empty() {
            return Err(AppError::Config("registry declares no tools".to_string()));
        }
        Self::new(file.tools)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        let registry = Self::from_json(&json)?;
        info!(
            "Loaded {} tools from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// The seven compiled-in tools
    pub fn builtin() -> Result<Self, AppError> {
        Self::from_json(BUILTIN_TOOLS)
    }

    pub fn get(&self, tool_id: &str) -> Option<&dyn Optimizer> {
        self.optimizers
            .iter()
            .find(|o| o.tool().id == tool_id)
            .map(|o| &**o)
    }

    pub fn contains(&self, tool_id: &str) -> bool {
        self.get(tool_id).is_some()
    }

    /// Tool configs in registry order
    pub fn tools(&self) -> impl Iterator<Item = &ToolConfig> {
        self.optimizers.iter().map(|o| o.tool())
    }

    pub fn optimizers(&self) -> &[Box<dyn Optimizer>] {
        &self.optimizers
    }

    pub fn len(&self) -> usize {
        self.optimizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.optimizers.is_empty()
    }
}
