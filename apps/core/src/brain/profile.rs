//! Profile - Output structure for prompt analysis.
//!
//! Contains everything the analyzer extracts from a prompt. A `Profile` is
//! built once per prompt and only read afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::complexity::Complexity;
use super::intent::Intent;

/// Technical domain a prompt touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Web,
    Backend,
    Mobile,
    Data,
    Devops,
    /// Placeholder when no domain keyword matched
    General,
}

impl Domain {
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Web => "web",
            Domain::Backend => "backend",
            Domain::Mobile => "mobile",
            Domain::Data => "data",
            Domain::Devops => "devops",
            Domain::General => "general",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Non-functional requirement detected in the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    Performance,
    Security,
    Accessibility,
    Responsive,
    Testing,
}

impl Requirement {
    pub fn label(&self) -> &'static str {
        match self {
            Requirement::Performance => "performance",
            Requirement::Security => "security",
            Requirement::Accessibility => "accessibility",
            Requirement::Responsive => "responsive",
            Requirement::Testing => "testing",
        }
    }
}

/// Programming language inferred from the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
    Python,
    Java,
    Go,
    Rust,
    Php,
    Ruby,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Php => "php",
            Language::Ruby => "ruby",
        }
    }

    /// Extension used when synthesizing a file path
    pub fn file_extension(&self) -> &'static str {
        match self {
            Language::JavaScript => ".js",
            Language::TypeScript => ".ts",
            Language::Python => ".py",
            Language::Java => ".java",
            Language::Go => ".go",
            Language::Rust => ".rs",
            // no dedicated component template for these
            Language::Php | Language::Ruby => ".js",
        }
    }

    /// Line comment marker
    pub fn comment_style(&self) -> &'static str {
        match self {
            Language::Python | Language::Ruby => "#",
            _ => "//",
        }
    }

    /// JavaScript-family languages share the `function name(...)` skeleton
    pub fn is_js_family(&self) -> bool {
        matches!(self, Language::JavaScript | Language::TypeScript)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Framework mentioned in the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Angular,
    Express,
    Django,
    Flask,
    Spring,
    Rails,
}

impl Framework {
    pub fn label(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
            Framework::Express => "express",
            Framework::Django => "django",
            Framework::Flask => "flask",
            Framework::Spring => "spring",
            Framework::Rails => "rails",
        }
    }
}

/// Code-related context of the prompt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeContext {
    /// Inferred language, javascript when nothing matched
    pub language: Language,
    pub framework: Option<Framework>,
    /// True when the prompt carries a code fence or inline code
    pub has_code: bool,
}

/// Structured classification of a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub intent: Intent,
    pub complexity: Complexity,
    /// Matching domains in lexicon order, `[General]` when none matched
    pub domains: Vec<Domain>,
    pub code_context: CodeContext,
    /// Matching requirements in lexicon order
    pub requirements: Vec<Requirement>,
    /// Character count of the source prompt
    pub original_length: usize,
}

impl Profile {
    pub fn has_domain(&self, domain: Domain) -> bool {
        self.domains.contains(&domain)
    }

    pub fn has_requirement(&self, requirement: Requirement) -> bool {
        self.requirements.contains(&requirement)
    }

    pub fn language(&self) -> Language {
        self.code_context.language
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Intent: {}, Complexity: {}, Domains: {}, Language: {}, Requirements: {}",
            self.intent,
            self.complexity,
            self.domain_labels().join(", "),
            self.code_context.language,
            if self.requirements.is_empty() {
                "none".to_string()
            } else {
                self.requirements
                    .iter()
                    .map(|r| r.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        )
    }

    pub fn domain_labels(&self) -> Vec<&'static str> {
        self.domains.iter().map(|d| d.label()).collect()
    }
}
