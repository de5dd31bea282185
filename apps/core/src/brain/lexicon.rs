//! Lexicon Store.
//!
//! Ordered category → keyword tables used by every classifier. The built-in
//! lexicon is compiled in and initialised once per process; a replacement can
//! be loaded from JSON at startup, after which it is never mutated.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::info;

use super::complexity::Complexity;
use super::intent::Intent;
use super::profile::{Domain, Framework, Language, Requirement};
use crate::error::AppError;

/// Intent categories in priority order; the first category with a hit wins.
const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::Debugging,
        &[
            "debug", "bug", "error", "fix the", "fix this", "fix my", "an issue",
            "this issue", "the issue", "not working", "broken", "crash", "exception",
            "failing",
        ],
    ),
    (
        Intent::Refactoring,
        &[
            "refactor", "restructure", "clean up", "reorganize", "simplify", "modernize",
            "migrate",
        ],
    ),
    (
        Intent::CodeReview,
        &["review", "audit", "feedback", "critique", "code quality"],
    ),
    (
        Intent::Testing,
        &["unit test", "integration test", "test case", "test coverage", "testing", "write tests"],
    ),
    (
        Intent::Documentation,
        &["document", "docstring", "readme", "jsdoc", "add comments"],
    ),
    (
        Intent::Learning,
        &[
            "explain", "understand", "learn", "how does", "what is", "teach", "tutorial",
            "why does", "concept",
        ],
    ),
    (
        Intent::CodeGeneration,
        &["create", "build", "generate", "write", "implement", "make", "add", "develop"],
    ),
];

/// Complexity tiers in tie-break order.
const COMPLEXITY_KEYWORDS: &[(Complexity, &[&str])] = &[
    (Complexity::Simple, &["simple", "basic", "easy", "quick", "small"]),
    (Complexity::Moderate, &["component", "function", "api", "interface"]),
    (
        Complexity::Complex,
        &["system", "architecture", "enterprise", "scalable", "performance", "security"],
    ),
];

const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::Web,
        &["web", "html", "css", "javascript", "react", "vue", "angular", "frontend"],
    ),
    (
        Domain::Backend,
        &["api", "server", "backend", "database", "nodejs", "express"],
    ),
    (
        Domain::Mobile,
        &["mobile", "app", "ios", "android", "react native", "flutter"],
    ),
    (
        Domain::Data,
        &["data", "analysis", "pandas", "numpy", "machine learning", "ml"],
    ),
    (
        Domain::Devops,
        &["docker", "kubernetes", "deployment", "ci/cd", "aws", "cloud"],
    ),
];

const REQUIREMENT_KEYWORDS: &[(Requirement, &[&str])] = &[
    (Requirement::Performance, &["fast", "performance", "optimize", "speed"]),
    (Requirement::Security, &["secure", "security", "auth", "protection"]),
    (Requirement::Accessibility, &["accessible", "a11y", "accessibility"]),
    (Requirement::Responsive, &["responsive", "mobile", "tablet"]),
    (Requirement::Testing, &["test", "testing", "unit test", "integration"]),
];

/// Languages in first-match order.
const LANGUAGE_KEYWORDS: &[(Language, &[&str])] = &[
    (Language::JavaScript, &["javascript", "js", "node", "react", "vue"]),
    (Language::TypeScript, &["typescript", "ts"]),
    (Language::Python, &["python", "py", "django", "flask", "pandas"]),
    (Language::Java, &["java", "spring"]),
    (Language::Go, &["golang", "go"]),
    (Language::Rust, &["rust"]),
    (Language::Php, &["php", "laravel"]),
    (Language::Ruby, &["ruby", "rails"]),
];

const FRAMEWORK_KEYWORDS: &[(Framework, &[&str])] = &[
    (Framework::React, &["react"]),
    (Framework::Vue, &["vue"]),
    (Framework::Angular, &["angular"]),
    (Framework::Express, &["express"]),
    (Framework::Django, &["django"]),
    (Framework::Flask, &["flask"]),
    (Framework::Spring, &["spring"]),
    (Framework::Rails, &["rails"]),
];

static BUILTIN: LazyLock<Arc<Lexicon>> = LazyLock::new(|| Arc::new(Lexicon::builtin()));

/// One tagged keyword set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category<T> {
    pub tag: T,
    pub keywords: Vec<String>,
}

impl<T: Copy> Category<T> {
    fn from_table(table: &[(T, &[&str])]) -> Vec<Self> {
        table
            .iter()
            .map(|(tag, keywords)| Category {
                tag: *tag,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect()
    }
}

impl<T> Category<T> {
    /// Number of distinct keywords contained in `lower`
    pub fn hits(&self, lower: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| lower.contains(keyword.as_str()))
            .count()
    }

    pub fn matches(&self, lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lower.contains(keyword.as_str()))
    }
}

/// Complete set of ordered keyword tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    pub intents: Vec<Category<Intent>>,
    pub complexity: Vec<Category<Complexity>>,
    pub domains: Vec<Category<Domain>>,
    pub requirements: Vec<Category<Requirement>>,
    pub languages: Vec<Category<Language>>,
    pub frameworks: Vec<Category<Framework>>,
}

impl Lexicon {
    /// The compiled-in lexicon
    pub fn builtin() -> Self {
        Self {
            intents: Category::from_table(INTENT_KEYWORDS),
            complexity: Category::from_table(COMPLEXITY_KEYWORDS),
            domains: Category::from_table(DOMAIN_KEYWORDS),
            requirements: Category::from_table(REQUIREMENT_KEYWORDS),
            languages: Category::from_table(LANGUAGE_KEYWORDS),
            frameworks: Category::from_table(FRAMEWORK_KEYWORDS),
        }
    }

    /// Shared handle to the process-wide built-in lexicon
    pub fn global() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    /// Parse and validate a lexicon from JSON. Keywords are lower-cased.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let mut lexicon: Lexicon = serde_json::from_str(json)?;
        lexicon.normalize();
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Load a lexicon file, failing on any malformed table
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read lexicon {}: {}", path.display(), e))
        })?;
        let lexicon = Self::from_json(&content)?;
        info!(
            "Loaded lexicon from {}: {} intents, {} domains",
            path.display(),
            lexicon.intents.len(),
            lexicon.domains.len()
        );
        Ok(lexicon)
    }

    fn normalize(&mut self) {
        fn lower<T>(categories: &mut [Category<T>]) {
            for category in categories {
                for keyword in &mut category.keywords {
                    *keyword = keyword.trim().to_lowercase();
                }
            }
        }
        lower(&mut self.intents);
        lower(&mut self.complexity);
        lower(&mut self.domains);
        lower(&mut self.requirements);
        lower(&mut self.languages);
        lower(&mut self.frameworks);
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.intents.is_empty() {
            return Err(AppError::Validation("lexicon has no intent categories".into()));
        }
        if self.complexity.is_empty() {
            return Err(AppError::Validation("lexicon has no complexity tiers".into()));
        }

        fn check<T: std::fmt::Debug>(table: &str, categories: &[Category<T>]) -> Result<(), AppError> {
            for category in categories {
                if category.keywords.iter().any(|k| k.is_empty()) {
                    return Err(AppError::Validation(format!(
                        "{} category {:?} contains an empty keyword",
                        table, category.tag
                    )));
                }
            }
            Ok(())
        }
        check("intent", &self.intents)?;
        check("complexity", &self.complexity)?;
        check("domain", &self.domains)?;
        check("requirement", &self.requirements)?;
        check("language", &self.languages)?;
        check("framework", &self.frameworks)?;
        Ok(())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
