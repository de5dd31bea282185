//! Tutorial strategy for learning-oriented tools: beginner framing, numbered
//! steps and environment setup notes.

use super::text::contains_any;
use super::{clamp_score, Optimizer, Rule, RuleContext};
use crate::brain::{Language, Profile};
use crate::models::{Impact, StrategyKind, ToolConfig};

static RULES: [Rule; 3] = [
    Rule::new(
        "Made more educational and beginner-friendly",
        Impact::High,
        always,
        add_beginner_framing,
    ),
    Rule::new(
        "Added step-by-step structure",
        Impact::Medium,
        lacks_steps,
        add_step_outline,
    ),
    Rule::new(
        "Added environment setup context",
        Impact::Medium,
        always,
        add_setup_notes,
    ),
];

pub struct TutorialOptimizer {
    tool: ToolConfig,
}

impl TutorialOptimizer {
    pub fn new(tool: ToolConfig) -> Self {
        Self { tool }
    }
}

fn always(_: &str, _: &RuleContext<'_>) -> bool {
    true
}

fn add_beginner_framing(text: &str, _: &RuleContext<'_>) -> String {
    format!(
        "Create a beginner-friendly walkthrough for: {text}\n\
         \n\
         Please explain each concept and provide simple examples.\n\
         Assume minimal prior programming knowledge.\n\
         \n\
         Task: {text}"
    )
}

fn lacks_steps(text: &str, _: &RuleContext<'_>) -> bool {
    !contains_any(text, &["step", "tutorial"])
}

fn add_step_outline(text: &str, _: &RuleContext<'_>) -> String {
    format!(
        "{text}\n\
         \n\
         Please break this down into clear steps:\n\
         1. Setup and prerequisites\n\
         2. Core implementation\n\
         3. Testing and validation\n\
         4. Common mistakes to avoid\n\
         5. Next steps for learning"
    )
}

fn setup_instructions(language: Language) -> &'static str {
    match language {
        Language::JavaScript | Language::TypeScript => {
            "Node.js environment, npm package management"
        }
        Language::Python => "Python 3.x, pip package management",
        Language::Java => "JDK installation, Maven/Gradle setup",
        Language::Go => "Go toolchain, go modules",
        Language::Rust => "Rust toolchain via rustup, cargo",
        Language::Php => "PHP interpreter, Composer",
        Language::Ruby => "Ruby interpreter, Bundler",
    }
}

fn add_setup_notes(text: &str, ctx: &RuleContext<'_>) -> String {
    let language = ctx.profile.language();
    format!(
        "{text}\n\nSetup instructions for {}: {}",
        language.label(),
        setup_instructions(language)
    )
}

impl Optimizer for TutorialOptimizer {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Tutorial
    }

    fn tool(&self) -> &ToolConfig {
        &self.tool
    }

    fn rules(&self) -> Vec<&Rule> {
        RULES.iter().collect()
    }

    fn score(&self, _original: &str, optimized: &str, _profile: &Profile) -> u8 {
        let mut score = 0.0;

        if contains_any(optimized, &["beginner", "tutorial"]) {
            score += 30.0;
        }
        if optimized.contains("step") {
            score += 25.0;
        }
        if contains_any(optimized, &["setup", "prerequisites"]) {
            score += 20.0;
        }
        if contains_any(optimized, &["explain", "simple"]) {
            score += 15.0;
        }
        if contains_any(optimized, &["mistakes", "avoid"]) {
            score += 10.0;
        }

        clamp_score(score)
    }

    fn tips(&self, _profile: &Profile) -> Vec<String> {
        [
            "Ask for step-by-step explanations",
            "Request beginner-friendly examples",
            "Include setup and environment details",
            "Ask about common mistakes and best practices",
        ]
        .iter()
        .map(|tip| tip.to_string())
        .collect()
    }
}
