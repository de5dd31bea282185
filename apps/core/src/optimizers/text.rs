//! Text helpers shared by the rewrite strategies.

use regex::Regex;
use std::sync::LazyLock;

use crate::brain::Language;

/// Characters reserved for the truncation marker
const TRUNCATION_RESERVE: usize = 50;

pub const TRUNCATION_MARKER: &str = "// ... (truncated for optimal length)";

/// Words too common to name a function after
const NAME_STOPWORDS: &[&str] = &["the", "and", "for", "to", "that", "with", "this"];

/// Synthesized names use at most this many words
const MAX_NAME_WORDS: usize = 4;

/// Noun → parameter name, in lookup order
const PARAMETER_NAMES: &[(&str, &str)] = &[
    ("array", "arr"),
    ("list", "items"),
    ("data", "data"),
    ("user", "user"),
    ("string", "str"),
    ("number", "num"),
    ("object", "obj"),
];

// NOTE: expect() is acceptable here: the patterns are literals
static FUNCTION_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bfunction\s+(\w+)").expect("Invalid regex: function declaration")
});
static TRAILING_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\w+)\s*function").expect("Invalid regex: trailing function")
});
static CREATE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)create\s+(\w+)").expect("Invalid regex: create name"));
static DEF_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdef\s+(\w+)").expect("Invalid regex: def declaration"));
static SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"function\s+(\w+)\s*\(([^)]*)\)").expect("Invalid regex: function signature")
});
static CREATE_VERB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"create|build|make").expect("Invalid regex: create verb"));

pub fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// True when the text already names a function to complete
pub fn mentions_function_name(text: &str) -> bool {
    FUNCTION_DECL.is_match(text) || TRAILING_FUNCTION.is_match(text) || CREATE_NAME.is_match(text)
}

/// Name of a declared `function x` / `def x`, if any
pub fn declared_function_name(text: &str) -> Option<String> {
    SIGNATURE
        .captures(text)
        .or_else(|| DEF_DECL.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// camelCase function name built from the significant words of `prompt`
pub fn generate_function_name(prompt: &str) -> String {
    let cleaned: String = prompt
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let words: Vec<&str> = cleaned
        .split_whitespace()
        .filter(|word| word.chars().count() > 2 && !NAME_STOPWORDS.contains(word))
        .take(MAX_NAME_WORDS)
        .collect();

    let Some((first, rest)) = words.split_first() else {
        return "handleTask".to_string();
    };

    let mut name = first.to_string();
    for word in rest {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            name.extend(c.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

/// Parameter list guessed from nouns in the prompt
pub fn generate_parameters(prompt: &str) -> String {
    let lower = prompt.to_lowercase();
    let params: Vec<&str> = PARAMETER_NAMES
        .iter()
        .filter(|(noun, _)| lower.contains(noun))
        .map(|(_, param)| *param)
        .collect();

    if params.is_empty() {
        "input".to_string()
    } else {
        params.join(", ")
    }
}

/// Prompt with its leading create/build/make verb removed
pub fn task_phrase(prompt: &str) -> String {
    let lower = prompt.to_lowercase();
    CREATE_VERB.replace(&lower, "").trim().to_string()
}

pub fn expected_output(prompt: &str) -> &'static str {
    if prompt.contains("function") {
        "Function implementation"
    } else if prompt.contains("component") {
        "React/Vue component"
    } else if prompt.contains("class") {
        "Class definition"
    } else if prompt.contains("api") {
        "API endpoint implementation"
    } else {
        "Working code solution"
    }
}

pub fn requirement_summary(prompt: &str) -> String {
    let mut requirements = Vec::new();

    if prompt.contains("secure") {
        requirements.push("Security compliance");
    }
    if prompt.contains("fast") || prompt.contains("performance") {
        requirements.push("High performance");
    }
    if prompt.contains("responsive") {
        requirements.push("Responsive design");
    }
    if prompt.contains("accessible") {
        requirements.push("Accessibility compliance");
    }

    if requirements.is_empty() {
        "Clean, maintainable code".to_string()
    } else {
        requirements.join(", ")
    }
}

/// Annotate untyped `function name(a, b)` signatures with `any`
pub fn add_type_hints(text: &str) -> String {
    SIGNATURE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let params = caps[2]
                .split(',')
                .map(|param| {
                    let trimmed = param.trim();
                    if !trimmed.is_empty() && !trimmed.contains(':') {
                        format!("{}: any", trimmed)
                    } else {
                        trimmed.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("function {}({}): any", &caps[1], params)
        })
        .into_owned()
}

/// Blank or comment-only line that scaffolding added around the code
fn is_scaffold_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || ["//", "#", "/*", "*"].iter().any(|m| trimmed.starts_with(m))
}

/// Trim `text` to `max_chars` by dropping whole scaffold lines.
///
/// Only blank and comment lines are dropped, last first. Lines holding the
/// last occurrence of `keep` and code lines (signatures, closing braces) are
/// always kept. When that is not enough to fit, `text` is returned unchanged.
pub fn truncate_lines(text: &str, keep: &str, max_chars: usize) -> String {
    let total = char_len(text);
    if total <= max_chars {
        return text.to_string();
    }

    let anchor = text.rfind(keep).map(|start| (start, start + keep.len()));
    let mut lines: Vec<(&str, bool)> = Vec::new();
    let mut offset = 0;
    for line in text.split('\n') {
        let end = offset + line.len();
        let in_anchor = anchor.is_some_and(|(start, stop)| start <= end && offset < stop);
        lines.push((line, !in_anchor && is_scaffold_line(line)));
        offset = end + 1;
    }

    let budget = max_chars.saturating_sub(TRUNCATION_RESERVE);
    let mut used = total;
    let mut dropped = vec![false; lines.len()];
    for (i, (line, droppable)) in lines.iter().enumerate().rev() {
        if used <= budget {
            break;
        }
        if *droppable {
            dropped[i] = true;
            used = used.saturating_sub(char_len(line) + 1);
        }
    }

    if used > budget {
        return text.to_string();
    }

    let mut truncated = lines
        .iter()
        .zip(&dropped)
        .filter(|(_, dropped)| !**dropped)
        .map(|((line, _), _)| *line)
        .collect::<Vec<_>>()
        .join("\n");
    truncated.push('\n');
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

/// One-line call of `name` in the given language
pub fn usage_example(name: &str, language: Language) -> String {
    match language {
        Language::JavaScript | Language::TypeScript => {
            format!("const result = {}(exampleInput);", name)
        }
        Language::Python => format!("result = {}(example_input)", name),
        _ => format!("{}(example);", name),
    }
}
