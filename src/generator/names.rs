//! Case conversion helpers for project, file and class names.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// lowercase letter or digit followed by an uppercase letter: `myApp` -> `my-App`
static CASE_BOUNDARY_RE: OnceLock<Regex> = OnceLock::new();

/// Run of separators with the character that follows it, if any.
static SEPARATOR_RUN_RE: OnceLock<Regex> = OnceLock::new();

static NON_ALNUM_RE: OnceLock<Regex> = OnceLock::new();

fn case_boundary_re() -> &'static Regex {
    CASE_BOUNDARY_RE.get_or_init(|| Regex::new(r"([a-z\d])([A-Z])").unwrap())
}

fn separator_run_re() -> &'static Regex {
    SEPARATOR_RUN_RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]+(.)?").unwrap())
}

fn non_alnum_re() -> &'static Regex {
    NON_ALNUM_RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]").unwrap())
}

/// Every case form of a name that the generator templates use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    pub name: String,
    pub class_name: String,
    pub property_name: String,
    pub constant_name: String,
    pub file_name: String,
}

pub fn names(name: &str) -> Names {
    Names {
        name: name.to_string(),
        class_name: class_name(name),
        property_name: property_name(name),
        constant_name: constant_name(name),
        file_name: file_name(name),
    }
}

/// kebab-case: `myApp` -> `my-app`, `My App` -> `my-app`. `/` is left alone.
pub fn file_name(s: &str) -> String {
    let dashed = case_boundary_re().replace_all(s, "$1-$2").to_lowercase();
    // a leading underscore survives (private-style names)
    dashed
        .char_indices()
        .map(|(i, c)| match c {
            ' ' => '-',
            '_' if i > 0 => '-',
            _ => c,
        })
        .collect()
}

/// camelCase: `my-app` -> `myApp`, `directory/my-app` -> `directoryMyApp`.
pub fn property_name(s: &str) -> String {
    let joined = separator_run_re().replace_all(s, |caps: &Captures| {
        caps.get(1)
            .map(|m| m.as_str().to_uppercase())
            .unwrap_or_default()
    });
    let cleaned = non_alnum_re().replace_all(&joined, "");
    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            first.to_ascii_lowercase().to_string() + chars.as_str()
        }
        _ => cleaned.into_owned(),
    }
}

/// PascalCase: `my-app` -> `MyApp`.
pub fn class_name(s: &str) -> String {
    capitalize(&property_name(s))
}

/// SCREAMING_SNAKE_CASE: `myApp` -> `MY_APP`.
pub fn constant_name(s: &str) -> String {
    non_alnum_re()
        .replace_all(&file_name(s).to_uppercase(), "_")
        .into_owned()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
