use std::path::Path;

pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    if let Some(base) = base {
        if let Ok(relative) = path.strip_prefix(base) {
            return relative.display().to_string();
        }
    }
    path.display().to_string()
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `deploy-app` becomes `Deploy App`.
pub fn title_case(text: &str) -> String {
    words(text).map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Identifier-safe PascalCase; never empty and never starts with a digit.
pub fn pascal_case(text: &str) -> String {
    let joined: String = words(text).map(capitalize).collect();
    match joined.chars().next() {
        Some(first) if !first.is_ascii_digit() => joined,
        _ => format!("Component{joined}"),
    }
}

pub fn snake_case(text: &str) -> String {
    words(text)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Single-line form of free text, for comment lines.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
