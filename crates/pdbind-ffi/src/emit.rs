//! Nelua output syntax and C comment handling shared by the emitters.

/// Indentation for lines nested in a record or enum body.
pub const INDENT: &str = "  ";

/// Nelua line comment marker.
pub const COMMENT_MARKER: &str = "--";

/// The text of a comment-only C line with its marker removed, or `None` if
/// the line is not a comment.
///
/// Accepts `// text` and `/* text */`.
pub fn comment_text(line: &str) -> Option<&str> {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix("//") {
        return Some(rest.trim());
    }
    if let Some(rest) = line.strip_prefix("/*") {
        let rest = rest.trim_end();
        return Some(rest.strip_suffix("*/").unwrap_or(rest).trim());
    }
    None
}

/// Split a C line into code and an optional trailing comment.
pub fn split_trailing_comment(line: &str) -> (&str, Option<&str>) {
    let start = match (line.find("//"), line.find("/*")) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    };
    match start {
        Some(pos) => (&line[..pos], comment_text(&line[pos..])),
        None => (line, None),
    }
}

/// A standalone Nelua comment line at body indentation.
pub fn comment_line(text: &str) -> String {
    if text.is_empty() {
        format!("{INDENT}{COMMENT_MARKER}")
    } else {
        format!("{INDENT}{COMMENT_MARKER} {text}")
    }
}

/// A comment appended to the end of a generated line, or nothing.
pub fn trailing_comment(text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => format!(" {COMMENT_MARKER} {text}"),
        _ => String::new(),
    }
}

/// Build an annotation list binding `name` to the C symbol `foreign`.
///
/// The foreign name is spelled out only when it differs from `name`.
pub fn cimport_annotations(name: &str, foreign: &str, extra: &[&str]) -> String {
    let mut attrs = Vec::with_capacity(extra.len() + 2);
    if name == foreign {
        attrs.push("cimport".to_string());
    } else {
        attrs.push(format!("cimport'{foreign}'"));
    }
    attrs.push("nodecl".to_string());
    attrs.extend(extra.iter().map(|a| a.to_string()));
    format!("<{}>", attrs.join(", "))
}
