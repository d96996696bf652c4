//! Path validation and separator normalization.
//!
//! Every path that ends up in a generated build file must be plain ASCII.
//! CMake and Visual Studio on Windows produce broken .vcxproj files (error
//! MSB8066) when paths contain accented or other non-ASCII characters, so
//! validation failures abort the whole run before anything is written.

use crate::error::{GeneratorError, Result};

/// Separator convention for a normalized path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorStyle {
    /// Forward slashes. What CMake expects on every platform, including Windows.
    Posix,
    /// Backslashes.
    Windows,
}

/// Characters a path may not contain: anything outside ASCII, plus ASCII
/// control characters. Returned with their byte positions for diagnostics.
pub fn problem_chars(path: &str) -> Vec<(usize, char)> {
    path.char_indices()
        .filter(|&(_, c)| !c.is_ascii() || c.is_ascii_control())
        .collect()
}

/// Validate a path destined for a generated build file.
///
/// `field` names where the path came from (config key or prompt), so the
/// diagnostic tells the user what to fix.
pub fn validate(path: &str, field: &str) -> Result<()> {
    let problems = problem_chars(path);
    if problems.is_empty() {
        return Ok(());
    }
    Err(GeneratorError::InvalidPath {
        field: field.to_string(),
        path: path.to_string(),
        detail: describe_problems(&problems),
    })
}

const MAX_REPORTED_CHARS: usize = 10;

fn describe_problems(problems: &[(usize, char)]) -> String {
    let mut parts: Vec<String> = problems
        .iter()
        .take(MAX_REPORTED_CHARS)
        .map(|(pos, c)| {
            // Control characters are invisible; show their escaped form.
            if c.is_ascii_control() {
                format!("'{}' at byte {}", c.escape_default(), pos)
            } else {
                format!("'{}' at byte {}", c, pos)
            }
        })
        .collect();
    if problems.len() > MAX_REPORTED_CHARS {
        parts.push(format!("and {} more", problems.len() - MAX_REPORTED_CHARS));
    }
    format!(
        "{} problematic character{}: {}",
        problems.len(),
        if problems.len() == 1 { "" } else { "s" },
        parts.join(", ")
    )
}

/// Rewrite directory separators to the requested convention. Accepts paths
/// that mix `/` and `\`. Idempotent.
pub fn normalize_separators(path: &str, style: SeparatorStyle) -> String {
    match style {
        SeparatorStyle::Posix => path.replace('\\', "/"),
        SeparatorStyle::Windows => path.replace('/', "\\"),
    }
}

/// Shorthand for the convention used inside generated build files.
pub fn to_posix(path: &str) -> String {
    normalize_separators(path, SeparatorStyle::Posix)
}
