//! Identifier rules: plugin host codes, project names, bundle ids.

/// Manufacturer codes are exactly 4 alphabetic characters (JUCE requirement).
pub fn is_valid_manufacturer_code(code: &str) -> bool {
    code.len() == 4 && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Plugin codes are exactly 4 alphanumeric characters.
pub fn is_valid_plugin_code(code: &str) -> bool {
    code.len() == 4 && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Technical project names become CMake target names and file names, so they
/// must start with a letter and stay within letters, digits, `_` and `-`.
pub fn is_valid_project_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Free-text values (display name, manufacturer name) land inside
/// double-quoted CMake and JSON strings, so quotes and backslashes would
/// corrupt the generated files.
pub fn is_safe_display_text(text: &str) -> bool {
    !text.contains('"') && !text.contains('\\')
}

/// Derive a `com.<manufacturer>.<project>` bundle identifier.
///
/// The manufacturer part keeps only alphanumerics and gets a `Company` prefix
/// when it would not start with a letter (hosts reject such ids).
pub fn bundle_id(manufacturer_name: &str, project_name: &str) -> String {
    let mut manufacturer: String = manufacturer_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    let starts_with_letter = manufacturer
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_with_letter {
        manufacturer.insert_str(0, "Company");
    }

    let project: String = project_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    format!("com.{}.{}", manufacturer, project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manufacturer_code_rules() {
        assert!(is_valid_manufacturer_code("Myco"));
        assert!(is_valid_manufacturer_code("ACME"));
        assert!(!is_valid_manufacturer_code("My"));
        assert!(!is_valid_manufacturer_code("Mycorp"));
        assert!(!is_valid_manufacturer_code("My1o"));
        assert!(!is_valid_manufacturer_code(""));
    }

    #[test]
    fn test_plugin_code_rules() {
        assert!(is_valid_plugin_code("Mypl"));
        assert!(is_valid_plugin_code("Fx01"));
        assert!(!is_valid_plugin_code("Fx1"));
        assert!(!is_valid_plugin_code("Fx001"));
        assert!(!is_valid_plugin_code("Fx 1"));
    }

    #[test]
    fn test_project_name_rules() {
        assert!(is_valid_project_name("NewPlugin"));
        assert!(is_valid_project_name("my-plug_2"));
        assert!(!is_valid_project_name("2fast"));
        assert!(!is_valid_project_name("-dash"));
        assert!(!is_valid_project_name("has space"));
        assert!(!is_valid_project_name(""));
    }

    #[test]
    fn test_display_text_rejects_quotes_and_backslashes() {
        assert!(is_safe_display_text("My Cool Plug"));
        assert!(is_safe_display_text("Acme & Sons, Inc."));
        assert!(!is_safe_display_text("My \"Cool\" Plug"));
        assert!(!is_safe_display_text("back\\slash"));
    }

    #[test]
    fn test_bundle_id_basic() {
        assert_eq!(bundle_id("My Company", "NewPlugin"), "com.MyCompany.NewPlugin");
    }

    #[test]
    fn test_bundle_id_strips_punctuation() {
        assert_eq!(bundle_id("Acme & Sons, Inc.", "fx-one"), "com.AcmeSonsInc.fx-one");
    }

    #[test]
    fn test_bundle_id_guards_leading_digit() {
        assert_eq!(bundle_id("4front", "Plug"), "com.Company4front.Plug");
    }

    #[test]
    fn test_bundle_id_empty_manufacturer() {
        assert_eq!(bundle_id("", "Plug"), "com.Company.Plug");
    }
}
