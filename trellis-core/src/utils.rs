//! Shared utility functions for code generation.

/// Strip a folder-qualified type name down to its last segment
/// (e.g., "Forms/ScrollView" -> "ScrollView")
pub fn strip_type_path(type_name: &str) -> &str {
    type_name
        .rsplit_once('/')
        .map_or(type_name, |(_, last)| last)
}

/// Remove spaces from a property name (e.g., "X Units" -> "XUnits")
pub fn strip_spaces(name: &str) -> String {
    name.replace(' ', "")
}

/// Format a float as a culture-invariant literal with an explicit `f` suffix
/// (e.g., 0.5 -> "0.5f", 100.0 -> "100f")
pub fn format_float(value: f32) -> String {
    format!("{}f", value)
}

/// Quote a string literal, escaping backslashes, quotes and newlines
pub fn quote_string(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}

/// Build the output file name for an element (e.g., "Controls/Button" -> "Controls/Button.Generated.cs")
pub fn generated_file_name(element_name: &str) -> String {
    format!("{}.Generated.cs", element_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_type_path() {
        assert_eq!(strip_type_path("Text"), "Text");
        assert_eq!(strip_type_path("Forms/ScrollView"), "ScrollView");
        assert_eq!(strip_type_path("A/B/C"), "C");
        assert_eq!(strip_type_path(""), "");
    }

    #[test]
    fn test_strip_spaces() {
        assert_eq!(strip_spaces("X Units"), "XUnits");
        assert_eq!(strip_spaces("Width"), "Width");
    }

    #[test]
    fn test_format_float_is_invariant() {
        assert_eq!(format_float(0.5), "0.5f");
        assert_eq!(format_float(1.0), "1f");
        assert_eq!(format_float(-12.25), "-12.25f");
        assert_eq!(format_float(100.0), "100f");
    }

    #[test]
    fn test_quote_string() {
        assert_eq!(quote_string("hello"), "\"hello\"");
        assert_eq!(quote_string("two\nlines"), "\"two\\nlines\"");
        assert_eq!(quote_string("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_generated_file_name() {
        assert_eq!(generated_file_name("MainScreen"), "MainScreen.Generated.cs");
        assert_eq!(
            generated_file_name("Controls/Button"),
            "Controls/Button.Generated.cs"
        );
    }
}
