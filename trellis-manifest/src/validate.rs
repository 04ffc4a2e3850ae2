//! Source spans and name checks used while validating a document.

use miette::SourceSpan;

use crate::{GeneratorConfig, Result, error::SourceContext};

/// C# keywords that cannot name a generated member.
pub(crate) const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

pub(crate) fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

/// Returns None if `name` is a usable C# identifier, Some(reason) otherwise.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers and underscores");
    }

    if is_csharp_keyword(name) {
        return Some("name is a C# keyword");
    }

    None
}

/// Check an identifier, reporting it at `span`.
pub(crate) fn check_identifier(
    ctx: &SourceContext,
    name: &str,
    kind: &str,
    span: Option<SourceSpan>,
) -> Result<()> {
    match validate_identifier(name) {
        Some(reason) => Err(ctx.invalid_identifier_error(name, kind, reason, span)),
        None => Ok(()),
    }
}

pub(crate) fn check_generator(config: &GeneratorConfig, ctx: &SourceContext) -> Result<()> {
    let sizes = [
        ("canvas_width", config.canvas_width),
        ("canvas_height", config.canvas_height),
    ];
    for (key, value) in sizes {
        if let Some(value) = value
            && !(value.is_finite() && value > 0.0)
        {
            return Err(ctx.validation_error(
                format!("{} must be a positive number", key),
                find_key_span(ctx.src(), key),
            ));
        }
    }
    Ok(())
}

/// Span of a table key such as `[screens.Name]` or `[components."Controls/Button".instances]`.
pub(crate) fn find_table_span(src: &str, name: &str) -> Option<SourceSpan> {
    let bare = [format!(".{}]", name), format!(".{}.", name)];
    for pattern in &bare {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    let quoted = [format!(".\"{}\"]", name), format!(".\"{}\".", name)];
    for pattern in &quoted {
        if let Some(pos) = src.find(pattern) {
            // keep the quotes in the label
            return Some(SourceSpan::from((pos + 1, name.len() + 2)));
        }
    }

    None
}

/// Span of an array entry declared as `name = "Name"`.
pub(crate) fn find_entry_span(src: &str, name: &str) -> Option<SourceSpan> {
    for pattern in [format!("name = \"{}\"", name), format!("name = '{}'", name)] {
        if let Some(pos) = src.find(&pattern) {
            // The name starts after 'name = "' (8 characters)
            return Some(SourceSpan::from((pos + 8, name.len())));
        }
    }
    None
}

/// Span of a `key = value` line.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("PlayButton").is_none());
        assert!(validate_identifier("_hidden").is_none());
        assert!(validate_identifier("Item2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2nd").is_some());
        assert!(validate_identifier("Play Button").is_some());
        assert!(validate_identifier("Play-Button").is_some());
        assert_eq!(validate_identifier("class"), Some("name is a C# keyword"));
    }

    #[test]
    fn test_find_table_span() {
        let src = "[screens.Main]\n[components.\"Controls/Button\".instances]\n";

        let span = find_table_span(src, "Main").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Main");

        let span = find_table_span(src, "Controls/Button").unwrap();
        assert_eq!(
            &src[span.offset()..span.offset() + span.len()],
            "\"Controls/Button\""
        );
        assert!(find_table_span(src, "Other").is_none());
    }

    #[test]
    fn test_find_entry_span() {
        let src = "[[screens.Main.instances]]\nname = \"Title\"\n";
        let span = find_entry_span(src, "Title").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Title");
    }

    #[test]
    fn test_find_key_span() {
        let src = "[generator]\n  canvas_width = 0\ncanvas_height= 10\n";

        let span = find_key_span(src, "canvas_width").unwrap();
        assert_eq!(span.offset(), 14);

        let span = find_key_span(src, "canvas_height").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "canvas_height");
    }
}
