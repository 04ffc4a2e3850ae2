//! Diagnostics reported by project lints.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Generation would fail.
    Error,
    /// Generation succeeds but silently drops something.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message from a lint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the lint that produced this diagnostic.
    pub lint: String,
    pub message: String,
    /// Where in the project, e.g. `ButtonScreen.PlayButton`.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            lint: lint.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn warning(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            lint: lint.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.lint, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning("orphan-variable", "unused").at("ButtonScreen.PlayButton");
        assert!(diag.severity.is_warning());
        assert_eq!(diag.location.as_deref(), Some("ButtonScreen.PlayButton"));
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::error("base-type-cycle", "A -> B -> A").at("A");
        assert_eq!(diag.to_string(), "error[base-type-cycle]: A -> B -> A (at A)");
        assert_eq!(
            Diagnostic::warning("x", "y").to_string(),
            "warning[x]: y"
        );
    }

    #[test]
    fn test_serializes_lowercase_severity() {
        let diag = Diagnostic::error("unsupported-blend", "nope");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["lint"], "unsupported-blend");
        assert_eq!(json["location"], serde_json::Value::Null);
    }
}
