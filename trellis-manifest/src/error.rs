use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for trellis-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the document text and filename so error constructors only need
/// what is specific to each error.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `span` when known.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    pub fn invalid_enum_member_error(
        &self,
        variable: impl Into<String>,
        source: trellis_ir::ParseEnumError,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidEnumMember {
            src: self.named_source(),
            span,
            variable: variable.into(),
            expected: source.expected.join(", "),
            source,
        })
    }

    pub fn unsupported_value_error(
        &self,
        variable: impl Into<String>,
        kind: &'static str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnsupportedValue {
            src: self.named_source(),
            span,
            variable: variable.into(),
            kind,
        })
    }

    pub fn duplicate_element_error(
        &self,
        name: impl Into<String>,
        first: &'static str,
        second: &'static str,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateElement {
            src: self.named_source(),
            span,
            name: name.into(),
            first,
            second,
        })
    }

    pub fn duplicate_instance_error(
        &self,
        element: impl Into<String>,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateInstance {
            src: self.named_source(),
            span,
            element: element.into(),
            name: name.into(),
        })
    }

    pub fn base_type_cycle_error(&self, chain: &[String], span: Option<SourceSpan>) -> Box<Error> {
        Box::new(Error::BaseTypeCycle {
            src: self.named_source(),
            span,
            chain: chain.join(" -> "),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'trellis' next to a trellis.toml, or pass one with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse trellis.toml")]
    #[diagnostic(code(trellis::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for '{variable}'")]
    #[diagnostic(code(trellis::invalid_enum_member), help("expected one of: {expected}"))]
    InvalidEnumMember {
        #[source_code]
        src: NamedSource<String>,
        #[label("variable declared here")]
        span: Option<SourceSpan>,
        variable: String,
        expected: String,
        #[source]
        source: trellis_ir::ParseEnumError,
    },

    #[error("'{variable}' has an unsupported {kind} value")]
    #[diagnostic(
        code(trellis::unsupported_value),
        help("variable values must be numbers, booleans or strings")
    )]
    UnsupportedValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("variable declared here")]
        span: Option<SourceSpan>,
        variable: String,
        kind: &'static str,
    },

    #[error("element '{name}' is defined in both [{first}] and [{second}]")]
    #[diagnostic(
        code(trellis::duplicate_element),
        help("element names are shared by screens, components and standards")
    )]
    DuplicateElement {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        span: Option<SourceSpan>,
        name: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("duplicate instance '{name}' in '{element}'")]
    #[diagnostic(code(trellis::duplicate_instance))]
    DuplicateInstance {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        span: Option<SourceSpan>,
        element: String,
        name: String,
    },

    #[error("base type cycle: {chain}")]
    #[diagnostic(
        code(trellis::base_type_cycle),
        help("an element cannot inherit from itself, directly or through other elements")
    )]
    BaseTypeCycle {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle starts here")]
        span: Option<SourceSpan>,
        chain: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(trellis::invalid_identifier),
        help("{reason}. Generated code uses this name as an identifier.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("{message}")]
    #[diagnostic(code(trellis::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
