//! Errors that stop code generation.
//!
//! Inconsistent models (missing base types, orphaned variables) are
//! tolerated and skipped; only the cases below abort an entry point.

use crate::resolve::MAX_BASE_DEPTH;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("blend mode '{blend}' on '{scope}' has no translation (only Normal and Additive are supported)")]
    UnsupportedBlend { scope: String, blend: String },

    #[error("base type cycle: {}", .chain.join(" -> "))]
    BaseTypeCycle { chain: Vec<String> },

    #[error("base type chain of '{}' is deeper than {} levels", .element, MAX_BASE_DEPTH)]
    BaseChainTooDeep { element: String },

    #[error("variable '{variable}' should hold {expected}")]
    TypeMismatch {
        variable: String,
        expected: &'static str,
    },
}
