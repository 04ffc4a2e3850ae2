//! Built-in project lints.

mod base_type_cycle;
mod missing_base_type;
mod orphan_variable;
mod unknown_parent;
mod unsupported_blend;

pub use base_type_cycle::BaseTypeCycleLint;
pub use missing_base_type::MissingBaseTypeLint;
pub use orphan_variable::OrphanVariableLint;
pub use unknown_parent::UnknownParentLint;
pub use unsupported_blend::UnsupportedBlendLint;
