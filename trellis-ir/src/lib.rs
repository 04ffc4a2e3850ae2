//! Data model for the trellis UI code generator.
//!
//! This crate provides the element graph every other crate works on:
//! elements (screens, components and standard kinds), their instances,
//! states, state categories and variables.
//!
//! # Architecture
//!
//! ```text
//! trellis.toml (TOML) → trellis-manifest (parsing) → trellis-ir (Project) → codegen
//! ```
//!
//! The model is a read-only snapshot from the generator's point of view:
//! nothing in the code generation path mutates it.

mod element;
mod project;
pub mod standards;
mod units;
mod value;
mod variable;

pub use element::{DEFAULT_STATE_NAME, Element, ElementKind, Instance};
pub use project::Project;
pub use standards::StandardKind;
pub use units::{
    Blend, DimensionUnit, GeneralUnit, HorizontalAlignment, ParseEnumError, PositionUnit,
    VerticalAlignment,
};
pub use value::{EnumValue, VariableValue, implied_enum_type};
pub use variable::{State, StateCategory, Variable};
