//! Initialization code generation for trellis UI elements.
//!
//! Given a [`trellis_ir::Project`], a [`Generator`] produces the partial
//! class that instantiates an element's children and applies its states,
//! for either of two presentation APIs ([`VisualApi`]).
//!
//! # Module Organization
//!
//! - [`builder`] - Indentation-aware text buffer
//! - [`layout`] - Unit/origin layout to proportional bounds conversion
//! - [`target`] - Per-API naming, value and statement rules ([`TargetProfile`])
//! - [`lint`] - Project checks for what generation would drop or reject
//! - [`testing`] - Sample projects and assertions for tests
//!
//! Value lookup ([`Resolver`]) and per-variable emission ([`emit()`]) are
//! re-exported at the crate root.

pub mod builder;
mod emit;
mod error;
mod generator;
mod grouping;
pub mod layout;
pub mod lint;
mod resolve;
mod settings;
pub mod target;
pub mod testing;

pub use emit::{Context, Line, emit, format_value};
pub use error::{Error, Result};
pub use generator::Generator;
pub use resolve::{MAX_BASE_DEPTH, Resolver, Scope};
pub use settings::{ElementOutputSettings, GeneratorSettings, ProjectOutputSettings};
pub use target::{TargetProfile, VisualApi, profile};
