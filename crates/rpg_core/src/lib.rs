//! # rpg_core - Deterministic attribute progression engine
//!
//! Character attributes (strength, wisdom, charisma, ...) live on
//! invertible progression curves. Each attribute carries a current
//! progression value, a baseline it may not decay past, and a
//! [`LevelSystem`] that quantizes progression into discrete levels.
//!
//! The layers, bottom up:
//! - [`math`]: invertible curve families as [`FunctionPair`]s with
//!   composition and NaN-signalled domain errors
//! - [`level`]: progression-to-level quantization and its inverse
//! - [`attribute`]: the [`Attribute`] value object and the
//!   [`UpdateFunctions`] growth/decay catalogue
//! - [`character`]: named attribute collections with batched, optionally
//!   parallel update application
//! - [`config`]: serde curve definitions for hosts that keep tuning
//!   parameters in data files
//!
//! Everything is deterministic: the same attribute and the same update
//! always produce the same result, on one thread or many.

// Arc<dyn Fn> signatures read better unaliased at the few places clippy
// would want them split.
#![allow(clippy::type_complexity)]

pub mod attribute;
pub mod character;
pub mod config;
pub mod error;
pub mod level;
pub mod math;

pub use attribute::{Attribute, ConstantUpdateFn, UpdateFn, UpdateFunctions};
pub use character::{
    Character, CharacterUpdate, ConstantCharacterUpdate, ConstantUpdateAction, UpdateAction,
};
pub use config::CurveDefinition;
pub use error::DefinitionError;
pub use level::LevelSystem;
pub use math::{curves, Calculation, FunctionPair};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
