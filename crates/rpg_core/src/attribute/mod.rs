//! Attribute values and update-function builders.
//!
//! This module contains the per-attribute half of the progression engine:
//! - [`Attribute`], the immutable progression/baseline/level-system record
//! - [`UpdateFunctions`], builders for growth and decay transforms
//! - the shared closure types actions are made of

pub mod model;
pub mod update;

pub use model::Attribute;
pub use update::{ConstantUpdateFn, UpdateFn, UpdateFunctions};
