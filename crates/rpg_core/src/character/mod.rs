//! Character system module
//!
//! This module contains the character-level half of the progression engine:
//! - [`Character`], an immutable name→attribute collection
//! - batch updates ([`CharacterUpdate`], [`ConstantCharacterUpdate`]) with
//!   last-write-wins construction from action lists
//! - the update engine that maps actions over the attribute set, leaving
//!   un-targeted attributes untouched

pub mod model;
pub mod update;

pub use model::Character;
pub use update::{CharacterUpdate, ConstantCharacterUpdate, ConstantUpdateAction, UpdateAction};
