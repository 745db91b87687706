//! Progression-to-level quantization.

pub mod system;

pub use system::LevelSystem;
