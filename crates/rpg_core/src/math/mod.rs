//! Scalar curve algebra.
//!
//! This module contains the invertible function machinery under the
//! progression engine:
//! - [`FunctionPair`] records holding a curve and its true inverse
//! - factory functions for the supported curve families in [`curves`]
//! - left-to-right composition with reverse-order inverses

pub mod curves;
pub mod pair;

pub use pair::{Calculation, FunctionPair};
