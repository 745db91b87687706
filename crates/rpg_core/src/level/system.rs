//! Discrete level derivation from continuous progression.

use std::fmt;
use std::sync::Arc;

use crate::math::{curves, FunctionPair};

/// Maps progression to discrete levels and back.
///
/// Level 1 corresponds to the curve's value at input 0, and boundaries are
/// closed on the low side: a progression exactly at the requirement for
/// level `n` already counts as level `n`. Out-of-domain progression (a NaN
/// from a misconfigured curve) quantizes to level 0, the error level.
#[derive(Clone)]
pub struct LevelSystem {
    level_fn: Arc<dyn Fn(f64) -> i32 + Send + Sync>,
    progression_fn: Arc<dyn Fn(i32) -> f64 + Send + Sync>,
}

impl LevelSystem {
    /// Level system that always answers 0, for hosts that need a level slot
    /// without a meaningful curve.
    pub fn zeroed() -> Self {
        Self {
            level_fn: Arc::new(|_| 0),
            progression_fn: Arc::new(|_| 0.0),
        }
    }

    /// Closed-form linear system: `level(p) = floor((p − offset)/step) + 1`,
    /// `progression(n) = (n−1)·step + offset`.
    pub fn linear(step: f64, offset: f64) -> Self {
        Self {
            level_fn: Arc::new(move |progression| quantize((progression - offset) / step)),
            progression_fn: Arc::new(move |level| f64::from(level - 1) * step + offset),
        }
    }

    /// Closed-form quadratic system over `a·x² + b·x + c`. With `a == 0` the
    /// curve is a line, so the system delegates to [`LevelSystem::linear`]
    /// with `step = b` and `offset = c`.
    pub fn quadratic(a: f64, b: f64, c: f64) -> Self {
        if a == 0.0 {
            return Self::linear(b, c);
        }
        Self {
            level_fn: Arc::new(move |progression| {
                let discriminant = b * b - 4.0 * a * (c - progression);
                if discriminant < 0.0 {
                    // Progression the curve never reaches is the error level.
                    return 0;
                }
                quantize((-b + discriminant.sqrt()) / (2.0 * a))
            }),
            progression_fn: Arc::new(move |level| {
                let x = f64::from(level - 1);
                a * x * x + b * x + c
            }),
        }
    }

    /// Exponential system over `a·baseˣ`.
    pub fn exponential(a: f64, base: f64) -> Self {
        Self::from_pair(&curves::exponential(a, base))
    }

    /// Power system over `a·x^power`.
    pub fn power(a: f64, power: f64) -> Self {
        Self::from_pair(&curves::power(a, power))
    }

    /// General construction from a function pair:
    /// `level(p) = 1 + floor(pair.invert(p))` and
    /// `progression(n) = pair.value(n − 1)`.
    pub fn from_pair(pair: &FunctionPair) -> Self {
        let inverse = pair.inverse();
        let function = pair.function();
        Self {
            level_fn: Arc::new(move |progression| quantize(inverse(progression))),
            progression_fn: Arc::new(move |level| function(f64::from(level - 1))),
        }
    }

    /// Same construction from two bare closures, for host-defined curves
    /// that never exist as a [`FunctionPair`].
    pub fn from_functions<F, G>(function: F, inverse: G) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        G: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::from_pair(&FunctionPair::from_fns(function, inverse))
    }

    /// Discrete level for a progression value.
    pub fn level_for(&self, progression: f64) -> i32 {
        (self.level_fn)(progression)
    }

    /// Progression required to reach `level`.
    pub fn progression_for(&self, level: i32) -> f64 {
        (self.progression_fn)(level)
    }
}

impl fmt::Debug for LevelSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelSystem").finish_non_exhaustive()
    }
}

/// Floor-quantize an abstract time value into a level. The saturating float
/// cast turns NaN into 0, which is exactly the error level.
fn quantize(time: f64) -> i32 {
    (time.floor() + 1.0) as i32
}
