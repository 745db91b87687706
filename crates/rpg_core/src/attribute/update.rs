//! Builders for attribute update functions.
//!
//! An update function maps an attribute (plus a step on the curve's abstract
//! time axis) to a new attribute. Two families exist:
//! - **growth** moves progression in a fixed direction and is never clamped
//! - **decay** moves progression toward the baseline and clamps so the
//!   result cannot cross it
//!
//! Constant-step builders bind the step up front and delegate to the general
//! form, so both always compute the same value for the same step.

use std::sync::Arc;

use crate::math::{curves, FunctionPair};

use super::Attribute;

/// Update taking an explicit step on each call.
pub type UpdateFn = Arc<dyn Fn(&Attribute, f64) -> Attribute + Send + Sync>;

/// Update with the step bound at construction time.
pub type ConstantUpdateFn = Arc<dyn Fn(&Attribute) -> Attribute + Send + Sync>;

/// Namespace for building growth and decay update functions.
#[derive(Debug)]
pub struct UpdateFunctions;

impl UpdateFunctions {
    /// Growth over an arbitrary curve: `f(f⁻¹(progression) + step)`.
    ///
    /// The pair's functions must be true inverses for the result to be
    /// meaningful.
    pub fn growth(pair: &FunctionPair) -> UpdateFn {
        let pair = pair.clone();
        Arc::new(move |attribute, step| grow(&pair, attribute, step))
    }

    /// [`UpdateFunctions::growth`] with `step` bound at construction.
    pub fn constant_growth(pair: &FunctionPair, step: f64) -> ConstantUpdateFn {
        let update = Self::growth(pair);
        Arc::new(move |attribute| update(attribute, step))
    }

    /// Decay over an arbitrary curve. The step direction is chosen in
    /// abstract time so progression moves toward the baseline, and the
    /// result is clamped so it cannot cross it. At the baseline, decay is a
    /// no-op.
    pub fn decay(pair: &FunctionPair) -> UpdateFn {
        let pair = pair.clone();
        Arc::new(move |attribute, step| decay_toward_baseline(&pair, attribute, step))
    }

    /// [`UpdateFunctions::decay`] with `step` bound at construction.
    pub fn constant_decay(pair: &FunctionPair, step: f64) -> ConstantUpdateFn {
        let update = Self::decay(pair);
        Arc::new(move |attribute| update(attribute, step))
    }

    /// Closed-form linear growth: `progression + coefficient·step`. No
    /// clamping, like every growth function.
    pub fn linear_growth(coefficient: f64) -> UpdateFn {
        Arc::new(move |attribute, step| {
            attribute.with_progression(attribute.progression() + coefficient * step)
        })
    }

    /// [`UpdateFunctions::linear_growth`] with `step` bound at construction.
    pub fn constant_linear_growth(coefficient: f64, step: f64) -> ConstantUpdateFn {
        let update = Self::linear_growth(coefficient);
        Arc::new(move |attribute| update(attribute, step))
    }

    /// Growth over `a·log_base(x)`.
    pub fn logarithmic_growth(a: f64, base: f64) -> UpdateFn {
        Self::growth(&curves::logarithmic(a, base))
    }

    /// [`UpdateFunctions::logarithmic_growth`] with a bound step.
    pub fn constant_logarithmic_growth(a: f64, base: f64, step: f64) -> ConstantUpdateFn {
        Self::constant_growth(&curves::logarithmic(a, base), step)
    }

    /// Growth over `(a·x)^(1/root)`.
    pub fn root_growth(a: f64, root: f64) -> UpdateFn {
        Self::growth(&curves::root(a, root))
    }

    /// [`UpdateFunctions::root_growth`] with a bound step.
    pub fn constant_root_growth(a: f64, root: f64, step: f64) -> ConstantUpdateFn {
        Self::constant_growth(&curves::root(a, root), step)
    }

    /// Closed-form linear decay toward the baseline at `slope` per step.
    /// Direction comes from comparing progression to the baseline directly;
    /// no abstract-time conversion is needed for a line.
    pub fn linear_decay(slope: f64) -> UpdateFn {
        Arc::new(move |attribute, step| {
            let direction = if attribute.progression() >= attribute.baseline() {
                -1.0
            } else {
                1.0
            };
            let updated = attribute.progression() + slope * step * direction;
            attribute.with_progression(clamp_to_baseline(
                attribute.progression(),
                updated,
                attribute.baseline(),
            ))
        })
    }

    /// Closed-form decay over `a·x² + b·x`, with the quadratic-formula
    /// inverse inlined. Must stay in agreement with
    /// `decay(&curves::quadratic(a, b, 0.0))`.
    pub fn quadratic_decay(a: f64, b: f64) -> UpdateFn {
        Arc::new(move |attribute, step| {
            let invert = |y: f64| {
                if a == 0.0 {
                    return f64::NAN;
                }
                let discriminant = b * b + 4.0 * a * y;
                if discriminant < 0.0 {
                    return f64::NAN;
                }
                (-b + discriminant.sqrt()) / (2.0 * a)
            };

            let current_time = invert(attribute.progression());
            let baseline_time = invert(attribute.baseline());
            let direction = if current_time >= baseline_time { -1.0 } else { 1.0 };
            let shifted = current_time + step * direction;
            let updated = a * shifted * shifted + b * shifted;
            attribute.with_progression(clamp_to_baseline(
                attribute.progression(),
                updated,
                attribute.baseline(),
            ))
        })
    }

    /// Decay over `a·x^power`.
    pub fn power_decay(a: f64, power: f64) -> UpdateFn {
        Self::decay(&curves::power(a, power))
    }

    /// Decay over `a·baseˣ`.
    pub fn exponential_decay(a: f64, base: f64) -> UpdateFn {
        Self::decay(&curves::exponential(a, base))
    }
}

fn grow(pair: &FunctionPair, attribute: &Attribute, step: f64) -> Attribute {
    let time = pair.invert(attribute.progression());
    attribute.with_progression(pair.value(time + step))
}

fn decay_toward_baseline(pair: &FunctionPair, attribute: &Attribute, step: f64) -> Attribute {
    let current_time = pair.invert(attribute.progression());
    let baseline_time = pair.invert(attribute.baseline());
    let direction = if current_time >= baseline_time { -1.0 } else { 1.0 };
    let updated = pair.value(current_time + step * direction);
    attribute.with_progression(clamp_to_baseline(
        attribute.progression(),
        updated,
        attribute.baseline(),
    ))
}

/// Clamp `updated` so the move away from `current` cannot cross `baseline`:
/// a downward move stops at the baseline from above, an upward move from
/// below. `f64::clamp` keeps NaN as NaN, so a domain violation upstream
/// stays visible instead of snapping to the baseline.
fn clamp_to_baseline(current: f64, updated: f64, baseline: f64) -> f64 {
    if current > updated {
        updated.clamp(baseline, f64::INFINITY)
    } else {
        updated.clamp(f64::NEG_INFINITY, baseline)
    }
}


#[cfg(all(test, feature = "proptest"))]
mod proptests {
    use super::*;
    use crate::level::LevelSystem;
    use proptest::prelude::*;

    proptest! {
        /// Property: linear decay from above never crosses the baseline.
        #[test]
        fn prop_decay_never_overshoots(
            progression in 0.0f64..100.0,
            baseline in 0.0f64..100.0,
            slope in 0.1f64..10.0,
            step in 0.0f64..10.0
        ) {
            let start = Attribute::new(progression, baseline, LevelSystem::zeroed());
            let decay = UpdateFunctions::linear_decay(slope);
            let updated = decay(&start, step);

            if progression >= baseline {
                prop_assert!(updated.progression() >= baseline);
                prop_assert!(updated.progression() <= progression);
            } else {
                prop_assert!(updated.progression() <= baseline);
                prop_assert!(updated.progression() >= progression);
            }
        }

        /// Property: growth is unconstrained by the baseline.
        #[test]
        fn prop_growth_ignores_baseline(
            progression in -50.0f64..50.0,
            baseline in 0.0f64..10.0,
            coefficient in 0.1f64..5.0,
            step in -10.0f64..10.0
        ) {
            let start = Attribute::new(progression, baseline, LevelSystem::zeroed());
            let growth = UpdateFunctions::linear_growth(coefficient);
            let updated = growth(&start, step);
            let expected = progression + coefficient * step;
            prop_assert!((updated.progression() - expected).abs() < 1e-9);
        }
    }
}
