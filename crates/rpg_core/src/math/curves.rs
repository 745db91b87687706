//! Curve factories for attribute progression.
//!
//! Each factory returns a [`FunctionPair`] whose forward function maps
//! abstract time to progression. Domain violations never panic or return
//! errors: the offending evaluation yields NaN and callers check for it.

use super::pair::FunctionPair;

/// Tolerance for the round-trip contract `invert(value(x)) ≈ x` and for the
/// closed-form/general agreement checks.
pub const ROUND_TRIP_EPSILON: f64 = 1e-9;

/// `f(x) = coefficient·x + offset`, the trivially invertible fast path.
///
/// A zero coefficient has no inverse; `invert` then divides by zero and the
/// usual float semantics (infinity or NaN) carry the problem.
pub fn linear(coefficient: f64, offset: f64) -> FunctionPair {
    FunctionPair::from_fns(
        move |x| coefficient * x + offset,
        move |y| (y - offset) / coefficient,
    )
}

/// `f(x) = a·x² + b·x + c`, inverted with the quadratic formula.
///
/// The inverse takes the positive branch `(−b + √(b² − 4a(c−y))) / 2a` and
/// yields NaN for a negative discriminant or `a == 0`. A zero `a` makes the
/// curve linear; callers wanting that case use [`linear`] instead (the
/// quadratic level-system constructor switches over automatically).
pub fn quadratic(a: f64, b: f64, c: f64) -> FunctionPair {
    FunctionPair::from_fns(
        move |x| a * x * x + b * x + c,
        move |y| {
            if a == 0.0 {
                return f64::NAN;
            }
            let discriminant = b * b - 4.0 * a * (c - y);
            if discriminant < 0.0 {
                return f64::NAN;
            }
            (-b + discriminant.sqrt()) / (2.0 * a)
        },
    )
}

/// `f(x) = a·baseˣ`.
///
/// The inverse `log_base(y/a)` is defined only for `base != 0`, `base != 1`
/// and `y != 0`; anything else yields NaN. Negative `y/a` falls out as NaN
/// through the logarithm itself.
pub fn exponential(a: f64, base: f64) -> FunctionPair {
    FunctionPair::from_fns(
        move |x| a * base.powf(x),
        move |y| {
            if base == 0.0 || base == 1.0 || y == 0.0 {
                return f64::NAN;
            }
            (y / a).log(base)
        },
    )
}

/// `f(x) = a·log_base(x)`, defined for `x != 0`, `base != 0`, `base != 1`.
///
/// Negative `x` yields NaN through the logarithm. The inverse `base^(y/a)`
/// assumes `a != 0`; a zero `a` flattens the forward curve, which has no
/// inverse to begin with.
pub fn logarithmic(a: f64, base: f64) -> FunctionPair {
    FunctionPair::from_fns(
        move |x| {
            if x == 0.0 || base == 0.0 || base == 1.0 {
                return f64::NAN;
            }
            a * x.log(base)
        },
        move |y| base.powf(y / a),
    )
}

/// `f(x) = a·x^power`.
///
/// The inverse `(y/a)^(1/power)` is defined only for `y >= 0`, `a != 0` and
/// `power != 0`.
pub fn power(a: f64, power: f64) -> FunctionPair {
    FunctionPair::from_fns(
        move |x| a * x.powf(power),
        move |y| {
            if y < 0.0 || a == 0.0 || power == 0.0 {
                return f64::NAN;
            }
            (y / a).powf(1.0 / power)
        },
    )
}

/// `f(x) = (a·x)^(1/root)`, defined for `x >= 0` and `root != 0`.
///
/// The inverse `y^root / a` is defined for `a != 0`.
pub fn root(a: f64, root: f64) -> FunctionPair {
    FunctionPair::from_fns(
        move |x| {
            if x < 0.0 || root == 0.0 {
                return f64::NAN;
            }
            (a * x).powf(1.0 / root)
        },
        move |y| {
            if a == 0.0 {
                return f64::NAN;
            }
            y.powf(root) / a
        },
    )
}
