//! Invertible scalar function pairs.
//!
//! A [`FunctionPair`] bundles a forward curve with its mathematical inverse.
//! The forward direction maps an abstract "time" value to progression; the
//! inverse maps progression back onto the time axis, which is where update
//! steps are applied.

use std::fmt;
use std::sync::Arc;

/// Shared scalar calculation. Cloning is cheap, and the `Send + Sync` bound
/// keeps calculations usable from rayon workers.
pub type Calculation = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A forward curve together with its mathematical inverse.
///
/// The contract is `invert(value(x)) ≈ x` for every `x` in the curve's valid
/// domain. Out-of-domain inputs evaluate to NaN instead of panicking, and
/// the NaN flows through later arithmetic for the caller to detect.
#[derive(Clone)]
pub struct FunctionPair {
    function: Calculation,
    inverse: Calculation,
}

impl FunctionPair {
    /// Build a pair from two shared calculations.
    pub fn new(function: Calculation, inverse: Calculation) -> Self {
        Self { function, inverse }
    }

    /// Build a pair from two plain closures.
    pub fn from_fns<F, G>(function: F, inverse: G) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        G: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
            inverse: Arc::new(inverse),
        }
    }

    /// The pair that maps every value to itself.
    pub fn identity() -> Self {
        Self::from_fns(|x| x, |y| y)
    }

    /// Compose pairs left to right: the first pair's forward function runs
    /// first. The composed inverse runs the individual inverses in reverse
    /// order, since `(f∘g)⁻¹ = g⁻¹∘f⁻¹`. Composing an empty sequence yields
    /// the identity pair.
    pub fn compose<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = FunctionPair>,
    {
        let (functions, mut inverses): (Vec<_>, Vec<_>) = pairs
            .into_iter()
            .map(|pair| (pair.function, pair.inverse))
            .unzip();
        inverses.reverse();

        Self {
            function: Arc::new(move |x| functions.iter().fold(x, |acc, f| f(acc))),
            inverse: Arc::new(move |y| inverses.iter().fold(y, |acc, g| g(acc))),
        }
    }

    /// Evaluate the forward function.
    pub fn value(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    /// Evaluate the inverse function.
    pub fn invert(&self, y: f64) -> f64 {
        (self.inverse)(y)
    }

    /// Shared handle to the forward calculation.
    pub fn function(&self) -> Calculation {
        Arc::clone(&self.function)
    }

    /// Shared handle to the inverse calculation.
    pub fn inverse(&self) -> Calculation {
        Arc::clone(&self.inverse)
    }
}

impl fmt::Debug for FunctionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionPair").finish_non_exhaustive()
    }
}
