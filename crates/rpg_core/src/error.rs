use thiserror::Error;

/// Problems found in a curve definition before any math object is built.
///
/// These are advisory: every definition still builds (the math layer's NaN
/// channel carries degenerate parameters), so validation exists for tooling
/// that wants to reject bad design data up front.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DefinitionError {
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("parameter `{name}` must be non-zero")]
    ZeroParameter { name: &'static str },

    #[error("exponential and logarithmic bases must not be 0 or 1, got {base}")]
    DegenerateBase { base: f64 },

    #[error("curve is flat and cannot be inverted")]
    FlatCurve,
}
