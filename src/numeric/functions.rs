// ============================================================================
// Elementary Functions
// Free-function forms of the Scalar operations
// ============================================================================
//
// Each function accepts anything convertible into a Scalar, so both
// `sin(0.5)` and `sin(Scalar::new(0.5))` work. Domain rules are those of
// the corresponding Scalar method.

use super::errors::MathResult;
use super::scalar::Scalar;

macro_rules! total_fn {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(x: impl Into<Scalar>) -> Scalar {
                let x: Scalar = x.into();
                x.$name()
            }
        )*
    };
}

macro_rules! checked_fn {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(x: impl Into<Scalar>) -> MathResult<Scalar> {
                let x: Scalar = x.into();
                x.$name()
            }
        )*
    };
}

total_fn!(
    /// Sine (radians).
    sin,
    /// Cosine (radians).
    cos,
    /// Tangent (radians).
    tan,
    /// Arc tangent.
    atan,
    sinh,
    cosh,
    tanh,
    exp,
    abs,
);

checked_fn!(
    /// Arc sine; fails outside [-1, 1].
    asin,
    /// Arc cosine; fails outside [-1, 1].
    acos,
    /// Natural logarithm; fails for negative input.
    log,
    /// Base-10 logarithm; fails for negative input.
    log10,
    /// Square root; fails for negative input.
    sqrt,
    /// Cube root; fails for negative input.
    cbrt,
);

/// `base` raised to `exponent`. Never fails; see [`Scalar::pow`].
#[inline]
pub fn pow(base: impl Into<Scalar>, exponent: impl Into<Scalar>) -> Scalar {
    let base: Scalar = base.into();
    base.pow(exponent)
}
