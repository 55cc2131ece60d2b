// ============================================================================
// Scalar
// Double-precision value type with checked elementary functions
// ============================================================================

use super::errors::{MathError, MathResult};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A wrapped `f64` with elementary math operations.
///
/// Arithmetic follows IEEE-754: nothing is clamped, division by zero yields
/// an infinity or NaN, and NaN inputs propagate. Functions whose real-valued
/// domain is restricted (`asin`, `acos`, `log`, `log10`, `sqrt`, `cbrt`)
/// return [`MathError::Domain`] instead of silently producing NaN.
///
/// # Example
/// ```
/// use calculus::Scalar;
///
/// let x = Scalar::new(0.5);
/// let y = x.asin()?.sin();
/// assert!((y.value() - 0.5).abs() < 1e-12);
///
/// assert!(Scalar::new(-1.0).sqrt().is_err());
/// # Ok::<(), calculus::MathError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Scalar(f64);

impl Scalar {
    /// Zero value
    pub const ZERO: Self = Self(0.0);

    /// One (1.0)
    pub const ONE: Self = Self(1.0);

    /// Not-a-number
    pub const NAN: Self = Self(f64::NAN);

    // ========================================================================
    // Construction & Accessors
    // ========================================================================

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the wrapped value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// True when the value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Check if value is zero (either sign).
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Compare with an explicit absolute tolerance.
    ///
    /// `==` is exact; use this when rounding error is expected.
    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.0 - other.0).abs() <= epsilon
    }

    // ========================================================================
    // Trigonometric
    // ========================================================================

    #[inline]
    pub fn sin(self) -> Self {
        Self(self.0.sin())
    }

    #[inline]
    pub fn cos(self) -> Self {
        Self(self.0.cos())
    }

    #[inline]
    pub fn tan(self) -> Self {
        Self(self.0.tan())
    }

    /// Arc sine.
    ///
    /// # Errors
    /// Returns `Domain` when the value lies outside [-1, 1].
    #[inline]
    pub fn asin(self) -> MathResult<Self> {
        self.check_unit_interval("asin")?;
        Ok(Self(self.0.asin()))
    }

    /// Arc cosine.
    ///
    /// # Errors
    /// Returns `Domain` when the value lies outside [-1, 1].
    #[inline]
    pub fn acos(self) -> MathResult<Self> {
        self.check_unit_interval("acos")?;
        Ok(Self(self.0.acos()))
    }

    #[inline]
    pub fn atan(self) -> Self {
        Self(self.0.atan())
    }

    // ========================================================================
    // Hyperbolic
    // ========================================================================

    #[inline]
    pub fn sinh(self) -> Self {
        Self(self.0.sinh())
    }

    #[inline]
    pub fn cosh(self) -> Self {
        Self(self.0.cosh())
    }

    #[inline]
    pub fn tanh(self) -> Self {
        Self(self.0.tanh())
    }

    // ========================================================================
    // Exponential, Logarithmic & Roots
    // ========================================================================

    #[inline]
    pub fn exp(self) -> Self {
        Self(self.0.exp())
    }

    /// Natural logarithm. `log(0)` is negative infinity.
    ///
    /// # Errors
    /// Returns `Domain` for negative input.
    #[inline]
    pub fn log(self) -> MathResult<Self> {
        self.check_non_negative("log")?;
        Ok(Self(self.0.ln()))
    }

    /// Base-10 logarithm. `log10(0)` is negative infinity.
    ///
    /// # Errors
    /// Returns `Domain` for negative input.
    #[inline]
    pub fn log10(self) -> MathResult<Self> {
        self.check_non_negative("log10")?;
        Ok(Self(self.0.log10()))
    }

    /// Square root.
    ///
    /// # Errors
    /// Returns `Domain` for negative input.
    #[inline]
    pub fn sqrt(self) -> MathResult<Self> {
        self.check_non_negative("sqrt")?;
        Ok(Self(self.0.sqrt()))
    }

    /// Cube root, restricted to the non-negative reals like the other roots.
    ///
    /// # Errors
    /// Returns `Domain` for negative input.
    #[inline]
    pub fn cbrt(self) -> MathResult<Self> {
        self.check_non_negative("cbrt")?;
        Ok(Self(self.0.cbrt()))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Raise to a power.
    ///
    /// Never fails: a negative base with a non-integer exponent yields NaN,
    /// as in IEEE-754. Callers needing strict validation must check the
    /// result with [`Scalar::is_nan`].
    #[inline]
    pub fn pow(self, exponent: impl Into<Scalar>) -> Self {
        let exponent: Scalar = exponent.into();
        Self(self.0.powf(exponent.0))
    }

    // ========================================================================
    // Domain Checks
    // ========================================================================

    // NaN passes both checks so that it propagates instead of raising.

    #[inline]
    fn check_unit_interval(self, function: &'static str) -> MathResult<()> {
        if self.0 < -1.0 || self.0 > 1.0 {
            return Err(MathError::Domain {
                function,
                value: self.0,
            });
        }
        Ok(())
    }

    #[inline]
    fn check_non_negative(self, function: &'static str) -> MathResult<()> {
        if self.0 < 0.0 {
            return Err(MathError::Domain {
                function,
                value: self.0,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Scalar {
    #[inline]
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<f32> for Scalar {
    #[inline]
    fn from(value: f32) -> Self {
        Self(value as f64)
    }
}

impl From<i32> for Scalar {
    #[inline]
    fn from(value: i32) -> Self {
        Self(value as f64)
    }
}

impl From<Scalar> for f64 {
    #[inline]
    fn from(value: Scalar) -> Self {
        value.0
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Add for Scalar {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Scalar {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl AddAssign for Scalar {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Scalar {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
