// ============================================================================
// Vec3
// Fixed three-component vector built on Scalar
// ============================================================================

use super::errors::{MathError, MathResult};
use super::scalar::Scalar;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Three-component real vector.
///
/// Arithmetic is component-wise; `dot` and `cross` use their usual
/// definitions (cross follows the right-hand rule). Equality is exact
/// component comparison, see [`Vec3::approx_eq`] for a tolerant check.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Scalar::new(x),
            y: Scalar::new(y),
            z: Scalar::new(z),
        }
    }

    #[inline]
    pub const fn from_scalars(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self { x, y, z }
    }

    /// Components as plain floats.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x.value(), self.y.value(), self.z.value()]
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    // ========================================================================
    // Products & Norms
    // ========================================================================

    #[inline]
    pub fn dot(self, other: Self) -> Scalar {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Sum of squared components (avoids the square root).
    #[inline]
    pub fn norm_squared(self) -> Scalar {
        self.dot(self)
    }

    /// Euclidean length.
    ///
    /// Computed with `hypot`, so it neither overflows nor underflows while the
    /// true length is representable. Zero only for the zero vector.
    #[inline]
    pub fn norm(self) -> Scalar {
        Scalar::new(
            self.x
                .value()
                .hypot(self.y.value())
                .hypot(self.z.value()),
        )
    }

    /// Largest absolute component (NaN components are skipped).
    #[inline]
    fn max_abs_component(self) -> f64 {
        self.x
            .value()
            .abs()
            .max(self.y.value().abs())
            .max(self.z.value().abs())
    }

    /// Unit vector with the same direction.
    ///
    /// The vector is first scaled by its largest component so the division
    /// stays accurate for huge and subnormal magnitudes.
    ///
    /// # Errors
    /// Returns `DegenerateVector` when the norm is zero.
    pub fn normalize(self) -> MathResult<Self> {
        if self.norm().is_zero() {
            return Err(MathError::DegenerateVector);
        }
        let scaled = self / self.max_abs_component();
        Ok(scaled / scaled.norm())
    }

    #[inline]
    pub fn distance(self, other: Self) -> Scalar {
        (self - other).norm()
    }

    /// Component-wise comparison with an explicit absolute tolerance.
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        self.x.approx_eq(other.x, epsilon)
            && self.y.approx_eq(other.y, epsilon)
            && self.z.approx_eq(other.z, epsilon)
    }
}

// ============================================================================
// Operator Implementations
// ============================================================================

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_scalars(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_scalars(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_scalars(-self.x, -self.y, -self.z)
    }
}

impl Mul<Scalar> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Scalar) -> Self {
        Self::from_scalars(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self * Scalar::new(rhs)
    }
}

impl Mul<Vec3> for Scalar {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<Scalar> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Scalar) -> Self {
        Self::from_scalars(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        self / Scalar::new(rhs)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<(f64, f64, f64)> for Vec3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<Vec3> for (f64, f64, f64) {
    fn from(v: Vec3) -> Self {
        (v.x.value(), v.y.value(), v.z.value())
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck::TestResult;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_component_wise_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(Scalar::new(2.0) * a, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut acc = Vec3::ZERO;
        acc += a;
        acc += b;
        acc -= a;
        assert_eq!(acc, b);
    }

    #[test]
    fn test_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(b).value(), 12.0);
        assert_eq!(Vec3::UNIT_X.dot(Vec3::UNIT_Y).value(), 0.0);
    }

    #[test]
    fn test_cross_right_hand_rule() {
        assert_eq!(Vec3::UNIT_X.cross(Vec3::UNIT_Y), Vec3::UNIT_Z);
        assert_eq!(Vec3::UNIT_Y.cross(Vec3::UNIT_Z), Vec3::UNIT_X);
        assert_eq!(Vec3::UNIT_Z.cross(Vec3::UNIT_X), Vec3::UNIT_Y);
        assert_eq!(Vec3::UNIT_Y.cross(Vec3::UNIT_X), -Vec3::UNIT_Z);
    }

    #[test]
    fn test_norm() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).norm().value(), 5.0);
        assert_eq!(Vec3::new(1.0, 2.0, 2.0).norm_squared().value(), 9.0);
        assert_eq!(Vec3::ZERO.norm().value(), 0.0);
        assert_eq!(
            Vec3::new(1.0, 1.0, 1.0)
                .distance(Vec3::new(1.0, 1.0, 3.0))
                .value(),
            2.0
        );
    }

    #[test]
    fn test_normalize() {
        let unit = Vec3::new(0.0, 3.0, 4.0).normalize().unwrap();
        assert!(unit.approx_eq(Vec3::new(0.0, 0.6, 0.8), EPS));
        assert!(unit.norm().approx_eq(Scalar::ONE, EPS));
    }

    #[test]
    fn test_norm_and_normalize_extreme_magnitudes() {
        let huge = Vec3::new(1e200, 1e200, 1e200);
        assert!(huge.norm().is_finite());
        assert!((huge.norm().value() / (1e200 * 3f64.sqrt()) - 1.0).abs() < EPS);
        let unit = huge.normalize().unwrap();
        assert!(unit.norm().approx_eq(Scalar::ONE, EPS));
        let third = 1.0 / 3f64.sqrt();
        assert!(unit.approx_eq(Vec3::new(third, third, third), EPS));

        let tiny = Vec3::new(1e-200, 0.0, 0.0);
        assert_eq!(tiny.norm().value(), 1e-200);
        assert_eq!(tiny.normalize(), Ok(Vec3::UNIT_X));

        let small = Vec3::new(3e-162, 4e-162, 0.0);
        let unit = small.normalize().unwrap();
        assert!(unit.norm().approx_eq(Scalar::ONE, EPS));
        assert!(unit.approx_eq(Vec3::new(0.6, 0.8, 0.0), EPS));

        let subnormal = Vec3::new(0.0, -5e-324, 0.0);
        assert!(!subnormal.norm().is_zero());
        assert_eq!(subnormal.normalize(), Ok(-Vec3::UNIT_Y));
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert_eq!(Vec3::ZERO.normalize(), Err(MathError::DegenerateVector));
        assert_eq!(
            Vec3::new(-0.0, 0.0, -0.0).normalize(),
            Err(MathError::DegenerateVector)
        );
    }

    #[test]
    fn test_exact_equality_has_no_tolerance() {
        let a = Vec3::new(0.1 + 0.2, 0.0, 0.0);
        let b = Vec3::new(0.3, 0.0, 0.0);
        assert_ne!(a, b);
        assert!(a.approx_eq(b, 1e-15));
    }

    #[test]
    fn test_is_finite() {
        assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vec3::new(1.0, f64::NAN, 3.0).is_finite());
        assert!(!Vec3::new(1.0, 2.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_conversions() {
        let v: Vec3 = (1.0, 2.0, 3.0).into();
        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
        assert_eq!(Vec3::from([1.0, 2.0, 3.0]), v);
        let tuple: (f64, f64, f64) = v.into();
        assert_eq!(tuple, (1.0, 2.0, 3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec3::new(1.0, -2.5, 0.0).to_string(), "(1, -2.5, 0)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json() {
        let v = Vec3::new(1.0, -2.5, 0.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":-2.5,"z":0.0}"#);
        assert_eq!(serde_json::from_str::<Vec3>(&json).unwrap(), v);
    }

    /// Mantissa in (-1, 1) times a power of ten in [-max_exp, max_exp]
    fn component(max_exp: i32) -> impl Strategy<Value = f64> {
        (-1.0f64..1.0, -max_exp..=max_exp).prop_map(|(m, e)| m * 10f64.powi(e))
    }

    proptest! {
        #[test]
        fn prop_cross_is_orthogonal(
            ax in component(60), ay in component(60), az in component(60),
            bx in component(60), by in component(60), bz in component(60),
        ) {
            let a = Vec3::new(ax, ay, az);
            let b = Vec3::new(bx, by, bz);
            let c = a.cross(b);
            // Relative to |a|^2 |b|, which stays in range for these exponents
            let scale = a.norm().value() * a.norm().value() * b.norm().value();
            let scale_b = b.norm().value() * b.norm().value() * a.norm().value();
            prop_assert!(a.dot(c).value().abs() <= 1e-12 * scale);
            prop_assert!(b.dot(c).value().abs() <= 1e-12 * scale_b);
        }

        #[test]
        fn prop_normalize_gives_unit_norm(
            x in component(300), y in component(300), z in component(300),
        ) {
            let v = Vec3::new(x, y, z);
            match v.normalize() {
                Ok(unit) => prop_assert!(unit.norm().approx_eq(Scalar::ONE, 1e-12)),
                Err(err) => {
                    prop_assert_eq!(err, MathError::DegenerateVector);
                    prop_assert_eq!(v, Vec3::ZERO);
                },
            }
        }
    }

    quickcheck::quickcheck! {
        fn qc_addition_commutes(a: (i16, i16, i16), b: (i16, i16, i16)) -> bool {
            let a = Vec3::new(a.0 as f64, a.1 as f64, a.2 as f64);
            let b = Vec3::new(b.0 as f64, b.1 as f64, b.2 as f64);
            a + b == b + a
        }

        fn qc_normalize_fails_only_for_zero(v: (i16, i16, i16)) -> TestResult {
            let v = Vec3::new(v.0 as f64, v.1 as f64, v.2 as f64);
            let is_zero = v == Vec3::ZERO;
            TestResult::from_bool(v.normalize().is_err() == is_zero)
        }
    }
}
