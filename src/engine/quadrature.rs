// ============================================================================
// Quadrature
// Composite Simpson integration of scalar functions
// ============================================================================

use crate::numeric::{MathError, MathResult, Scalar};

/// Integrate `f` over `[a, b]` with the composite Simpson rule on `steps`
/// sub-intervals.
///
/// Exact for polynomials up to degree three. `a > b` gives the negated
/// integral; `a == b` gives zero. Non-finite samples propagate into the
/// result.
///
/// # Errors
/// Returns `InvalidArgument` when `steps` is zero or odd.
///
/// # Example
/// ```
/// use calculus::engine::integrate;
///
/// let area = integrate(|x| x * x, 0.0, 3.0, 6)?;
/// assert!((area.value() - 9.0).abs() < 1e-12);
/// # Ok::<(), calculus::MathError>(())
/// ```
pub fn integrate<F>(
    f: F,
    a: impl Into<Scalar>,
    b: impl Into<Scalar>,
    steps: usize,
) -> MathResult<Scalar>
where
    F: Fn(Scalar) -> Scalar,
{
    if steps == 0 || steps % 2 != 0 {
        return Err(MathError::InvalidArgument {
            reason: "steps must be positive and even",
        });
    }

    let a: Scalar = a.into();
    let b: Scalar = b.into();
    let h = (b - a) / Scalar::new(steps as f64);

    let mut sum = f(a) + f(b);
    for i in 1..steps {
        let x = a + h * Scalar::new(i as f64);
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += Scalar::new(weight) * f(x);
    }

    tracing::trace!("Simpson integration over [{}, {}] with {} steps", a, b, steps);

    Ok(sum * h / Scalar::new(3.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_exact_for_cubics() {
        let result = integrate(|x| x * x * x, 0.0, 1.0, 2).unwrap();
        assert!(result.approx_eq(Scalar::new(0.25), 1e-15));

        let result = integrate(|x| Scalar::new(3.0) * x * x - x + Scalar::ONE, -1.0, 2.0, 4).unwrap();
        // [x³ - x²/2 + x] from -1 to 2 = (8 - 2 + 2) - (-1 - 0.5 - 1) = 10.5
        assert!(result.approx_eq(Scalar::new(10.5), 1e-12));
    }

    #[test]
    fn test_sine_over_half_period() {
        let result = integrate(Scalar::sin, 0.0, PI, 100).unwrap();
        assert!(result.approx_eq(Scalar::new(2.0), 1e-7));
    }

    #[test]
    fn test_reversed_and_empty_interval() {
        let forward = integrate(Scalar::exp, 0.0, 1.0, 10).unwrap();
        let backward = integrate(Scalar::exp, 1.0, 0.0, 10).unwrap();
        assert!(forward.approx_eq(-backward, 1e-12));

        assert_eq!(integrate(Scalar::exp, 2.0, 2.0, 4).unwrap().value(), 0.0);
    }

    #[test]
    fn test_invalid_step_count() {
        let expected = Err(MathError::InvalidArgument {
            reason: "steps must be positive and even",
        });
        assert_eq!(integrate(Scalar::sin, 0.0, 1.0, 0), expected);
        assert_eq!(integrate(Scalar::sin, 0.0, 1.0, 7), expected);
    }

    #[test]
    fn test_nan_sample_propagates() {
        let result = integrate(|x| Scalar::ONE / x, 0.0, 1.0, 4).unwrap();
        assert!(!result.is_finite());
    }
}
