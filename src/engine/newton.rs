// ============================================================================
// Newton-Raphson Step Functions
// Scalar root finding: x_{n+1} = x_n - f(x_n) / f'(x_n)
// ============================================================================

use crate::interfaces::StepFunction;
use crate::numeric::Scalar;

/// Newton-Raphson step for a scalar function with a known derivative.
///
/// A vanishing derivative makes the next state infinite or NaN, which the
/// solver reports as divergence.
///
/// # Example
/// ```text
/// f(x)  = x² - 612,  f'(x) = 2x,  x₀ = 10
/// x₁ = 10 - (100 - 612) / 20 = 35.6
/// ...converges to 24.7386...
/// ```
pub struct NewtonStep<F, D> {
    f: F,
    derivative: D,
}

impl<F, D> NewtonStep<F, D>
where
    F: Fn(Scalar) -> Scalar,
    D: Fn(Scalar) -> Scalar,
{
    pub fn new(f: F, derivative: D) -> Self {
        Self { f, derivative }
    }
}

impl<F, D> StepFunction<Scalar> for NewtonStep<F, D>
where
    F: Fn(Scalar) -> Scalar,
    D: Fn(Scalar) -> Scalar,
{
    #[inline]
    fn advance(&self, x: Scalar) -> Scalar {
        x - (self.f)(x) / (self.derivative)(x)
    }

    fn name(&self) -> &str {
        "newton"
    }
}

/// Newton step for `x² - target = 0`, the Babylonian square root:
/// `x_{n+1} = (x_n + target / x_n) / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtNewtonStep {
    target: Scalar,
}

impl SqrtNewtonStep {
    pub fn target(&self) -> Scalar {
        self.target
    }
}

impl StepFunction<Scalar> for SqrtNewtonStep {
    #[inline]
    fn advance(&self, x: Scalar) -> Scalar {
        (x + self.target / x) * Scalar::new(0.5)
    }

    fn name(&self) -> &str {
        "newton-sqrt"
    }
}

/// Step function converging to `sqrt(target)` from any positive start.
///
/// A start of zero diverges on the first step; a negative target never
/// converges.
pub fn newton_step_for_sqrt(target: impl Into<Scalar>) -> SqrtNewtonStep {
    SqrtNewtonStep {
        target: target.into(),
    }
}
