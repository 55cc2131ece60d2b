// ============================================================================
// ODE Step Functions
// Fixed-step integrators for autonomous systems dy/dt = f(y) on Vec3 state
// ============================================================================
//
// Driven by the solver, these integrate until the state stops moving
// (residual = |y_{n+1} - y_n| below tolerance), i.e. until an equilibrium
// is reached, or until the iteration bound.

use crate::interfaces::StepFunction;
use crate::numeric::{MathError, MathResult, Scalar, Vec3};

fn check_time_step(dt: f64) -> MathResult<Scalar> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(MathError::InvalidArgument {
            reason: "time step must be positive and finite",
        });
    }
    Ok(Scalar::new(dt))
}

/// Explicit (forward) Euler step: `y + dt·f(y)`
pub struct EulerStep<F> {
    derivative: F,
    dt: Scalar,
}

impl<F> EulerStep<F>
where
    F: Fn(Vec3) -> Vec3,
{
    /// # Errors
    /// Returns `InvalidArgument` unless `dt` is positive and finite.
    pub fn new(derivative: F, dt: f64) -> MathResult<Self> {
        Ok(Self {
            derivative,
            dt: check_time_step(dt)?,
        })
    }

    pub fn dt(&self) -> Scalar {
        self.dt
    }
}

impl<F> StepFunction<Vec3> for EulerStep<F>
where
    F: Fn(Vec3) -> Vec3,
{
    #[inline]
    fn advance(&self, y: Vec3) -> Vec3 {
        y + (self.derivative)(y) * self.dt
    }

    fn name(&self) -> &str {
        "euler"
    }
}

/// Classical fourth-order Runge-Kutta step
pub struct RungeKutta4Step<F> {
    derivative: F,
    dt: Scalar,
}

impl<F> RungeKutta4Step<F>
where
    F: Fn(Vec3) -> Vec3,
{
    /// # Errors
    /// Returns `InvalidArgument` unless `dt` is positive and finite.
    pub fn new(derivative: F, dt: f64) -> MathResult<Self> {
        Ok(Self {
            derivative,
            dt: check_time_step(dt)?,
        })
    }

    pub fn dt(&self) -> Scalar {
        self.dt
    }
}

impl<F> StepFunction<Vec3> for RungeKutta4Step<F>
where
    F: Fn(Vec3) -> Vec3,
{
    fn advance(&self, y: Vec3) -> Vec3 {
        let f = &self.derivative;
        let dt = self.dt;
        let half = dt * Scalar::new(0.5);

        let k1 = f(y);
        let k2 = f(y + k1 * half);
        let k3 = f(y + k2 * half);
        let k4 = f(y + k3 * dt);

        y + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / Scalar::new(6.0))
    }

    fn name(&self) -> &str {
        "rk4"
    }
}
