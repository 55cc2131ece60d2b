// ============================================================================
// Step Function Interface
// Defines the contract for pluggable solver iterations
// ============================================================================

use super::solver_state::SolverState;

/// Strategy pattern interface for one solver iteration
/// Implementations: NewtonStep, SqrtNewtonStep, EulerStep, RungeKutta4Step,
/// and any `Fn(S) -> S` closure.
pub trait StepFunction<S: SolverState> {
    /// Advance the state by one iteration
    fn advance(&self, state: S) -> S;

    /// Get the step name for logging
    fn name(&self) -> &str {
        "custom"
    }
}

impl<S, F> StepFunction<S> for F
where
    S: SolverState,
    F: Fn(S) -> S,
{
    #[inline]
    fn advance(&self, state: S) -> S {
        self(state)
    }
}
