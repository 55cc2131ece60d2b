// ============================================================================
// Solver Factory
// Creates solvers with validated configuration
// ============================================================================

use crate::domain::SolverConfig;
use crate::engine::Solver;
use crate::interfaces::{NoOpObserver, SolverObserver, SolverState, StepFunction};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a solver from configuration
///
/// # Arguments
/// * `initial_state` - Starting point of the iteration
/// * `config` - Tolerance, iteration bound and history settings
/// * `step_fn` - The iteration to apply
/// * `observer` - Observer for solver lifecycle events
///
/// # Returns
/// * `Result<Solver<S, F>, String>` - Configured solver or validation error
///
/// # Example
/// ```
/// use calculus::prelude::*;
/// use calculus::engine::factory::create_from_config;
/// use std::sync::Arc;
///
/// let config = SolverConfig::precise();
/// let mut solver = create_from_config(
///     Scalar::new(1.0),
///     config,
///     newton_step_for_sqrt(9.0),
///     Arc::new(NoOpObserver),
/// )
/// .unwrap();
/// assert!(solver.run().is_converged());
/// ```
pub fn create_from_config<S, F>(
    initial_state: S,
    config: SolverConfig,
    step_fn: F,
    observer: Arc<dyn SolverObserver>,
) -> Result<Solver<S, F>, String>
where
    S: SolverState,
    F: StepFunction<S>,
{
    // Validate configuration first
    config.validate()?;

    Ok(Solver::with_config(initial_state, &config, step_fn).with_observer(observer))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating solvers with fluent API
///
/// # Example
/// ```
/// use calculus::prelude::*;
/// use std::sync::Arc;
///
/// let mut solver = SolverBuilder::new(Vec3::new(1.0, 2.0, 3.0))
///     .tolerance(1e-10)
///     .max_iterations(500)
///     .with_observer(Arc::new(LoggingObserver))
///     .build(RungeKutta4Step::new(|y: Vec3| -y, 0.1).unwrap())
///     .unwrap();
///
/// let equilibrium = solver.run().converged_state().unwrap();
/// assert!(equilibrium.norm().value() < 1e-8);
/// ```
pub struct SolverBuilder<S: SolverState> {
    initial_state: S,
    config: SolverConfig,
    observer: Arc<dyn SolverObserver>,
}

impl<S: SolverState> SolverBuilder<S> {
    /// Create a new builder starting from the given state
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            config: SolverConfig::default(),
            observer: Arc::new(NoOpObserver),
        }
    }

    // ========================================================================
    // Convergence Configuration
    // ========================================================================

    /// Set the convergence tolerance
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set the iteration bound
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Record every residual
    pub fn record_history(mut self) -> Self {
        self.config.record_history = true;
        self
    }

    /// Attach an event observer
    pub fn with_observer(mut self, observer: Arc<dyn SolverObserver>) -> Self {
        self.observer = observer;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply high-precision configuration
    pub fn precise(initial_state: S) -> Self {
        Self::new(initial_state).with_config(SolverConfig::precise())
    }

    /// Apply quick, coarse configuration
    pub fn fast(initial_state: S) -> Self {
        Self::new(initial_state).with_config(SolverConfig::fast())
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the solver around a step function
    pub fn build<F: StepFunction<S>>(self, step_fn: F) -> Result<Solver<S, F>, String> {
        create_from_config(self.initial_state, self.config, step_fn, self.observer)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &SolverConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutcomeKind;
    use crate::engine::newton_step_for_sqrt;
    use crate::interfaces::RecordingObserver;
    use crate::numeric::{Scalar, Vec3};

    #[test]
    fn test_create_from_config() {
        let solver = create_from_config(
            Scalar::ONE,
            SolverConfig::fast(),
            newton_step_for_sqrt(2.0),
            Arc::new(NoOpObserver),
        )
        .unwrap();
        assert_eq!(solver.tolerance(), 1e-6);
        assert_eq!(solver.max_iterations(), 50);
        assert_eq!(solver.step_name(), "newton-sqrt");
    }

    #[test]
    fn test_create_from_invalid_config() {
        let result = create_from_config(
            Scalar::ONE,
            SolverConfig::new(0.0, 10),
            |x: Scalar| x,
            Arc::new(NoOpObserver),
        );
        assert_eq!(result.err(), Some("Tolerance must be positive".to_string()));
    }

    #[test]
    fn test_builder_pattern() {
        let mut solver = SolverBuilder::new(Scalar::new(1.0))
            .tolerance(1e-12)
            .max_iterations(20)
            .record_history()
            .build(newton_step_for_sqrt(2.0))
            .unwrap();

        assert!(solver.run().is_converged());
        assert_eq!(solver.residual_history().len(), solver.iterations());
    }

    #[test]
    fn test_builder_rejects_zero_iterations() {
        let result = SolverBuilder::new(Vec3::ZERO)
            .max_iterations(0)
            .build(|v: Vec3| v);
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_observer() {
        let observer = Arc::new(RecordingObserver::new());
        let mut solver = SolverBuilder::fast(Scalar::new(5.0))
            .with_observer(observer.clone())
            .build(|x: Scalar| x)
            .unwrap();
        assert_eq!(solver.run().kind(), OutcomeKind::Converged);

        // Started, one Stepped, Finished
        assert_eq!(observer.len(), 3);
    }

    #[test]
    fn test_preset_builders() {
        let precise = SolverBuilder::precise(Scalar::ONE);
        assert_eq!(precise.get_config().tolerance, 1e-12);

        let fast = SolverBuilder::fast(Vec3::ZERO);
        assert_eq!(fast.get_config().max_iterations, 50);
    }
}
