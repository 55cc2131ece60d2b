// ============================================================================
// Iterative Solver
// Core iteration loop with convergence, exhaustion and divergence detection
// ============================================================================

use crate::domain::{DivergenceReason, RunId, SolverConfig, SolverOutcome};
use crate::interfaces::{NoOpObserver, SolverEvent, SolverObserver, SolverState, StepFunction};
use crate::numeric::Scalar;
use chrono::Utc;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Residuals kept inline before spilling to the heap
const INLINE_HISTORY: usize = 16;

/// Generic iterative solver with a pluggable step function.
///
/// Each iteration applies the step function to the current state and
/// measures the residual (distance between successive states). The run
/// stops as soon as one of these holds, checked in this order:
///
/// 1. the new state is not finite: [`SolverOutcome::Diverged`]
/// 2. the residual is below tolerance: [`SolverOutcome::Converged`]
/// 3. the iteration bound is reached: [`SolverOutcome::MaxIterationsExceeded`]
///
/// The finiteness check comes first because every comparison against NaN is
/// false; a NaN residual must never read as convergence.
///
/// Every applied iteration, including the one that diverges, is recorded as a
/// residual and reported to the observer. The diverging state itself is never
/// committed.
///
/// A solver is owned by one caller for its whole life. Parallel solves use
/// independent instances.
///
/// # Example
/// ```
/// use calculus::{Scalar, Solver};
/// use calculus::engine::newton_step_for_sqrt;
///
/// let mut solver = Solver::new(Scalar::new(1.0), 1e-9, 100, newton_step_for_sqrt(2.0));
/// let outcome = solver.run();
///
/// let root = outcome.converged_state().unwrap();
/// assert!((root.value() - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub struct Solver<S: SolverState, F: StepFunction<S>> {
    /// Identifies this solver in logs and events
    run_id: RunId,

    /// Current state, replaced on every finite step
    state: S,

    tolerance: f64,

    max_iterations: usize,

    /// Pluggable iteration
    step_fn: F,

    /// Iterations applied so far
    iterations: usize,

    /// Set once a terminal outcome is reached
    outcome: Option<SolverOutcome<S>>,

    /// Residual of the most recent iteration (non-finite after divergence)
    last_residual: Option<Scalar>,

    /// Residual per iteration, only when history recording is enabled
    history: Option<SmallVec<[f64; INLINE_HISTORY]>>,

    /// Event observer for lifecycle notifications
    observer: Arc<dyn SolverObserver>,

    started: bool,
}

impl<S: SolverState, F: StepFunction<S>> Solver<S, F> {
    /// Create a new solver.
    ///
    /// Parameters are taken as given. A tolerance that is zero, negative or
    /// NaN can never be met, so such a run ends in `MaxIterationsExceeded`
    /// (or `Diverged`). Use [`SolverBuilder`](super::SolverBuilder) for
    /// validated construction.
    pub fn new(initial_state: S, tolerance: f64, max_iterations: usize, step_fn: F) -> Self {
        Self {
            run_id: RunId::new(),
            state: initial_state,
            tolerance,
            max_iterations,
            step_fn,
            iterations: 0,
            outcome: None,
            last_residual: None,
            history: None,
            observer: Arc::new(NoOpObserver),
            started: false,
        }
    }

    /// Create a solver from a configuration (not validated here)
    pub fn with_config(initial_state: S, config: &SolverConfig, step_fn: F) -> Self {
        Self::new(
            initial_state,
            config.tolerance,
            config.max_iterations,
            step_fn,
        )
        .with_history(config.record_history)
    }

    /// Attach an event observer
    pub fn with_observer(mut self, observer: Arc<dyn SolverObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Enable or disable residual history recording
    pub fn with_history(mut self, record_history: bool) -> Self {
        self.history = record_history.then(SmallVec::new);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Current state (the last finite state after divergence)
    pub fn state(&self) -> S {
        self.state
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn step_name(&self) -> &str {
        self.step_fn.name()
    }

    /// Terminal outcome, once reached
    pub fn outcome(&self) -> Option<SolverOutcome<S>> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn last_residual(&self) -> Option<Scalar> {
        self.last_residual
    }

    /// Residual of every iteration; empty unless history is recorded
    pub fn residual_history(&self) -> &[f64] {
        self.history.as_deref().unwrap_or(&[])
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Perform one iteration.
    ///
    /// Returns `Some(outcome)` once the run is terminal. After that, further
    /// calls return the same outcome without touching the state.
    pub fn step(&mut self) -> Option<SolverOutcome<S>> {
        if let Some(outcome) = self.outcome {
            return Some(outcome);
        }

        if !self.started {
            self.started = true;
            self.on_start();

            if !self.state.is_finite() {
                return Some(self.finish(SolverOutcome::Diverged {
                    reason: DivergenceReason::NonFiniteInitialState,
                }));
            }

            if self.max_iterations == 0 {
                return Some(self.finish(SolverOutcome::MaxIterationsExceeded {
                    last_state: self.state,
                }));
            }
        }

        self.iterations += 1;
        let next = self.step_fn.advance(self.state);
        let residual = next.residual(&self.state);
        self.record(residual);

        // Must run before the tolerance check: NaN < tolerance is false, but
        // an infinite state can still produce a small residual
        if !next.is_finite() {
            return Some(self.finish(SolverOutcome::Diverged {
                reason: DivergenceReason::NonFiniteState {
                    iteration: self.iterations,
                },
            }));
        }

        self.state = next;

        if residual.value() < self.tolerance {
            return Some(self.finish(SolverOutcome::Converged {
                state: self.state,
                iterations: self.iterations,
            }));
        }

        if self.iterations >= self.max_iterations {
            return Some(self.finish(SolverOutcome::MaxIterationsExceeded {
                last_state: self.state,
            }));
        }

        None
    }

    /// Iterate until a terminal outcome is reached
    pub fn run(&mut self) -> SolverOutcome<S> {
        loop {
            if let Some(outcome) = self.step() {
                return outcome;
            }
        }
    }

    // ========================================================================
    // Bookkeeping
    // ========================================================================

    fn on_start(&self) {
        tracing::debug!(
            "Solver {} started: step={}, tolerance={:e}, max_iterations={}",
            self.run_id,
            self.step_fn.name(),
            self.tolerance,
            self.max_iterations
        );

        self.observer.on_event(SolverEvent::Started {
            run_id: self.run_id,
            step: self.step_fn.name().to_string(),
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            timestamp: Utc::now(),
        });
    }

    fn record(&mut self, residual: Scalar) {
        tracing::trace!(
            "Solver {} iteration {}: residual={:e}",
            self.run_id,
            self.iterations,
            residual.value()
        );

        self.last_residual = Some(residual);
        if let Some(history) = self.history.as_mut() {
            history.push(residual.value());
        }

        self.observer.on_event(SolverEvent::Stepped {
            run_id: self.run_id,
            iteration: self.iterations,
            residual: residual.value(),
            timestamp: Utc::now(),
        });
    }

    fn finish(&mut self, outcome: SolverOutcome<S>) -> SolverOutcome<S> {
        match &outcome {
            SolverOutcome::Diverged { reason } => {
                tracing::warn!("Solver {} diverged: {}", self.run_id, reason);
            },
            _ => {
                tracing::debug!(
                    "Solver {} finished: {} after {} iterations",
                    self.run_id,
                    outcome.kind(),
                    self.iterations
                );
            },
        }

        self.outcome = Some(outcome);
        self.observer.on_event(SolverEvent::Finished {
            run_id: self.run_id,
            outcome: outcome.kind(),
            iterations: self.iterations,
            timestamp: Utc::now(),
        });

        outcome
    }
}

impl<S: SolverState, F: StepFunction<S>> fmt::Debug for Solver<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("run_id", &self.run_id)
            .field("step", &self.step_fn.name())
            .field("state", &self.state)
            .field("tolerance", &self.tolerance)
            .field("max_iterations", &self.max_iterations)
            .field("iterations", &self.iterations)
            .field("outcome", &self.outcome)
            .finish()
    }
}
