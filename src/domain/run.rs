// ============================================================================
// Solver Run Domain Model
// ============================================================================

use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Identifies one solver instance in logs and events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunId(Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Why a run was stopped as diverged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DivergenceReason {
    /// The initial state already contained NaN or infinity
    NonFiniteInitialState,
    /// The step function produced NaN or infinity at this iteration
    NonFiniteState { iteration: usize },
}

impl fmt::Display for DivergenceReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivergenceReason::NonFiniteInitialState => {
                write!(f, "initial state is not finite")
            },
            DivergenceReason::NonFiniteState { iteration } => {
                write!(f, "state became non-finite at iteration {iteration}")
            },
        }
    }
}

/// Terminal result of a solver run.
///
/// Running out of iterations or diverging is an expected outcome the caller
/// branches on, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverOutcome<S> {
    /// Residual dropped below tolerance
    Converged { state: S, iterations: usize },
    /// Iteration bound reached before convergence
    MaxIterationsExceeded { last_state: S },
    /// A non-finite state was detected
    Diverged { reason: DivergenceReason },
}

impl<S: Copy> SolverOutcome<S> {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            SolverOutcome::Converged { .. } => OutcomeKind::Converged,
            SolverOutcome::MaxIterationsExceeded { .. } => OutcomeKind::MaxIterationsExceeded,
            SolverOutcome::Diverged { .. } => OutcomeKind::Diverged,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, SolverOutcome::Converged { .. })
    }

    /// Converged state, if any
    pub fn converged_state(&self) -> Option<S> {
        match self {
            SolverOutcome::Converged { state, .. } => Some(*state),
            _ => None,
        }
    }

    /// Best available state: the converged one or the last one reached
    pub fn state(&self) -> Option<S> {
        match self {
            SolverOutcome::Converged { state, .. } => Some(*state),
            SolverOutcome::MaxIterationsExceeded { last_state } => Some(*last_state),
            SolverOutcome::Diverged { .. } => None,
        }
    }
}

/// Outcome discriminant without the state payload, for events and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutcomeKind {
    Converged,
    MaxIterationsExceeded,
    Diverged,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeKind::Converged => write!(f, "converged"),
            OutcomeKind::MaxIterationsExceeded => write!(f, "max iterations exceeded"),
            OutcomeKind::Diverged => write!(f, "diverged"),
        }
    }
}
