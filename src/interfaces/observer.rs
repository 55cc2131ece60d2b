// ============================================================================
// Solver Observer Interface
// Defines the contract for handling solver lifecycle events
// ============================================================================

use crate::domain::{OutcomeKind, RunId};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a solver run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverEvent {
    /// Solver started iterating
    Started {
        run_id: RunId,
        step: String,
        tolerance: f64,
        max_iterations: usize,
        timestamp: DateTime<Utc>,
    },

    /// One iteration applied; the residual is NaN or infinite on the step
    /// that diverges
    Stepped {
        run_id: RunId,
        iteration: usize,
        residual: f64,
        timestamp: DateTime<Utc>,
    },

    /// Solver reached a terminal outcome
    Finished {
        run_id: RunId,
        outcome: OutcomeKind,
        iterations: usize,
        timestamp: DateTime<Utc>,
    },
}

impl SolverEvent {
    pub fn run_id(&self) -> RunId {
        match self {
            SolverEvent::Started { run_id, .. }
            | SolverEvent::Stepped { run_id, .. }
            | SolverEvent::Finished { run_id, .. } => *run_id,
        }
    }
}

/// Observer trait for processing solver events
/// Implementations can handle logging, metrics, progress reporting, etc.
pub trait SolverObserver: Send + Sync {
    /// Handle a solver event
    fn on_event(&self, event: SolverEvent);
}

/// No-op observer (default)
pub struct NoOpObserver;

impl SolverObserver for NoOpObserver {
    fn on_event(&self, _event: SolverEvent) {}
}

/// Logging observer
pub struct LoggingObserver;

impl SolverObserver for LoggingObserver {
    fn on_event(&self, event: SolverEvent) {
        tracing::debug!("Solver event: {:?}", event);
    }
}

/// Observer that keeps every event in memory, for tests and diagnostics
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SolverEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far
    pub fn events(&self) -> Vec<SolverEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl SolverObserver for RecordingObserver {
    fn on_event(&self, event: SolverEvent) {
        self.events.lock().push(event);
    }
}
