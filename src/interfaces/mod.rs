// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod observer;
mod solver_state;
mod step_function;

pub use observer::{LoggingObserver, NoOpObserver, RecordingObserver, SolverEvent, SolverObserver};
pub use solver_state::SolverState;
pub use step_function::StepFunction;
