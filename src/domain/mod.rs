// ============================================================================
// Domain Module
// Contains solver configuration and run value objects
// ============================================================================

pub mod config;
mod run;

pub use config::SolverConfig;
pub use run::{DivergenceReason, OutcomeKind, RunId, SolverOutcome};
