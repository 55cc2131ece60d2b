// ============================================================================
// Engine Module
// Contains the iterative solver, its step functions and quadrature
// ============================================================================

mod newton;
mod ode;
mod quadrature;
mod solver;

pub mod factory;

pub use crate::domain::{DivergenceReason, OutcomeKind, SolverOutcome};
pub use factory::{create_from_config, SolverBuilder};
pub use newton::{newton_step_for_sqrt, NewtonStep, SqrtNewtonStep};
pub use ode::{EulerStep, RungeKutta4Step};
pub use quadrature::integrate;
pub use solver::Solver;
