// ============================================================================
// CalCulus Library
// Scalar and vector math with a generic iterative solver
// ============================================================================

//! # CalCulus
//!
//! Numeric primitives and an iterative solver engine.
//!
//! ## Features
//!
//! - **`Scalar`**: `f64` wrapper whose restricted-domain functions
//!   (`asin`, `acos`, `log`, `log10`, `sqrt`, `cbrt`) fail loudly instead of
//!   returning NaN
//! - **`Vec3`**: three-component vector with dot, cross, norm and normalize
//! - **`Constants`**: immutable table of named mathematical and physical
//!   constants
//! - **`Solver`**: iterative engine with pluggable step functions (Newton
//!   root finding, Euler and RK4 integration, or any closure) and explicit
//!   convergence, exhaustion and divergence outcomes
//! - **Quadrature**: composite Simpson integration
//!
//! ## Example
//!
//! ```rust
//! use calculus::prelude::*;
//! use calculus::{sqrt, Constants};
//!
//! // Elementary functions with domain checks
//! assert_eq!(sqrt(16.0)?.value(), 4.0);
//! assert!(sqrt(-1.0).is_err());
//!
//! // Vectors
//! let up = Vec3::UNIT_X.cross(Vec3::UNIT_Y);
//! assert_eq!(up, Vec3::UNIT_Z);
//!
//! // Newton iteration for sqrt(2)
//! let mut solver = Solver::new(Scalar::new(1.0), 1e-9, 100, newton_step_for_sqrt(2.0));
//! match solver.run() {
//!     SolverOutcome::Converged { state, iterations } => {
//!         println!("sqrt(2) = {state} after {iterations} iterations");
//!     },
//!     other => println!("no root: {other:?}"),
//! }
//!
//! let tau = Constants::get("tau")?;
//! assert_eq!(tau, Constants::PI * Scalar::new(2.0));
//! # Ok::<(), calculus::MathError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Public surface, enumerated explicitly
pub use engine::Solver;
pub use numeric::functions::{
    abs, acos, asin, atan, cbrt, cos, cosh, exp, log, log10, pow, sin, sinh, sqrt, tan, tanh,
};
pub use numeric::{Constants, MathError, MathResult, Scalar, Vec3};

/// Library version, fixed at build time from the package metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Names making up the public math surface
pub const EXPORTS: &[&str] = &[
    "Scalar", "Vec3", "Solver", "Constants", "sin", "cos", "tan", "asin", "acos", "atan", "sinh",
    "cosh", "tanh", "exp", "log", "log10", "sqrt", "cbrt", "abs", "pow",
];

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{DivergenceReason, OutcomeKind, RunId, SolverConfig, SolverOutcome};
    pub use crate::engine::{
        create_from_config, integrate, newton_step_for_sqrt, EulerStep, NewtonStep,
        RungeKutta4Step, Solver, SolverBuilder, SqrtNewtonStep,
    };
    pub use crate::interfaces::{
        LoggingObserver, NoOpObserver, RecordingObserver, SolverEvent, SolverObserver,
        SolverState, StepFunction,
    };
    pub use crate::numeric::{Constants, MathError, MathResult, Scalar, Vec3};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_version_and_exports() {
        assert_eq!(crate::VERSION, "0.2.0");
        assert_eq!(crate::EXPORTS.len(), 20);
        assert!(crate::EXPORTS.contains(&"Solver"));
        assert!(crate::EXPORTS.contains(&"log10"));
    }

    #[test]
    fn test_end_to_end_projectile_apex() {
        // Time to apex of a projectile launched at 45° with 20 m/s:
        // root of v_z(t) = v sin(θ) - g t
        let g = Constants::get("g").unwrap();
        let pi = Constants::get("pi").unwrap();
        let vz = Scalar::new(20.0) * (pi / Scalar::new(4.0)).sin();

        let step = NewtonStep::new(move |t: Scalar| vz - g * t, move |_t: Scalar| -g);
        let mut solver = SolverBuilder::new(Scalar::ZERO)
            .tolerance(1e-12)
            .build(step)
            .unwrap();

        let apex_time = solver.run().converged_state().unwrap();
        assert!(apex_time.approx_eq(vz / g, 1e-12));

        // Height at apex from Simpson integration of v_z(t)
        let height = integrate(|t| vz - g * t, 0.0, apex_time, 2).unwrap();
        let expected = vz * vz / (Scalar::new(2.0) * g);
        assert!(height.approx_eq(expected, 1e-9));
    }

    #[test]
    fn test_vector_solve_with_unit_direction() {
        // Relax toward a target point; the remaining offset points at it
        let target = Vec3::new(3.0, 4.0, 12.0);
        let step = EulerStep::new(move |p: Vec3| target - p, 0.5).unwrap();
        let outcome = Solver::new(Vec3::ZERO, 1e-10, 200, step).run();

        let end = outcome.converged_state().unwrap();
        assert!(end.approx_eq(target, 1e-9));
        assert!(target
            .normalize()
            .unwrap()
            .approx_eq(Vec3::new(3.0 / 13.0, 4.0 / 13.0, 12.0 / 13.0), 1e-15));
    }

    #[test]
    fn test_independent_solvers_in_parallel() {
        let handles: Vec<_> = (1..=4)
            .map(|n| {
                thread::spawn(move || {
                    let observer = Arc::new(RecordingObserver::new());
                    let mut solver = Solver::new(
                        Scalar::ONE,
                        1e-12,
                        100,
                        newton_step_for_sqrt(n as f64 * n as f64),
                    )
                    .with_observer(observer.clone());
                    (n, solver.run(), observer.len())
                })
            })
            .collect();

        for handle in handles {
            let (n, outcome, events) = handle.join().unwrap();
            let root = outcome.converged_state().unwrap();
            assert!(root.approx_eq(Scalar::new(n as f64), 1e-12));
            assert!(events >= 3);
        }
    }

    #[test]
    fn test_diverged_is_never_converged_for_any_tolerance() {
        for tolerance in [1e-12, 1.0, 1e300, f64::INFINITY] {
            let mut solver = Solver::new(Scalar::ONE, tolerance, 10, |_: Scalar| Scalar::NAN);
            assert_eq!(solver.run().kind(), OutcomeKind::Diverged);
        }
    }
}
