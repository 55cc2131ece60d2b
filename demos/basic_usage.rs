// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with logging:
//   cargo run --example basic_usage --features logging

use calculus::prelude::*;
use calculus::{cos, pow, sin, sqrt};
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    calculus::utils::init_logging(tracing::Level::DEBUG)?;

    println!("=== CalCulus {} ===\n", calculus::VERSION);

    // Elementary functions
    println!("sin(pi/6)  = {}", sin(Constants::PI / Scalar::new(6.0)));
    println!("cos(0)     = {}", cos(0.0));
    println!("2^10       = {}", pow(2.0, 10.0));
    println!("sqrt(2)    = {}", sqrt(2.0)?);
    match sqrt(-1.0) {
        Ok(value) => println!("sqrt(-1)   = {value}"),
        Err(err) => println!("sqrt(-1)   -> {err}"),
    }

    // Vectors
    println!("\n=== Vectors ===");
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    println!("a . b      = {}", a.dot(b));
    println!("a x b      = {}", a.cross(b));
    println!("|a|        = {}", a.norm());
    println!("a / |a|    = {}", a.normalize()?);
    if let Err(err) = Vec3::ZERO.normalize() {
        println!("0 / |0|    -> {err}");
    }

    // Constants
    println!("\n=== Constants ===");
    for name in Constants::names() {
        println!("{name:>6} = {:e}", Constants::get(name)?.value());
    }

    // Root finding
    println!("\n=== Newton sqrt(2) ===");
    let observer = Arc::new(RecordingObserver::new());
    let mut solver = SolverBuilder::new(Scalar::new(1.0))
        .tolerance(1e-12)
        .record_history()
        .with_observer(observer.clone())
        .build(newton_step_for_sqrt(2.0))?;

    match solver.run() {
        SolverOutcome::Converged { state, iterations } => {
            println!("converged to {state} after {iterations} iterations");
        },
        other => println!("did not converge: {other:?}"),
    }
    println!("residuals: {:?}", solver.residual_history());
    println!("events recorded: {}", observer.len());

    // Vector integration to equilibrium
    println!("\n=== RK4 damped decay ===");
    let step = RungeKutta4Step::new(|y: Vec3| -y, 0.1)?;
    let mut solver = Solver::new(Vec3::new(1.0, -2.0, 0.5), 1e-10, 1_000, step)
        .with_observer(Arc::new(LoggingObserver));
    println!("outcome: {:?}", solver.run());

    // Divergence
    println!("\n=== Divergence ===");
    let mut solver = Solver::new(Scalar::ZERO, 1e-9, 10, newton_step_for_sqrt(2.0));
    println!("start at 0: {:?}", solver.run());

    // Quadrature
    println!("\n=== Simpson ===");
    let area = integrate(Scalar::sin, 0.0, Constants::PI, 100)?;
    println!("integral of sin over [0, pi] = {area}");

    Ok(())
}
