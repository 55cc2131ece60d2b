// ============================================================================
// Numeric Module
// Scalar and vector math primitives
// ============================================================================
//
// This module provides:
// - Scalar: f64 wrapper with domain-checked elementary functions
// - Vec3: three-component vector with dot/cross/norm/normalize
// - Constants: immutable table of named constants
// - Free functions (sin, cos, ..., pow) mirroring the Scalar methods
// - MathError: error type for out-of-domain input and bad lookups
//
// Design principles:
// - IEEE-754 semantics everywhere, no silent clamping
// - Restricted-domain functions return Result (no panics, no hidden NaN)
// - Value types only, safe to share across threads by copy

mod constants;
mod errors;
mod scalar;
mod vec3;

pub mod functions;

pub use constants::Constants;
pub use errors::{MathError, MathResult};
pub use scalar::Scalar;
pub use vec3::Vec3;
