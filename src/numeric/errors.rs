// ============================================================================
// Math Errors
// Error types for scalar, vector and constant-table operations
// ============================================================================

use std::fmt;

/// Errors that can occur during scalar and vector math.
///
/// Solver non-convergence is not an error: it is reported through
/// [`SolverOutcome`](crate::engine::SolverOutcome).
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// Input lies outside the real-valued domain of an elementary function
    Domain {
        function: &'static str,
        value: f64,
    },
    /// Attempted to normalize a zero-length vector
    DegenerateVector,
    /// Constant lookup with a name that is not in the table
    UnknownConstant(String),
    /// Argument rejected before any computation took place
    InvalidArgument { reason: &'static str },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::Domain { function, value } => {
                write!(f, "domain error: {function} is undefined for {value}")
            },
            MathError::DegenerateVector => {
                write!(f, "degenerate vector: cannot normalize a zero-length vector")
            },
            MathError::UnknownConstant(name) => write!(f, "unknown constant: {name:?}"),
            MathError::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for MathError {}

/// Result type alias for math operations
pub type MathResult<T> = Result<T, MathError>;
