// ============================================================================
// Solver State Interface
// Capabilities a value needs to be iterated by the solver
// ============================================================================

use crate::numeric::{Scalar, Vec3};
use std::fmt::Debug;

/// State that a [`Solver`](crate::engine::Solver) can iterate on.
/// Implementations: Scalar (root finding), Vec3 (vector integration).
pub trait SolverState: Copy + Debug + Send + Sync {
    /// Magnitude of change from `previous` to `self`, used as the
    /// convergence signal
    fn residual(&self, previous: &Self) -> Scalar;

    /// False if any component is NaN or infinite
    fn is_finite(&self) -> bool;
}

impl SolverState for Scalar {
    #[inline]
    fn residual(&self, previous: &Self) -> Scalar {
        (*self - *previous).abs()
    }

    #[inline]
    fn is_finite(&self) -> bool {
        Scalar::is_finite(*self)
    }
}

impl SolverState for Vec3 {
    #[inline]
    fn residual(&self, previous: &Self) -> Scalar {
        (*self - *previous).norm()
    }

    #[inline]
    fn is_finite(&self) -> bool {
        Vec3::is_finite(*self)
    }
}
