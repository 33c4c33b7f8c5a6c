/// The test that ended a converged solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Criterion {
    /// A bracket endpoint is an exact root.
    ExactRoot,
    /// `|f(c)|` dropped below epsilon.
    Residual,
    /// The bracket half-width dropped below epsilon.
    HalfWidth,
}

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// Converged according to the configured precision.
    Converged(Criterion),
    /// Reached the iteration limit without converging.
    ///
    /// The solution is the midpoint of the final bracket, a best-effort
    /// estimate rather than a failure.
    MaxIters,
}

impl Status {
    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Status::Converged(_))
    }
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Estimate of the root.
    pub x: f64,
    /// `f(x)`, when the solver evaluated the returned point.
    ///
    /// `None` after [`Status::MaxIters`], where `x` is the midpoint of the
    /// final bracket and was never evaluated.
    pub residual: Option<f64>,
    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn converged(criterion: Criterion, x: f64, residual: f64, iters: usize) -> Self {
        Self {
            status: Status::Converged(criterion),
            x,
            residual: Some(residual),
            iters,
        }
    }
}
