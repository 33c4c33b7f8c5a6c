/// Iteration record emitted by the bisection solver.
///
/// One event is emitted per midpoint evaluation, before the termination test
/// for that iteration, so the final event describes the returned midpoint when
/// the solver converges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Bracket searched in this iteration, as `[a, b]`.
    pub bracket: [f64; 2],
    /// Midpoint `c` of the bracket.
    pub mid: f64,
    /// Function value `f(c)` at the midpoint.
    pub residual: f64,
    /// Half the bracket width, `(b - a) / 2`.
    pub half_width: f64,
}

impl Event {
    /// Returns the left bound `a`.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.bracket[0]
    }

    /// Returns the right bound `b`.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.bracket[1]
    }
}
