use dichotomy_solvers::bisection::{Event, Solution, Status};
use serde::Serialize;

/// Machine-readable summary of a solve, printed with `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<'a> {
    pub expression: &'a str,
    pub root: f64,
    /// `f(root)`, evaluated after the solve.
    pub residual: f64,
    pub iters: usize,
    pub status: Status,
    pub iterations: Vec<Event>,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(expression: &'a str, solution: &Solution, residual: f64, iterations: Vec<Event>) -> Self {
        Self {
            expression,
            root: solution.x,
            residual,
            iters: solution.iters,
            status: solution.status,
            iterations,
        }
    }
}
