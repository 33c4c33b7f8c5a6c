//! Console front end for the dichotomy bisection solver.
//!
//! The binary reads an expression in `x`, a bracket, and a precision, either
//! from flags or interactively, then prints the bisection trace and the root.
//!
//! Everything except process setup lives here so it can be driven from tests
//! with in-memory readers and writers.

mod args;
mod input;
mod report;
mod run;

pub use args::Args;
pub use input::{InputError, Prompter, check_bound, check_epsilon, parse_bound, parse_epsilon};
pub use report::Report;
pub use run::run;
