//! Core traits for the dichotomy workspace.
//!
//! This crate defines the two seams the rest of the workspace builds on:
//!
//! - [`Function`]: a fallible scalar function `f64 -> f64`
//! - [`Observer`]: receives solver events as they happen
//!
//! Expression compilers produce [`Function`]s, solvers consume them, and
//! observers watch the solver work.

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
