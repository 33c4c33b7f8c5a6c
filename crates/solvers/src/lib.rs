//! Root finding for scalar [`Function`]s.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed interval
//!
//! # Features
//!
//! - `serde`: derives `Serialize` for solver events and solutions.
//!
//! [`Function`]: dichotomy_core::Function

pub mod bisection;
