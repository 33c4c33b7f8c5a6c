//! Compiles textual math expressions in one variable into scalar functions.
//!
//! An expression such as `"sin(x) - 0.5"` or `"x^3 - 2*x - 5"` is parsed by a
//! recursive-descent parser into a syntax tree, then interpreted on demand.
//! Every name in an expression must come from a fixed allow-list (see
//! [`builtins`]); anything else is rejected at compile time, so an expression
//! can never reach beyond arithmetic and the listed math functions.
//!
//! ```
//! use dichotomy_expr::compile;
//!
//! let f = compile("x^2 - 4").unwrap();
//! assert_eq!(f.eval(2.0).unwrap(), 0.0);
//! assert!(compile("bogus_fn(x)").is_err());
//! ```
//!
//! The compiled [`Expression`] implements [`dichotomy_core::Function`] and
//! holds no mutable state.

pub mod builtins;

mod error;
mod expression;
mod lexer;
mod parser;

pub use error::{CompileError, EvalError, EvalErrorKind};
pub use expression::{Expression, compile};
