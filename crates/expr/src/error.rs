use thiserror::Error;

/// Errors that can occur when compiling an expression.
///
/// Offsets are byte offsets into the source text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompileError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character `{ch}` at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("invalid number `{text}` at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("unexpected {found} at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown name `{name}` at offset {offset}")]
    UnknownName { name: String, offset: usize },

    #[error("`{name}` at offset {offset} is not a function")]
    NotAFunction { name: String, offset: usize },

    #[error("function `{name}` at offset {offset} must be called with arguments")]
    MissingCall { name: String, offset: usize },

    #[error("`{name}` expects {expected} argument(s), got {found}")]
    Arity {
        name: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("expression nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
}

/// The reason an evaluation failed.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EvalErrorKind {
    #[error("division by zero")]
    DivisionByZero,

    #[error("{function} is undefined for argument {arg}")]
    Domain { function: &'static str, arg: f64 },

    #[error("negative base {base} raised to non-integer power {exponent}")]
    ComplexPower { base: f64, exponent: f64 },

    #[error("result is not finite ({value})")]
    NonFinite { value: f64 },
}

/// An evaluation failure, tagged with the `x` that triggered it.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("failed to evaluate f(x) at x = {x}: {kind}")]
pub struct EvalError {
    pub x: f64,
    pub kind: EvalErrorKind,
}
