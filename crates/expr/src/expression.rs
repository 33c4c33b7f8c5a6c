use std::{fmt, str::FromStr};

use dichotomy_core::Function;

use crate::{
    builtins::{self, Binary, Fault, Unary},
    error::{CompileError, EvalError, EvalErrorKind},
    parser,
};

/// Compiles an expression in the variable `x`.
///
/// Syntax, names, and call arity are all checked here, so a successfully
/// compiled expression can only fail at evaluation time for reasons that
/// depend on `x` (a domain error, division by zero, or overflow).
///
/// # Errors
///
/// Returns a [`CompileError`] if the expression is malformed or references a
/// name outside the allow-list.
pub fn compile(source: &str) -> Result<Expression, CompileError> {
    let root = parser::parse(source)?;
    tracing::debug!(expression = source, "compiled expression");
    Ok(Expression {
        source: source.to_owned(),
        root,
    })
}

/// A compiled single-variable expression.
///
/// Evaluation is a pure function of `x`: the expression is immutable and can
/// be shared across threads and reused for any number of solves.
#[derive(Debug, Clone)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    /// Returns the source text the expression was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] carrying `x` if any step of the evaluation is
    /// undefined over the reals or does not produce a finite value.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.root.eval(x).map_err(|kind| EvalError { x, kind })
    }
}

impl Function for Expression {
    type Error = EvalError;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        self.eval(x)
    }
}

impl FromStr for Expression {
    type Err = CompileError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        compile(source)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// A syntax tree node with all names resolved against the allow-list.
#[derive(Debug, Clone)]
pub(crate) enum Node {
    Number(f64),
    Variable,
    Neg(Box<Node>),
    /// A left-associative run of operators at one precedence level.
    Chain {
        first: Box<Node>,
        rest: Vec<(BinaryOp, Node)>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Call1 {
        name: &'static str,
        apply: Unary,
        arg: Box<Node>,
    },
    Call2 {
        name: &'static str,
        apply: Binary,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
}

impl Node {
    pub(crate) fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Self {
        Node::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub(crate) fn chain(first: Node, rest: Vec<(BinaryOp, Node)>) -> Self {
        if rest.is_empty() {
            first
        } else {
            Node::Chain {
                first: Box::new(first),
                rest,
            }
        }
    }

    fn eval(&self, x: f64) -> Result<f64, EvalErrorKind> {
        let value = match self {
            Node::Number(value) => *value,
            Node::Variable => x,
            Node::Neg(operand) => -operand.eval(x)?,
            Node::Chain { first, rest } => {
                let mut acc = first.eval(x)?;
                for (op, operand) in rest {
                    acc = finite(apply_binary(*op, acc, operand.eval(x)?)?)?;
                }
                acc
            }
            Node::Binary { op, lhs, rhs } => {
                let lhs = lhs.eval(x)?;
                let rhs = rhs.eval(x)?;
                apply_binary(*op, lhs, rhs)?
            }
            Node::Call1 { name, apply, arg } => {
                let arg = arg.eval(x)?;
                apply(arg).map_err(|fault| tag(fault, *name))?
            }
            Node::Call2 {
                name,
                apply,
                lhs,
                rhs,
            } => {
                let lhs = lhs.eval(x)?;
                let rhs = rhs.eval(x)?;
                apply(lhs, rhs).map_err(|fault| tag(fault, *name))?
            }
        };
        finite(value)
    }
}

fn apply_binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64, EvalErrorKind> {
    match op {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Sub => Ok(lhs - rhs),
        BinaryOp::Mul => Ok(lhs * rhs),
        BinaryOp::Div => {
            #[allow(clippy::float_cmp)]
            if rhs == 0.0 {
                return Err(EvalErrorKind::DivisionByZero);
            }
            Ok(lhs / rhs)
        }
        BinaryOp::Pow => builtins::pow(lhs, rhs).map_err(|fault| tag(fault, "pow")),
    }
}

fn tag(fault: Fault, function: &'static str) -> EvalErrorKind {
    match fault {
        Fault::Domain(arg) => EvalErrorKind::Domain { function, arg },
        Fault::DivisionByZero => EvalErrorKind::DivisionByZero,
        Fault::ComplexPower { base, exponent } => EvalErrorKind::ComplexPower { base, exponent },
    }
}

fn finite(value: f64) -> Result<f64, EvalErrorKind> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalErrorKind::NonFinite { value })
    }
}
