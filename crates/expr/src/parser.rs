//! Recursive-descent parser for the expression grammar.
//!
//! Precedence, lowest to highest:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('-' | '+') unary | power
//! power   := primary ('^' unary)?
//! primary := NUMBER | NAME | NAME '(' args ')' | '(' expr ')'
//! ```
//!
//! Exponentiation is right-associative and binds tighter than a leading
//! minus, so `-x^2` is `-(x^2)` while `2^-1` is `0.5`.

use crate::{
    builtins::{self, Kind},
    error::CompileError,
    expression::{BinaryOp, Node},
    lexer::{Token, TokenKind, tokenize},
};

/// Maximum nesting of parentheses, calls and unary operators.
const MAX_DEPTH: usize = 256;

/// Parses an expression into a syntax tree with every name resolved.
///
/// # Errors
///
/// Returns a [`CompileError`] for lexical errors, syntax errors, unknown
/// names, and calls with the wrong number of arguments.
pub(crate) fn parse(source: &str) -> Result<Node, CompileError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(CompileError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
    };
    let node = parser.expr()?;

    match parser.peek() {
        None => Ok(node),
        Some(token) => Err(unexpected(token)),
    }
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&'t TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    fn next(&mut self) -> Result<&'t Token, CompileError> {
        let token = self.peek().ok_or(CompileError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(token)
    }

    /// Consumes the next token if it has the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), CompileError> {
        let token = self.next()?;
        if &token.kind == kind {
            Ok(())
        } else {
            Err(unexpected(token))
        }
    }

    /// Runs `f` one nesting level deeper.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, CompileError>,
    ) -> Result<T, CompileError> {
        if self.depth >= MAX_DEPTH {
            return Err(CompileError::TooDeep { limit: MAX_DEPTH });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    // Runs of `+ -` and `* /` are kept flat rather than nested left-deep, so
    // tree height stays bounded by `MAX_DEPTH` however long the run is.
    fn expr(&mut self) -> Result<Node, CompileError> {
        let first = self.term()?;
        let mut rest = Vec::new();
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinaryOp::Add,
                Some(TokenKind::Minus) => BinaryOp::Sub,
                _ => return Ok(Node::chain(first, rest)),
            };
            self.pos += 1;
            rest.push((op, self.term()?));
        }
    }

    fn term(&mut self) -> Result<Node, CompileError> {
        let first = self.unary()?;
        let mut rest = Vec::new();
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => BinaryOp::Mul,
                Some(TokenKind::Slash) => BinaryOp::Div,
                _ => return Ok(Node::chain(first, rest)),
            };
            self.pos += 1;
            rest.push((op, self.unary()?));
        }
    }

    fn unary(&mut self) -> Result<Node, CompileError> {
        if self.eat(&TokenKind::Minus) {
            let operand = self.nested(Self::unary)?;
            return Ok(Node::Neg(Box::new(operand)));
        }
        if self.eat(&TokenKind::Plus) {
            return self.nested(Self::unary);
        }
        self.power()
    }

    fn power(&mut self) -> Result<Node, CompileError> {
        let base = self.primary()?;
        if self.eat(&TokenKind::Caret) {
            let exponent = self.nested(Self::unary)?;
            return Ok(Node::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, CompileError> {
        let token = self.next()?;
        match &token.kind {
            TokenKind::Number(value) => Ok(Node::Number(*value)),
            TokenKind::Name(name) => self.name(name, token.offset),
            TokenKind::LParen => {
                let inner = self.nested(Self::expr)?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(unexpected(token)),
        }
    }

    /// Resolves a name against the allow-list, parsing a call if one follows.
    fn name(&mut self, name: &str, offset: usize) -> Result<Node, CompileError> {
        let is_call = self.peek_kind() == Some(&TokenKind::LParen);

        if name == "x" {
            if is_call {
                return Err(CompileError::NotAFunction {
                    name: name.to_owned(),
                    offset,
                });
            }
            return Ok(Node::Variable);
        }

        let builtin = builtins::lookup(name).ok_or_else(|| CompileError::UnknownName {
            name: name.to_owned(),
            offset,
        })?;

        match (builtin.kind, is_call) {
            (Kind::Constant(value), false) => Ok(Node::Number(value)),
            (Kind::Constant(_), true) => Err(CompileError::NotAFunction {
                name: name.to_owned(),
                offset,
            }),
            (_, false) => Err(CompileError::MissingCall {
                name: name.to_owned(),
                offset,
            }),
            (kind, true) => {
                self.pos += 1;
                let mut args = self.nested(Self::args)?.into_iter();
                let arity_error = CompileError::Arity {
                    name: builtin.name,
                    expected: builtin.expected_args(),
                    found: args.len(),
                };
                match (kind, args.next(), args.next(), args.next()) {
                    (Kind::Unary(apply) | Kind::UnaryOrBinary(apply, _), Some(arg), None, None) => {
                        Ok(Node::Call1 {
                            name: builtin.name,
                            apply,
                            arg: Box::new(arg),
                        })
                    }
                    (
                        Kind::Binary(apply) | Kind::UnaryOrBinary(_, apply),
                        Some(lhs),
                        Some(rhs),
                        None,
                    ) => Ok(Node::Call2 {
                        name: builtin.name,
                        apply,
                        lhs: Box::new(lhs),
                        rhs: Box::new(rhs),
                    }),
                    _ => Err(arity_error),
                }
            }
        }
    }

    /// Parses a parenthesized, comma-separated argument list after `(`.
    fn args(&mut self) -> Result<Vec<Node>, CompileError> {
        let mut args = Vec::new();
        if self.eat(&TokenKind::RParen) {
            return Ok(args);
        }
        loop {
            args.push(self.expr()?);
            if self.eat(&TokenKind::Comma) {
                continue;
            }
            self.expect(&TokenKind::RParen)?;
            return Ok(args);
        }
    }
}

fn unexpected(token: &Token) -> CompileError {
    CompileError::UnexpectedToken {
        found: token.kind.to_string(),
        offset: token.offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(source: &str) -> CompileError {
        parse(source).expect_err("should not parse")
    }

    #[test]
    fn accepts_well_formed_expressions() {
        for source in [
            "x",
            "-x",
            "+x",
            "x^2 - 4",
            "x**3 - 2*x - 5",
            "sin(x) - 0.5",
            "log(x, 2)",
            "atan2(x, 1) + pi",
            "((x))",
            "2^-x",
            "--x",
            "exp(-x^2) * cos(2*pi*x)",
        ] {
            assert!(parse(source).is_ok(), "{source}");
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            error("bogus_fn(x)"),
            CompileError::UnknownName {
                name: "bogus_fn".into(),
                offset: 0,
            }
        );
        assert!(matches!(error("x + y"), CompileError::UnknownName { .. }));
        assert!(matches!(
            error("__import__(x)"),
            CompileError::UnknownName { .. }
        ));
    }

    #[test]
    fn rejects_calling_values() {
        assert!(matches!(error("pi(2)"), CompileError::NotAFunction { .. }));
        assert!(matches!(error("x(2)"), CompileError::NotAFunction { .. }));
    }

    #[test]
    fn rejects_bare_functions() {
        assert!(matches!(error("sin + 1"), CompileError::MissingCall { .. }));
    }

    #[test]
    fn checks_arity() {
        assert_eq!(
            error("sin(x, 1)"),
            CompileError::Arity {
                name: "sin",
                expected: "1",
                found: 2,
            }
        );
        assert!(matches!(error("pow(x)"), CompileError::Arity { found: 1, .. }));
        assert!(matches!(error("log()"), CompileError::Arity { found: 0, .. }));
        assert!(matches!(
            error("log(x, 2, 3)"),
            CompileError::Arity { found: 3, .. }
        ));
    }

    #[test]
    fn reports_syntax_errors() {
        assert_eq!(error(""), CompileError::Empty);
        assert_eq!(error("   "), CompileError::Empty);
        assert_eq!(error("x +"), CompileError::UnexpectedEnd);
        assert_eq!(error("(x"), CompileError::UnexpectedEnd);
        assert!(matches!(
            error("x)"),
            CompileError::UnexpectedToken { offset: 1, .. }
        ));
        assert!(matches!(
            error("2 x"),
            CompileError::UnexpectedToken { offset: 2, .. }
        ));
        assert!(matches!(error("* x"), CompileError::UnexpectedToken { .. }));
        assert!(matches!(
            error("sin(x,)"),
            CompileError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn limits_nesting() {
        let source = format!("{}x{}", "(".repeat(1000), ")".repeat(1000));
        assert_eq!(error(&source), CompileError::TooDeep { limit: MAX_DEPTH });
    }

    #[test]
    fn long_operator_runs_stay_flat() {
        let source = vec!["x"; 100_000].join(" + ");
        match parse(&source).expect("should parse") {
            Node::Chain { first, rest } => {
                assert!(matches!(*first, Node::Variable));
                assert_eq!(rest.len(), 99_999);
                assert!(rest.iter().all(|(op, node)| {
                    *op == BinaryOp::Add && matches!(node, Node::Variable)
                }));
            }
            other => panic!("expected a flat chain, got {other:?}"),
        }
    }
}
