use std::fmt;

use crate::error::CompileError;

/// A lexical token with the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) offset: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    /// An identifier, already lowercased.
    Name(String),
    Plus,
    Minus,
    Star,
    Slash,
    /// Exponentiation, written `^` or `**`.
    Caret,
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "number {value}"),
            TokenKind::Name(name) => write!(f, "name `{name}`"),
            TokenKind::Plus => f.write_str("`+`"),
            TokenKind::Minus => f.write_str("`-`"),
            TokenKind::Star => f.write_str("`*`"),
            TokenKind::Slash => f.write_str("`/`"),
            TokenKind::Caret => f.write_str("`^`"),
            TokenKind::LParen => f.write_str("`(`"),
            TokenKind::RParen => f.write_str("`)`"),
            TokenKind::Comma => f.write_str("`,`"),
        }
    }
}

/// Splits an expression into tokens.
///
/// # Errors
///
/// Returns an error on characters outside the grammar and on malformed or
/// non-finite numeric literals.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, CompileError> {
    Lexer::new(source).collect()
}

struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    fn skip_whitespace(&mut self) {
        self.bump_while(char::is_whitespace);
    }

    fn number(&mut self, start: usize) -> Result<TokenKind, CompileError> {
        // Stray extra dots are swallowed here and rejected by the parse below.
        self.bump_while(|c| c.is_ascii_digit() || c == '.');

        // The exponent is only part of the literal if digits follow, so that
        // `2e` stays a number followed by the name `e`.
        if matches!(self.peek(), Some('e' | 'E')) {
            let rest = &self.source[self.pos + 1..];
            let digits = rest.strip_prefix(['+', '-']).unwrap_or(rest);
            if digits.starts_with(|c: char| c.is_ascii_digit()) {
                self.bump();
                if matches!(self.peek(), Some('+' | '-')) {
                    self.bump();
                }
                self.bump_while(|c| c.is_ascii_digit());
            }
        }

        let text = &self.source[start..self.pos];
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(TokenKind::Number(value)),
            _ => Err(CompileError::InvalidNumber {
                text: text.to_owned(),
                offset: start,
            }),
        }
    }

    fn name(&mut self, start: usize) -> TokenKind {
        self.bump_while(|c| c.is_ascii_alphanumeric() || c == '_');
        TokenKind::Name(self.source[start..self.pos].to_ascii_lowercase())
    }

    fn next_token(&mut self) -> Option<Result<Token, CompileError>> {
        self.skip_whitespace();

        let offset = self.pos;
        let c = self.peek()?;

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' if self.peek_second() == Some('*') => {
                self.bump();
                TokenKind::Caret
            }
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            c if c.is_ascii_digit() || c == '.' => {
                return Some(self.number(offset).map(|kind| Token { kind, offset }));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let kind = self.name(offset);
                return Some(Ok(Token { kind, offset }));
            }
            ch => return Some(Err(CompileError::UnexpectedChar { ch, offset })),
        };

        self.bump();
        Some(Ok(Token { kind, offset }))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
