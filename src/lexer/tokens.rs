use std::fmt::Display;

use crate::Span;

/// Token categories, declared in the priority order the lexer tries them.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    Def,
    End,

    Identifier,
    Integer,

    OpenParen,
    CloseParen,
    Comma,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    /// Whether the token's text matters beyond its kind.
    pub fn carries_value(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier | TokenKind::Integer)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.carries_value() {
            write!(f, "{}({})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
