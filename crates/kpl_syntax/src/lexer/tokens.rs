//! Token types for the KPL scanner.

use std::fmt;

use crate::span::{Position, Span};
use kpl_core::lang::keywords::{self, KeywordId};
use kpl_core::lang::operators::{self, OperatorId};
use kpl_core::lang::punctuation::{self, PunctuationId};

/// The kind tag of a token.
///
/// Keyword, operator and punctuation identity is carried by the `kpl_core` registry ids, so the
/// parser matches on ids rather than on spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),
    Ident,
    Number,
    Char,
    Eof,
}

impl TokenKind {
    /// Name used in token traces (`KW_PROGRAM`, `SB_SEMICOLON`, `TK_IDENT`, ...).
    pub fn trace_name(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("KW_{}", keywords::as_str(*id)),
            TokenKind::Operator(id) => operators::trace_name(*id).to_string(),
            TokenKind::Punctuation(id) => punctuation::trace_name(*id).to_string(),
            TokenKind::Ident => "TK_IDENT".to_string(),
            TokenKind::Number => "TK_NUMBER".to_string(),
            TokenKind::Char => "TK_CHAR".to_string(),
            TokenKind::Eof => "TK_EOF".to_string(),
        }
    }
}

/// Human-readable description, used by "Missing ..." diagnostics.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "keyword {}", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Ident => write!(f, "an identifier"),
            TokenKind::Number => write!(f, "a number"),
            TokenKind::Char => write!(f, "a constant char"),
            TokenKind::Eof => write!(f, "end of file"),
        }
    }
}

/// Literal payload of a token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenValue {
    #[default]
    None,
    Ident(String),
    Number(i64),
    Char(char),
}

/// A token with its kind, literal value and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub position: Position,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position, span: Span) -> Self {
        Self {
            kind,
            value: TokenValue::None,
            position,
            span,
        }
    }

    pub fn ident(name: impl Into<String>, position: Position, span: Span) -> Self {
        Self {
            kind: TokenKind::Ident,
            value: TokenValue::Ident(name.into()),
            position,
            span,
        }
    }

    pub fn number(value: i64, position: Position, span: Span) -> Self {
        Self {
            kind: TokenKind::Number,
            value: TokenValue::Number(value),
            position,
            span,
        }
    }

    pub fn char(value: char, position: Position, span: Span) -> Self {
        Self {
            kind: TokenKind::Char,
            value: TokenValue::Char(value),
            position,
            span,
        }
    }

    /// Identifier spelling, if this is an identifier token.
    pub fn ident_name(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Numeric value, if this is a number token.
    pub fn number_value(&self) -> Option<i64> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Character value, if this is a char constant token.
    pub fn char_value(&self) -> Option<char> {
        match self.value {
            TokenValue::Char(c) => Some(c),
            _ => None,
        }
    }
}

/// Classic KPL token trace: `line-column:KIND` with the literal in parentheses where present.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.position, self.kind.trace_name())?;
        match &self.value {
            TokenValue::None => Ok(()),
            TokenValue::Ident(name) => write!(f, "({})", name),
            TokenValue::Number(n) => write!(f, "({})", n),
            TokenValue::Char(c) => write!(f, "('{}')", c),
        }
    }
}

/// Look up a keyword by spelling (case-insensitive).
pub fn keyword_id(ident: &str) -> Option<KeywordId> {
    keywords::from_str(ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_format() {
        let kw = Token::new(
            TokenKind::Keyword(KeywordId::Program),
            Position::new(1, 1),
            Span::new(0, 7),
        );
        assert_eq!(kw.to_string(), "1-1:KW_PROGRAM");

        let ident = Token::ident("Example1", Position::new(1, 9), Span::new(8, 16));
        assert_eq!(ident.to_string(), "1-9:TK_IDENT(Example1)");

        let num = Token::number(42, Position::new(3, 5), Span::new(20, 22));
        assert_eq!(num.to_string(), "3-5:TK_NUMBER(42)");

        let ch = Token::char('a', Position::new(2, 2), Span::new(10, 13));
        assert_eq!(ch.to_string(), "2-2:TK_CHAR('a')");

        let semi = Token::new(
            TokenKind::Punctuation(PunctuationId::Semicolon),
            Position::new(1, 17),
            Span::new(16, 17),
        );
        assert_eq!(semi.to_string(), "1-17:SB_SEMICOLON");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Keyword(KeywordId::Begin).to_string(), "keyword BEGIN");
        assert_eq!(TokenKind::Punctuation(PunctuationId::Semicolon).to_string(), "';'");
        assert_eq!(TokenKind::Operator(OperatorId::Assign).to_string(), "':='");
        assert_eq!(TokenKind::Ident.to_string(), "an identifier");
        assert_eq!(TokenKind::Eof.to_string(), "end of file");
    }

    #[test]
    fn test_value_accessors() {
        let ident = Token::ident("x", Position::default(), Span::default());
        assert_eq!(ident.ident_name(), Some("x"));
        assert_eq!(ident.number_value(), None);
        let num = Token::number(7, Position::default(), Span::default());
        assert_eq!(num.number_value(), Some(7));
        assert_eq!(num.char_value(), None);
    }
}
