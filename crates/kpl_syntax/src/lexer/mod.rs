//! Scanner for the KPL language.
//!
//! Handles tokenization including:
//! - Keywords (case-insensitive) and identifiers (at most [`MAX_IDENT_LEN`] characters)
//! - Unsigned decimal numbers and character constants (`'c'`)
//! - Operators and punctuation, including the two-character symbols `:= <= >= != (. .)`
//! - `(* ... *)` comments
//!
//! Unlike a batch lexer, the [`Scanner`] is pull-based: the parser asks for one token at a time through
//! [`TokenSource`](crate::source::TokenSource). The first lexical error is fatal.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, TokenValue, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind, TokenValue, keyword_id};

use crate::diagnostics::{CompileError, ErrorCode};
use crate::source::TokenSource;
use crate::span::{Position, Span};
use kpl_core::lang::operators::OperatorId;
use kpl_core::lang::punctuation::PunctuationId;

/// Longest identifier the scanner accepts.
pub const MAX_IDENT_LEN: usize = 15;

/// Pull-based scanner over KPL source text.
pub struct Scanner<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire source code.
    ///
    /// The token vector always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, CompileError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.scan_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<Token, CompileError> {
        self.skip_trivia()?;

        let start = self.current_pos;
        let position = self.position();

        let Some(c) = self.advance() else {
            return Ok(Token::new(TokenKind::Eof, position, Span::new(start, start)));
        };

        let kind = match c {
            '+' => TokenKind::Operator(OperatorId::Plus),
            '-' => TokenKind::Operator(OperatorId::Minus),
            '*' => TokenKind::Operator(OperatorId::Times),
            '/' => TokenKind::Operator(OperatorId::Slash),
            '=' => TokenKind::Operator(OperatorId::Eq),
            '<' => self.operator(OperatorId::Lt, '=', OperatorId::Le),
            '>' => self.operator(OperatorId::Gt, '=', OperatorId::Ge),
            '!' => {
                if self.match_char('=') {
                    TokenKind::Operator(OperatorId::Neq)
                } else {
                    return Err(self.error(ErrorCode::InvalidSymbol, position, start));
                }
            }
            ':' => {
                if self.match_char('=') {
                    TokenKind::Operator(OperatorId::Assign)
                } else {
                    TokenKind::Punctuation(PunctuationId::Colon)
                }
            }
            ';' => TokenKind::Punctuation(PunctuationId::Semicolon),
            ',' => TokenKind::Punctuation(PunctuationId::Comma),
            ')' => TokenKind::Punctuation(PunctuationId::RParen),
            '[' => TokenKind::Punctuation(PunctuationId::LSel),
            ']' => TokenKind::Punctuation(PunctuationId::RSel),
            '(' => {
                // `(*` was consumed by skip_trivia, so only `(.` and `(` remain.
                if self.match_char('.') {
                    TokenKind::Punctuation(PunctuationId::LSel)
                } else {
                    TokenKind::Punctuation(PunctuationId::LParen)
                }
            }
            '.' => {
                if self.match_char(')') {
                    TokenKind::Punctuation(PunctuationId::RSel)
                } else {
                    TokenKind::Punctuation(PunctuationId::Period)
                }
            }
            '\'' => return self.scan_char(start, position),
            '0'..='9' => return self.scan_number(start, position),
            _ if is_ident_start(c) => return self.scan_identifier(start, position),
            _ => return Err(self.error(ErrorCode::InvalidSymbol, position, start)),
        };

        Ok(Token::new(kind, position, Span::new(start, self.current_pos)))
    }

    /// Skip whitespace and `(* ... *)` comments.
    fn skip_trivia(&mut self) -> Result<(), CompileError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('(') if self.source[self.current_pos..].starts_with("(*") => {
                    self.skip_comment()?;
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_comment(&mut self) -> Result<(), CompileError> {
        let start = self.current_pos;
        let position = self.position();
        self.advance();
        self.advance();

        while let Some(c) = self.advance() {
            if c == '*' && self.match_char(')') {
                return Ok(());
            }
        }
        Err(self.error(ErrorCode::EndOfComment, position, start))
    }

    fn operator(&mut self, simple: OperatorId, next: char, compound: OperatorId) -> TokenKind {
        if self.match_char(next) {
            TokenKind::Operator(compound)
        } else {
            TokenKind::Operator(simple)
        }
    }

    fn error(&self, code: ErrorCode, position: Position, start: usize) -> CompileError {
        CompileError::lexical(code, position, Span::new(start, self.current_pos))
    }

    // ========================================================================
    // Literal and identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize, position: Position) -> Result<Token, CompileError> {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let span = Span::new(start, self.current_pos);
        let spelling = &self.source[start..self.current_pos];

        if let Some(id) = keyword_id(spelling) {
            return Ok(Token::new(TokenKind::Keyword(id), position, span));
        }
        if spelling.len() > MAX_IDENT_LEN {
            return Err(CompileError::lexical(ErrorCode::IdentTooLong, position, span)
                .with_note(format!("identifiers are limited to {} characters", MAX_IDENT_LEN)));
        }
        Ok(Token::ident(spelling, position, span))
    }

    fn scan_number(&mut self, start: usize, position: Position) -> Result<Token, CompileError> {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        let span = Span::new(start, self.current_pos);
        let digits = &self.source[start..self.current_pos];
        match digits.parse::<i64>() {
            Ok(value) => Ok(Token::number(value, position, span)),
            Err(_) => Err(CompileError::lexical(ErrorCode::NumberTooLarge, position, span)),
        }
    }

    /// Scan the rest of `'c'` after the opening quote.
    fn scan_char(&mut self, start: usize, position: Position) -> Result<Token, CompileError> {
        let value = match self.peek() {
            Some(c) if is_printable(c) && c != '\'' => c,
            _ => return Err(self.error(ErrorCode::InvalidCharConstant, position, start)),
        };
        self.advance();

        if !self.match_char('\'') {
            return Err(self.error(ErrorCode::InvalidCharConstant, position, start));
        }
        Ok(Token::char(value, position, Span::new(start, self.current_pos)))
    }
}

impl TokenSource for Scanner<'_> {
    fn next_token(&mut self) -> Result<Token, CompileError> {
        self.scan_token()
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII letters only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn is_printable(c: char) -> bool {
    c == ' ' || c.is_ascii_graphic()
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Scanner::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, CompileError> {
    Scanner::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
