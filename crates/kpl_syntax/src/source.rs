//! The token-source contract consumed by the parser.
//!
//! A [`TokenSource`] hands out one validated token at a time. Once the underlying input is exhausted it keeps
//! returning `Eof`, so a parser can always look one token ahead.

use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use crate::span::{Position, Span};

/// Produces the next valid token, or the error that stopped scanning.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token, CompileError>;
}

/// Adapts a pre-built token sequence to [`TokenSource`].
///
/// When the iterator runs dry, a synthetic `Eof` token is produced at the end of the last token seen.
#[derive(Debug)]
pub struct TokenStream<I> {
    tokens: I,
    end_position: Position,
    end_offset: usize,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    pub fn new(tokens: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            end_position: Position::default(),
            end_offset: 0,
        }
    }
}

impl<I: Iterator<Item = Token>> TokenSource for TokenStream<I> {
    fn next_token(&mut self) -> Result<Token, CompileError> {
        match self.tokens.next() {
            Some(token) => {
                self.end_position = token.position;
                self.end_offset = token.span.end;
                Ok(token)
            }
            None => Ok(Token::new(
                TokenKind::Eof,
                self.end_position,
                Span::new(self.end_offset, self.end_offset),
            )),
        }
    }
}
