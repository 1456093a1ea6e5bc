/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its two-token window, and the top-level `parse()` entrypoint.
/// [`Parser`] holds the parser state.
///
/// ## Notes
/// - This file is `include!`'d into `crate::frontend::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
/// - `current` is the token consumed last and `look_ahead` the next unconsumed one. Only `scan` moves them.
/// - Errors are not recovered from: the first one aborts the parse and the partially filled symbol table is
///   dropped with the parser.
pub struct Parser<S> {
    source: S,
    current: Option<Token>,
    look_ahead: Token,
    symbols: SymbolTable,
    recorded: Option<Vec<Token>>,
}

/// What a successful parse leaves behind.
#[derive(Debug)]
pub struct Parsed {
    /// Every declaration of the program, plus the built-ins.
    pub symbols: SymbolTable,
    /// Consumed tokens in order, when token recording is enabled.
    pub tokens: Vec<Token>,
}

impl<S: TokenSource> Parser<S> {
    /// Create a parser and pull the first lookahead token from `source`.
    ///
    /// ## Errors
    /// Returns the token source's error if the very first token cannot be produced.
    pub fn new(mut source: S) -> Result<Self, CompileError> {
        let look_ahead = source.next_token()?;
        Ok(Self {
            source,
            current: None,
            look_ahead,
            symbols: SymbolTable::new(),
            recorded: None,
        })
    }

    /// Keep a copy of every eaten token, in order.
    pub fn record_tokens(mut self, enabled: bool) -> Self {
        self.recorded = enabled.then(Vec::new);
        self
    }

    /// The token consumed last, if any.
    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// The next unconsumed token.
    pub fn look_ahead(&self) -> &Token {
        &self.look_ahead
    }

    /// Parse a whole program followed by end of input.
    ///
    /// ## Errors
    /// Returns the first lexical, syntax or symbol error.
    pub fn parse(mut self) -> Result<Parsed, CompileError> {
        self.program()?;
        if self.look_ahead.kind != TokenKind::Eof {
            return Err(CompileError::missing_token(TokenKind::Eof, &self.look_ahead));
        }
        Ok(Parsed {
            symbols: self.symbols,
            tokens: self.recorded.unwrap_or_default(),
        })
    }
}
