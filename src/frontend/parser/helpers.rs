/// Token-window helpers, symbol-table glue and FOLLOW sets.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Advancing the window (`scan`) and matching terminals (`eat`, `eat_keyword`, `eat_punct`, `eat_op`)
/// - Checking the lookahead (`check_keyword`, `check_punct`)
/// - Translating [`SymbolError`]s into positioned diagnostics
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Token window
    // ========================================================================

    /// Promote the lookahead to `current` and pull a new lookahead from the source.
    fn scan(&mut self) -> Result<(), CompileError> {
        let next = self.source.next_token()?;
        let previous = std::mem::replace(&mut self.look_ahead, next);
        self.current = Some(previous);
        Ok(())
    }

    /// Consume the lookahead if it has the expected kind.
    ///
    /// ## Errors
    /// "Missing <kind>" at the lookahead's position on mismatch.
    fn eat(&mut self, kind: TokenKind) -> Result<(), CompileError> {
        if self.look_ahead.kind != kind {
            return Err(CompileError::missing_token(kind, &self.look_ahead));
        }
        tracing::trace!(token = %self.look_ahead, "eat");
        if let Some(recorded) = &mut self.recorded {
            recorded.push(self.look_ahead.clone());
        }
        self.scan()
    }

    fn eat_keyword(&mut self, id: KeywordId) -> Result<(), CompileError> {
        self.eat(TokenKind::Keyword(id))
    }

    fn eat_punct(&mut self, id: PunctuationId) -> Result<(), CompileError> {
        self.eat(TokenKind::Punctuation(id))
    }

    fn eat_op(&mut self, id: OperatorId) -> Result<(), CompileError> {
        self.eat(TokenKind::Operator(id))
    }

    /// Eat whatever the lookahead is. Callers have already checked its kind.
    fn eat_any(&mut self) -> Result<Token, CompileError> {
        let token = self.look_ahead.clone();
        self.eat(token.kind)?;
        Ok(token)
    }

    /// Eat an identifier and return its token.
    fn eat_ident(&mut self) -> Result<Token, CompileError> {
        let token = self.look_ahead.clone();
        self.eat(TokenKind::Ident)?;
        Ok(token)
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.look_ahead.kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.look_ahead.kind.is_punctuation(id)
    }

    // ========================================================================
    // Symbol table glue
    // ========================================================================

    /// Fail with `DuplicateIdent` if `ident` is already declared in the active scope.
    fn check_fresh_ident(&self, ident: &Token) -> Result<(), CompileError> {
        let name = ident_name(ident);
        if self.symbols.lookup_local(name).is_some() {
            return Err(CompileError::symbol(ErrorCode::DuplicateIdent(name.to_string()), ident));
        }
        Ok(())
    }

    fn declare(&mut self, object: ObjectId, at: &Token) -> Result<(), CompileError> {
        self.symbols
            .declare(object)
            .map_err(|err| symbol_error(err, at))
    }

    fn enter_scope(&mut self, scope: ScopeId, at: &Token) -> Result<(), CompileError> {
        self.symbols
            .enter_scope(scope)
            .map_err(|err| symbol_error(err, at))
    }

    fn exit_scope(&mut self) -> Result<(), CompileError> {
        self.symbols
            .exit_scope()
            .map_err(|err| symbol_error(err, &self.look_ahead))
    }

    /// The scope owned by a program or routine object.
    fn scope_of(&self, object: ObjectId, at: &Token) -> Result<ScopeId, CompileError> {
        self.symbols.get(object).and_then(Object::scope).ok_or_else(|| {
            CompileError::symbol(ErrorCode::Internal(format!("object #{} owns no scope", object)), at)
        })
    }
}

fn symbol_error(err: SymbolError, at: &Token) -> CompileError {
    match err {
        SymbolError::Duplicate { name } => CompileError::symbol(ErrorCode::DuplicateIdent(name), at),
        other => CompileError::symbol(ErrorCode::Internal(other.to_string()), at),
    }
}

fn ident_name(token: &Token) -> &str {
    token.ident_name().unwrap_or_default()
}

// ============================================================================
// FOLLOW sets
// ============================================================================

/// Tokens that may follow an expression.
fn follows_expression(kind: TokenKind) -> bool {
    kind.is_relational()
        || matches!(
            kind,
            TokenKind::Keyword(
                KeywordId::To | KeywordId::Do | KeywordId::End | KeywordId::Else | KeywordId::Then
            ) | TokenKind::Punctuation(
                PunctuationId::RParen | PunctuationId::Comma | PunctuationId::RSel | PunctuationId::Semicolon
            )
        )
}

/// Tokens that may follow a term.
fn follows_term(kind: TokenKind) -> bool {
    follows_expression(kind) || kind.is_additive()
}

/// Tokens that may follow an (empty) argument list.
fn follows_arguments(kind: TokenKind) -> bool {
    follows_term(kind) || kind.is_multiplicative()
}

/// Tokens that may follow a statement, which is where an empty statement is allowed.
fn follows_statement(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Punctuation(PunctuationId::Semicolon) | TokenKind::Keyword(KeywordId::End | KeywordId::Else)
    )
}

/// Tokens that may follow a condition.
fn follows_condition(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Keyword(KeywordId::Then | KeywordId::Do))
}
