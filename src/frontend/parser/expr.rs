/// Expression parsing methods.
///
/// Precedence is encoded by the grammar levels: condition → expression (`+ -`) → term (`* /`) → factor.
/// Each level consumes its operator before descending again, and checks its FOLLOW set when done.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Arguments and conditions
    // ========================================================================

    /// Arguments → [`(` Expression (`,` Expression)* `)`]
    fn arguments(&mut self) -> Result<(), CompileError> {
        match self.look_ahead.kind {
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.eat_punct(PunctuationId::LParen)?;
                self.expression()?;
                while self.check_punct(PunctuationId::Comma) {
                    self.eat_punct(PunctuationId::Comma)?;
                    self.expression()?;
                }
                self.eat_punct(PunctuationId::RParen)
            }
            kind if follows_arguments(kind) => Ok(()),
            _ => Err(CompileError::syntax(ErrorCode::InvalidArguments, &self.look_ahead)),
        }
    }

    /// Condition → Expression [RelOp Expression]
    fn condition(&mut self) -> Result<(), CompileError> {
        self.expression()?;
        if self.look_ahead.kind.is_relational() {
            self.eat_any()?;
            self.expression()?;
        }
        if !follows_condition(self.look_ahead.kind) {
            return Err(CompileError::syntax(ErrorCode::InvalidComparator, &self.look_ahead));
        }
        Ok(())
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Expression → [`+`|`-`] Term ((`+`|`-`) Term)*
    fn expression(&mut self) -> Result<(), CompileError> {
        if self.look_ahead.kind.is_additive() {
            self.eat_any()?;
        }
        self.term()?;
        while self.look_ahead.kind.is_additive() {
            self.eat_any()?;
            self.term()?;
        }
        if !follows_expression(self.look_ahead.kind) {
            return Err(CompileError::syntax(ErrorCode::InvalidExpression, &self.look_ahead));
        }
        Ok(())
    }

    /// Term → Factor ((`*`|`/`) Factor)*
    fn term(&mut self) -> Result<(), CompileError> {
        self.factor()?;
        while self.look_ahead.kind.is_multiplicative() {
            self.eat_any()?;
            self.factor()?;
        }
        if !follows_term(self.look_ahead.kind) {
            return Err(CompileError::syntax(ErrorCode::InvalidTerm, &self.look_ahead));
        }
        Ok(())
    }

    /// Factor → Number | CharConst | Ident (Indexes | Arguments) | `(` Expression `)`
    fn factor(&mut self) -> Result<(), CompileError> {
        match self.look_ahead.kind {
            TokenKind::Number | TokenKind::Char => {
                self.eat_any()?;
                Ok(())
            }
            TokenKind::Ident => {
                self.eat_ident()?;
                if self.check_punct(PunctuationId::LParen) {
                    self.arguments()
                } else {
                    self.indexes()
                }
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.eat_punct(PunctuationId::LParen)?;
                self.expression()?;
                self.eat_punct(PunctuationId::RParen)
            }
            _ => Err(CompileError::syntax(ErrorCode::InvalidFactor, &self.look_ahead)),
        }
    }

    /// Indexes → (`(.` Expression `.)`)*
    fn indexes(&mut self) -> Result<(), CompileError> {
        while self.check_punct(PunctuationId::LSel) {
            self.eat_punct(PunctuationId::LSel)?;
            self.expression()?;
            self.eat_punct(PunctuationId::RSel)?;
        }
        Ok(())
    }
}
