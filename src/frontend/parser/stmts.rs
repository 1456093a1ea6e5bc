/// Statement parsing methods.
///
/// Statements are recognised only: names used in statements are not resolved here.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Statements → Statement (`;` Statement)*
    fn statements(&mut self) -> Result<(), CompileError> {
        self.statement()?;
        while self.check_punct(PunctuationId::Semicolon) {
            self.eat_punct(PunctuationId::Semicolon)?;
            self.statement()?;
        }
        Ok(())
    }

    fn statement(&mut self) -> Result<(), CompileError> {
        match self.look_ahead.kind {
            TokenKind::Ident => self.assign_stmt(),
            TokenKind::Keyword(KeywordId::Call) => self.call_stmt(),
            TokenKind::Keyword(KeywordId::Begin) => self.group_stmt(),
            TokenKind::Keyword(KeywordId::If) => self.if_stmt(),
            TokenKind::Keyword(KeywordId::While) => self.while_stmt(),
            TokenKind::Keyword(KeywordId::For) => self.for_stmt(),
            // Empty statement
            kind if follows_statement(kind) => Ok(()),
            _ => Err(CompileError::syntax(ErrorCode::InvalidStatement, &self.look_ahead)),
        }
    }

    /// AssignSt → Ident Indexes `:=` Expression
    fn assign_stmt(&mut self) -> Result<(), CompileError> {
        tracing::trace!("parsing an assignment statement");
        self.eat_ident()?;
        self.indexes()?;
        self.eat_op(OperatorId::Assign)?;
        self.expression()
    }

    /// CallSt → CALL Ident Arguments
    fn call_stmt(&mut self) -> Result<(), CompileError> {
        tracing::trace!("parsing a call statement");
        self.eat_keyword(KeywordId::Call)?;
        self.eat_ident()?;
        self.arguments()
    }

    /// GroupSt → BEGIN Statements END
    fn group_stmt(&mut self) -> Result<(), CompileError> {
        tracing::trace!("parsing a group statement");
        self.eat_keyword(KeywordId::Begin)?;
        self.statements()?;
        self.eat_keyword(KeywordId::End)
    }

    /// IfSt → IF Condition THEN Statement [ELSE Statement]
    fn if_stmt(&mut self) -> Result<(), CompileError> {
        tracing::trace!("parsing an if statement");
        self.eat_keyword(KeywordId::If)?;
        self.condition()?;
        self.eat_keyword(KeywordId::Then)?;
        self.statement()?;
        if self.check_keyword(KeywordId::Else) {
            self.eat_keyword(KeywordId::Else)?;
            self.statement()?;
        }
        Ok(())
    }

    /// WhileSt → WHILE Condition DO Statement
    fn while_stmt(&mut self) -> Result<(), CompileError> {
        tracing::trace!("parsing a while statement");
        self.eat_keyword(KeywordId::While)?;
        self.condition()?;
        self.eat_keyword(KeywordId::Do)?;
        self.statement()
    }

    /// ForSt → FOR Ident `:=` Expression TO Expression DO Statement
    fn for_stmt(&mut self) -> Result<(), CompileError> {
        tracing::trace!("parsing a for statement");
        self.eat_keyword(KeywordId::For)?;
        self.eat_ident()?;
        self.eat_op(OperatorId::Assign)?;
        self.expression()?;
        self.eat_keyword(KeywordId::To)?;
        self.expression()?;
        self.eat_keyword(KeywordId::Do)?;
        self.statement()
    }
}
