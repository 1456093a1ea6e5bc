/// Program, block and declaration parsing methods.
///
/// Every declaration is entered into the symbol table once its payload has been parsed. Routines are declared in
/// the enclosing scope before their own scope is entered, so a routine body can refer to the routine itself.
impl<S: TokenSource> Parser<S> {
    // ========================================================================
    // Program and blocks
    // ========================================================================

    /// Program → PROGRAM Ident `;` Block `.`
    fn program(&mut self) -> Result<(), CompileError> {
        tracing::debug!("parsing a program");
        self.eat_keyword(KeywordId::Program)?;
        let ident = self.eat_ident()?;
        let program = self.symbols.create_program(ident_name(&ident));
        let scope = self.scope_of(program, &ident)?;
        self.eat_punct(PunctuationId::Semicolon)?;

        self.enter_scope(scope, &ident)?;
        self.block()?;
        self.eat_punct(PunctuationId::Period)?;
        self.exit_scope()?;
        tracing::debug!(name = ident_name(&ident), "program parsed");
        Ok(())
    }

    /// Block → [CONST ConstDecl+] [TYPE TypeDecl+] [VAR VarDecl+] SubDecls BEGIN Statements END
    fn block(&mut self) -> Result<(), CompileError> {
        if self.check_keyword(KeywordId::Const) {
            self.eat_keyword(KeywordId::Const)?;
            self.const_decl()?;
            while self.look_ahead.kind == TokenKind::Ident {
                self.const_decl()?;
            }
        }

        if self.check_keyword(KeywordId::Type) {
            self.eat_keyword(KeywordId::Type)?;
            self.type_decl()?;
            while self.look_ahead.kind == TokenKind::Ident {
                self.type_decl()?;
            }
        }

        if self.check_keyword(KeywordId::Var) {
            self.eat_keyword(KeywordId::Var)?;
            self.var_decl()?;
            while self.look_ahead.kind == TokenKind::Ident {
                self.var_decl()?;
            }
        }

        self.subroutine_decls()?;

        self.eat_keyword(KeywordId::Begin)?;
        self.statements()?;
        self.eat_keyword(KeywordId::End)
    }

    // ========================================================================
    // Constants, types and variables
    // ========================================================================

    /// ConstDecl → Ident `=` Constant `;`
    fn const_decl(&mut self) -> Result<(), CompileError> {
        tracing::debug!("parsing a constant declaration");
        let ident = self.eat_ident()?;
        self.check_fresh_ident(&ident)?;
        self.eat_op(OperatorId::Eq)?;
        let value = self.constant()?;
        self.eat_punct(PunctuationId::Semicolon)?;

        let object = self.symbols.create_constant(ident_name(&ident), value);
        self.declare(object, &ident)?;
        tracing::debug!(name = ident_name(&ident), "constant parsed");
        Ok(())
    }

    /// TypeDecl → Ident `=` Type `;`
    fn type_decl(&mut self) -> Result<(), CompileError> {
        tracing::debug!("parsing a type declaration");
        let ident = self.eat_ident()?;
        self.check_fresh_ident(&ident)?;
        self.eat_op(OperatorId::Eq)?;
        let actual = self.type_expr()?;
        self.eat_punct(PunctuationId::Semicolon)?;

        let object = self.symbols.create_type(ident_name(&ident), actual);
        self.declare(object, &ident)?;
        tracing::debug!(name = ident_name(&ident), "type parsed");
        Ok(())
    }

    /// VarDecl → Ident `:` Type `;`
    fn var_decl(&mut self) -> Result<(), CompileError> {
        tracing::debug!("parsing a variable declaration");
        let ident = self.eat_ident()?;
        self.check_fresh_ident(&ident)?;
        self.eat_punct(PunctuationId::Colon)?;
        let ty = self.type_expr()?;
        self.eat_punct(PunctuationId::Semicolon)?;

        let object = self.symbols.create_variable(ident_name(&ident), ty);
        self.declare(object, &ident)?;
        tracing::debug!(name = ident_name(&ident), "variable parsed");
        Ok(())
    }

    // ========================================================================
    // Functions and procedures
    // ========================================================================

    /// SubDecls → (FunDecl | ProcDecl)*
    fn subroutine_decls(&mut self) -> Result<(), CompileError> {
        loop {
            if self.check_keyword(KeywordId::Function) {
                self.function_decl()?;
            } else if self.check_keyword(KeywordId::Procedure) {
                self.procedure_decl()?;
            } else {
                return Ok(());
            }
        }
    }

    /// FunDecl → FUNCTION Ident Params `:` BasicType `;` Block `;`
    fn function_decl(&mut self) -> Result<(), CompileError> {
        tracing::debug!("parsing a function");
        self.eat_keyword(KeywordId::Function)?;
        let ident = self.eat_ident()?;
        self.check_fresh_ident(&ident)?;
        let function = self.symbols.create_function(ident_name(&ident));
        self.declare(function, &ident)?;
        let scope = self.scope_of(function, &ident)?;

        self.enter_scope(scope, &ident)?;
        self.params(function)?;
        self.eat_punct(PunctuationId::Colon)?;
        let return_type = self.basic_type()?;
        self.symbols.set_return_type(function, return_type);
        self.eat_punct(PunctuationId::Semicolon)?;
        self.block()?;
        self.eat_punct(PunctuationId::Semicolon)?;
        self.exit_scope()?;
        tracing::debug!(name = ident_name(&ident), "function parsed");
        Ok(())
    }

    /// ProcDecl → PROCEDURE Ident Params `;` Block `;`
    fn procedure_decl(&mut self) -> Result<(), CompileError> {
        tracing::debug!("parsing a procedure");
        self.eat_keyword(KeywordId::Procedure)?;
        let ident = self.eat_ident()?;
        self.check_fresh_ident(&ident)?;
        let procedure = self.symbols.create_procedure(ident_name(&ident));
        self.declare(procedure, &ident)?;
        let scope = self.scope_of(procedure, &ident)?;

        self.enter_scope(scope, &ident)?;
        self.params(procedure)?;
        self.eat_punct(PunctuationId::Semicolon)?;
        self.block()?;
        self.eat_punct(PunctuationId::Semicolon)?;
        self.exit_scope()?;
        tracing::debug!(name = ident_name(&ident), "procedure parsed");
        Ok(())
    }

    /// Params → [`(` Param (`;` Param)* `)`]
    fn params(&mut self, owner: ObjectId) -> Result<(), CompileError> {
        if !self.check_punct(PunctuationId::LParen) {
            return Ok(());
        }
        self.eat_punct(PunctuationId::LParen)?;
        self.param(owner)?;
        while self.check_punct(PunctuationId::Semicolon) {
            self.eat_punct(PunctuationId::Semicolon)?;
            self.param(owner)?;
        }
        self.eat_punct(PunctuationId::RParen)
    }

    /// Param → [VAR] Ident `:` BasicType
    fn param(&mut self, owner: ObjectId) -> Result<(), CompileError> {
        let mode = match self.look_ahead.kind {
            TokenKind::Ident => ParamMode::ByValue,
            TokenKind::Keyword(KeywordId::Var) => {
                self.eat_keyword(KeywordId::Var)?;
                ParamMode::ByReference
            }
            _ => return Err(CompileError::syntax(ErrorCode::InvalidParameter, &self.look_ahead)),
        };

        let ident = self.eat_ident()?;
        self.check_fresh_ident(&ident)?;
        self.eat_punct(PunctuationId::Colon)?;
        let ty = self.basic_type()?;

        let param = self.symbols.create_parameter(ident_name(&ident), mode, Some(ty), owner);
        self.declare(param, &ident)
    }
}
