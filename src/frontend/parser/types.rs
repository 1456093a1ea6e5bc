/// Constant and type parsing methods.
///
/// Constant and type identifiers are resolved here, because the payload of the declaration being parsed needs
/// their value. The resolved value or type is duplicated, never shared.
impl<S: TokenSource> Parser<S> {
    /// Constant → [`+`|`-`] (Number | ConstIdent) | CharConst
    fn constant(&mut self) -> Result<ConstantValue, CompileError> {
        match self.look_ahead.kind {
            TokenKind::Operator(OperatorId::Plus | OperatorId::Minus) => {
                let sign = self.eat_any()?;
                let value = self.unsigned_constant()?;
                apply_sign(value, &sign)
            }
            TokenKind::Char => {
                let token = self.eat_any()?;
                Ok(ConstantValue::char(token.char_value().unwrap_or_default()))
            }
            _ => self.unsigned_constant(),
        }
    }

    /// Number | ConstIdent
    fn unsigned_constant(&mut self) -> Result<ConstantValue, CompileError> {
        match self.look_ahead.kind {
            TokenKind::Number => {
                let token = self.eat_any()?;
                Ok(ConstantValue::int(token.number_value().unwrap_or_default()))
            }
            TokenKind::Ident => {
                let ident = self.eat_ident()?;
                self.resolve_constant(&ident)
            }
            _ => Err(CompileError::syntax(ErrorCode::InvalidConstant, &self.look_ahead)),
        }
    }

    fn resolve_constant(&self, ident: &Token) -> Result<ConstantValue, CompileError> {
        let name = ident_name(ident);
        let value = self
            .symbols
            .lookup(name)
            .and_then(|id| self.symbols.get(id))
            .and_then(|obj| match &obj.kind {
                ObjectKind::Constant(info) => info.value.as_ref(),
                _ => None,
            });
        match value {
            Some(value) => Ok(value.duplicate()),
            None => Err(CompileError::symbol(ErrorCode::UndeclaredConstant(name.to_string()), ident)),
        }
    }

    /// Type → INTEGER | CHAR | ARRAY `(.` Number `.)` OF Type | TypeIdent
    fn type_expr(&mut self) -> Result<Type, CompileError> {
        match self.look_ahead.kind {
            TokenKind::Keyword(KeywordId::Integer) => {
                self.eat_keyword(KeywordId::Integer)?;
                Ok(Type::int())
            }
            TokenKind::Keyword(KeywordId::Char) => {
                self.eat_keyword(KeywordId::Char)?;
                Ok(Type::char())
            }
            TokenKind::Keyword(KeywordId::Array) => {
                self.eat_keyword(KeywordId::Array)?;
                self.eat_punct(PunctuationId::LSel)?;
                let size_token = self.look_ahead.clone();
                self.eat(TokenKind::Number)?;
                let size = size_token
                    .number_value()
                    .and_then(|n| usize::try_from(n).ok())
                    .ok_or_else(|| CompileError::syntax(ErrorCode::InvalidType, &size_token))?;
                self.eat_punct(PunctuationId::RSel)?;
                self.eat_keyword(KeywordId::Of)?;
                let element = self.type_expr()?;
                Ok(Type::array(size, element))
            }
            TokenKind::Ident => {
                let ident = self.eat_ident()?;
                self.resolve_type(&ident)
            }
            _ => Err(CompileError::syntax(ErrorCode::InvalidType, &self.look_ahead)),
        }
    }

    fn resolve_type(&self, ident: &Token) -> Result<Type, CompileError> {
        let name = ident_name(ident);
        let actual = self
            .symbols
            .lookup(name)
            .and_then(|id| self.symbols.get(id))
            .and_then(|obj| match &obj.kind {
                ObjectKind::Type(info) => info.actual.as_ref(),
                _ => None,
            });
        match actual {
            Some(ty) => Ok(ty.duplicate()),
            None => Err(CompileError::symbol(ErrorCode::UndeclaredType(name.to_string()), ident)),
        }
    }

    /// BasicType → INTEGER | CHAR
    fn basic_type(&mut self) -> Result<Type, CompileError> {
        match self.look_ahead.kind {
            TokenKind::Keyword(KeywordId::Integer) => {
                self.eat_keyword(KeywordId::Integer)?;
                Ok(Type::int())
            }
            TokenKind::Keyword(KeywordId::Char) => {
                self.eat_keyword(KeywordId::Char)?;
                Ok(Type::char())
            }
            _ => Err(CompileError::syntax(ErrorCode::InvalidBasicType, &self.look_ahead)),
        }
    }
}

/// Apply a sign to a constant. Only integer constants can carry one.
fn apply_sign(value: ConstantValue, sign: &Token) -> Result<ConstantValue, CompileError> {
    let signed = match value {
        ConstantValue::Int(_) if sign.kind.is_operator(OperatorId::Minus) => value.negate(),
        ConstantValue::Int(_) => Some(value),
        ConstantValue::Char(_) => None,
    };
    signed.ok_or_else(|| CompileError::symbol(ErrorCode::TypeInconsistency, sign))
}
