/// Parse KPL source text.
///
/// This is the main public entrypoint for parsing: it scans `source` on demand and parses one program.
///
/// ## Errors
/// Returns the first lexical, syntax or symbol error.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Parsed, CompileError> {
    Parser::new(Scanner::new(source))?.parse()
}

/// Parse a pre-built token sequence.
///
/// ## Notes
/// - The sequence does not need to end with `Eof`: one is synthesised when it runs out.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_tokens(tokens: &[Token]) -> Result<Parsed, CompileError> {
    Parser::new(TokenStream::new(tokens.iter().cloned()))?.parse()
}
