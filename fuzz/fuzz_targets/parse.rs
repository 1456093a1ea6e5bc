#![no_main]

use kplc::compiler::compile_source;
use kplc::config::CompilerConfig;
use kplc::frontend::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The pull-based parse and the token-vector parse must agree
        let direct = compile_source(s, &CompilerConfig::default()).map(|_| ());
        let via_tokens = lexer::lex(s).and_then(|tokens| parser::parse_tokens(&tokens).map(|_| ()));
        assert_eq!(direct.is_ok(), via_tokens.is_ok());
    }
});
