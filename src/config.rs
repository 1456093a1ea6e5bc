//! Compiler configuration
//!
//! Settings that shape a single compile. Logging is not configured here: the binary reads `RUST_LOG` through
//! `tracing_subscriber::EnvFilter`.

/// Default upper bound on source file size (1 MiB)
pub const DEFAULT_MAX_SOURCE_SIZE: u64 = 1024 * 1024;

/// Compiler configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Keep every token the parser consumes, in order
    pub record_tokens: bool,
    /// Files larger than this many bytes are rejected before reading
    pub max_source_size: u64,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            record_tokens: false,
            max_source_size: DEFAULT_MAX_SOURCE_SIZE,
        }
    }
}

impl CompilerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable token recording
    pub fn with_record_tokens(mut self, record: bool) -> Self {
        self.record_tokens = record;
        self
    }

    /// Set the maximum accepted source size in bytes
    pub fn with_max_source_size(mut self, bytes: u64) -> Self {
        self.max_source_size = bytes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompilerConfig::default();
        assert!(!config.record_tokens);
        assert_eq!(config.max_source_size, 1024 * 1024);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(CompilerConfig::new(), CompilerConfig::default());
    }

    #[test]
    fn test_builders_chain() {
        let config = CompilerConfig::new().with_record_tokens(true).with_max_source_size(64);
        assert!(config.record_tokens);
        assert_eq!(config.max_source_size, 64);
    }
}
