// Tokenizer tuning.

use sqldump_buffer::BufferConfig;

/// Default length of the input excerpt attached to syntax errors.
pub const DEFAULT_EXCERPT_LEN: usize = 40;

/// Default maximum parenthesis nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for a [`Lexer`](crate::Lexer) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Window sizing used when tokenizing a stream.
    pub buffer: BufferConfig,
    /// Bytes of upcoming input quoted in error messages.
    pub excerpt_len: usize,
    /// Deepest allowed `(` nesting; deeper input fails with
    /// [`NestingTooDeep`](sqldump_error::DumpError::NestingTooDeep).
    pub max_depth: usize,
}

impl ParserConfig {
    /// Returns `None` when `max_depth` is zero.
    #[must_use]
    pub const fn new(buffer: BufferConfig, excerpt_len: usize, max_depth: usize) -> Option<Self> {
        if max_depth == 0 {
            None
        } else {
            Some(Self {
                buffer,
                excerpt_len,
                max_depth,
            })
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            buffer: BufferConfig::default(),
            excerpt_len: DEFAULT_EXCERPT_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.excerpt_len, 40);
        assert_eq!(config.max_depth, 256);
        assert_eq!(config.buffer, BufferConfig::default());
    }

    #[test]
    fn zero_depth_rejected() {
        assert!(ParserConfig::new(BufferConfig::default(), 40, 0).is_none());
        let config = ParserConfig::new(BufferConfig::default(), 0, 1).unwrap();
        assert_eq!(config.excerpt_len, 0);
    }
}
