//! 错误类型

use thiserror::Error;

/// Result type alias for readmap operations
pub type Result<T> = std::result::Result<T, ReadmapError>;

#[derive(Debug, Error)]
pub enum ReadmapError {
    /// Token too long, missing delimiter, bad character or premature end of stream
    #[error("malformed input at line {line}: {msg}")]
    MalformedInput { line: usize, msg: String },

    /// Statistics requested over zero elements
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// More items than the fixed capacity allows
    #[error("capacity exceeded: more than {max} {what}")]
    CapacityExceeded { what: &'static str, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadmapError {
    pub fn malformed(line: usize, msg: impl Into<String>) -> Self {
        Self::MalformedInput { line, msg: msg.into() }
    }
}
