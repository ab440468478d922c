use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token cursor was dereferenced past the end of the stream. The
    /// end-of-input sentinel makes this unreachable from the grammar rules.
    #[error("Token position {index} out of range ({len} tokens)")]
    OutOfRange { index: usize, len: usize },

    #[error("{message} in line {line}")]
    Syntax { line: usize, message: String },
}

impl ParseError {
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            line,
            message: message.into(),
        }
    }

    /// Source line of the offending token, if this is a grammar violation
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { line, .. } => Some(*line),
            ParseError::OutOfRange { .. } => None,
        }
    }
}
