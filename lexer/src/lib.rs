mod keywords;
mod literals;
mod state_machine;

use model::Token;
use state_machine::StateMachineLexer;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character '{ch}' in line {line}")]
    UnexpectedCharacter { ch: char, line: usize },

    #[error("Unterminated string literal in line {line}")]
    UnterminatedString { line: usize },

    #[error("Unknown escape sequence '\\{escape}' in line {line}")]
    UnknownEscape { escape: char, line: usize },
}

/// Split source text into classified tokens.
///
/// The returned sequence has no end-of-input sentinel; the parser's token
/// stream appends one when it takes ownership.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = StateMachineLexer::new(input);
    lexer.tokenize()
}
