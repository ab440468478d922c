use model::Token;

use crate::error::{ParseError, ParseResult};

/// Indexed token sequence with a forward-only cursor.
///
/// Tokens are appended while the stream is being built and only read once
/// parsing starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens, pos: 0 }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn get(&self, index: usize) -> ParseResult<&Token> {
        self.tokens.get(index).ok_or(ParseError::OutOfRange {
            index,
            len: self.tokens.len(),
        })
    }

    pub fn current(&self) -> ParseResult<&Token> {
        self.get(self.pos)
    }

    /// Move to the next token. Stays put on the last token, so advancing past
    /// the end-of-input sentinel is a no-op.
    pub fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Append an end-of-input sentinel unless the stream already ends in one
    pub fn ensure_terminated(&mut self) {
        match self.tokens.last() {
            Some(last) if last.is_end() => {}
            Some(last) => {
                let line = last.line;
                self.tokens.push(Token::end(line));
            }
            None => self.tokens.push(Token::end(1)),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenStream::new(iter.into_iter().collect())
    }
}
