use model::{Node, Token, TokenKind};

use crate::error::{ParseError, ParseResult};
use crate::statements::StatementParser;
use crate::token_stream::TokenStream;

/// Deepest nesting of parenthesised expressions and statement blocks
pub const MAX_NESTING: usize = 256;

/// Core parser struct that maintains parsing state
pub struct Parser {
    pub(crate) tokens: TokenStream,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: impl Into<TokenStream>) -> Self {
        let mut tokens = tokens.into();
        tokens.ensure_terminated();
        Parser { tokens, depth: 0 }
    }

    /// Parse the whole token stream.
    ///
    /// Returns `None` for a program without statements, otherwise the top-level
    /// statement sequence. The first grammar violation aborts the parse.
    pub fn parse_program(&mut self) -> ParseResult<Option<Node>> {
        let block = self.parse_statements()?;

        let tok = self.current()?;
        if !tok.is_end() {
            return Err(ParseError::syntax(tok.line, "Syntax Error at end of program"));
        }

        if block.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Node::StatementSequence(block)))
        }
    }

    pub(crate) fn current(&self) -> ParseResult<&Token> {
        self.tokens.current()
    }

    pub(crate) fn advance(&mut self) {
        self.tokens.advance();
    }

    /// Take the current token and move past it
    pub(crate) fn bump(&mut self) -> ParseResult<Token> {
        let tok = self.current()?.clone();
        self.advance();
        Ok(tok)
    }

    /// Whether the current token is spelled `text`. String literals never
    /// match, so `"}"` in quotes cannot close a block.
    pub(crate) fn at_text(&self, text: &str) -> ParseResult<bool> {
        let tok = self.current()?;
        Ok(tok.kind != TokenKind::StringLiteral && tok.text == text)
    }

    /// Consume a token spelled `expected` or fail with `message`
    pub(crate) fn expect(&mut self, expected: &str, message: &str) -> ParseResult<()> {
        if !self.at_text(expected)? {
            let line = self.current()?.line;
            return Err(ParseError::syntax(line, message));
        }
        self.advance();
        Ok(())
    }

    /// Run a rule one nesting level deeper, failing once `MAX_NESTING` is hit
    pub(crate) fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_NESTING {
            let line = self.current()?.line;
            return Err(ParseError::syntax(line, "Nesting too deep"));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}
