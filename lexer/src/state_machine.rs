use std::sync::LazyLock;

use model::{Token, TokenKind};
use regex_lite::Regex;

use crate::LexError;
use crate::keywords::keyword_or_identifier;
use crate::literals::unescape;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").expect("identifier pattern is valid"));
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+").expect("integer pattern is valid"));

pub struct StateMachineLexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> StateMachineLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while self.pos < self.input.len() {
            match self.lex_next_token()? {
                Some(token) => {
                    tracing::trace!(kind = ?token.kind, text = %token.text, line = token.line, "lexed token");
                    tokens.push(token);
                }
                None => continue, // Whitespace or comment consumed
            }
        }

        Ok(tokens)
    }

    fn lex_next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        match ch {
            '/' if self.peek(1) == Some('/') => {
                self.skip_line_comment();
                Ok(None)
            }
            '"' => self.lex_string().map(Some),
            '0'..='9' => self.lex_word(&INTEGER, ch).map(|text| {
                Some(Token::new(TokenKind::IntLiteral, text, self.line))
            }),
            'a'..='z' | 'A'..='Z' | '_' => self
                .lex_word(&IDENTIFIER, ch)
                .map(|text| Some(keyword_or_identifier(text, self.line))),
            _ => self.lex_operator_or_punctuation(ch).map(Some),
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    fn bump(&mut self, ch: char) {
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump(ch);
        }
    }

    fn skip_line_comment(&mut self) {
        // The newline itself is left for skip_whitespace so the line count stays right
        while let Some(ch) = self.current_char() {
            if ch == '\n' {
                break;
            }
            self.bump(ch);
        }
    }

    fn lex_word(&mut self, pattern: &Regex, first: char) -> Result<&'a str, LexError> {
        let rest = self.rest();
        let found = pattern.find(rest).ok_or(LexError::UnexpectedCharacter {
            ch: first,
            line: self.line,
        })?;
        self.pos += found.end();
        Ok(&rest[..found.end()])
    }

    fn lex_string(&mut self) -> Result<Token, LexError> {
        let start_line = self.line;
        self.bump('"');
        let mut value = String::new();

        while let Some(ch) = self.current_char() {
            self.bump(ch);
            match ch {
                '"' => return Ok(Token::new(TokenKind::StringLiteral, value, start_line)),
                '\\' => {
                    let escape = self
                        .current_char()
                        .ok_or(LexError::UnterminatedString { line: start_line })?;
                    let line = self.line;
                    self.bump(escape);
                    let resolved = unescape(escape).ok_or(LexError::UnknownEscape { escape, line })?;
                    value.push(resolved);
                }
                ch => value.push(ch),
            }
        }

        Err(LexError::UnterminatedString { line: start_line })
    }

    fn lex_operator_or_punctuation(&mut self, ch: char) -> Result<Token, LexError> {
        let line = self.line;

        // Two-character comparisons
        let two_char = match (ch, self.peek(1)) {
            ('=', Some('=')) => Some("=="),
            ('!', Some('=')) => Some("!="),
            ('<', Some('=')) => Some("<="),
            ('>', Some('=')) => Some(">="),
            _ => None,
        };

        if let Some(text) = two_char {
            self.pos += 2;
            return Ok(Token::new(TokenKind::Comparison, text, line));
        }

        let kind = match ch {
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '(' => TokenKind::OpenParenthesis,
            ')' => TokenKind::CloseParenthesis,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '+' | '-' => TokenKind::Arithmetic,
            '<' | '>' => TokenKind::Comparison,
            '=' => TokenKind::Assign,
            _ => return Err(LexError::UnexpectedCharacter { ch, line }),
        };

        self.bump(ch);
        Ok(Token::new(kind, ch.to_string(), line))
    }
}
