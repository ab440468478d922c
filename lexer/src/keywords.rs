use model::{Token, TokenKind};

/// Classify a word-shaped lexeme as a reserved word or a plain identifier
pub fn keyword_or_identifier(text: &str, line: usize) -> Token {
    let kind = match text {
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "int" => TokenKind::Int,
        "string" => TokenKind::StringKw,
        "print" => TokenKind::Print,
        "prints" => TokenKind::Prints,
        _ => TokenKind::Identifier,
    };
    Token::new(kind, text, line)
}
