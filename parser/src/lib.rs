// Parser module: Converts a list of tokens into an abstract syntax tree (AST)
//
// Module organization:
// - token_stream.rs: Indexed token sequence with a forward-only cursor
// - parser.rs: Core Parser struct, top-level program rule and the expect primitive
// - expressions.rs: Expressions (single additive tier) and conditions
// - statements.rs: Statement sequences, declarations, assignments, print, if, while

mod error;
mod expressions;
mod parser;
mod statements;
mod token_stream;

use model::{Node, Token};

pub use error::{ParseError, ParseResult};
pub use parser::{MAX_NESTING, Parser};
pub use token_stream::TokenStream;

/// Parse a list of tokens into an AST
///
/// # Arguments
/// * `tokens` - Tokens from the lexer; an end-of-input sentinel is appended if missing
///
/// # Returns
/// * `Ok(Some(Node::StatementSequence(..)))` - The program's top-level statements
/// * `Ok(None)` - The program has no statements
/// * `Err(ParseError)` - The first syntax error encountered
pub fn parse_tokens(tokens: Vec<Token>) -> ParseResult<Option<Node>> {
    let mut parser = Parser::new(tokens);
    parser.parse_program()
}
