use model::{Condition, Node, TokenKind};

use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;

/// Expression parsing. There is a single additive precedence tier.
pub(crate) trait ExpressionParser {
    fn parse_expr(&mut self) -> ParseResult<Node>;
    fn parse_condition(&mut self) -> ParseResult<Condition>;
}

impl ExpressionParser for Parser {
    fn parse_expr(&mut self) -> ParseResult<Node> {
        let mut left = self.parse_term()?;

        // Left-associative: 1 + 2 - 3 folds to (1 + 2) - 3
        while self.current()?.kind == TokenKind::Arithmetic {
            let op = self.bump()?;
            let right = self.parse_term()?;
            left = Node::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_condition(&mut self) -> ParseResult<Condition> {
        let left = self.parse_expr()?;

        let op = self.current()?;
        if op.kind != TokenKind::Comparison {
            return Err(ParseError::syntax(op.line, "Expected comparison operator"));
        }
        let op = self.bump()?;

        let right = self.parse_expr()?;
        Ok(Condition {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }
}

impl Parser {
    // No multiplicative operators, so a term is just a factor
    fn parse_term(&mut self) -> ParseResult<Node> {
        self.parse_factor()
    }

    fn parse_factor(&mut self) -> ParseResult<Node> {
        let (kind, line) = {
            let tok = self.current()?;
            (tok.kind, tok.line)
        };
        match kind {
            TokenKind::IntLiteral => Ok(Node::NumberLiteral(self.bump()?)),
            TokenKind::StringLiteral => Ok(Node::StringLiteral(self.bump()?)),
            TokenKind::Identifier => Ok(Node::Identifier(self.bump()?)),
            TokenKind::OpenParenthesis => {
                self.advance();
                let expr = self.nested(|p| p.parse_expr())?;
                self.expect(")", "Expected )")?;
                Ok(expr)
            }
            _ => Err(ParseError::syntax(line, "Syntax Error: Expected value")),
        }
    }
}
