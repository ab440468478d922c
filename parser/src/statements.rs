use model::{Block, Node, TokenKind};

use crate::error::{ParseError, ParseResult};
use crate::expressions::ExpressionParser;
use crate::parser::Parser;

/// Statement parsing functionality
pub(crate) trait StatementParser {
    /// Parse statements until end of input or a closing brace, which is left
    /// for the caller to consume.
    fn parse_statements(&mut self) -> ParseResult<Block>;
}

impl StatementParser for Parser {
    fn parse_statements(&mut self) -> ParseResult<Block> {
        let mut statements = Vec::new();

        loop {
            let (kind, line) = {
                let tok = self.current()?;
                (tok.kind, tok.line)
            };
            let stmt = match kind {
                TokenKind::End | TokenKind::CloseBrace => break,
                TokenKind::If => self.parse_if_stmt()?,
                TokenKind::While => self.parse_while_stmt()?,
                TokenKind::Int | TokenKind::StringKw => self.parse_declaration()?,
                TokenKind::Print | TokenKind::Prints => self.parse_print_stmt()?,
                TokenKind::Identifier => self.parse_assignment()?,
                _ => return Err(ParseError::syntax(line, "Syntax Error")),
            };
            statements.push(stmt);
        }

        Ok(Block { statements })
    }
}

impl Parser {
    fn parse_declaration(&mut self) -> ParseResult<Node> {
        let type_keyword = self.bump()?;

        let name = self.current()?;
        if name.kind != TokenKind::Identifier {
            return Err(ParseError::syntax(name.line, "Expected variable name"));
        }
        let name = self.bump()?;

        let init = if self.current()?.kind == TokenKind::Assign {
            self.advance();
            Some(Box::new(self.parse_expr()?))
        } else {
            None
        };

        self.expect(";", "Missing ;")?;
        Ok(Node::Declaration {
            type_keyword,
            name,
            init,
        })
    }

    fn parse_assignment(&mut self) -> ParseResult<Node> {
        let target = self.bump()?;
        self.expect("=", "Missing =")?;
        let expr = self.parse_expr()?;
        self.expect(";", "Missing ;")?;
        Ok(Node::Assignment {
            target,
            expr: Box::new(expr),
        })
    }

    fn parse_print_stmt(&mut self) -> ParseResult<Node> {
        let keyword = self.bump()?;
        self.expect("(", &format!("Missing ( after {}", keyword.text))?;
        let expr = self.parse_expr()?;
        self.expect(")", &format!("Missing ) after {} expression", keyword.text))?;
        self.expect(";", &format!("Missing ; after {}", keyword.text))?;
        Ok(Node::Print {
            keyword,
            expr: Box::new(expr),
        })
    }

    fn parse_if_stmt(&mut self) -> ParseResult<Node> {
        let keyword = self.bump()?;
        self.expect("(", "Missing ( after if")?;
        let condition = self.parse_condition()?;
        self.expect(")", "Missing ) after if condition")?;

        self.expect("{", "Missing { after if")?;
        let then_branch = self.nested(|p| p.parse_statements())?;
        self.expect("}", "Missing } after if block")?;

        let else_branch = if self.at_text("else")? {
            self.advance();
            self.expect("{", "Missing { after else")?;
            let block = self.nested(|p| p.parse_statements())?;
            self.expect("}", "Missing } after else block")?;
            Some(block)
        } else {
            None
        };

        Ok(Node::If {
            keyword,
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_while_stmt(&mut self) -> ParseResult<Node> {
        let keyword = self.bump()?;
        self.expect("(", "Missing ( after while")?;
        let condition = self.parse_condition()?;
        self.expect(")", "Missing ) after while condition")?;

        self.expect("{", "Missing { after while")?;
        let body = self.nested(|p| p.parse_statements())?;
        self.expect("}", "Missing } after while block")?;

        Ok(Node::While {
            keyword,
            condition,
            body,
        })
    }
}
