use std::fmt::{self, Write};

use model::{Block, Condition, Node, Token, TokenKind};

/// Box-drawing rendering of a parsed program, one node per line
pub struct AstTree<'a>(pub Option<&'a Node>);

impl fmt::Display for AstTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(root) => write_node(f, root, "", true),
            None => writeln!(f, "(empty program)"),
        }
    }
}

fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

fn indent(prefix: &str, is_last: bool) -> String {
    format!("{prefix}{}", if is_last { "    " } else { "│   " })
}

fn write_node(out: &mut impl Write, node: &Node, prefix: &str, is_last: bool) -> fmt::Result {
    write!(out, "{prefix}{}", connector(is_last))?;
    let inner = indent(prefix, is_last);

    match node {
        Node::NumberLiteral(tok) => writeln!(out, "Number: {}", tok.text),
        Node::StringLiteral(tok) => writeln!(out, "String: {}", tok.text),
        Node::Identifier(tok) => writeln!(out, "Identifier: {}", tok.text),
        Node::BinaryOp { left, op, right } => {
            writeln!(out, "BinOp ({})", op.text)?;
            write_node(out, left, &inner, false)?;
            write_node(out, right, &inner, true)
        }
        Node::StatementSequence(block) => {
            writeln!(out, "Program")?;
            write_block(out, block, &inner, true)
        }
        Node::Assignment { target, expr } => {
            writeln!(out, "Assignment (=)")?;
            write_identifier(out, target, &inner, false)?;
            write_node(out, expr, &inner, true)
        }
        Node::Declaration { type_keyword, name, init } => {
            writeln!(out, "Declaration ({})", type_keyword.text)?;
            write_identifier(out, name, &inner, init.is_none())?;
            match init {
                Some(init) => write_node(out, init, &inner, true),
                None => Ok(()),
            }
        }
        Node::Print { keyword, expr } => {
            let label = if keyword.kind == TokenKind::Prints { "Prints" } else { "Print" };
            writeln!(out, "{label}")?;
            write_node(out, expr, &inner, true)
        }
        Node::While { condition, body, .. } => {
            writeln!(out, "While")?;
            write_condition(out, condition, &inner, body.is_empty())?;
            write_block(out, body, &inner, true)
        }
        Node::If { condition, then_branch, else_branch, .. } => {
            writeln!(out, "IfStatement")?;
            let condition_is_last = then_branch.is_empty() && else_branch.is_none();
            write_condition(out, condition, &inner, condition_is_last)?;
            write_block(out, then_branch, &inner, else_branch.is_none())?;
            if let Some(else_branch) = else_branch {
                writeln!(out, "{inner}└── Else")?;
                write_block(out, else_branch, &indent(&inner, true), true)?;
            }
            Ok(())
        }
        Node::Condition(condition) => write_condition_body(out, condition, &inner),
    }
}

fn write_condition(out: &mut impl Write, condition: &Condition, prefix: &str, is_last: bool) -> fmt::Result {
    write!(out, "{prefix}{}", connector(is_last))?;
    write_condition_body(out, condition, &indent(prefix, is_last))
}

fn write_condition_body(out: &mut impl Write, condition: &Condition, inner: &str) -> fmt::Result {
    writeln!(out, "Condition ({})", condition.op.text)?;
    write_node(out, &condition.left, inner, false)?;
    write_node(out, &condition.right, inner, true)
}

fn write_identifier(out: &mut impl Write, tok: &Token, prefix: &str, is_last: bool) -> fmt::Result {
    writeln!(out, "{prefix}{}Identifier: {}", connector(is_last), tok.text)
}

// `closes_parent`: no siblings follow this block under the same parent
fn write_block(out: &mut impl Write, block: &Block, prefix: &str, closes_parent: bool) -> fmt::Result {
    let count = block.statements.len();
    for (i, stmt) in block.statements.iter().enumerate() {
        write_node(out, stmt, prefix, closes_parent && i + 1 == count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(src: &str) -> String {
        let tokens = lexer::lex(src).expect("lexing should succeed");
        let root = parser::parse_tokens(tokens).expect("parsing should succeed");
        AstTree(root.as_ref()).to_string()
    }

    #[test]
    fn render_empty_program() {
        assert_eq!(render(""), "(empty program)\n");
    }

    #[test]
    fn render_declaration() {
        let expected = "\
└── Program
    └── Declaration (int)
        ├── Identifier: x
        └── Number: 5
";
        assert_eq!(render("int x = 5;"), expected);
    }

    #[test]
    fn render_declaration_without_initializer() {
        let expected = "\
└── Program
    └── Declaration (string)
        └── Identifier: s
";
        assert_eq!(render("string s;"), expected);
    }

    #[test]
    fn render_left_nested_binop() {
        let expected = "\
└── Program
    ├── Assignment (=)
    │   ├── Identifier: x
    │   └── BinOp (-)
    │       ├── BinOp (+)
    │       │   ├── Number: 1
    │       │   └── Number: 2
    │       └── Number: 3
    └── Print
        └── String: done
";
        assert_eq!(render("x = 1 + 2 - 3;\nprint(\"done\");"), expected);
    }

    #[test]
    fn render_if_else() {
        let expected = "\
└── Program
    └── IfStatement
        ├── Condition (<)
        │   ├── Identifier: a
        │   └── Identifier: b
        ├── Print
        │   └── Identifier: a
        └── Else
            └── Prints
                └── Identifier: b
";
        assert_eq!(render("if (a < b) { print(a); } else { prints(b); }"), expected);
    }

    #[test]
    fn render_bare_condition() {
        let condition = Node::Condition(Condition {
            left: Box::new(Node::Identifier(Token::new(TokenKind::Identifier, "a", 1))),
            op: Token::new(TokenKind::Comparison, "!=", 1),
            right: Box::new(Node::NumberLiteral(Token::new(TokenKind::IntLiteral, "0", 1))),
        });
        let expected = "\
└── Condition (!=)
    ├── Identifier: a
    └── Number: 0
";
        assert_eq!(AstTree(Some(&condition)).to_string(), expected);
    }

    #[test]
    fn render_empty_while() {
        let expected = "\
└── Program
    └── While
        └── Condition (>=)
            ├── Identifier: i
            └── Number: 0
";
        assert_eq!(render("while (i >= 0) { }"), expected);
    }
}
