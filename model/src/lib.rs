use std::fmt;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TokenKind {
    // Keywords
    If,
    Else,
    While,
    Int,
    StringKw,
    Print,
    Prints,
    Assign, // =
    Comparison, // == != < > <= >=
    Arithmetic, // + -
    OpenParenthesis,
    CloseParenthesis,
    OpenBrace,
    CloseBrace,
    Semicolon,
    Comma,
    Identifier,
    IntLiteral,
    StringLiteral,
    End,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind, text: text.into(), line }
    }

    /// Synthetic end-of-input sentinel
    pub fn end(line: usize) -> Self {
        Self::new(TokenKind::End, "END", line)
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Comparison expression: `left <op> right`. Only ever appears as the guard of
/// an `if` or `while`.
#[derive(Debug, PartialEq, Clone)]
pub struct Condition {
    pub left: Box<Node>,
    pub op: Token,
    pub right: Box<Node>,
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Block {
    pub statements: Vec<Node>,
}

impl Block {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Node {
    NumberLiteral(Token),
    StringLiteral(Token),
    Identifier(Token),
    BinaryOp {
        left: Box<Node>,
        op: Token,
        right: Box<Node>,
    },
    Condition(Condition),
    StatementSequence(Block),
    If {
        keyword: Token,
        condition: Condition,
        then_branch: Block,
        else_branch: Option<Block>,
    },
    While {
        keyword: Token,
        condition: Condition,
        body: Block,
    },
    Print {
        keyword: Token,
        expr: Box<Node>,
    },
    Assignment {
        target: Token,
        expr: Box<Node>,
    },
    Declaration {
        type_keyword: Token,
        name: Token,
        init: Option<Box<Node>>,
    },
}

/// Variant tag of a [`Node`], for consumers that only need to know what a node is
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NodeKind {
    NumberLiteral,
    StringLiteral,
    Identifier,
    BinaryOp,
    Condition,
    StatementSequence,
    If,
    While,
    Print,
    Assignment,
    Declaration,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::NumberLiteral(_) => NodeKind::NumberLiteral,
            Node::StringLiteral(_) => NodeKind::StringLiteral,
            Node::Identifier(_) => NodeKind::Identifier,
            Node::BinaryOp { .. } => NodeKind::BinaryOp,
            Node::Condition(_) => NodeKind::Condition,
            Node::StatementSequence(_) => NodeKind::StatementSequence,
            Node::If { .. } => NodeKind::If,
            Node::While { .. } => NodeKind::While,
            Node::Print { .. } => NodeKind::Print,
            Node::Assignment { .. } => NodeKind::Assignment,
            Node::Declaration { .. } => NodeKind::Declaration,
        }
    }

    /// Direct children in source order. Tokens held by a node (operators,
    /// keywords, declared names) are not children.
    ///
    /// For `If` and `While` the list is flat: the two condition operands, then
    /// the body statements, then (for `If`) the else statements. Use
    /// [`Node::branches`] to see where the then-branch ends.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::NumberLiteral(_) | Node::StringLiteral(_) | Node::Identifier(_) => Vec::new(),
            Node::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Node::Condition(cond) => vec![cond.left.as_ref(), cond.right.as_ref()],
            Node::StatementSequence(block) => block.statements.iter().collect(),
            Node::If { condition, then_branch, else_branch, .. } => {
                let mut children = vec![condition.left.as_ref(), condition.right.as_ref()];
                children.extend(then_branch.statements.iter());
                if let Some(else_branch) = else_branch {
                    children.extend(else_branch.statements.iter());
                }
                children
            }
            Node::While { condition, body, .. } => {
                let mut children = vec![condition.left.as_ref(), condition.right.as_ref()];
                children.extend(body.statements.iter());
                children
            }
            Node::Print { expr, .. } | Node::Assignment { expr, .. } => vec![expr.as_ref()],
            Node::Declaration { init, .. } => init.iter().map(|e| e.as_ref()).collect(),
        }
    }

    /// Source line of the node's leading token
    pub fn line(&self) -> usize {
        match self {
            Node::NumberLiteral(tok) | Node::StringLiteral(tok) | Node::Identifier(tok) => tok.line,
            Node::BinaryOp { left, .. } => left.line(),
            Node::Condition(cond) => cond.left.line(),
            Node::StatementSequence(block) => block.statements.first().map_or(1, Node::line),
            Node::If { keyword, .. } | Node::While { keyword, .. } => keyword.line,
            Node::Print { keyword, .. } => keyword.line,
            Node::Assignment { target, .. } => target.line,
            Node::Declaration { type_keyword, .. } => type_keyword.line,
        }
    }

    /// Statement blocks owned by a control-flow node: the then-branch and
    /// optional else-branch of an `If`, the body of a `While`. Empty for every
    /// other node.
    pub fn branches(&self) -> (Option<&Block>, Option<&Block>) {
        match self {
            Node::If { then_branch, else_branch, .. } => (Some(then_branch), else_branch.as_ref()),
            Node::While { body, .. } => (Some(body), None),
            _ => (None, None),
        }
    }

    /// `print` terminates its output with a newline, `prints` does not
    pub fn prints_newline(&self) -> Option<bool> {
        match self {
            Node::Print { keyword, .. } => Some(keyword.kind == TokenKind::Print),
            _ => None,
        }
    }
}
