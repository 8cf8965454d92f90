use std::fmt::Display;

use crate::lexer::Token;

use super::{Expression, Identifier};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Statement {
    Var(VarStatement),
    Return(ReturnStatement),
    For(ForStatement),
    Include(IncludeStatement),
    Expression(ExpressionStatement),
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Var(statement) => statement.fmt(f),
            Statement::Return(statement) => statement.fmt(f),
            Statement::For(statement) => statement.fmt(f),
            Statement::Include(statement) => statement.fmt(f),
            Statement::Expression(statement) => statement.fmt(f),
        }
    }
}

/// `numero x = 5`. The token is the type keyword; the declared type is a
/// formatting tag only and is never enforced at runtime.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VarStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

impl VarStatement {
    /// The declared type as written (`numero`, `texto`, …).
    pub fn declared_type(&self) -> &str {
        &self.token.literal
    }
}

impl Display for VarStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {}", self.token.literal, self.name, self.value)
    }
}

/// `retorne <expr>`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Expression,
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "retorne {}", self.value)
    }
}

/// `para numero i = <start> até <end> … fim`, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ForStatement {
    pub token: Token,
    pub variable: Identifier,
    pub start: Expression,
    pub end: Expression,
    pub body: BlockStatement,
}

impl Display for ForStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "para numero {} = {} até {} {} fim",
            self.variable, self.start, self.end, self.body
        )
    }
}

/// `sovy <biblioteca> include`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IncludeStatement {
    pub token: Token,
    pub library: Identifier,
}

impl Display for IncludeStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sovy {} include", self.library)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.expression.fmt(f)
    }
}

/// A run of statements inside `se`/`senão`, a function body or a loop
/// body, terminated by `fim` (or `senão` for a conditional consequence).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for statement in &self.statements {
            if !first {
                write!(f, " ")?;
            }
            statement.fmt(f)?;
            first = false;
        }
        Ok(())
    }
}
