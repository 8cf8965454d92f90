//! # Formatter
//!
//! Canonical re-formatting of a parsed program: four-space indentation,
//! one statement per line, blocks closed with `fim`, spaces around infix
//! operators. The structural keywords are emitted in their accented
//! spellings (`até`, `senão`); operators and literals keep the spelling
//! they had in the source.

mod context;

pub use context::FormatterContext;

use crate::ast::{
    operator_needs_space, ArrayLiteral, BlockStatement, CallExpression, Expression,
    FunctionLiteral, HashLiteral, IfExpression, IndexExpression, InfixExpression,
    PrefixExpression, Program, Statement,
};

pub trait Format {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error>;
}

/// Format a program with the default style.
pub fn format_program(program: &Program) -> Result<String, std::fmt::Error> {
    let mut ctx = FormatterContext::new();
    program.format(&mut ctx)?;
    Ok(ctx.output)
}

impl Format for Program {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error> {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                ctx.write_newline()?;
            }
            statement.format(ctx)?;
        }
        Ok(())
    }
}

impl Format for Statement {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error> {
        match self {
            Statement::Var(var) => {
                ctx.write_indent()?;
                ctx.write(var.declared_type())?;
                ctx.write(" ")?;
                ctx.write(&var.name.value)?;
                ctx.write(" = ")?;
                var.value.format(ctx)
            }
            Statement::Return(statement) => {
                ctx.write_indent()?;
                ctx.write("retorne ")?;
                statement.value.format(ctx)
            }
            Statement::For(statement) => {
                ctx.write_indent()?;
                ctx.write("para numero ")?;
                ctx.write(&statement.variable.value)?;
                ctx.write(" = ")?;
                statement.start.format(ctx)?;
                ctx.write(" até ")?;
                statement.end.format(ctx)?;
                ctx.write_newline()?;

                ctx.indent();
                statement.body.format(ctx)?;
                ctx.dedent();

                ctx.write_newline()?;
                ctx.write_indent()?;
                ctx.write("fim")
            }
            Statement::Include(statement) => {
                ctx.write_indent()?;
                ctx.write("sovy ")?;
                ctx.write(&statement.library.value)?;
                ctx.write(" include")
            }
            Statement::Expression(statement) => {
                ctx.write_indent()?;
                statement.expression.format(ctx)
            }
        }
    }
}

impl Format for BlockStatement {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error> {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                ctx.write_newline()?;
            }
            statement.format(ctx)?;
        }
        Ok(())
    }
}

impl Format for Expression {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error> {
        match self {
            Expression::Identifier(identifier) => ctx.write(&identifier.value),
            Expression::IntegerLiteral(literal) => ctx.write(&literal.token.literal),
            Expression::FloatLiteral(literal) => ctx.write(&literal.token.literal),
            Expression::BooleanLiteral(literal) => ctx.write(&literal.token.literal),
            Expression::StringLiteral(literal) => {
                ctx.write("\"")?;
                ctx.write(&literal.value)?;
                ctx.write("\"")
            }
            Expression::Prefix(prefix) => prefix.format(ctx),
            Expression::Infix(infix) => infix.format(ctx),
            Expression::If(expression) => expression.format(ctx),
            Expression::Function(literal) => literal.format(ctx),
            Expression::Call(call) => call.format(ctx),
            Expression::Array(literal) => literal.format(ctx),
            Expression::Hash(literal) => literal.format(ctx),
            Expression::Index(expression) => expression.format(ctx),
        }
    }
}

impl Format for PrefixExpression {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error> {
        ctx.write(&self.operator)?;
        if operator_needs_space(&self.operator) {
            ctx.write(" ")?;
        }
        self.right.format(ctx)
    }
}

impl Format for InfixExpression {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error> {
        self.left.format(ctx)?;
        ctx.write(" ")?;
        ctx.write(&self.operator)?;
        ctx.write(" ")?;
        self.right.format(ctx)
    }
}

impl Format for IfExpression {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error> {
        ctx.write("se ")?;
        self.condition.format(ctx)?;
        ctx.write_newline()?;

        ctx.indent();
        self.consequence.format(ctx)?;
        ctx.dedent();

        if let Some(alternative) = &self.alternative {
            ctx.write_newline()?;
            ctx.write_indent()?;
            ctx.write("senão")?;
            ctx.write_newline()?;

            ctx.indent();
            alternative.format(ctx)?;
            ctx.dedent();
        }

        ctx.write_newline()?;
        ctx.write_indent()?;
        ctx.write("fim")
    }
}

impl Format for FunctionLiteral {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error> {
        ctx.write("função")?;
        if let Some(name) = &self.name {
            ctx.write(" ")?;
            ctx.write(&name.value)?;
        }
        ctx.write("(")?;
        for (i, parameter) in self.parameters.iter().enumerate() {
            if i > 0 {
                ctx.write(", ")?;
            }
            ctx.write(&parameter.value)?;
        }
        ctx.write(")")?;
        ctx.write_newline()?;

        ctx.indent();
        self.body.format(ctx)?;
        ctx.dedent();

        ctx.write_newline()?;
        ctx.write_indent()?;
        ctx.write("fim")
    }
}

impl Format for CallExpression {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error> {
        self.function.format(ctx)?;
        ctx.write("(")?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                ctx.write(", ")?;
            }
            argument.format(ctx)?;
        }
        ctx.write(")")
    }
}

impl Format for ArrayLiteral {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error> {
        ctx.write("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                ctx.write(", ")?;
            }
            element.format(ctx)?;
        }
        ctx.write("]")
    }
}

impl Format for HashLiteral {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error> {
        ctx.write("{")?;
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                ctx.write(", ")?;
            }
            key.format(ctx)?;
            ctx.write(": ")?;
            value.format(ctx)?;
        }
        ctx.write("}")
    }
}

impl Format for IndexExpression {
    fn format(&self, ctx: &mut FormatterContext) -> Result<(), std::fmt::Error> {
        self.left.format(ctx)?;
        ctx.write("[")?;
        self.index.format(ctx)?;
        ctx.write("]")
    }
}
