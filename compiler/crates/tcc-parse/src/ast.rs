//! The abstract syntax tree for the supported C subset.
//!
//! A program is exactly one function returning `int`, whose body is exactly
//! one `return` statement over an expression built from integer literals and
//! the two unary operators `~` (bitwise complement) and `-` (arithmetic
//! negation). The `Display` impls below reproduce the tree's canonical debug
//! rendering, which several tests assert against verbatim.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `~e`, bitwise complement.
    Complement,
    /// `-e`, arithmetic negation.
    Negate,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Complement => write!(f, "Complement"),
            UnaryOp::Negate => write!(f, "Negate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exp {
    /// An integer literal, kept as its original digit string.
    Constant(String),
    /// A unary operator applied to a nested expression.
    Unary(UnaryOp, Box<Exp>),
}

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exp::Constant(digits) => write!(f, "Constant({digits})"),
            Exp::Unary(op, inner) => write!(f, "{op}({inner})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// The function body's sole statement: `return <exp>;`.
    Return(Exp),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Return(e) => write!(f, "Return({e})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub body: Statement,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Function(\n  name=\"{}\",\n  body={}\n)",
            self.name, self.body
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub function: Function,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indented = self.function.to_string().replace('\n', "\n  ");
        write!(f, "Program(\n  {indented}\n)")
    }
}
