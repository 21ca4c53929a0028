//! The three-address intermediate representation ("Tacky IR").
//!
//! Linearized so that every intermediate result has a name: a nested
//! expression becomes a flat sequence of `Instruction`s, each producing at
//! most one fresh temporary.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Val {
    Constant(String),
    Var(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Complement,
    Negate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Return(Val),
    Unary { op: UnaryOp, src: Val, dst: Val },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub body: Vec<Instruction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub function: Function,
}

use std::fmt;

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Val::Constant(digits) => write!(f, "Constant({digits})"),
            Val::Var(name) => write!(f, "Var({name})"),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Complement => write!(f, "Complement"),
            UnaryOp::Negate => write!(f, "Negate"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Return(v) => write!(f, "Return({v})"),
            Instruction::Unary { op, src, dst } => write!(f, "Unary({op}, {src}, {dst})"),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Function(")?;
        writeln!(f, "  name=\"{}\",", self.name)?;
        for instr in &self.body {
            writeln!(f, "  {instr}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program(\n  {}\n)", self.function.to_string().replace('\n', "\n  "))
    }
}
