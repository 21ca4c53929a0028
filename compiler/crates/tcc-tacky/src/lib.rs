//! AST to three-address IR lowering.

mod generator;
mod tac;

pub use generator::generate;
pub use tac::{Function, Instruction, Program, UnaryOp, Val};
