//! Tacky IR to x86-64 assembly: lowering, pseudo-register elimination, and
//! GAS-syntax emission.

mod asm;
mod emitter;
mod error;
mod linker;
mod lower;

pub use asm::{FunctionDef, Instruction, Operand, Program, Register, UnaryOp};
pub use emitter::{asm_filename, render};
pub use error::{CodeGenError, Result};
pub use linker::Linker;
pub use lower::{generate, lower, replace_pseudo_registers};
