//! Textual GAS-syntax emission.
//!
//! Byte-exact layout: a `.globl` directive, the label, a hardcoded
//! push-rbp/mov-rsp-rbp prologue, the body (with the epilogue inserted
//! immediately before any `Ret`), and a trailing `.note.GNU-stack` pragma so
//! the linker does not mark the resulting executable's stack as executable.

use crate::asm::{FunctionDef, Instruction, Operand, Program, Register, UnaryOp};
use crate::error::{CodeGenError, Result};

fn render_operand(operand: &Operand) -> Result<String> {
    match operand {
        Operand::Imm(digits) => Ok(format!("${digits}")),
        Operand::Reg(Register::AX) => Ok("%eax".to_string()),
        Operand::Reg(Register::R10) => Ok("%r10d".to_string()),
        Operand::Stack(offset) => Ok(format!("{offset}(%rbp)")),
        Operand::Pseudo(name) => Err(CodeGenError::PseudoSurvivedToEmission(name.clone())),
    }
}

fn render_unop(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Not => "notl",
        UnaryOp::Neg => "negl",
    }
}

const FN_PROLOGUE: &str = "\tpushq %rbp\n\tmovq %rsp, %rbp\n";
const FN_EPILOGUE: &str = "\tmovq %rbp, %rsp\n\tpopq %rbp\n";

fn render_instruction(instr: &Instruction) -> Result<String> {
    match instr {
        Instruction::Mov { src, dst } => {
            Ok(format!("movl {}, {}", render_operand(src)?, render_operand(dst)?))
        }
        Instruction::Unary { op, dst } => {
            Ok(format!("{} {}", render_unop(*op), render_operand(dst)?))
        }
        Instruction::AllocateStack(bytes) => Ok(format!("subq ${bytes}, %rsp")),
        Instruction::Ret => Ok("ret".to_string()),
    }
}

fn render_body(body: &[Instruction]) -> Result<String> {
    let mut out = String::new();
    for instr in body {
        if matches!(instr, Instruction::Ret) {
            out.push_str(FN_EPILOGUE);
        }
        out.push('\t');
        out.push_str(&render_instruction(instr)?);
        out.push('\n');
    }
    Ok(out)
}

fn render_function(func: &FunctionDef) -> Result<String> {
    Ok(format!(
        "\t.globl {name}\n{name}:\n{prologue}{body}",
        name = func.name,
        prologue = FN_PROLOGUE,
        body = render_body(&func.body)?,
    ))
}

/// Renders a whole assembly program to its final GAS text, including the
/// trailing non-executable-stack marker.
pub fn render(program: &Program) -> Result<String> {
    let mut out = render_function(&program.function)?;
    out.push_str("\t.section .note.GNU-stack,\"\",@progbits\n");
    Ok(out)
}

/// Replaces `path`'s extension with `.s`, matching the driver's
/// stage-3 output-file convention.
pub fn asm_filename(source_path: &std::path::Path) -> std::path::PathBuf {
    source_path.with_extension("s")
}
