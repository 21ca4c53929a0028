//! Two-pass lowering from Tacky IR to assembly.
//!
//! Pass 1 ([`lower`]) produces symbolic assembly with `Pseudo` operands
//! standing in for not-yet-allocated storage. Pass 2
//! ([`replace_pseudo_registers`]) walks that program once, maintaining a
//! `name -> stack offset` map keyed by first sighting (the same "first
//! sighting mints a fresh slot" shape used to lower virtual registers in the
//! reference compiler this project is built from), and rewrites every
//! `Pseudo` to a `Stack` operand. The function's prologue is finally given an
//! `AllocateStack` reserving exactly as many bytes as were handed out.

use std::collections::HashMap;

use crate::asm::{self, Operand};
use tcc_tacky as tac;

fn lower_val(val: &tac::Val) -> Operand {
    match val {
        tac::Val::Constant(digits) => Operand::Imm(digits.clone()),
        tac::Val::Var(name) => Operand::Pseudo(name.clone()),
    }
}

fn lower_unop(op: tac::UnaryOp) -> asm::UnaryOp {
    match op {
        tac::UnaryOp::Complement => asm::UnaryOp::Not,
        tac::UnaryOp::Negate => asm::UnaryOp::Neg,
    }
}

/// Pass 1: lowers each Tacky instruction into its symbolic assembly
/// equivalent, leaving pseudo-registers unresolved.
pub fn lower(program: &tac::Program) -> asm::Program {
    let mut body = Vec::new();
    for instr in &program.function.body {
        match instr {
            tac::Instruction::Return(v) => {
                body.push(asm::Instruction::Mov {
                    src: lower_val(v),
                    dst: Operand::Reg(asm::Register::AX),
                });
                body.push(asm::Instruction::Ret);
            }
            tac::Instruction::Unary { op, src, dst } => {
                let dst_operand = lower_val(dst);
                body.push(asm::Instruction::Mov {
                    src: lower_val(src),
                    dst: dst_operand.clone(),
                });
                body.push(asm::Instruction::Unary {
                    op: lower_unop(*op),
                    dst: dst_operand,
                });
            }
        }
    }
    asm::Program {
        function: asm::FunctionDef {
            name: program.function.name.clone(),
            body,
        },
    }
}

struct StackAllocator {
    offsets: HashMap<String, i32>,
    next_offset: i32,
}

impl StackAllocator {
    fn new() -> Self {
        StackAllocator {
            offsets: HashMap::new(),
            next_offset: 0,
        }
    }

    fn slot_for(&mut self, name: &str) -> i32 {
        if let Some(&offset) = self.offsets.get(name) {
            return offset;
        }
        self.next_offset -= 4;
        self.offsets.insert(name.to_string(), self.next_offset);
        self.next_offset
    }

    fn rewrite(&mut self, operand: Operand) -> Operand {
        match operand {
            Operand::Pseudo(name) => Operand::Stack(self.slot_for(&name)),
            other => other,
        }
    }
}

/// Pass 2: replaces every `Pseudo` with a `Stack` slot, in order of first
/// sighting, and prepends an `AllocateStack` reserving the total.
pub fn replace_pseudo_registers(program: asm::Program) -> asm::Program {
    let mut allocator = StackAllocator::new();
    let mut body = Vec::with_capacity(program.function.body.len() + 1);

    for instr in program.function.body {
        let rewritten = match instr {
            asm::Instruction::Mov { src, dst } => asm::Instruction::Mov {
                src: allocator.rewrite(src),
                dst: allocator.rewrite(dst),
            },
            asm::Instruction::Unary { op, dst } => asm::Instruction::Unary {
                op,
                dst: allocator.rewrite(dst),
            },
            other @ (asm::Instruction::AllocateStack(_) | asm::Instruction::Ret) => other,
        };
        body.push(rewritten);
    }

    if allocator.next_offset != 0 {
        body.insert(
            0,
            asm::Instruction::AllocateStack(allocator.next_offset.unsigned_abs()),
        );
    }

    asm::Program {
        function: asm::FunctionDef {
            name: program.function.name,
            body,
        },
    }
}

/// Runs both passes, producing a program with no `Pseudo` operands left.
pub fn generate(program: &tac::Program) -> asm::Program {
    replace_pseudo_registers(lower(program))
}
