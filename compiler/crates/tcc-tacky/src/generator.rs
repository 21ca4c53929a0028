//! AST to Tacky IR lowering.
//!
//! A single stateful walk per function: an accumulator for emitted
//! instructions, and a monotonic counter that mints temporaries named
//! `<fnName>.<n>`. Both are local to one function's generation, never shared
//! across functions.

use crate::tac;
use tcc_parse::{self as ast, Exp};

struct Generator {
    fn_name: String,
    temp_counter: u32,
    instructions: Vec<tac::Instruction>,
}

impl Generator {
    fn new(fn_name: String) -> Self {
        Generator {
            fn_name,
            temp_counter: 0,
            instructions: Vec::new(),
        }
    }

    fn new_temp(&mut self) -> String {
        let name = format!("{}.{}", self.fn_name, self.temp_counter);
        self.temp_counter += 1;
        name
    }

    fn convert_exp(&mut self, exp: &Exp) -> tac::Val {
        match exp {
            Exp::Constant(digits) => tac::Val::Constant(digits.clone()),
            Exp::Unary(op, inner) => {
                let src = self.convert_exp(inner);
                let dst = tac::Val::Var(self.new_temp());
                self.instructions.push(tac::Instruction::Unary {
                    op: map_unop(*op),
                    src,
                    dst: dst.clone(),
                });
                dst
            }
        }
    }

    fn convert_statement(&mut self, stmt: &ast::Statement) {
        match stmt {
            ast::Statement::Return(exp) => {
                let v = self.convert_exp(exp);
                self.instructions.push(tac::Instruction::Return(v));
            }
        }
    }
}

fn map_unop(op: ast::UnaryOp) -> tac::UnaryOp {
    match op {
        ast::UnaryOp::Complement => tac::UnaryOp::Complement,
        ast::UnaryOp::Negate => tac::UnaryOp::Negate,
    }
}

/// Lowers a whole AST program into a Tacky IR program.
pub fn generate(program: &ast::Program) -> tac::Program {
    let function = &program.function;
    let mut gen = Generator::new(function.name.clone());
    gen.convert_statement(&function.body);
    tac::Program {
        function: tac::Function {
            name: function.name.clone(),
            body: gen.instructions,
        },
    }
}
