//! Stage-dispatch pipeline driver.
//!
//! Mirrors the reference driver's `Session::compile` /
//! `run_pipeline` / `emit_output` split: reading the source is its own
//! fallible step, running the pipeline stops as soon as the requested stage
//! has produced its output, and emission is a separate step that knows how
//! to print a dump versus write a file.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::{Config, Stage};
use crate::error::{DriverError, Result};

pub struct Session {
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session { config }
    }

    /// Runs the pipeline through `self.config.stage` and returns the exit
    /// code the process should use (0 on success, nonzero if `--run` was
    /// requested and the built executable exited nonzero).
    pub fn compile(&self) -> Result<i32> {
        let source_text = std::fs::read_to_string(&self.config.source)
            .map_err(|e| DriverError::ReadSource(self.config.source.clone(), e))?;
        debug!(path = %self.config.source.display(), "read source");

        let tokens = tcc_lex::Lexer::tokenize(&source_text)?;
        debug!(count = tokens.len(), "lexed tokens");
        if self.config.stage == Stage::Lex {
            for token in &tokens {
                println!("Token: {token}");
            }
            return Ok(0);
        }

        let ast = tcc_parse::Parser::new(tokens).parse()?;
        debug!("parsed ast");
        if self.config.stage == Stage::Parse {
            println!("{ast}");
            return Ok(0);
        }

        let tacky = tcc_tacky::generate(&ast);
        debug!("generated tacky ir");
        if self.config.stage == Stage::Tacky {
            println!("{tacky}");
            return Ok(0);
        }

        let asm_program = tcc_asmgen::generate(&tacky);
        debug!("generated assembly");
        let rendered = tcc_asmgen::render(&asm_program)?;

        let asm_path = self.output_path();
        std::fs::write(&asm_path, &rendered)
            .map_err(|e| DriverError::WriteOutput(asm_path.clone(), e))?;
        info!(path = %asm_path.display(), "wrote assembly");

        if self.config.build || self.config.run {
            let exe_path = asm_path.with_extension("");
            let linker = tcc_asmgen::Linker::new();
            linker.assemble_and_link(&asm_path, &exe_path)?;
            info!(path = %exe_path.display(), "built executable");

            if self.config.run {
                let status = std::process::Command::new(&exe_path)
                    .status()
                    .map_err(|e| DriverError::RunFailed(exe_path.clone(), e))?;
                return Ok(status.code().unwrap_or(1));
            }
        }

        Ok(0)
    }

    fn output_path(&self) -> PathBuf {
        self.config
            .output
            .clone()
            .unwrap_or_else(|| tcc_asmgen::asm_filename(&self.config.source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_source(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(".c").tempfile().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn codegen_stage_writes_asm_file() {
        let src = write_source("int main(void) { return 2; }");
        let config = Config {
            source: src.path().to_path_buf(),
            stage: Stage::Codegen,
            output: None,
            build: false,
            run: false,
        };
        let session = Session::new(config);
        assert_eq!(session.compile().unwrap(), 0);

        let asm_path = src.path().with_extension("s");
        let text = std::fs::read_to_string(&asm_path).unwrap();
        assert!(text.contains("movl $2, %eax"));
        std::fs::remove_file(asm_path).ok();
    }

    #[test]
    fn invalid_source_surfaces_syntax_error() {
        let src = write_source("2foo;");
        let config = Config {
            source: src.path().to_path_buf(),
            stage: Stage::Lex,
            output: None,
            build: false,
            run: false,
        };
        let session = Session::new(config);
        let err = session.compile().unwrap_err();
        assert!(matches!(err, DriverError::Syntax(_)));
    }
}
