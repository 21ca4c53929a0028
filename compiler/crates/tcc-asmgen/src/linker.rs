//! Ambient assemble-and-link convenience for the driver's `--build` flag.
//!
//! The core pipeline's contract ends at writing a `.s` file (SPEC_FULL.md
//! §4.5); turning that into a runnable executable is an extension on top,
//! grounded in the reference compiler's own linker-selection-by-target
//! split. Here there is exactly one practical choice of host tool: shell out
//! to `cc`, which assembles and links in one step and already knows the
//! platform's default linker and CRT objects.
use std::path::Path;
use std::process::Command;

use crate::error::{CodeGenError, Result};

pub struct Linker {
    cc: String,
}

impl Linker {
    pub fn new() -> Self {
        Linker {
            cc: std::env::var("CC").unwrap_or_else(|_| "cc".to_string()),
        }
    }

    /// Assembles and links `asm_path` into `output_path` by shelling out to
    /// the host C compiler driver.
    pub fn assemble_and_link(&self, asm_path: &Path, output_path: &Path) -> Result<()> {
        let status = Command::new(&self.cc)
            .arg(asm_path)
            .arg("-o")
            .arg(output_path)
            .status()
            .map_err(|e| CodeGenError::LinkFailed(e.to_string()))?;

        if !status.success() {
            return Err(CodeGenError::LinkFailed(format!(
                "{} exited with {status}",
                self.cc
            )));
        }
        Ok(())
    }
}

impl Default for Linker {
    fn default() -> Self {
        Self::new()
    }
}
