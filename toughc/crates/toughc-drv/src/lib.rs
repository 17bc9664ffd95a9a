//! toughc-drv - Compiler Driver
//!
//! ============================================================================
//! PIPELINE
//! ============================================================================
//!
//! The driver owns the compilation stages and the JIT, and is the only
//! surface external callers talk to:
//!
//! ```text
//! Source (.tough)
//!        │
//!        ▼
//!   [toughc-lex] ──▶ Token stream
//!        │
//!        ▼
//!   [toughc-par] ──▶ Program AST
//!        │
//!        ▼
//!   [toughc-gen] ──▶ LLVM module
//!        │
//!        ▼
//!   [JIT] ──▶ exit code of the compiled program
//! ```
//!
//! Each [`Compiler::compile`] call runs a fresh lexer, parser, and code
//! generator; no state is shared between compilations beyond the one-time
//! native target initialization performed at construction and the LLVM
//! context owned by the driver. Everything is single-threaded and
//! synchronous.
//!
//! EXECUTION:
//! ----------
//! [`Compiler::run`] deliberately re-materializes the module through the
//! textual IR parser before execution: emitting and re-parsing enforces IR
//! validity early and keeps the executed module independent of the builder
//! that produced it. The re-parsed module is verified, optimized at O2 on a
//! best-effort basis (a target without optimization support is tolerated
//! silently), and handed to a JIT execution engine; `main` is looked up and
//! invoked as a nullary function returning i32.
//!
//! Note that a compiled program whose source ends with the explicit closing
//! bookend (or a throw) calls the C runtime's `exit` from JITed code, which
//! terminates the host process with that status. `run` only returns for
//! programs that fall off the end of `main`.
//!
//! ERRORS:
//! -------
//! Phase errors ([`toughc_lex::LexError`], [`toughc_par::ParseError`],
//! [`toughc_gen::CodeGenError`]) abort the compilation and surface through
//! [`CompileError`] with their source line intact. The driver never
//! recovers; the CLI prints the message to stderr and exits 1.

use std::fs;
use std::path::{Path, PathBuf};

use inkwell::context::Context;
use inkwell::memory_buffer::MemoryBuffer;
use inkwell::module::Module;
use inkwell::passes::PassBuilderOptions;
use inkwell::targets::{CodeModel, InitializationConfig, RelocMode, Target, TargetMachine};
use inkwell::OptimizationLevel;
use thiserror::Error;
use tracing::{debug, warn};

use toughc_gen::CodeGen;
use toughc_lex::Lexer;
use toughc_par::Parser;

/// Error type for the driver.
///
/// Wraps the three phase errors and adds the driver's own failure modes:
/// source I/O, IR that the host parser or verifier rejects, and JIT setup.
#[derive(Debug, Error)]
pub enum CompileError {
    /// Lexical error.
    #[error(transparent)]
    Lex(#[from] toughc_lex::LexError),

    /// Syntax error.
    #[error(transparent)]
    Parse(#[from] toughc_par::ParseError),

    /// Code generation error.
    #[error(transparent)]
    CodeGen(#[from] toughc_gen::CodeGenError),

    /// Source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The emitted IR was rejected when re-parsed or verified.
    #[error("invalid IR: {0}")]
    InvalidIr(String),

    /// The JIT engine could not be created or `main` was not found.
    #[error("JIT error: {0}")]
    Jit(String),
}

/// Result type alias for driver operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// The TOUGH compiler driver.
///
/// Owns the LLVM context for the lifetime of the driver; emitted modules
/// borrow it, so they cannot outlive the `Compiler` that produced them.
pub struct Compiler {
    context: Context,
}

impl Compiler {
    /// Creates a driver, initializing the native JIT target once.
    pub fn new() -> Self {
        if let Err(message) = Target::initialize_native(&InitializationConfig::default()) {
            warn!("native target initialization failed: {message}");
        }
        Self {
            context: Context::create(),
        }
    }

    /// Compiles source text into an LLVM module: lex → parse → codegen.
    pub fn compile(&self, source: &str) -> Result<Module<'_>> {
        let tokens = Lexer::new(source).tokenize()?;
        debug!(tokens = tokens.len(), "lexed");

        let program = Parser::new(tokens).parse()?;
        debug!(statements = program.statements.len(), "parsed");

        let module = CodeGen::new(&self.context).generate(&program)?;
        debug!("generated IR module");
        Ok(module)
    }

    /// Compiles source text and returns the textual IR.
    pub fn emit_ir(&self, source: &str) -> Result<String> {
        Ok(self.compile(source)?.print_to_string().to_string())
    }

    /// Compiles, verifies, optimizes, and executes `main`, returning its
    /// 32-bit exit code.
    pub fn run(&self, source: &str) -> Result<i32> {
        let ir = self.emit_ir(source)?;

        let buffer = MemoryBuffer::create_from_memory_range_copy(ir.as_bytes(), "tough_module");
        let module = self
            .context
            .create_module_from_ir(buffer)
            .map_err(|e| CompileError::InvalidIr(e.to_string()))?;
        module
            .verify()
            .map_err(|e| CompileError::InvalidIr(e.to_string()))?;

        self.optimize(&module);

        let engine = module
            .create_jit_execution_engine(OptimizationLevel::Default)
            .map_err(|e| CompileError::Jit(e.to_string()))?;
        let main = unsafe { engine.get_function::<unsafe extern "C" fn() -> i32>("main") }
            .map_err(|e| CompileError::Jit(e.to_string()))?;

        debug!("executing main");
        Ok(unsafe { main.call() })
    }

    /// Reads a UTF-8 source file and delegates to [`Compiler::run`].
    pub fn run_file(&self, path: &Path) -> Result<i32> {
        let source = fs::read_to_string(path).map_err(|e| CompileError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.run(&source)
    }

    /// Reads a UTF-8 source file and delegates to [`Compiler::emit_ir`].
    pub fn emit_ir_file(&self, path: &Path) -> Result<String> {
        let source = fs::read_to_string(path).map_err(|e| CompileError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.emit_ir(&source)
    }

    /// Best-effort O2 pass pipeline. A host without a usable target
    /// machine, or a pass-pipeline failure, leaves the module as-is.
    fn optimize(&self, module: &Module) {
        let triple = TargetMachine::get_default_triple();
        let Ok(target) = Target::from_triple(&triple) else {
            return;
        };
        let Some(machine) = target.create_target_machine(
            &triple,
            "generic",
            "",
            OptimizationLevel::Default,
            RelocMode::Default,
            CodeModel::Default,
        ) else {
            return;
        };
        if let Err(message) = module.run_passes("default<O2>", &machine, PassBuilderOptions::create())
        {
            debug!("optimization skipped: {}", message.to_string());
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
