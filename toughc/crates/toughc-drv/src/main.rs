//! toughc - TOUGH compiler CLI.
//!
//! Three modes:
//! - no arguments: start the interactive shell
//! - `<file>`: compile and execute; the process exit status is the compiled
//!   program's exit status, or 1 on any compile or run error
//! - `--emit-ir <file>`: print the module's textual LLVM IR

mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use toughc_drv::Compiler;

/// Compiler and interactive shell for the TOUGH language.
#[derive(Parser, Debug)]
#[command(name = "toughc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compiler and interactive shell for the TOUGH language", long_about = None)]
struct Cli {
    /// Source file to compile and execute; omit to start the shell
    file: Option<PathBuf>,

    /// Print the textual LLVM IR instead of executing
    #[arg(long)]
    emit_ir: bool,

    /// Enable verbose phase logging
    #[arg(short, long, env = "TOUGHC_VERBOSE")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = cli.file else {
        if cli.emit_ir {
            eprintln!("error: --emit-ir requires a source file");
            return ExitCode::FAILURE;
        }
        return match repl::run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::FAILURE
            }
        };
    };

    let compiler = Compiler::new();

    if cli.emit_ir {
        return match compiler.emit_ir_file(&path) {
            Ok(ir) => {
                println!("--- LLVM IR ---");
                println!("{ir}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("error: {error}");
                ExitCode::FAILURE
            }
        };
    }

    match compiler.run_file(&path) {
        Ok(code) => ExitCode::from(code as u8),
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
