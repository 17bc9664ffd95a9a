//! Interactive shell.
//!
//! Reads lines from stdin, tracking brace depth so block statements can be
//! entered across multiple lines. Each balanced buffer is compiled and run;
//! compile errors are printed and the session keeps going. A program that
//! executes the explicit closing bookend calls `exit` from JITed code and
//! ends the whole process, which is how the shell's advertised quit phrase
//! works.

use std::io::{self, BufRead, Write};

use anyhow::Context as _;

use toughc_drv::Compiler;

const FAREWELL: &str = "逃げるんかいっ！";

/// Runs the shell until end-of-input.
pub fn run() -> anyhow::Result<()> {
    println!("==================================================");
    println!("  TOUGH {} - LLVM compiler", env!("CARGO_PKG_VERSION"));
    println!("  終了するには「逃げるんかいっ」または Ctrl-D");
    println!("==================================================");
    println!();

    let compiler = Compiler::new();
    let stdin = io::stdin();
    let mut buffer: Vec<String> = Vec::new();
    let mut brace_depth: i64 = 0;

    loop {
        let prompt = if brace_depth > 0 { "...> " } else { "tough> " };
        print!("{prompt}");
        io::stdout().flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            println!();
            println!("{FAREWELL}");
            return Ok(());
        }
        let line = line.trim_end_matches(['\n', '\r']).to_string();

        // Track brace depth so block statements span multiple lines.
        brace_depth += line.matches('{').count() as i64;
        brace_depth -= line.matches('}').count() as i64;
        buffer.push(line);

        if brace_depth > 0 {
            continue;
        }

        let source = buffer.join("\n");
        buffer.clear();
        brace_depth = 0;

        if source.trim().is_empty() {
            continue;
        }

        if let Err(error) = compiler.run(&source) {
            eprintln!("error: {error}");
        }
    }
}
