//! toughc-gen - LLVM IR Code Generator
//!
//! ============================================================================
//! CODE GENERATION MODEL
//! ============================================================================
//!
//! A single pass over the AST builds one LLVM module: an exported
//! `i32 main()` holding the top-level statements, plus one `i64(i64, …)`
//! function per user definition.
//!
//! TYPES:
//! ------
//! TOUGH has exactly one value type. Every slot and every expression is a
//! 64-bit signed integer; i32 appears only at the C boundary (`main`'s
//! return, `printf`/`scanf`/`exit`). Float literals survive the front end
//! for forward compatibility but are truncated to i64 here.
//!
//! VARIABLES:
//! ----------
//! Variables live in stack slots (`alloca`) for the lifetime of their
//! enclosing function. A name → slot table is kept current while walking;
//! entering a user function swaps in a fresh table holding only the
//! parameter slots, and the caller's table is restored on exit.
//!
//! CONTROL FLOW:
//! -------------
//! Conditions are i64 values tested against zero, so comparison results
//! (zero-extended i1) and ordinary integers both work. If/elif/else lowers
//! to a chain of condition blocks whose false edges thread to the next
//! condition, the else block, or the merge block; while lowers to the
//! classic cond/body/merge diamond. Every block reached by control flow is
//! terminated before the builder leaves it; `main` gets a final `ret 0`
//! backstop, and statements after an explicit exit land in a fresh
//! unreachable block so the module stays structurally valid.
//!
//! RUNTIME INTERFACE:
//! ------------------
//! Output and input go through the host C library: `printf` with `%s\n` or
//! `%lld\n`, `scanf` with `%lld`, and `exit` for the explicit program-end
//! and throw statements. String constants become private NUL-terminated
//! globals named `.str.N` with a deterministic counter.

mod error;
mod llvm;

#[cfg(test)]
mod tests;

pub use error::{CodeGenError, Result};
pub use llvm::CodeGen;
