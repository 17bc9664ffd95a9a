//! Code generation tests.
//!
//! These run the front end over small sources, then check the emitted IR
//! both structurally (the verifier accepts it) and textually (expected
//! blocks, calls, and constants appear).

use inkwell::context::Context;
use inkwell::module::Module;
use toughc_lex::Lexer;
use toughc_par::Parser;

use crate::{CodeGen, CodeGenError};

fn compile<'ctx>(context: &'ctx Context, source: &str) -> crate::Result<Module<'ctx>> {
    let tokens = Lexer::new(source).tokenize().expect("lexing failed");
    let program = Parser::new(tokens).parse().expect("parsing failed");
    CodeGen::new(context).generate(&program)
}

fn emit(source: &str) -> String {
    let context = Context::create();
    let module = compile(&context, source).expect("codegen failed");
    module.print_to_string().to_string()
}

fn assert_verifies(source: &str) {
    let context = Context::create();
    let module = compile(&context, source).expect("codegen failed");
    if let Err(message) = module.verify() {
        panic!("verifier rejected module:\n{}", message.to_string());
    }
}

#[test]
fn empty_program_returns_zero() {
    let ir = emit("");
    assert!(ir.contains("define i32 @main"));
    assert!(ir.contains("ret i32 0"));
    assert_verifies("");
}

#[test]
fn hello_world_goes_through_printf() {
    let ir = emit("「Hello」 しゃあっ");
    assert!(ir.contains("declare i32 @printf(ptr, ...)"));
    assert!(ir.contains("Hello"));
    assert!(ir.contains("@.str."));
    assert_verifies("「Hello」 しゃあっ");
}

#[test]
fn integer_print_uses_lld_format() {
    let ir = emit("42 しゃあっ");
    assert!(ir.contains("%lld"));
    assert!(ir.contains("i64 42"));
}

#[test]
fn declare_zero_initializes_the_slot() {
    let ir = emit("xだ xが正体を現すぞ");
    assert!(ir.contains("alloca i64"));
    assert!(ir.contains("store i64 0"));
}

#[test]
fn assign_then_print_loads_the_slot() {
    let src = "xだ xが正体を現すぞ\n42 を継ぐ x\nx しゃあっ";
    let ir = emit(src);
    assert!(ir.contains("store i64 42"));
    assert!(ir.contains("load i64"));
    assert_verifies(src);
}

#[test]
fn input_goes_through_scanf() {
    let ir = emit("x を教えてくれよ\nx しゃあっ");
    assert!(ir.contains("declare i32 @scanf(ptr, ...)"));
    assert!(ir.contains("%lld"));
}

#[test]
fn while_loop_has_cond_body_merge_blocks() {
    let src = "xだ xが正体を現すぞ\n\
               0 を継ぐ x\n\
               禁断の\"x に及ばない 3 度打ち\" {\n\
               x 進化したと言うてくれや\n\
               }\n\
               x しゃあっ";
    let ir = emit(src);
    assert!(ir.contains("while.cond"));
    assert!(ir.contains("while.body"));
    assert!(ir.contains("while.merge"));
    assert_verifies(src);
}

#[test]
fn if_elif_else_threads_false_edges() {
    let src = "xだ xが正体を現すぞ\n\
               5 を継ぐ x\n\
               なにっ (x ガチンコ 1) {\n\
               「one」 しゃあっ\n\
               }\n\
               いやちょっとまてよ (x ガチンコ 5) {\n\
               「five」 しゃあっ\n\
               }\n\
               う　あ　あ　あ　あ（ＰＣ書き文字） {\n\
               「other」 しゃあっ\n\
               }";
    let ir = emit(src);
    assert!(ir.contains("if.then"));
    assert!(ir.contains("elif.cond.0"));
    assert!(ir.contains("elif.body.0"));
    assert!(ir.contains("if.else"));
    assert!(ir.contains("if.merge"));
    assert_verifies(src);
}

#[test]
fn if_without_else_falls_to_merge() {
    let src = "なにっ (1) {\n「yes」 しゃあっ\n}";
    let ir = emit(src);
    assert!(ir.contains("if.then"));
    assert!(ir.contains("if.merge"));
    assert!(!ir.contains("if.else"));
    assert_verifies(src);
}

#[test]
fn comparisons_extend_to_i64() {
    let ir = emit("1 ガチンコ 2 しゃあっ");
    assert!(ir.contains("icmp eq i64"));
    assert!(ir.contains("zext i1"));
}

#[test]
fn remainder_uses_srem() {
    let ir = emit("7 % 2 しゃあっ");
    assert!(ir.contains("srem"));
}

#[test]
fn nested_comparison_feeds_condition() {
    // (x ガチンコ 1) ガチンコ 0 - a comparison result compared again.
    let src = "0 を継ぐ x\n(x ガチンコ 1) ガチンコ 0 しゃあっ";
    let ir = emit(src);
    assert_eq!(ir.matches("icmp eq i64").count(), 2);
    assert_verifies(src);
}

#[test]
fn float_literal_is_truncated() {
    let ir = emit("3.9 しゃあっ");
    assert!(ir.contains("i64 3"));
    assert!(!ir.contains("double"));
}

#[test]
fn program_end_exits_zero_and_keeps_blocks_valid() {
    let src = "逃げるんかいっ\n「dead」 しゃあっ";
    let ir = emit(src);
    assert!(ir.contains("call void @exit(i32 0)"));
    assert!(ir.contains("post.exit"));
    assert_verifies(src);
}

#[test]
fn throw_exits_one() {
    let ir = emit("はっきり言ってそれって病気だから お前死ぬよ");
    assert!(ir.contains("call void @exit(i32 1)"));
    assert!(ir.contains("ret i32 1"));
    assert_verifies("はっきり言ってそれって病気だから お前死ぬよ");
}

#[test]
fn function_gets_own_scope_and_implicit_return() {
    let src = "自分たちの手で作るから尊いんだ foo が (a, b)るんだ {\n\
               a しゃあっ\n\
               }\n\
               「done」 しゃあっ";
    let ir = emit(src);
    assert!(ir.contains("define i64 @foo(i64 %a, i64 %b)"));
    assert!(ir.contains("ret i64 0"));
    assert_verifies(src);
}

#[test]
fn exit_inside_a_function_matches_its_return_type() {
    let src = "自分たちの手で作るから尊いんだ die が (a)るんだ {\n\
               はっきり言ってそれって病気だから お前死ぬよ\n\
               }";
    let ir = emit(src);
    assert!(ir.contains("ret i64 1"));
    assert_verifies(src);
}

#[test]
fn function_body_cannot_see_caller_variables() {
    let src = "xだ xが正体を現すぞ\n\
               自分たちの手で作るから尊いんだ foo が (a)るんだ {\n\
               x しゃあっ\n\
               }";
    let context = Context::create();
    let err = compile(&context, src).unwrap_err();
    assert!(matches!(
        err,
        CodeGenError::UndefinedVariable { line: 3, .. }
    ));
}

#[test]
fn caller_scope_is_restored_after_function() {
    let src = "xだ xが正体を現すぞ\n\
               自分たちの手で作るから尊いんだ foo が (a)るんだ {\n\
               a しゃあっ\n\
               }\n\
               x しゃあっ";
    assert_verifies(src);
}

#[test]
fn undefined_variable_read_is_an_error() {
    let context = Context::create();
    let err = compile(&context, "y しゃあっ").unwrap_err();
    assert!(matches!(
        err,
        CodeGenError::UndefinedVariable { line: 1, .. }
    ));
}

#[test]
fn increment_of_undeclared_name_is_an_error() {
    // A later assignment would have created the slot, but increment must
    // not.
    let src = "x 進化したと言うてくれや\n1 を継ぐ x";
    let context = Context::create();
    let err = compile(&context, src).unwrap_err();
    assert!(matches!(
        err,
        CodeGenError::UndefinedVariable { line: 1, .. }
    ));
}

#[test]
fn decrement_of_undeclared_name_is_an_error() {
    let context = Context::create();
    let err = compile(&context, "x （哀）").unwrap_err();
    assert!(matches!(err, CodeGenError::UndefinedVariable { .. }));
}

#[test]
fn string_outside_print_is_an_error() {
    let context = Context::create();
    let err = compile(&context, "「a」 を継ぐ x").unwrap_err();
    assert!(matches!(err, CodeGenError::StringOutsidePrint { line: 1 }));
}

#[test]
fn string_constants_get_deterministic_names() {
    let ir = emit("「a」 しゃあっ\n「b」 しゃあっ");
    assert!(ir.contains(".str.1"));
    assert!(ir.contains(".str.2"));
    assert!(ir.contains(".str.3"));
    assert!(ir.contains(".str.4"));
}

#[test]
fn compiling_twice_is_deterministic() {
    let src = "xだ xが正体を現すぞ\n\
               3 を継ぐ x\n\
               なにっ (x % 2 ガチンコ 1) {\n\
               「odd」 しゃあっ\n\
               }\n\
               x しゃあっ";
    assert_eq!(emit(src), emit(src));
}
