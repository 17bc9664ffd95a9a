//! End-to-end CLI tests.
//!
//! These drive the real `toughc` binary over temporary source files and
//! check the observable behavior: stdout of the executed program, process
//! exit codes, the IR banner, and the interactive shell.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn toughc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_toughc"))
}

fn source_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".tough")
        .tempfile()
        .expect("temp file");
    file.write_all(content.as_bytes()).expect("write source");
    file
}

#[test]
fn prints_a_string_literal() {
    let file = source_file("「Hello」 しゃあっ\n");
    toughc()
        .arg(file.path())
        .assert()
        .success()
        .stdout("Hello\n");
}

#[test]
fn prints_an_assigned_variable() {
    let file = source_file("xだ xが正体を現すぞ\n42 を継ぐ x\nx しゃあっ\n");
    toughc().arg(file.path()).assert().success().stdout("42\n");
}

#[test]
fn while_loop_counts_to_three() {
    let file = source_file(
        "xだ xが正体を現すぞ\n\
         0 を継ぐ x\n\
         禁断の\"x に及ばない 3 度打ち\" {\n\
         x 進化したと言うてくれや\n\
         }\n\
         x しゃあっ\n",
    );
    toughc().arg(file.path()).assert().success().stdout("3\n");
}

#[test]
fn if_branch_taken_when_condition_holds() {
    let file = source_file(
        "xだ xが正体を現すぞ\n\
         1 を継ぐ x\n\
         なにっ (x ガチンコ 1) {\n\
         「yes」 しゃあっ\n\
         }\n",
    );
    toughc().arg(file.path()).assert().success().stdout("yes\n");
}

#[test]
fn elif_chain_selects_the_matching_arm() {
    let file = source_file(
        "xだ xが正体を現すぞ\n\
         5 を継ぐ x\n\
         なにっ (x ガチンコ 1) {\n\
         「one」 しゃあっ\n\
         }\n\
         いやちょっとまてよ (x ガチンコ 5) {\n\
         「five」 しゃあっ\n\
         }\n\
         う　あ　あ　あ　あ（ＰＣ書き文字） {\n\
         「other」 しゃあっ\n\
         }\n",
    );
    toughc().arg(file.path()).assert().success().stdout("five\n");
}

#[test]
fn throw_exits_with_status_one_and_no_output() {
    let file = source_file("はっきり言ってそれって病気だから お前死ぬよ\n");
    toughc()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stdout("");
}

#[test]
fn bookended_program_runs_and_exits_zero() {
    let file = source_file(
        "我が名は　尊鷹\n\
         （挨拶のコメント）ここから本編\n\
         10 を継ぐ n\n\
         n （哀）\n\
         n しゃあっ\n\
         逃げるんかいっ\n",
    );
    toughc().arg(file.path()).assert().success().stdout("9\n");
}

#[test]
fn scanf_reads_an_integer_from_stdin() {
    let file = source_file("x を教えてくれよ\nx しゃあっ\n");
    toughc()
        .arg(file.path())
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn modulo_decides_parity() {
    let file = source_file(
        "6 を継ぐ x\n\
         なにっ (x % 2 ガチンコ 0) {\n\
         「even」 しゃあっ\n\
         }\n\
         う　あ　あ　あ　あ（ＰＣ書き文字） {\n\
         「odd」 しゃあっ\n\
         }\n",
    );
    toughc().arg(file.path()).assert().success().stdout("even\n");
}

#[test]
fn emit_ir_prints_the_banner_and_module() {
    let file = source_file("「Hello」 しゃあっ\n");
    toughc()
        .arg("--emit-ir")
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--- LLVM IR ---")
                .and(predicate::str::contains("define i32 @main")),
        );
}

#[test]
fn compile_error_exits_one_with_message() {
    let file = source_file("これは構文ではない\n");
    toughc()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn undefined_variable_reports_its_line() {
    let file = source_file("「ok」 しゃあっ\ny しゃあっ\n");
    toughc()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn missing_file_exits_one() {
    toughc()
        .arg("no-such-file.tough")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn emit_ir_without_a_file_is_an_error() {
    toughc()
        .arg("--emit-ir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--emit-ir"));
}

#[test]
fn cli_help_mentions_usage() {
    toughc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn repl_runs_a_single_line() {
    toughc()
        .write_stdin("「hi」 しゃあっ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("tough>").and(predicate::str::contains("hi")));
}

#[test]
fn repl_accumulates_block_lines() {
    toughc()
        .write_stdin("なにっ (1) {\n「block」 しゃあっ\n}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("...>").and(predicate::str::contains("block")));
}

#[test]
fn repl_survives_a_compile_error() {
    toughc()
        .write_stdin("意味のない行\n「next」 しゃあっ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("next"))
        .stderr(predicate::str::contains("error"));
}

#[test]
fn repl_quits_on_the_closing_bookend() {
    toughc()
        .write_stdin("逃げるんかいっ\n")
        .assert()
        .success();
}
