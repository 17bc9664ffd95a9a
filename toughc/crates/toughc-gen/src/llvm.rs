//! The AST-walking LLVM IR generator.

use std::collections::HashMap;

use inkwell::builder::Builder;
use inkwell::context::Context;
use inkwell::module::{Linkage, Module};
use inkwell::types::{BasicMetadataTypeEnum, BasicTypeEnum};
use inkwell::values::{FunctionValue, IntValue, PointerValue};
use inkwell::{AddressSpace, IntPredicate};

use toughc_par::{
    AssignStmt, BinOp, DeclareStmt, DecrementStmt, Expr, FnStmt, IfStmt, IncrementStmt, InputStmt,
    PrintStmt, Program, Stmt, WhileStmt,
};

use crate::error::{CodeGenError, Result};

/// LLVM IR generator for a TOUGH program.
///
/// One generator builds one module. The generator owns the builder and the
/// per-function variable table; [`CodeGen::generate`] consumes it and hands
/// the finished module back.
pub struct CodeGen<'ctx> {
    context: &'ctx Context,
    module: Module<'ctx>,
    builder: Builder<'ctx>,

    /// Name → stack slot for the function currently being generated.
    variables: HashMap<String, PointerValue<'ctx>>,

    printf: FunctionValue<'ctx>,
    scanf: FunctionValue<'ctx>,
    exit_fn: FunctionValue<'ctx>,

    /// Counter behind the deterministic `.str.N` constant names.
    string_counter: u32,
}

impl<'ctx> CodeGen<'ctx> {
    /// Creates a generator with the C runtime interface already declared.
    pub fn new(context: &'ctx Context) -> Self {
        let module = context.create_module("tough_module");
        let builder = context.create_builder();

        let i32_type = context.i32_type();
        let ptr_type = context.i8_type().ptr_type(AddressSpace::default());

        // i32 printf(ptr, ...) / i32 scanf(ptr, ...) / void exit(i32)
        let printf_type = i32_type.fn_type(&[ptr_type.into()], true);
        let printf = module.add_function("printf", printf_type, Some(Linkage::External));
        let scanf = module.add_function("scanf", printf_type, Some(Linkage::External));
        let exit_type = context.void_type().fn_type(&[i32_type.into()], false);
        let exit_fn = module.add_function("exit", exit_type, Some(Linkage::External));

        Self {
            context,
            module,
            builder,
            variables: HashMap::new(),
            printf,
            scanf,
            exit_fn,
            string_counter: 0,
        }
    }

    /// Generates the module for `program`.
    ///
    /// # Errors
    /// Returns the first [`CodeGenError`]; the partially built module is
    /// discarded by the caller.
    pub fn generate(mut self, program: &Program) -> Result<Module<'ctx>> {
        let i32_type = self.context.i32_type();
        let main_type = i32_type.fn_type(&[], false);
        let main = self.module.add_function("main", main_type, None);

        let entry = self.context.append_basic_block(main, "entry");
        self.builder.position_at_end(entry);

        for stmt in &program.statements {
            self.gen_stmt(stmt)?;
        }

        if self.block_is_open() {
            self.builder.build_return(Some(&i32_type.const_zero()))?;
        }

        Ok(self.module)
    }

    fn gen_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::ProgramStart { .. } | Stmt::Comment(_) => Ok(()),
            Stmt::ProgramEnd { .. } => self.gen_exit(0),
            Stmt::Throw { .. } => self.gen_exit(1),
            Stmt::Declare(s) => self.gen_declare(s),
            Stmt::Assign(s) => self.gen_assign(s),
            Stmt::Print(s) => self.gen_print(s),
            Stmt::Input(s) => self.gen_input(s),
            Stmt::Increment(s) => self.gen_increment(s),
            Stmt::Decrement(s) => self.gen_decrement(s),
            Stmt::If(s) => self.gen_if(s),
            Stmt::While(s) => self.gen_while(s),
            Stmt::Fn(s) => self.gen_fn(s),
        }
    }

    /// `exit(code)` followed by a matching return. Anything lowered after
    /// this lands in a fresh unreachable block, keeping the current block
    /// single-terminator.
    fn gen_exit(&mut self, code: u64) -> Result<()> {
        let i32_type = self.context.i32_type();
        let function = self.current_function()?;
        self.builder
            .build_call(self.exit_fn, &[i32_type.const_int(code, false).into()], "")?;

        // exit() never returns; the ret is structural and must match the
        // enclosing function's return type (i32 in main, i64 in user
        // functions).
        match function.get_type().get_return_type() {
            Some(BasicTypeEnum::IntType(int_type)) => {
                self.builder
                    .build_return(Some(&int_type.const_int(code, false)))?;
            }
            _ => {
                self.builder.build_return(None)?;
            }
        }

        let dead = self.context.append_basic_block(function, "post.exit");
        self.builder.position_at_end(dead);
        Ok(())
    }

    /// Allocates the slot and stores zero.
    fn gen_declare(&mut self, stmt: &DeclareStmt) -> Result<()> {
        let i64_type = self.context.i64_type();
        let slot = self.builder.build_alloca(i64_type, &stmt.name)?;
        self.builder.build_store(slot, i64_type.const_zero())?;
        self.variables.insert(stmt.name.clone(), slot);
        Ok(())
    }

    /// Evaluates the right-hand side, then stores; a first assignment
    /// allocates the slot.
    fn gen_assign(&mut self, stmt: &AssignStmt) -> Result<()> {
        let value = self.gen_expr(&stmt.value)?;
        let slot = self.slot_or_alloca(&stmt.name)?;
        self.builder.build_store(slot, value)?;
        Ok(())
    }

    fn gen_print(&mut self, stmt: &PrintStmt) -> Result<()> {
        match &stmt.value {
            Expr::Str(lit) => {
                let fmt = self.global_string("%s\n")?;
                let text = self.global_string(&lit.value)?;
                self.builder
                    .build_call(self.printf, &[fmt.into(), text.into()], "")?;
            }
            value => {
                let value = self.gen_expr(value)?;
                let fmt = self.global_string("%lld\n")?;
                self.builder
                    .build_call(self.printf, &[fmt.into(), value.into()], "")?;
            }
        }
        Ok(())
    }

    /// `scanf("%lld", &slot)`, allocating the slot on first use.
    fn gen_input(&mut self, stmt: &InputStmt) -> Result<()> {
        let slot = self.slot_or_alloca(&stmt.name)?;
        let fmt = self.global_string("%lld")?;
        self.builder
            .build_call(self.scanf, &[fmt.into(), slot.into()], "")?;
        Ok(())
    }

    fn gen_increment(&mut self, stmt: &IncrementStmt) -> Result<()> {
        let i64_type = self.context.i64_type();
        let slot = self.slot(&stmt.name, stmt.line)?;
        let current = self
            .builder
            .build_load(slot, &stmt.name)?
            .into_int_value();
        let next = self
            .builder
            .build_int_add(current, i64_type.const_int(1, false), "inc")?;
        self.builder.build_store(slot, next)?;
        Ok(())
    }

    fn gen_decrement(&mut self, stmt: &DecrementStmt) -> Result<()> {
        let i64_type = self.context.i64_type();
        let slot = self.slot(&stmt.name, stmt.line)?;
        let current = self
            .builder
            .build_load(slot, &stmt.name)?
            .into_int_value();
        let next = self
            .builder
            .build_int_sub(current, i64_type.const_int(1, false), "dec")?;
        self.builder.build_store(slot, next)?;
        Ok(())
    }

    /// If/elif/else chain.
    ///
    /// Each condition's false edge targets the next elif condition block,
    /// else the else block, else merge. Unterminated body ends branch to
    /// merge, and the builder is left at the start of merge.
    fn gen_if(&mut self, stmt: &IfStmt) -> Result<()> {
        let function = self.current_function()?;

        let then_block = self.context.append_basic_block(function, "if.then");
        let merge_block = self.context.append_basic_block(function, "if.merge");

        let mut elif_blocks = Vec::with_capacity(stmt.elif_clauses.len());
        for (i, clause) in stmt.elif_clauses.iter().enumerate() {
            let cond_block = self
                .context
                .append_basic_block(function, &format!("elif.cond.{i}"));
            let body_block = self
                .context
                .append_basic_block(function, &format!("elif.body.{i}"));
            elif_blocks.push((cond_block, body_block, clause));
        }

        let else_block = if stmt.else_body.is_empty() {
            None
        } else {
            Some(self.context.append_basic_block(function, "if.else"))
        };

        let first_false = elif_blocks
            .first()
            .map(|(cond, _, _)| *cond)
            .or(else_block)
            .unwrap_or(merge_block);

        let cond = self.gen_expr(&stmt.condition)?;
        let test = self.build_truth_test(cond, "if.cond")?;
        self.builder
            .build_conditional_branch(test, then_block, first_false)?;

        self.builder.position_at_end(then_block);
        self.gen_body(&stmt.then_body)?;
        if self.block_is_open() {
            self.builder.build_unconditional_branch(merge_block)?;
        }

        for (i, (cond_block, body_block, clause)) in elif_blocks.iter().enumerate() {
            let next_target = elif_blocks
                .get(i + 1)
                .map(|(cond, _, _)| *cond)
                .or(else_block)
                .unwrap_or(merge_block);

            self.builder.position_at_end(*cond_block);
            let value = self.gen_expr(&clause.condition)?;
            let test = self.build_truth_test(value, "elif.cond")?;
            self.builder
                .build_conditional_branch(test, *body_block, next_target)?;

            self.builder.position_at_end(*body_block);
            self.gen_body(&clause.body)?;
            if self.block_is_open() {
                self.builder.build_unconditional_branch(merge_block)?;
            }
        }

        if let Some(else_block) = else_block {
            self.builder.position_at_end(else_block);
            self.gen_body(&stmt.else_body)?;
            if self.block_is_open() {
                self.builder.build_unconditional_branch(merge_block)?;
            }
        }

        self.builder.position_at_end(merge_block);
        Ok(())
    }

    /// Pre-tested loop: cond/body/merge, body falls back to cond.
    fn gen_while(&mut self, stmt: &WhileStmt) -> Result<()> {
        let function = self.current_function()?;

        let cond_block = self.context.append_basic_block(function, "while.cond");
        let body_block = self.context.append_basic_block(function, "while.body");
        let merge_block = self.context.append_basic_block(function, "while.merge");

        self.builder.build_unconditional_branch(cond_block)?;

        self.builder.position_at_end(cond_block);
        let value = self.gen_expr(&stmt.condition)?;
        let test = self.build_truth_test(value, "while.cond")?;
        self.builder
            .build_conditional_branch(test, body_block, merge_block)?;

        self.builder.position_at_end(body_block);
        self.gen_body(&stmt.body)?;
        if self.block_is_open() {
            self.builder.build_unconditional_branch(cond_block)?;
        }

        self.builder.position_at_end(merge_block);
        Ok(())
    }

    /// User function: `i64(i64, …)` with one parameter slot per argument
    /// and an implicit `ret 0`. The surrounding variable table and builder
    /// position are restored afterwards.
    fn gen_fn(&mut self, stmt: &FnStmt) -> Result<()> {
        let i64_type = self.context.i64_type();
        let param_types: Vec<BasicMetadataTypeEnum> = vec![i64_type.into(); stmt.params.len()];
        let fn_type = i64_type.fn_type(&param_types, false);
        let function = self.module.add_function(&stmt.name, fn_type, None);

        let saved_block = self.builder.get_insert_block();
        let saved_variables = std::mem::take(&mut self.variables);

        let entry = self.context.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);

        for (param, arg) in stmt.params.iter().zip(function.get_param_iter()) {
            let arg = arg.into_int_value();
            arg.set_name(param);
            let slot = self.builder.build_alloca(i64_type, param)?;
            self.builder.build_store(slot, arg)?;
            self.variables.insert(param.clone(), slot);
        }

        self.gen_body(&stmt.body)?;
        if self.block_is_open() {
            self.builder.build_return(Some(&i64_type.const_zero()))?;
        }

        self.variables = saved_variables;
        if let Some(block) = saved_block {
            self.builder.position_at_end(block);
        }
        Ok(())
    }

    fn gen_body(&mut self, body: &[Stmt]) -> Result<()> {
        for stmt in body {
            self.gen_stmt(stmt)?;
        }
        Ok(())
    }

    fn gen_expr(&mut self, expr: &Expr) -> Result<IntValue<'ctx>> {
        let i64_type = self.context.i64_type();

        match expr {
            Expr::Int(lit) => Ok(i64_type.const_int(lit.value as u64, true)),
            // Truncation toward zero; float arithmetic does not exist.
            Expr::Float(lit) => Ok(i64_type.const_int(lit.value as i64 as u64, true)),
            Expr::Ident(ident) => {
                let slot = self.slot(&ident.name, ident.line)?;
                Ok(self
                    .builder
                    .build_load(slot, &ident.name)?
                    .into_int_value())
            }
            Expr::Binary(binary) => {
                let lhs = self.gen_expr(&binary.lhs)?;
                let rhs = self.gen_expr(&binary.rhs)?;
                match binary.op {
                    BinOp::Rem => Ok(self.builder.build_int_signed_rem(lhs, rhs, "rem")?),
                    op => {
                        let predicate = match op {
                            BinOp::Eq => IntPredicate::EQ,
                            BinOp::Neq => IntPredicate::NE,
                            BinOp::Gt => IntPredicate::SGT,
                            BinOp::Lt => IntPredicate::SLT,
                            BinOp::Rem => unreachable!("handled above"),
                        };
                        let cmp = self.builder.build_int_compare(predicate, lhs, rhs, "cmp")?;
                        // Zero-extend so the 0/1 result can feed further
                        // comparisons and condition tests.
                        Ok(self.builder.build_int_z_extend(cmp, i64_type, "cmp.ext")?)
                    }
                }
            }
            Expr::Str(lit) => Err(CodeGenError::StringOutsidePrint { line: lit.line }),
        }
    }

    /// `value != 0` - conditions are i64 values, not raw booleans.
    fn build_truth_test(&self, value: IntValue<'ctx>, name: &str) -> Result<IntValue<'ctx>> {
        let zero = self.context.i64_type().const_zero();
        Ok(self
            .builder
            .build_int_compare(IntPredicate::NE, value, zero, name)?)
    }

    /// Looks up an existing slot; undefined names are an error citing the
    /// source line.
    fn slot(&self, name: &str, line: u32) -> Result<PointerValue<'ctx>> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| CodeGenError::UndefinedVariable {
                name: name.to_string(),
                line,
            })
    }

    /// Looks up a slot, allocating one when the name is new (first
    /// assignment and input create variables implicitly).
    fn slot_or_alloca(&mut self, name: &str) -> Result<PointerValue<'ctx>> {
        if let Some(&slot) = self.variables.get(name) {
            return Ok(slot);
        }
        let slot = self
            .builder
            .build_alloca(self.context.i64_type(), name)?;
        self.variables.insert(name.to_string(), slot);
        Ok(slot)
    }

    /// Emits a private NUL-terminated constant and returns its pointer.
    fn global_string(&mut self, value: &str) -> Result<PointerValue<'ctx>> {
        self.string_counter += 1;
        let name = format!(".str.{}", self.string_counter);
        let global = self.builder.build_global_string_ptr(value, &name)?;
        Ok(global.as_pointer_value())
    }

    /// The function owning the block the builder is positioned in.
    fn current_function(&self) -> Result<FunctionValue<'ctx>> {
        self.builder
            .get_insert_block()
            .and_then(|block| block.get_parent())
            .ok_or_else(|| CodeGenError::Internal("builder is not positioned in a function".into()))
    }

    /// True when the current block still needs a terminator.
    fn block_is_open(&self) -> bool {
        self.builder
            .get_insert_block()
            .is_some_and(|block| block.get_terminator().is_none())
    }
}
