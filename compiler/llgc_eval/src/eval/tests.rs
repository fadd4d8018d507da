use super::*;
use llgc_reader::read;
use llgc_value::{ErrorKind, Malformed, ValueKind};
use pretty_assertions::assert_eq;

use crate::init_context;

fn eval_text(ctx: &Context, text: &str) -> EvalResult {
    let (expr, _) = read(text, 0)?;
    eval(ctx, &expr)
}

fn type_mismatch(err: &Error) -> (ValueKind, ValueKind) {
    match err.kind {
        ErrorKind::TypeMismatch { expected, got } => (expected, got),
        ref other => panic!("expected type mismatch, got {other:?}"),
    }
}

// === Self-evaluation ===

#[test]
fn atoms_evaluate_to_themselves() {
    let ctx = init_context();
    for text in ["42", "-1.5", "true", "\"str\"", "sym"] {
        let (expr, _) = read(text, 0).unwrap();
        let value = eval(&ctx, &expr).unwrap();
        assert_eq!(value, expr, "{text}");
    }
}

#[test]
fn nil_evaluates_to_nil() {
    let ctx = init_context();
    assert!(eval(&ctx, &Value::NIL).unwrap().is_nil());
    assert!(eval_text(&ctx, "()").unwrap().is_nil());
}

#[test]
fn self_evaluation_shares_the_object() {
    let ctx = init_context();
    let expr = Value::string("a long shared string");
    let value = eval(&ctx, &expr).unwrap();
    assert!(value.ptr_eq(&expr));
    assert_eq!(expr.ref_count(), 2);
    drop(value);
    assert_eq!(expr.ref_count(), 1);
}

#[test]
fn bound_symbol_is_not_looked_up_outside_call_position() {
    let mut ctx = init_context();
    ctx.bind("x", Value::int(7));
    assert_eq!(eval_text(&ctx, "x").unwrap(), Value::symbol("x"));
}

// === Calls ===

#[test]
fn add_two_integers() {
    let ctx = init_context();
    assert_eq!(eval_text(&ctx, "(+ 1 3)").unwrap().as_int().unwrap(), 4);
}

#[test]
fn add_with_one_argument_is_arity_mismatch() {
    let ctx = init_context();
    let err = eval_text(&ctx, "(+ 1)").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::ArityMismatch {
            name: "+".to_string(),
            expected: 2,
            got: 1,
        }
    );
}

#[test]
fn unknown_function_is_unbound_symbol() {
    let ctx = init_context();
    let err = eval_text(&ctx, "(unknownFn 1 2)").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnboundSymbol {
            name: "unknownFn".to_string()
        }
    );
    assert_eq!(err.to_string(), "unbound symbol: unknownFn");
}

#[test]
fn arguments_are_not_evaluated() {
    let ctx = init_context();
    let err = eval_text(&ctx, "(+ (+ 1 2) 3)").unwrap_err();
    assert_eq!(type_mismatch(&err), (ValueKind::Int, ValueKind::List));
}

#[test]
fn head_must_be_a_symbol() {
    let ctx = init_context();
    let err = eval_text(&ctx, "(1 2 3)").unwrap_err();
    assert_eq!(type_mismatch(&err), (ValueKind::Symbol, ValueKind::Int));
    let err = eval_text(&ctx, "((+ 1 2) 3)").unwrap_err();
    assert_eq!(type_mismatch(&err), (ValueKind::Symbol, ValueKind::List));
    let err = eval_text(&ctx, "(() 3)").unwrap_err();
    assert_eq!(type_mismatch(&err), (ValueKind::Symbol, ValueKind::Nil));
}

#[test]
fn head_bound_to_non_function_is_type_mismatch() {
    let mut ctx = init_context();
    ctx.bind("x", Value::int(7));
    let err = eval_text(&ctx, "(x 1)").unwrap_err();
    assert_eq!(
        type_mismatch(&err),
        (ValueKind::NativeFunction, ValueKind::Int)
    );
}

#[test]
fn extra_arguments_are_ignored() {
    let ctx = init_context();
    assert_eq!(eval_text(&ctx, "(+ 1 2 3 oops)").unwrap().as_int().unwrap(), 3);
}

#[test]
fn add_rejects_non_integers() {
    let ctx = init_context();
    let err = eval_text(&ctx, "(+ 1 2.5)").unwrap_err();
    assert_eq!(type_mismatch(&err), (ValueKind::Int, ValueKind::Float));
}

#[test]
fn add_overflow_is_reported() {
    let ctx = init_context();
    let err = eval_text(&ctx, "(+ 9223372036854775807 1)").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::IntegerOverflow {
            operation: "+".to_string()
        }
    );
}

#[test]
fn newer_binding_shadows_builtin() {
    fn always_zero(_ctx: &Context, _args: Value) -> EvalResult {
        Ok(Value::int(0))
    }
    let mut ctx = init_context();
    ctx.register("+", always_zero);
    assert_eq!(eval_text(&ctx, "(+ 1 2)").unwrap().as_int().unwrap(), 0);
}

#[test]
fn native_function_receives_unevaluated_tail() {
    fn echo(_ctx: &Context, args: Value) -> EvalResult {
        Ok(args)
    }
    let mut ctx = Context::new();
    ctx.register("quote", echo);
    let value = eval_text(&ctx, "(quote a (b c) 1)").unwrap();
    assert_eq!(value.to_string(), "(a (b c) 1)");
}

#[test]
fn native_function_can_consult_the_context() {
    fn count(ctx: &Context, _args: Value) -> EvalResult {
        Ok(Value::int(i64::try_from(ctx.len()).unwrap()))
    }
    let mut ctx = init_context();
    ctx.register("count", count);
    assert_eq!(eval_text(&ctx, "(count)").unwrap().as_int().unwrap(), 2);
}

#[test]
fn evaluation_leaves_the_expression_intact() {
    let ctx = init_context();
    let (expr, _) = read("(+ 1 3)", 0).unwrap();
    let before = expr.to_string();
    eval(&ctx, &expr).unwrap();
    assert_eq!(expr.to_string(), before);
    assert_eq!(expr.ref_count(), 1);
}

// === Programs ===

#[test]
fn eval_source_evaluates_every_form() {
    let ctx = init_context();
    let results = eval_source(&ctx, "(+ 1 2)\n\"s\"\n(+ 10 -20) ()").unwrap();
    assert_eq!(
        results,
        vec![Value::int(3), Value::string("s"), Value::int(-10), Value::NIL]
    );
}

#[test]
fn eval_source_of_blank_text_is_empty() {
    let ctx = init_context();
    assert!(eval_source(&ctx, "  \n ").unwrap().is_empty());
}

#[test]
fn eval_source_stops_at_first_error() {
    let ctx = init_context();
    let err = eval_source(&ctx, "(+ 1 2) (boom) (+ 1").unwrap_err();
    assert!(err.is_unbound_symbol());
}

#[test]
fn eval_source_reports_read_errors() {
    let ctx = init_context();
    let err = eval_source(&ctx, "(+ 1 2))").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::MalformedInput {
            problem: Malformed::UnmatchedClose
        }
    );
}
