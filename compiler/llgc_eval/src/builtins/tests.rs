use super::*;
use pretty_assertions::assert_eq;

fn args(items: &[Value]) -> Value {
    Value::list(items.iter().cloned())
}

#[test]
fn add_sums_two_integers() {
    let ctx = Context::new();
    let sum = add(&ctx, args(&[Value::int(-5), Value::int(12)])).unwrap();
    assert_eq!(sum.as_int().unwrap(), 7);
}

#[test]
fn add_with_no_arguments() {
    let ctx = Context::new();
    let err = add(&ctx, Value::NIL).unwrap_err();
    assert_eq!(err.to_string(), "+ expects 2 arguments, got 0");
}

#[test]
fn add_with_improper_argument_list() {
    let ctx = Context::new();
    let err = add(&ctx, Value::cons(Value::int(1), Value::int(2))).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn add_overflow_in_both_directions() {
    let ctx = Context::new();
    assert!(add(&ctx, args(&[Value::int(i64::MAX), Value::int(1)])).is_err());
    assert!(add(&ctx, args(&[Value::int(i64::MIN), Value::int(-1)])).is_err());
    assert_eq!(
        add(&ctx, args(&[Value::int(i64::MAX), Value::int(i64::MIN)]))
            .unwrap()
            .as_int()
            .unwrap(),
        -1
    );
}

#[test]
fn add_releases_its_arguments() {
    let ctx = Context::new();
    let list = args(&[Value::int(1), Value::int(2)]);
    let held = list.clone();
    add(&ctx, list).unwrap();
    assert_eq!(held.ref_count(), 1);
}

#[test]
fn register_builtins_is_additive() {
    let mut ctx = Context::new();
    ctx.bind("x", Value::int(1));
    register_builtins(&mut ctx);
    assert_eq!(ctx.len(), 1 + BUILTINS.len());
    assert!(ctx.lookup("x").is_some());
}
