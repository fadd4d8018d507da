use super::*;
use pretty_assertions::assert_eq;

#[test]
fn fresh_context_binds_every_builtin() {
    let ctx = init_context();
    assert_eq!(ctx.len(), BUILTINS.len());
    for (name, _) in BUILTINS {
        assert!(ctx.lookup(name).unwrap().as_native_fn().is_ok(), "{name}");
    }
}

#[test]
fn contexts_are_independent() {
    let mut a = init_context();
    let b = init_context();
    a.bind("x", Value::int(1));
    assert!(a.lookup("x").is_some());
    assert!(b.lookup("x").is_none());
}

#[test]
fn reexports_are_enough_to_embed() {
    let ctx = init_context();
    let results = eval_source(&ctx, "(+ 40 2)").unwrap();
    assert_eq!(results, vec![Value::int(42)]);
    let err: Error = eval_source(&ctx, "(nope)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnboundSymbol { .. }));
}
