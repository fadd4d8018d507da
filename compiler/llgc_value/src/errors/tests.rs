use super::*;
use pretty_assertions::assert_eq;

#[test]
fn type_mismatch_message() {
    let err = Error::type_mismatch(ValueKind::Int, ValueKind::Symbol);
    assert!(err.is_type_mismatch());
    assert_eq!(err.to_string(), "type mismatch: expected Int, got Symbol");
}

#[test]
fn unbound_symbol_message() {
    let err = Error::unbound_symbol("unknownFn");
    assert!(err.is_unbound_symbol());
    assert_eq!(err.to_string(), "unbound symbol: unknownFn");
}

#[test]
fn arity_message_pluralizes() {
    assert_eq!(
        Error::arity_mismatch("+", 2, 1).to_string(),
        "+ expects 2 arguments, got 1"
    );
    assert_eq!(
        Error::arity_mismatch("neg", 1, 0).to_string(),
        "neg expects 1 argument, got 0"
    );
}

#[test]
fn location_prefixes_message() {
    let err = Error::malformed(Malformed::UnterminatedString).at(Location::new(3, 9));
    assert!(err.is_malformed_input());
    assert_eq!(err.location, Some(Location::new(3, 9)));
    assert_eq!(
        err.to_string(),
        "3:9: malformed input: unterminated string literal"
    );
}

#[test]
fn overflow_message() {
    assert_eq!(
        Error::integer_overflow("+").to_string(),
        "integer overflow in +"
    );
}

#[test]
fn kinds_compare_structurally() {
    assert_eq!(
        Error::arity_mismatch("+", 2, 0).kind,
        ErrorKind::ArityMismatch {
            name: "+".to_string(),
            expected: 2,
            got: 0,
        }
    );
    assert_ne!(
        Error::malformed(Malformed::UnterminatedList),
        Error::malformed(Malformed::UnmatchedClose)
    );
}
