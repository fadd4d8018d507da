use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn short_text_is_inline() {
    let t = Text::new("sym");
    assert!(t.is_inline());
    assert_eq!(t.as_str(), "sym");
    assert_eq!(t.len(), 3);
}

#[test]
fn seven_bytes_is_the_inline_limit() {
    let t = Text::new("1234567");
    assert!(t.is_inline());
    assert_eq!(t.as_str(), "1234567");

    let t = Text::new("12345678");
    assert!(!t.is_inline());
    assert_eq!(t.as_str(), "12345678");
}

#[test]
fn long_text_is_heap_allocated() {
    let t = Text::new("a_quite_long_sym");
    assert!(!t.is_inline());
    assert_eq!(t.as_str(), "a_quite_long_sym");
}

#[test]
fn empty_text() {
    let t = Text::new("");
    assert!(t.is_empty());
    assert!(t.is_inline());
    assert_eq!(t.as_str(), "");
}

#[test]
fn multibyte_text_counts_bytes() {
    // "héé" is 5 bytes, "ééééé" is 10.
    let short = Text::new("héé");
    assert!(short.is_inline());
    assert_eq!(short.as_str(), "héé");

    let long = Text::new("ééééé");
    assert!(!long.is_inline());
    assert_eq!(long.as_str(), "ééééé");
}

#[test]
fn equality_ignores_representation() {
    assert_eq!(Text::new("abc"), Text::from("abc"));
    assert!(Text::new("a longer string") == *"a longer string");
    assert_ne!(Text::new("abc"), Text::new("abd"));
}

#[test]
fn debug_and_display() {
    let t = Text::new("a str");
    assert_eq!(t.to_string(), "a str");
    assert_eq!(format!("{t:?}"), "\"a str\"");
}

#[test]
fn inline_text_fits_in_a_word() {
    assert!(std::mem::size_of::<Text>() <= 24);
}

proptest! {
    #[test]
    fn any_text_reads_back(s in ".*") {
        let t = Text::new(&s);
        prop_assert_eq!(t.as_str(), s.as_str());
        prop_assert_eq!(t.is_inline(), s.len() <= INLINE_CAP);
    }
}
