//! Property-based tests for number list decoding
//!
//! These check the decoder against generated inputs: delimiter-only text, lists of
//! valid literals joined with arbitrary delimiter runs, and text round-trips.

use attrlist::{tokenize, NumberList, LIST_DELIMITERS};
use proptest::prelude::*;

fn delimiter_char() -> impl Strategy<Value = char> {
    prop_oneof![Just(' '), Just('\t'), Just('\n'), Just('\r'), Just(',')]
}

/// A run of one or more delimiter characters
fn delimiter_run() -> impl Strategy<Value = String> {
    proptest::collection::vec(delimiter_char(), 1..4).prop_map(|chars| chars.into_iter().collect())
}

/// A literal in the accepted grammar, paired with its value
fn literal() -> impl Strategy<Value = (String, f32)> {
    prop_oneof![
        (-100_000i32..100_000).prop_map(|n| (n.to_string(), n as f32)),
        (-1000i32..1000, 0u32..100).prop_map(|(whole, frac)| {
            let text = format!("{whole}.{frac:02}");
            let value = text.parse::<f32>().unwrap();
            (text, value)
        }),
        (1i32..10, -5i32..5).prop_map(|(m, e)| {
            let text = format!("{m}e{e}");
            let value = text.parse::<f32>().unwrap();
            (text, value)
        }),
    ]
}

proptest! {
    #[test]
    fn delimiter_only_text_is_empty(
        text in proptest::collection::vec(delimiter_char(), 0..32)
            .prop_map(|chars| chars.into_iter().collect::<String>())
    ) {
        prop_assert!(NumberList::parse(&text).unwrap().is_empty());
    }

    #[test]
    fn values_come_back_in_source_order(
        items in proptest::collection::vec((literal(), delimiter_run()), 0..16),
        lead in proptest::option::of(delimiter_run()),
    ) {
        let mut text = lead.unwrap_or_default();
        let mut expected = Vec::new();
        for ((literal, value), delimiter) in &items {
            text.push_str(literal);
            text.push_str(delimiter);
            expected.push(*value);
        }

        let list = NumberList::parse(&text).unwrap();
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }

    #[test]
    fn tokens_are_never_empty_and_never_contain_delimiters(text in "[0-9a-z ,\t\r\n]{0,40}") {
        for token in tokenize(&text, LIST_DELIMITERS) {
            prop_assert!(!token.as_str().is_empty());
            prop_assert!(!token.as_str().chars().any(|c| LIST_DELIMITERS.contains(c)));
            prop_assert_eq!(&text[token.span()], token.as_str());
        }
    }

    #[test]
    fn to_text_reads_back_to_the_same_values(values in proptest::collection::vec(-1.0e6f32..1.0e6, 0..16)) {
        let list = NumberList::from(values);
        let reparsed = NumberList::parse(&list.to_text()).unwrap();
        prop_assert_eq!(reparsed, list);
    }

    #[test]
    fn clone_is_independent(values in proptest::collection::vec(-1000.0f32..1000.0, 1..8)) {
        let original = NumberList::from(values.clone());
        let mut copy = original.clone();
        copy[0] += 1.0;
        copy.push(0.0);
        prop_assert_eq!(original.as_slice(), values.as_slice());
    }

    #[test]
    fn trailing_garbage_rejects_the_list(
        items in proptest::collection::vec(literal(), 1..6),
        junk in "[a-df-z_#%]{1,3}",
    ) {
        let mut text = items.iter().map(|(l, _)| l.as_str()).collect::<Vec<_>>().join(" ");
        text.push_str(&junk);
        prop_assert!(NumberList::parse(&text).is_err());
    }
}
