//! Property tests for the lexer.
//!
//! The central invariant: concatenating the lexemes of the produced token
//! stream reproduces the source text with whitespace and comments elided.

use proptest::prelude::*;

use mjc_lex::{tokenize, TokenKind};
use mjc_util::Handler;

/// A single well-formed lexeme: identifier, keyword, number, operator, or
/// punctuation.
fn lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        // Identifiers (may collide with keywords; the lexeme is the same)
        "[a-z][a-z0-9_]{0,6}",
        // Integer and fractional literals
        any::<u32>().prop_map(|n| n.to_string()),
        (0u16..10_000, 0u16..10_000).prop_map(|(a, b)| format!("{}.{}", a, b)),
        // Fixed lexemes
        prop::sample::select(vec![
            "+", "-", "*", "/", "==", "!=", ">=", "<=", ">", "<", "=", "{", "}", "(", ")", "[",
            "]", ";", ",", "System.out.println", "lerDouble",
        ])
        .prop_map(String::from),
    ]
}

/// Token separators: whitespace runs, optionally carrying a line comment.
fn separator() -> impl Strategy<Value = String> {
    prop::sample::select(vec![" ", "  ", "\t", "\n", " \n ", " // elided\n"]).prop_map(String::from)
}

proptest! {
    #[test]
    fn lexemes_concatenate_to_stripped_source(
        parts in prop::collection::vec((lexeme(), separator()), 0..40)
    ) {
        let mut source = String::new();
        let mut expected = String::new();
        for (lex, sep) in &parts {
            source.push_str(lex);
            source.push_str(sep);
            expected.push_str(lex);
        }

        let handler = Handler::new();
        let tokens = tokenize(&source, &handler);
        prop_assert!(!handler.has_errors(), "lexer errored on {:?}", source);

        let rebuilt: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        prop_assert_eq!(rebuilt, expected);
    }

    #[test]
    fn tokenizing_twice_is_deterministic(
        parts in prop::collection::vec((lexeme(), separator()), 0..30)
    ) {
        let source: String = parts
            .iter()
            .flat_map(|(l, s)| [l.as_str(), s.as_str()])
            .collect();

        let h1 = Handler::new();
        let h2 = Handler::new();
        let first = tokenize(&source, &h1);
        let second = tokenize(&source, &h2);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn number_tokens_carry_their_parsed_value(n in 0u32..1_000_000, frac in 0u16..1000) {
        let source = format!("{}.{:03}", n, frac);
        let handler = Handler::new();
        let tokens = tokenize(&source, &handler);
        prop_assert_eq!(tokens.len(), 2);
        let expected: f64 = source.parse().unwrap();
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Number(expected));
    }
}
