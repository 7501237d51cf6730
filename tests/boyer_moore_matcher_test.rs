// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Boyer-Moore Pattern Matcher.
//! Exercises the public API the way the `kilo` binary and library users do.

use std::sync::Arc;
use std::thread;

use kilo_search_lib::config::search::SearchConfig;
use kilo_search_lib::data_structures::boyer_moore_matcher::{
    Alphabet, BoyerMooreError, BoyerMooreMatcher, MatcherOptions, TableLayout,
};

#[test]
fn test_matcher_basic() {
    let alphabet = Alphabet::lowercase_with_space();
    let pattern: Vec<char> = "the".chars().collect();
    let matcher = BoyerMooreMatcher::new(&pattern, alphabet).unwrap();

    let report = matcher.locate_str("the cat saw the other cat").unwrap();
    assert_eq!(report.occurrences, vec![0, 12, 17]);
    assert!(report.alignments <= "the cat saw the other cat".len() - 2);
    assert_eq!(matcher.find_first_str("a cat and the hat").unwrap(), Some(10));
    assert_eq!(matcher.find_first_str("no match here").unwrap(), None);
}

#[test]
fn test_lazy_iteration_stops_early() {
    let alphabet = Alphabet::from_chars("ab").unwrap();
    let pattern: Vec<char> = "ab".chars().collect();
    let text: Vec<char> = "ababababab".chars().collect();
    let matcher = BoyerMooreMatcher::new(&pattern, alphabet).unwrap();

    let mut iter = matcher.find_iter(&text).unwrap();
    assert_eq!(iter.next(), Some(0));
    let after_first = iter.alignments();
    assert_eq!(after_first, 1);

    let rest: Vec<usize> = iter.by_ref().collect();
    assert_eq!(rest, vec![2, 4, 6, 8]);
    assert!(iter.alignments() > after_first);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_byte_matcher() {
    let matcher = BoyerMooreMatcher::new(b"\x00\xff\x00", Alphabet::bytes()).unwrap();
    let text = [0x00, 0xff, 0x00, 0xff, 0x00, 0x01];
    assert_eq!(matcher.locate_all(&text).unwrap().occurrences, vec![0, 2]);
}

#[test]
fn test_construction_errors() {
    let alphabet = Alphabet::from_chars("abc").unwrap();
    assert_eq!(
        BoyerMooreMatcher::new(&[], alphabet.clone()).unwrap_err(),
        BoyerMooreError::EmptyPattern
    );

    let options = MatcherOptions::new().max_pattern_length(3);
    let pattern: Vec<char> = "abca".chars().collect();
    assert_eq!(
        BoyerMooreMatcher::with_options(&pattern, alphabet.clone(), &options).unwrap_err(),
        BoyerMooreError::PatternTooLarge { length: 4, max: 3 }
    );

    let pattern: Vec<char> = "abd".chars().collect();
    assert!(matches!(
        BoyerMooreMatcher::new(&pattern, alphabet).unwrap_err(),
        BoyerMooreError::AlphabetMismatch { position: 2, .. }
    ));

    assert_eq!(
        Alphabet::<char>::new(Vec::new()).unwrap_err(),
        BoyerMooreError::EmptyAlphabet
    );
    assert!(matches!(
        Alphabet::from_chars("aba").unwrap_err(),
        BoyerMooreError::DuplicateSymbol { position: 2, .. }
    ));
}

#[test]
fn test_text_outside_alphabet() {
    let matcher =
        BoyerMooreMatcher::from_str_with_options("ab", "ab", &MatcherOptions::default()).unwrap();

    let error = matcher.locate_str("abcab").unwrap_err();
    assert!(matches!(
        error,
        BoyerMooreError::AlphabetMismatch { position: 2, .. }
    ));
    assert!(error.to_string().contains("not found in alphabet"));

    // Rejected even when no alignment fits
    assert!(matcher.locate_str("c").is_err());
}

#[test]
fn test_table_snapshot_json() {
    let matcher =
        BoyerMooreMatcher::from_str_with_options("cabab", "abc", &MatcherOptions::default())
            .unwrap();
    let json = serde_json::to_value(matcher.tables()).unwrap();

    assert_eq!(json["layout"], "dense");
    assert_eq!(json["alphabet"], serde_json::json!([["a", 0], ["b", 1], ["c", 2]]));
    assert_eq!(json["big_l"], serde_json::json!([0, 0, 0, 3, 3]));
    assert_eq!(json["small_l_prime"], serde_json::json!([5, 0, 0, 0, 0]));
    // Raw entries: 1 + index of the rightmost earlier occurrence
    assert_eq!(json["bad_character"][0], serde_json::json!([0, 0, 0]));
    assert_eq!(json["bad_character"][4], serde_json::json!([4, 3, 1]));

    // Shifts derived from the last row: offset + 1 - entry
    let shifts: Vec<usize> = ['a', 'b', 'c']
        .iter()
        .map(|&symbol| matcher.bad_character_rule(4, symbol).unwrap())
        .collect();
    assert_eq!(shifts, vec![1, 2, 4]);
}

#[test]
fn test_single_symbol_pattern_tables() {
    let matcher =
        BoyerMooreMatcher::from_str_with_options("a", "ab", &MatcherOptions::default()).unwrap();
    let tables = matcher.tables();
    assert!(tables.big_l.is_empty());
    assert!(tables.small_l_prime.is_empty());
    assert_eq!(matcher.good_suffix_rule(0), 0);
    assert_eq!(matcher.match_skip(), 1);
}

#[test]
fn test_sparse_layout_for_large_alphabets() {
    let symbols: Vec<u32> = (0..1000).collect();
    let alphabet = Alphabet::new(symbols).unwrap();
    let matcher = BoyerMooreMatcher::new(&[7, 999, 7], alphabet).unwrap();
    assert_eq!(matcher.tables().layout, TableLayout::Sparse);

    let text = [1, 7, 999, 7, 999, 7, 3];
    assert_eq!(matcher.locate_all(&text).unwrap().occurrences, vec![1, 3]);
}

#[test]
fn test_matcher_from_search_config() {
    let config = SearchConfig {
        alphabet: "acgt".to_string(),
        layout: TableLayout::Sparse,
        ..Default::default()
    };
    let pattern: Vec<char> = "gatta".chars().collect();
    let matcher = BoyerMooreMatcher::with_options(
        &pattern,
        config.alphabet().unwrap(),
        &config.matcher_options(),
    )
    .unwrap();

    assert_eq!(matcher.tables().layout, TableLayout::Sparse);
    assert_eq!(
        matcher.locate_str("ggattacagattatt").unwrap().occurrences,
        vec![1, 8]
    );
}

#[test]
fn test_concurrent_scans() {
    let matcher = Arc::new(
        BoyerMooreMatcher::from_str_with_options("aba", "ab", &MatcherOptions::default())
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let matcher = Arc::clone(&matcher);
            thread::spawn(move || {
                let text = "ab".repeat(n + 2);
                matcher.locate_str(&text).unwrap().occurrences
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let expected: Vec<usize> = (0..=n).map(|k| 2 * k).collect();
        assert_eq!(handle.join().unwrap(), expected);
    }
}
