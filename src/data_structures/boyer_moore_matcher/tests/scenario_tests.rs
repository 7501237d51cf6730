// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hand-checked search scenarios for the Boyer-Moore Pattern Matcher.

use test_case::test_case;

use crate::data_structures::boyer_moore_matcher::{
    BoyerMooreMatcher, GoodSuffixArrays, MatcherOptions, ScanReport,
};

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

fn scan(pattern: &str, alphabet: &str, text: &str) -> ScanReport {
    BoyerMooreMatcher::from_str_with_options(pattern, alphabet, &MatcherOptions::default())
        .unwrap()
        .locate_str(text)
        .unwrap()
}

#[test_case("ana", LOWERCASE, "banana", &[1, 3] ; "overlapping ana in banana")]
#[test_case("aaa", "a", "aaaaaa", &[0, 1, 2, 3] ; "periodic pattern")]
#[test_case("xyz", LOWERCASE, "abcabc", &[] ; "absent pattern")]
#[test_case("abcd", "abcdx", "abcdabcdxabcd", &[0, 4, 9] ; "pattern without borders")]
#[test_case("cabab", "abc", "abacababcabab", &[3, 8] ; "border of length two")]
#[test_case("ababab", "ab", "baaaaaabbbbbbabababba", &[13] ; "unique suffix with long border")]
#[test_case("a", "ab", "bbb", &[] ; "single symbol absent")]
fn test_occurrences(pattern: &str, alphabet: &str, text: &str, expected: &[usize]) {
    assert_eq!(scan(pattern, alphabet, text).occurrences, expected);
}

#[test]
fn test_counters_for_reference_scans() {
    let report = scan("ana", LOWERCASE, "banana");
    assert_eq!((report.alignments, report.comparisons), (3, 7));

    let report = scan("aaa", "a", "aaaaaa");
    assert_eq!((report.alignments, report.comparisons), (4, 12));
}

#[test]
fn test_absent_pattern_skips_alignments() {
    // 'c' never occurs in "xyz", so the bad character rule jumps past it.
    let report = scan("xyz", LOWERCASE, "abcabc");
    assert!(report.occurrences.is_empty());
    assert_eq!(report.alignments, 2);
    assert!(report.alignments <= "abcabc".len() - "xyz".len() + 1);
}

#[test]
fn test_text_shorter_than_pattern() {
    let report = scan("abc", "abc", "ab");
    assert_eq!(report, ScanReport::default());

    let report = scan("abc", "abc", "");
    assert_eq!(report, ScanReport::default());
}

#[test]
fn test_no_self_overlap_tables() {
    let arrays = GoodSuffixArrays::build(&['a', 'b', 'c', 'd']).unwrap();
    assert!(arrays.big_l_prime.iter().all(|&v| v == 0));
    assert!(arrays.big_l.iter().all(|&v| v == 0));
    assert_eq!(arrays.small_l_prime, vec![4, 0, 0, 0]);

    let matcher =
        BoyerMooreMatcher::from_str_with_options("abcd", "abcd", &MatcherOptions::default())
            .unwrap();
    assert_eq!(matcher.match_skip(), 4);
    assert_eq!(matcher.good_suffix_rule(3), 0);
}

#[test]
fn test_shared_matcher_across_threads() {
    let matcher =
        BoyerMooreMatcher::from_str_with_options("ana", LOWERCASE, &MatcherOptions::default())
            .unwrap();
    let texts = ["banana", "ananas", "bandana", "nana"];

    let reports: Vec<ScanReport> = std::thread::scope(|scope| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| {
                let matcher = &matcher;
                scope.spawn(move || matcher.locate_str(text).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let occurrences: Vec<Vec<usize>> = reports.into_iter().map(|r| r.occurrences).collect();
    assert_eq!(occurrences, vec![vec![1, 3], vec![0, 2], vec![4], vec![1]]);
}
