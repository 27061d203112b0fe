// api_test.rs - Integration tests for the public binding surface.

use ferrule::prelude::*;

// === Compilation ===

#[test]
fn simple_pattern_compiles() {
    let pat = Pattern::new(r"ab+c").unwrap();
    assert_eq!(pat.source(), b"ab+c");
}

#[test]
fn invalid_pattern_star_never_yields_a_pattern() {
    let err = Pattern::new("*").unwrap_err();
    match err {
        Error::Compile {
            code,
            message,
            offset,
        } => {
            assert!(code > 0);
            assert!(!message.is_empty());
            assert!(offset.is_some());
        }
        other => panic!("expected Compile error, got {:?}", other),
    }
}

#[test]
fn unclosed_group_is_a_compile_error() {
    assert!(matches!(
        Pattern::new("(unclosed").unwrap_err(),
        Error::Compile { .. }
    ));
}

#[test]
fn empty_pattern_compiles_and_matches_empty() {
    let pat = Pattern::new("").unwrap();
    let caps = pat
        .exec(b"hello", MatchOptions::new())
        .unwrap()
        .into_captures()
        .unwrap();
    assert_eq!(caps.span(0), Some((0, 0)));
}

// === Compile options ===

#[test]
fn caseless_option() {
    let pat = Pattern::with_options("hello", CompileOption::Caseless).unwrap();
    assert!(pat.is_match(b"HeLLo world").unwrap());
    assert!(!Pattern::new("hello").unwrap().is_match(b"HeLLo").unwrap());
}

#[test]
fn multiline_option() {
    let subject = b"first\nsecond";
    assert!(!Pattern::new("^second").unwrap().is_match(subject).unwrap());
    let pat = Pattern::with_options("^second", CompileOption::Multiline).unwrap();
    assert!(pat.is_match(subject).unwrap());
}

#[test]
fn dotall_option() {
    let subject = b"a\nb";
    assert!(!Pattern::new("a.b").unwrap().is_match(subject).unwrap());
    let pat = Pattern::with_options("a.b", CompileOption::DotAll).unwrap();
    assert!(pat.is_match(subject).unwrap());
}

#[test]
fn extended_option_ignores_whitespace() {
    let pat = Pattern::with_options("a b c  # comment", CompileOption::Extended).unwrap();
    assert!(pat.is_match(b"xabcx").unwrap());
}

#[test]
fn ungreedy_option() {
    let caps = Pattern::with_options("<.+>", CompileOption::Ungreedy)
        .unwrap()
        .exec(b"<a><b>", MatchOptions::new())
        .unwrap()
        .into_captures()
        .unwrap();
    assert_eq!(caps.get(0), Some(&b"<a>"[..]));
}

#[test]
fn anchored_compile_option() {
    let pat = Pattern::with_options("b", CompileOption::Anchored).unwrap();
    assert!(!pat.is_match(b"ab").unwrap());
    assert!(pat.is_match(b"ba").unwrap());
}

#[test]
fn combined_options() {
    let pat = Pattern::with_options(
        "^ b . c $",
        CompileOption::Extended | CompileOption::DotAll | CompileOption::Caseless,
    )
    .unwrap();
    assert!(pat.is_match(b"B\nC").unwrap());
}

// === Match options ===

#[test]
fn notbol_suppresses_start_anchor() {
    let pat = Pattern::new("^abc").unwrap();
    assert!(pat.is_match(b"abc").unwrap());
    let result = pat.exec(b"abc", MatchOption::NotBol).unwrap();
    assert_eq!(result, MatchResult::NoMatch);
}

#[test]
fn noteol_suppresses_end_anchor() {
    let pat = Pattern::new("abc$").unwrap();
    assert!(pat.is_match(b"abc").unwrap());
    let result = pat.exec(b"abc", MatchOption::NotEol).unwrap();
    assert_eq!(result, MatchResult::NoMatch);
}

#[test]
fn anchored_match_option() {
    let pat = Pattern::new("b").unwrap();
    assert!(pat.is_match(b"ab").unwrap());
    let result = pat.exec(b"ab", MatchOption::Anchored).unwrap();
    assert_eq!(result, MatchResult::NoMatch);
}

// === Capture extraction ===

#[test]
fn captures_report_engine_order() {
    let pat = Pattern::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap();
    let caps = pat
        .exec(b"due 2026-08-29 latest", MatchOptions::new())
        .unwrap()
        .into_captures()
        .unwrap();
    assert_eq!(caps.len(), 4);
    assert_eq!(
        caps.to_vec(),
        vec![&b"2026-08-29"[..], b"2026", b"08", b"29"],
    );
    assert_eq!(caps.span(0), Some((4, 14)));
    assert_eq!(caps.get(4), None);
}

#[test]
fn capture_count_matches_exec_slots() {
    let pat = Pattern::new(r"(a)(b)(c)(d)(e)(f)(g)(h)(i)(j)").unwrap();
    assert_eq!(pat.capture_count().unwrap(), 10);
    let caps = pat
        .exec(b"abcdefghij", MatchOptions::new())
        .unwrap()
        .into_captures()
        .unwrap();
    assert_eq!(caps.len(), 11);
    assert_eq!(caps.get(10), Some(&b"j"[..]));
}

#[test]
fn iter_visits_every_slot() {
    let pat = Pattern::new("(a)(b)?").unwrap();
    let caps = pat
        .exec(b"a", MatchOptions::new())
        .unwrap()
        .into_captures()
        .unwrap();
    let collected: Vec<&[u8]> = caps.iter().collect();
    assert_eq!(collected, caps.to_vec());
}

// === Pattern identity ===

#[test]
fn identity_ignores_the_native_handle() {
    let a = Pattern::new(r"\w+").unwrap();
    let b = Pattern::new(r"\w+").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn patterns_in_a_set() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Pattern::new("a").unwrap());
    set.insert(Pattern::new("a").unwrap());
    set.insert(Pattern::new("b").unwrap());
    assert_eq!(set.len(), 2);
}

// === Determinism ===

#[test]
fn matching_is_deterministic_across_calls_and_recompiles() {
    let subject = b"abc!pqr=apquxz.ixr.zzz.ac.uk";
    let first = {
        let pat = Pattern::new(r"^([^!]+)!(.+)=apquxz\.ixr\.zzz\.ac\.uk$").unwrap();
        pat.exec(subject, MatchOptions::new())
            .unwrap()
            .into_captures()
            .unwrap()
            .to_vec()
    };
    for _ in 0..50 {
        let pat = Pattern::new(r"^([^!]+)!(.+)=apquxz\.ixr\.zzz\.ac\.uk$").unwrap();
        let caps = pat
            .exec(subject, MatchOptions::new())
            .unwrap()
            .into_captures()
            .unwrap();
        assert_eq!(caps.to_vec(), first);
    }
}
