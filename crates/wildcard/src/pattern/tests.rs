use rstest::rstest;

use super::*;

fn pattern(s: &str) -> Pattern {
    Pattern::new(s)
}

fn matches(pattern: &str, text: &str) -> bool {
    Pattern::new(pattern).matches(text)
}

fn segment(many: bool, text: &str) -> Segment {
    Segment {
        many,
        text: text.into(),
    }
}

#[test]
fn test_pattern_parsing_empty() {
    let p = pattern("");
    assert!(p.segments.is_empty());
    assert!(p.is_empty());
    assert_eq!(p, Pattern::default());
}

#[test]
fn test_pattern_parsing_literal() {
    let p = pattern("hello");
    assert_eq!(p.segments, vec![segment(false, "hello")]);
    assert!(!p.is_empty());
}

#[test]
fn test_pattern_parsing_single_asterisk() {
    let p = pattern("*");
    assert_eq!(p.segments, vec![segment(true, "")]);
    assert!(!p.is_empty());
}

#[test]
fn test_pattern_parsing_multiple_asterisks() {
    assert_eq!(pattern("***").segments, vec![segment(true, "")]);
    assert_eq!(pattern("a***b"), pattern("a*b"));
}

#[test]
fn test_pattern_parsing_text_with_asterisk() {
    let p = pattern("foo*bar");
    assert_eq!(p.segments, vec![segment(false, "foo"), segment(true, "bar")]);
}

#[test]
fn test_pattern_parsing_trailing_asterisk() {
    let p = pattern("foo*");
    assert_eq!(p.segments, vec![segment(false, "foo"), segment(true, "")]);
}

#[test]
fn test_pattern_parsing_special_chars_are_literal() {
    let p = pattern(r"a?b\*c d");
    assert_eq!(p.segments, vec![segment(false, r"a?b\"), segment(true, "c d")]);
}

#[test]
fn test_pattern_parsing_complex() {
    let p = pattern("*foo**bar*baz*");
    assert_eq!(
        p.segments,
        vec![
            segment(true, "foo"),
            segment(true, "bar"),
            segment(true, "baz"),
            segment(true, ""),
        ]
    );
}

#[rstest]
#[case("hello", "hello", true)]
#[case("hello", "world", false)]
#[case("hello", "hell", false)]
#[case("hello", "helloo", false)]
#[case("dog collar", "dog collar", true)]
fn test_exact_match(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("*", "")]
#[case("*", "anything")]
#[case("*", "multiple words")]
fn test_asterisk_match_any(#[case] pattern: &str, #[case] text: &str) {
    assert!(matches(pattern, text));
}

#[rstest]
#[case("*world", "world", true)]
#[case("*world", "hello world", true)]
#[case("*world", "xxxworld", true)]
#[case("*world", "world!", false)]
#[case("*world", "wor", false)]
fn test_asterisk_prefix(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("hello*", "hello", true)]
#[case("hello*", "hello world", true)]
#[case("hello*", "helloxxx", true)]
#[case("hello*", "hell", false)]
#[case("hello*", "xhello", false)]
fn test_asterisk_suffix(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("foo*bar", "foobar", true)]
#[case("foo*bar", "fooxbar", true)]
#[case("foo*bar", "foo and bar", true)]
#[case("foo*bar", "foobarx", false)]
#[case("foo*bar", "xfoobar", false)]
#[case("foo*bar", "foo", false)]
#[case("foo*bar", "bar", false)]
fn test_asterisk_middle(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[rstest]
#[case("*foo*bar*", "foobar", true)]
#[case("*foo*bar*", "xxxfooxbarxxx", true)]
#[case("*foo*bar*", "prefix foo middle bar suffix", true)]
#[case("*foo*bar*", "foo", false)]
#[case("*foo*bar*", "barfoo", false)]
fn test_multiple_asterisks(#[case] pattern: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(matches(pattern, text), expected);
}

#[test]
fn test_suffix_does_not_overlap_consumed_text() {
    assert!(!matches("a*a", "a"));
    assert!(matches("a*a", "aa"));
    assert!(!matches("ab*b", "ab"));
    assert!(matches("*ab*b", "abb"));
    assert!(!matches("*aba*aba", "abab"));
    assert!(matches("*aba*aba", "abaaba"));
}

#[test]
fn test_backtracking_first_match_fails() {
    assert!(matches("*ab*cd", "ababcd"));
    assert!(matches("*ab*cd", "abXabcd"));
    assert!(matches("*foo*bar", "foofoofoobar"));
    assert!(!matches("*foo*baz", "foofoofoobar"));
    assert!(!matches("*test*end", "testXtestYtest"));
}

#[test]
fn test_utf8() {
    assert!(matches("*世界*", "hello世界world"));
    assert!(matches("🔥*💧", "🔥test💧"));
    assert!(matches("a*ö*z", "aäöüz"));
    assert!(!matches("世界", "世"));
}

#[rstest]
#[case("", "")]
#[case("hello", "hello")]
#[case("*", "*")]
#[case("***", "*")]
#[case("foo*bar", "foo*bar")]
#[case("foo**bar*", "foo*bar*")]
#[case("*hello*world*", "*hello*world*")]
#[case("dog collar", "dog collar")]
fn test_display(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(pattern(input).to_string(), expected);
}

#[test]
fn test_display_roundtrip() {
    for p in ["", "hello", "*", "foo*bar", "*foo*bar*", "a b*"] {
        let pattern = Pattern::new(p);
        let reparsed = Pattern::new(pattern.to_string());
        assert_eq!(pattern, reparsed, "Pattern '{}' failed roundtrip", p);
    }
}

#[test]
fn test_from_str() {
    let p: Pattern = "a*".parse().unwrap();
    assert_eq!(p, Pattern::from("a*"));
}
