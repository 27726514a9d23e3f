use memchr::memchr;

use crate::{SEPARATOR, WILDCARD};

const WILDCARD_BYTE: u8 = WILDCARD as u8;

/// Returns `true` if the pattern contains at least one wildcard.
///
/// ```
/// assert!(wildcard::has_wildcards("a**"));
/// assert!(!wildcard::has_wildcards("abc"));
/// ```
#[inline]
pub fn has_wildcards(pattern: &str) -> bool {
    memchr(WILDCARD_BYTE, pattern.as_bytes()).is_some()
}

/// Tests whether the whole `subject` matches `pattern`.
///
/// Uses two cursors and a single backtrack point remembered at the most
/// recent wildcard, so the stack depth does not depend on the pattern.
/// Comparison is done on bytes, which is exact for UTF-8 input because
/// the only special character is ASCII.
///
/// ```
/// use wildcard::matches;
///
/// assert!(matches("", ""));
/// assert!(matches("", "*"));
/// assert!(!matches("a", ""));
/// assert!(matches("dog collar", "dog co*"));
/// ```
pub fn matches(subject: &str, pattern: &str) -> bool {
    let text = subject.as_bytes();
    let pattern = pattern.as_bytes();

    let mut ti = 0;
    let mut pi = 0;
    // (pattern position right after the wildcard, text position it absorbs up to)
    let mut backtrack: Option<(usize, usize)> = None;

    while ti < text.len() {
        match pattern.get(pi) {
            Some(&WILDCARD_BYTE) => {
                pi += 1;
                backtrack = Some((pi, ti));
            }
            Some(&b) if b == text[ti] => {
                pi += 1;
                ti += 1;
            }
            _ => match backtrack {
                Some((bp, bt)) => {
                    pi = bp;
                    ti = bt + 1;
                    backtrack = Some((bp, ti));
                }
                None => return false,
            },
        }
    }

    pattern[pi..].iter().all(|&b| b == WILDCARD_BYTE)
}

/// Tests whether `subject` matches any of the space-separated candidates in `patterns`.
///
/// Runs of spaces are treated as a single separator and leading or trailing
/// spaces are ignored. When there are no candidates at all, only the empty
/// subject matches. Candidates never contain spaces, so a subject
/// containing a space can only be matched by a candidate with a wildcard.
///
/// ```
/// use wildcard::matches_multiple;
///
/// assert!(matches_multiple("a", "b a"));
/// assert!(matches_multiple("cat", "cat "));
/// assert!(!matches_multiple("cat", "cad "));
/// assert!(!matches_multiple("dog collar", "dog collar"));
/// ```
pub fn matches_multiple(subject: &str, patterns: &str) -> bool {
    let mut candidates = candidates(patterns).peekable();
    if candidates.peek().is_none() {
        return subject.is_empty();
    }

    candidates.any(|pattern| matches(subject, pattern))
}

pub(crate) fn candidates(patterns: &str) -> impl Iterator<Item = &str> {
    patterns.split(SEPARATOR).filter(|candidate| !candidate.is_empty())
}
