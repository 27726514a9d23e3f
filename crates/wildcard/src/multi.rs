use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::{SEPARATOR, glob::candidates, pattern::Pattern};

/// A compiled list of space-separated wildcard patterns.
///
/// Matches a subject if any of its candidates matches it. A multi-pattern
/// without candidates matches only the empty subject.
///
/// # Examples
///
/// ```
/// use wildcard::MultiPattern;
///
/// let patterns = MultiPattern::new("cat *fish");
/// assert_eq!(patterns.len(), 2);
/// assert!(patterns.matches("dogfish"));
/// assert!(patterns.matches("cat"));
/// assert!(!patterns.matches("dog"));
///
/// let empty = MultiPattern::new("   ");
/// assert!(empty.is_empty());
/// assert!(empty.matches(""));
/// assert!(!empty.matches("cat"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct MultiPattern {
    patterns: Vec<Pattern>,
}

impl MultiPattern {
    /// Compiles every space-separated candidate of `raw`.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            patterns: candidates(raw.as_ref()).map(Pattern::new).collect(),
        }
    }

    /// Tests whether any candidate matches the whole text.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        if self.patterns.is_empty() {
            return text.is_empty();
        }
        self.patterns.iter().any(|pattern| pattern.matches(text))
    }

    /// Number of candidates.
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    /// Returns `true` if any candidate contains a wildcard.
    pub fn has_wildcards(&self) -> bool {
        self.patterns.iter().any(Pattern::has_wildcards)
    }
}

impl fmt::Display for MultiPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i != 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", pattern)?;
        }
        Ok(())
    }
}

impl FromStr for MultiPattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for MultiPattern {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl<'a> IntoIterator for &'a MultiPattern {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
