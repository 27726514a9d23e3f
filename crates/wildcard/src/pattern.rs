use std::convert::Infallible;
use std::fmt;
use std::mem::take;
use std::str::FromStr;

use memchr::memmem;

use crate::WILDCARD;

/// A compiled wildcard pattern for matching names repeatedly.
///
/// The pattern is split into literal segments, each optionally preceded by
/// a wildcard. Consecutive wildcards collapse into one.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*fish");
/// assert!(pattern.matches("dogfish"));
/// assert!(!pattern.matches("dogcollar"));
///
/// let pattern = Pattern::new("dog *");
/// assert!(pattern.matches("dog collar"));
/// assert!(!pattern.matches("dog"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    /// Creates a new pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// assert_eq!(Pattern::new("a***b"), Pattern::new("a*b"));
    /// assert!(Pattern::new("").matches(""));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Self {
        Compiler::new().compile(raw.as_ref())
    }

    /// Tests whether the pattern matches the whole text.
    ///
    /// Gives the same result as [`matches`](crate::matches) called with the
    /// source string of the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("*");
    /// assert!(pattern.matches(""));
    /// assert!(pattern.matches("anything"));
    ///
    /// let pattern = Pattern::new("a*b*c");
    /// assert!(pattern.matches("abbc"));
    /// assert!(!pattern.matches("acb"));
    /// ```
    #[inline]
    pub fn matches(&self, mut text: &str) -> bool {
        let Some((last, init)) = self.segments.split_last() else {
            return text.is_empty();
        };

        for segment in init {
            if segment.many {
                let Some(i) = memmem::find(text.as_bytes(), segment.text.as_bytes()) else {
                    return false;
                };
                text = &text[i + segment.text.len()..];
            } else {
                let Some(rest) = text.strip_prefix(segment.text.as_str()) else {
                    return false;
                };
                text = rest;
            }
        }

        if last.many {
            text.ends_with(last.text.as_str())
        } else {
            text == last.text
        }
    }

    /// Returns `true` if the pattern contains at least one wildcard.
    #[inline]
    pub fn has_wildcards(&self) -> bool {
        self.segments.iter().any(|segment| segment.many)
    }

    /// Returns `true` if the pattern was compiled from an empty string.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|segment| !segment.many && segment.text.is_empty())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            if segment.many {
                write!(f, "{}", WILDCARD)?;
            }
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ---

#[derive(Debug, PartialEq, Eq, Clone, Default)]
struct Segment {
    many: bool,
    text: String,
}

#[derive(Default)]
struct Compiler {
    segments: Vec<Segment>,
    next: Segment,
}

impl Compiler {
    fn new() -> Self {
        Self::default()
    }

    fn flush(&mut self) {
        if !self.next.text.is_empty() {
            self.segments.push(take(&mut self.next));
        }
    }

    fn compile(mut self, raw: &str) -> Pattern {
        for ch in raw.chars() {
            if ch == WILDCARD {
                self.flush();
                self.next.many = true;
            } else {
                self.next.text.push(ch);
            }
        }

        self.flush();

        if self.next.many {
            self.segments.push(self.next);
        }

        Pattern {
            segments: self.segments,
        }
    }
}

#[cfg(test)]
mod tests;
