//! Glob-style wildcard matching for names.
//!
//! The only special character is `*`, which matches any sequence of zero or
//! more characters. There is no escaping, so a literal `*` cannot be matched.
//! Matching is case-sensitive and anchored at both ends.
//!
//! A multi-pattern is a list of patterns separated by one or more spaces;
//! it matches a subject if any of its candidates does. An empty
//! multi-pattern has no candidates and matches only the empty subject.
//!
//! ```
//! use wildcard::{has_wildcards, matches, matches_multiple};
//!
//! assert!(matches("dogfish", "*fish"));
//! assert!(!matches("dogcollar", "*fish"));
//! assert!(matches_multiple("a1", "*1 b2"));
//! assert!(has_wildcards("a*b"));
//! ```

mod glob;
mod multi;
mod pattern;

pub use glob::{has_wildcards, matches, matches_multiple};
pub use multi::MultiPattern;
pub use pattern::Pattern;

/// Character matching any sequence of zero or more characters.
pub const WILDCARD: char = '*';

/// Character separating candidates in a multi-pattern.
pub const SEPARATOR: char = ' ';
