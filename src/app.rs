// std imports
use std::{
    fmt,
    io::{BufRead, Write},
};

// third-party imports
use wildcard::{MultiPattern, Pattern};

// local imports
use crate::{error::*, input::Input, settings::Mode};

// ---

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub pattern: String,
    pub mode: Mode,
    pub exclude: Vec<String>,
    pub invert: bool,
    pub count: bool,
}

/// Name filter selecting lines by a wildcard pattern.
pub struct App {
    options: Options,
    matcher: Matcher,
    exclude: Vec<MultiPattern>,
}

impl App {
    pub fn new(options: Options) -> Self {
        let matcher = Matcher::new(&options.pattern, options.mode);
        log::debug!("compiled {:?} pattern {:?}", options.mode, matcher.to_string());

        let exclude = options
            .exclude
            .iter()
            .map(MultiPattern::new)
            .filter(|patterns| !patterns.is_empty())
            .collect();

        Self {
            options,
            matcher,
            exclude,
        }
    }

    /// Processes all inputs in order and returns the total number of selected names.
    pub fn run(&self, inputs: Vec<Input>, output: &mut dyn Write) -> Result<usize> {
        let mut total = 0;
        for input in inputs {
            let n = self.filter(input.stream, output)?;
            log::debug!("selected {} names from {}", n, input.reference);
            total += n;
        }

        if self.options.count {
            writeln!(output, "{}", total)?;
        }
        output.flush()?;

        Ok(total)
    }

    /// Writes selected lines of `input` to `output` unless counting only,
    /// and returns the number of selected lines.
    pub fn filter<R: BufRead, W: Write + ?Sized>(&self, input: R, output: &mut W) -> Result<usize> {
        let mut n = 0;
        for line in input.split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }

            if self.select(&String::from_utf8_lossy(&line)) {
                n += 1;
                if !self.options.count {
                    output.write_all(&line)?;
                    output.write_all(b"\n")?;
                }
            }
        }
        Ok(n)
    }

    /// Tells whether the name is selected.
    pub fn select(&self, name: &str) -> bool {
        if self.exclude.iter().any(|patterns| patterns.matches(name)) {
            return false;
        }
        self.matcher.matches(name) != self.options.invert
    }
}

// ---

enum Matcher {
    Single(Pattern),
    Multiple(MultiPattern),
}

impl Matcher {
    fn new(pattern: &str, mode: Mode) -> Self {
        match mode {
            Mode::Single => Self::Single(Pattern::new(pattern)),
            Mode::Multiple => Self::Multiple(MultiPattern::new(pattern)),
        }
    }

    #[inline]
    fn matches(&self, name: &str) -> bool {
        match self {
            Self::Single(pattern) => pattern.matches(name),
            Self::Multiple(patterns) => patterns.matches(name),
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(pattern) => fmt::Display::fmt(pattern, f),
            Self::Multiple(patterns) => fmt::Display::fmt(patterns, f),
        }
    }
}
