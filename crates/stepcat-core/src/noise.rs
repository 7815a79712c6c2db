//! Filtering of known-noisy validator output
//!
//! `cwltool` and its schema library report every URI resolution and every
//! re-declared identifier, which drowns out real problems in generated
//! definitions. A [`NoiseFilter`] is owned by the validator that produces the
//! output, so no process-wide logger state is touched.

use std::sync::LazyLock;

use regex::Regex;

/// `... previously defined` identifier uniqueness warnings
static PREVIOUSLY_DEFINED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"previously defined\s*$").unwrap());

/// `Resolved 'x' to 'y'` resolution chatter
static RESOLVED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Resolved '.*' to '.*'").unwrap());

/// A set of patterns; lines matching any of them are dropped.
#[derive(Debug, Clone, Default)]
pub struct NoiseFilter {
    patterns: Vec<Regex>,
}

impl NoiseFilter {
    /// A filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// The patterns `cwltool` output needs.
    pub fn cwltool_defaults() -> Self {
        Self {
            patterns: vec![PREVIOUSLY_DEFINED.clone(), RESOLVED.clone()],
        }
    }

    /// Add a pattern.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.patterns.push(Regex::new(pattern)?);
        Ok(self)
    }

    pub fn is_noise(&self, line: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(line))
    }

    /// Non-blank lines of `text` that are not noise.
    pub fn filter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .filter(move |line| !self.is_noise(line))
    }
}
