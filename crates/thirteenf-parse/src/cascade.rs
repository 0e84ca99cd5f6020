//! Ordered pattern cascades.
//!
//! Submissions from different EDGAR eras encode the same datum in different
//! ways. A [`Cascade`] holds one rule per known variant, most specific first,
//! and returns the result of the first rule that succeeds. Later rules are
//! never consulted once a rule has produced a value.
//!
//! # Example
//!
//! ```
//! use thirteenf_parse::cascade::{Cascade, Rule};
//!
//! let cascade = Cascade::new(vec![
//!     Rule::new("labeled", r"CIK:\s*(\d+)", |c| Some(c[1].to_string())),
//!     Rule::new("tagged", r"<cik>(\d+)</cik>", |c| Some(c[1].to_string())),
//! ]);
//!
//! assert_eq!(cascade.resolve("<cik>42</cik>").as_deref(), Some("42"));
//! assert_eq!(cascade.resolve("nothing here"), None);
//! ```

use regex::{Captures, Regex};
use std::fmt;

/// Extractor applied to the captures of a matching rule.
///
/// Returning `None` means the text matched the pattern but did not yield a
/// usable value; the cascade then moves on to the next rule.
pub type Extract<T> = fn(&Captures<'_>) -> Option<T>;

/// A single named pattern in a cascade.
pub struct Rule<T> {
    name: &'static str,
    pattern: Regex,
    extract: Extract<T>,
}

impl<T> Rule<T> {
    /// Creates a rule from a pattern literal.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression. Rules are built
    /// from literals in this crate, so an invalid pattern is a programming
    /// error.
    pub fn new(name: &'static str, pattern: &str, extract: Extract<T>) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid pattern for cascade rule `{name}`: {e}"));
        Self::from_regex(name, pattern, extract)
    }

    /// Creates a rule from an already compiled regex.
    pub const fn from_regex(name: &'static str, pattern: Regex, extract: Extract<T>) -> Self {
        Self {
            name,
            pattern,
            extract,
        }
    }

    /// Rule name, used in diagnostics.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, text: &str) -> Option<T> {
        self.pattern
            .captures(text)
            .and_then(|captures| (self.extract)(&captures))
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

/// Value produced by a cascade together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    /// Name of the winning rule
    pub rule: &'static str,
    /// Position of the winning rule in the cascade
    pub index: usize,
    /// Extracted value
    pub value: T,
}

/// Ordered, first-match-wins list of rules.
#[derive(Debug)]
pub struct Cascade<T> {
    rules: Vec<Rule<T>>,
}

impl<T> Cascade<T> {
    /// Creates a cascade evaluating `rules` in the given order.
    pub const fn new(rules: Vec<Rule<T>>) -> Self {
        Self { rules }
    }

    /// Returns the value of the first successful rule.
    pub fn resolve(&self, text: &str) -> Option<T> {
        self.resolve_named(text).map(|resolved| resolved.value)
    }

    /// Returns the first successful rule along with its value.
    pub fn resolve_named(&self, text: &str) -> Option<Resolved<T>> {
        self.rules.iter().enumerate().find_map(|(index, rule)| {
            rule.apply(text).map(|value| Resolved {
                rule: rule.name,
                index,
                value,
            })
        })
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the cascade has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
