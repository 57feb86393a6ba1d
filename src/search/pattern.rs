// src/search/pattern.rs

//! Pattern types and their configuration form.
//!
//! A pattern is anything that can answer `is_match(text)`. Regex is the
//! default kind; a case-insensitive substring kind covers the common case
//! without regex syntax.

use regex::Regex;
use serde::Deserialize;

use crate::error::{AppError, Result};

/// A compiled text matcher.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Regular expression match
    Regex(Regex),

    /// Case-insensitive substring match (needle stored lowercased)
    Substring(String),
}

impl Pattern {
    /// Whether the pattern matches anywhere in the given text.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Pattern::Regex(re) => re.is_match(text),
            Pattern::Substring(needle) => text.to_lowercase().contains(needle),
        }
    }
}

/// Pattern kind selector in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    #[default]
    Regex,
    Substring,
}

/// One labeled pattern as it appears in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternRule {
    /// Human-readable name reported when the pattern matches
    pub label: String,

    /// Pattern text; regex syntax unless `kind = "substring"`
    pub pattern: String,

    #[serde(default)]
    pub kind: PatternKind,
}

impl PatternRule {
    /// Compile the rule into a matcher.
    pub fn compile(&self) -> Result<Pattern> {
        match self.kind {
            PatternKind::Regex => Regex::new(&self.pattern)
                .map(Pattern::Regex)
                .map_err(|e| AppError::pattern(&self.pattern, e)),
            PatternKind::Substring => Ok(Pattern::Substring(self.pattern.to_lowercase())),
        }
    }
}

/// An ordered set of labeled patterns.
///
/// Order is taken from the config file and determines both evaluation order
/// and the label order inside a report entry.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<(String, Pattern)>,
}

impl PatternSet {
    /// Compile a list of rules, preserving their order.
    pub fn compile(rules: &[PatternRule]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(rules.len());
        for rule in rules {
            patterns.push((rule.label.clone(), rule.compile()?));
        }
        Ok(Self { patterns })
    }

    /// Iterate `(label, pattern)` pairs in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Pattern)> {
        self.patterns.iter().map(|(label, p)| (label.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
