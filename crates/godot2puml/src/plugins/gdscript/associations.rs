//! Project-wide class names and whole-word type matching
//!
//! `KnownClasses` is filled during the first project pass and then frozen
//! into a `ClassMatcher`, which every extractor in the second pass borrows.

use std::collections::BTreeSet;

use regex::Regex;
use serde::Serialize;
use tracing::{trace, warn};

/// Set of every `class_name` declared in a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KnownClasses {
    names: BTreeSet<String>,
}

impl KnownClasses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class name, returning `true` if it was not known yet
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Compile the set into a matcher for type annotations
    pub fn matcher(&self) -> ClassMatcher {
        ClassMatcher::new(self)
    }
}

impl<S: Into<String>> FromIterator<S> for KnownClasses {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for KnownClasses {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

/// Finds known class names inside type annotations
///
/// A class is mentioned when its name appears as a whole word, so
/// `Array[Weapon]` mentions `Weapon` while `WeaponSystem` does not.
#[derive(Debug, Clone)]
pub struct ClassMatcher {
    patterns: Vec<(String, Regex)>,
}

impl ClassMatcher {
    pub fn new(known: &KnownClasses) -> Self {
        let patterns = known
            .iter()
            .filter_map(|name| {
                let pattern = format!(r"\b{}\b", regex::escape(name));
                match Regex::new(&pattern) {
                    Ok(regex) => Some((name.to_string(), regex)),
                    Err(e) => {
                        warn!(class_name = name, error = %e, "Skipping unmatchable class name");
                        None
                    }
                }
            })
            .collect();

        Self { patterns }
    }

    /// Known class names mentioned in the type, in sorted order
    pub fn mentioned_in<'a>(&'a self, type_str: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.patterns
            .iter()
            .filter(move |(_, regex)| regex.is_match(type_str))
            .map(move |(name, _)| {
                trace!(class_name = name.as_str(), type_str, "Type mentions known class");
                name.as_str()
            })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
