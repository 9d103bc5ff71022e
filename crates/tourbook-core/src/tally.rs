//! Insertion-ordered counting.

use std::collections::HashMap;

/// A string → count mapping that remembers the order in which keys were
/// first seen.
///
/// Ranking helpers sort tallies stably, so equal counts keep first-seen
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: &str) {
        self.add_many(key, 1);
    }

    /// Count `n` occurrences of `key`.
    pub fn add_many(&mut self, key: &str, n: usize) {
        if let Some(&pos) = self.positions.get(key) {
            self.entries[pos].1 += n;
        } else {
            self.positions.insert(key.to_owned(), self.entries.len());
            self.entries.push((key.to_owned(), n));
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> usize {
        self.positions
            .get(key)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, n)| (key.as_str(), *n))
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the tally, yielding entries in first-seen order.
    #[must_use]
    pub fn into_entries(self) -> Vec<(String, usize)> {
        self.entries
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Self::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}

impl<K: AsRef<str>> FromIterator<(K, usize)> for Tally {
    fn from_iter<I: IntoIterator<Item = (K, usize)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (key, n) in iter {
            tally.add_many(key.as_ref(), n);
        }
        tally
    }
}
