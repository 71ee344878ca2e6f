//! Reserved milestone numbers

use std::collections::BTreeSet;

/// Set of milestone numbers that are taken
///
/// Only ever grows. Because nothing is released, the smallest free number
/// never moves backwards, so `cursor` can remember where the last search
/// stopped and each lookup is amortized O(log n).
#[derive(Debug, Clone, Default)]
pub struct ReservedNumbers {
    taken: BTreeSet<u64>,
    cursor: u64,
}

impl ReservedNumbers {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `number` as taken. Returns `false` if it already was.
    pub fn reserve(&mut self, number: u64) -> bool {
        self.taken.insert(number)
    }

    /// Whether `number` is taken
    pub fn contains(&self, number: u64) -> bool {
        self.taken.contains(&number)
    }

    /// Smallest non-negative number not yet taken
    pub fn next_free(&mut self) -> u64 {
        while self.taken.contains(&self.cursor) {
            self.cursor += 1;
        }
        self.cursor
    }

    /// Take the smallest free number
    pub fn allocate(&mut self) -> u64 {
        let number = self.next_free();
        self.taken.insert(number);
        number
    }

    /// Number of taken values
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    /// Whether nothing is taken
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}

impl FromIterator<u64> for ReservedNumbers {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            taken: iter.into_iter().collect(),
            cursor: 0,
        }
    }
}
