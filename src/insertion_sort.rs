//! Insertion Sort
//!
//! Stable in-place O(n²) sort with an O(n) best case on already-sorted
//! input. Exposes [`InsertionSort::sort_range`] so the hybrid algorithms
//! can reuse it on arbitrary closed index ranges.

use crate::stats::{less_than, SortStats, Sorter};

#[derive(Debug, Default)]
pub struct InsertionSort {
    stats: SortStats,
}

impl InsertionSort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort the closed range `[left, right]` in place.
    ///
    /// Classic shift-insert: each element is held as the key while larger
    /// predecessors shift right, then dropped into the gap. Each shift
    /// counts as one exchange.
    pub fn sort_range(&mut self, data: &mut [i32], left: usize, right: usize) {
        for i in left + 1..=right {
            let key = data[i];
            let mut j = i;

            while j > left && less_than(&mut self.stats, key, data[j - 1]) {
                data[j] = data[j - 1];
                self.stats.exchanges += 1;
                j -= 1;
            }
            data[j] = key;
        }
    }
}

impl Sorter for InsertionSort {
    fn sort(&mut self, data: &mut [i32]) {
        if data.len() <= 1 {
            return;
        }
        let right = data.len() - 1;
        self.sort_range(data, 0, right);
    }

    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn stats(&self) -> SortStats {
        self.stats
    }

    fn reset_stats(&mut self) {
        self.stats.reset();
    }
}
