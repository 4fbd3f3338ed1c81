//! Timsort (simplified)
//!
//! Python-style run-based merge sort in two phases: fixed-length runs are
//! insertion-sorted in place, then adjacent runs are merged pairwise with a
//! doubling stride until one run covers the whole slice. No galloping mode
//! and no natural run detection; runs have the fixed computed minimum
//! length.
//!
//! The instance privately owns an [`InsertionSort`] whose counters are
//! folded in after every run and then reset.

use crate::insertion_sort::InsertionSort;
use crate::stats::{less_than, SortStats, Sorter};

/// Slices shorter than this are handled by a single insertion-sort run.
const MIN_MERGE: usize = 32;

#[derive(Debug, Default)]
pub struct TimSort {
    stats: SortStats,
    insertion: InsertionSort,
}

/// Minimum run length: halve `n` until it drops below [`MIN_MERGE`],
/// OR-accumulating every low bit shifted out. The result lands in
/// `[MIN_MERGE / 2, MIN_MERGE]` and divides `n` into close-to-power-of-two
/// chunk counts, avoiding a tiny leftover run.
fn calc_min_run(mut n: usize) -> usize {
    let mut r = 0;
    while n >= MIN_MERGE {
        r |= n & 1;
        n >>= 1;
    }
    n + r
}

impl TimSort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the sorted ranges `[left, mid]` and `[mid+1, right]` using an
    /// explicit two-buffer copy-out. One exchange per element written back.
    fn merge(&mut self, data: &mut [i32], left: usize, mid: usize, right: usize) {
        let left_run = data[left..=mid].to_vec();
        let right_run = data[mid + 1..=right].to_vec();

        let mut i = 0;
        let mut j = 0;
        let mut k = left;

        while i < left_run.len() && j < right_run.len() {
            // Ties take the left run, same rule as the plain merge sort.
            if less_than(&mut self.stats, left_run[i], right_run[j])
                || !less_than(&mut self.stats, right_run[j], left_run[i])
            {
                data[k] = left_run[i];
                i += 1;
            } else {
                data[k] = right_run[j];
                j += 1;
            }
            self.stats.exchanges += 1;
            k += 1;
        }

        while i < left_run.len() {
            data[k] = left_run[i];
            i += 1;
            k += 1;
            self.stats.exchanges += 1;
        }

        while j < right_run.len() {
            data[k] = right_run[j];
            j += 1;
            k += 1;
            self.stats.exchanges += 1;
        }
    }
}

impl Sorter for TimSort {
    fn sort(&mut self, data: &mut [i32]) {
        let n = data.len();
        if n <= 1 {
            return;
        }
        let min_run = calc_min_run(n);

        let mut start = 0;
        while start < n {
            let end = (start + min_run - 1).min(n - 1);
            self.insertion.sort_range(data, start, end);
            self.stats.absorb(self.insertion.stats());
            self.insertion.reset_stats();
            start += min_run;
        }

        let mut size = min_run;
        while size < n {
            let mut left = 0;
            while left < n {
                let mid = left + size - 1;
                let right = (left + 2 * size - 1).min(n - 1);
                if mid < right {
                    self.merge(data, left, mid, right);
                }
                left += 2 * size;
            }
            size *= 2;
        }
    }

    fn name(&self) -> &'static str {
        "Tim Sort (Python-style)"
    }

    fn stats(&self) -> SortStats {
        self.stats
    }

    fn reset_stats(&mut self) {
        self.stats.reset();
    }
}
