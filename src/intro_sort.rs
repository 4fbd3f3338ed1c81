//! Introsort
//!
//! STL-style hybrid over three regimes: insertion sort for small ranges,
//! heap sort once the recursion depth budget runs out, and median-of-three
//! quicksort otherwise. The depth budget of `2 * floor(log2(n))` bounds the
//! recursion, which keeps the worst case at O(n log n) despite quicksort's
//! pathological inputs.
//!
//! The instance privately owns an [`InsertionSort`] and a [`HeapSort`];
//! their counters are folded into this instance after every delegated call
//! and then reset, so `stats()` reflects the total work of the whole run.

use crate::heap_sort::HeapSort;
use crate::insertion_sort::InsertionSort;
use crate::stats::{exchange, less_than, SortStats, Sorter};

/// Ranges at or below this length go to insertion sort.
const INSERTION_CUTOFF: usize = 16;

#[derive(Debug, Default)]
pub struct IntroSort {
    stats: SortStats,
    insertion: InsertionSort,
    heap: HeapSort,
}

impl IntroSort {
    pub fn new() -> Self {
        Self::default()
    }

    fn intro_sort(&mut self, data: &mut [i32], left: usize, right: usize, depth: usize) {
        let size = right - left + 1;

        if size <= INSERTION_CUTOFF {
            self.insertion.sort_range(data, left, right);
            self.stats.absorb(self.insertion.stats());
            self.insertion.reset_stats();
            return;
        }

        if depth == 0 {
            let mut scratch = data[left..=right].to_vec();
            self.heap.sort(&mut scratch);
            self.stats.absorb(self.heap.stats());
            self.heap.reset_stats();
            data[left..=right].copy_from_slice(&scratch);
            return;
        }

        let p = self.partition(data, left, right);
        self.intro_sort(data, left, p - 1, depth - 1);
        self.intro_sort(data, p + 1, right, depth - 1);
    }

    /// Median-of-three pivot selection followed by a Hoare-style
    /// pointer-crossing partition.
    ///
    /// After the three-way reorder, `data[left] <= pivot <= data[right]`
    /// act as sentinels, so the inner scans cannot run off the range. Only
    /// called with `size > INSERTION_CUTOFF`, which keeps `right - 1` and
    /// the crossing indices in bounds.
    fn partition(&mut self, data: &mut [i32], left: usize, right: usize) -> usize {
        let mid = left + (right - left) / 2;

        if less_than(&mut self.stats, data[right], data[left]) {
            exchange(&mut self.stats, data, left, right);
        }
        if less_than(&mut self.stats, data[mid], data[left]) {
            exchange(&mut self.stats, data, left, mid);
        }
        if less_than(&mut self.stats, data[right], data[mid]) {
            exchange(&mut self.stats, data, mid, right);
        }

        let pivot = data[mid];
        exchange(&mut self.stats, data, mid, right - 1);

        let mut i = left;
        let mut j = right - 1;
        loop {
            loop {
                i += 1;
                if !less_than(&mut self.stats, data[i], pivot) {
                    break;
                }
            }
            loop {
                j -= 1;
                if !less_than(&mut self.stats, pivot, data[j]) {
                    break;
                }
            }
            if i >= j {
                break;
            }
            exchange(&mut self.stats, data, i, j);
        }

        exchange(&mut self.stats, data, i, right - 1);
        i
    }

    fn max_depth(n: usize) -> usize {
        2 * n.ilog2() as usize
    }
}

impl Sorter for IntroSort {
    fn sort(&mut self, data: &mut [i32]) {
        if data.len() <= 1 {
            return;
        }
        let right = data.len() - 1;
        let depth = Self::max_depth(data.len());
        self.intro_sort(data, 0, right, depth);
    }

    fn name(&self) -> &'static str {
        "Intro Sort (STL-style)"
    }

    fn stats(&self) -> SortStats {
        self.stats
    }

    fn reset_stats(&mut self) {
        self.stats.reset();
    }
}
