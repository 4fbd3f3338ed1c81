//! Quick Sort
//!
//! In-place quicksort with a Lomuto partition around the rightmost element.
//! Average O(n log n); worst case O(n²) on already-sorted or adversarial
//! input. Every in-partition relocation is a true instrumented swap.

use crate::stats::{exchange, less_than, SortStats, Sorter};

#[derive(Debug, Default)]
pub struct QuickSort {
    stats: SortStats,
}

impl QuickSort {
    pub fn new() -> Self {
        Self::default()
    }

    fn quick_sort(&mut self, data: &mut [i32], left: usize, right: usize) {
        if left >= right {
            return;
        }
        let p = self.partition(data, left, right);
        if p > left {
            self.quick_sort(data, left, p - 1);
        }
        self.quick_sort(data, p + 1, right);
    }

    fn partition(&mut self, data: &mut [i32], left: usize, right: usize) -> usize {
        let pivot = data[right];
        let mut store = left;

        for j in left..right {
            if less_than(&mut self.stats, data[j], pivot) {
                exchange(&mut self.stats, data, store, j);
                store += 1;
            }
        }
        exchange(&mut self.stats, data, store, right);
        store
    }
}

impl Sorter for QuickSort {
    fn sort(&mut self, data: &mut [i32]) {
        if data.len() <= 1 {
            return;
        }
        let right = data.len() - 1;
        self.quick_sort(data, 0, right);
    }

    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn stats(&self) -> SortStats {
        self.stats
    }

    fn reset_stats(&mut self) {
        self.stats.reset();
    }
}
