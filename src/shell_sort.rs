//! Shell Sort
//!
//! In-place gapped insertion sort with a halving gap sequence
//! (`n/2, n/4, ..., 1`). Roughly O(n^1.5) with this sequence; no stability
//! guarantee.

use crate::stats::{less_than, SortStats, Sorter};

#[derive(Debug, Default)]
pub struct ShellSort {
    stats: SortStats,
}

impl ShellSort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sorter for ShellSort {
    fn sort(&mut self, data: &mut [i32]) {
        let n = data.len();
        let mut gap = n / 2;

        while gap > 0 {
            for i in gap..n {
                let temp = data[i];
                let mut j = i;

                // Gapped shift-insert; each shift counts as one exchange.
                while j >= gap && less_than(&mut self.stats, temp, data[j - gap]) {
                    data[j] = data[j - gap];
                    self.stats.exchanges += 1;
                    j -= gap;
                }
                data[j] = temp;
            }
            gap /= 2;
        }
    }

    fn name(&self) -> &'static str {
        "Shell Sort"
    }

    fn stats(&self) -> SortStats {
        self.stats
    }

    fn reset_stats(&mut self) {
        self.stats.reset();
    }
}
