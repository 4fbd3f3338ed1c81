//! Merge Sort
//!
//! Stable top-down merge sort, O(n log n) in all cases with O(n) auxiliary
//! space. A single scratch buffer is allocated per `sort` call and shared
//! by every merge. Each element copied back over the original range counts
//! as one exchange.

use crate::stats::{less_than, SortStats, Sorter};

#[derive(Debug, Default)]
pub struct MergeSort {
    stats: SortStats,
}

impl MergeSort {
    pub fn new() -> Self {
        Self::default()
    }

    fn merge_sort(&mut self, data: &mut [i32], left: usize, right: usize, temp: &mut [i32]) {
        if left < right {
            let mid = left + (right - left) / 2;
            self.merge_sort(data, left, mid, temp);
            self.merge_sort(data, mid + 1, right, temp);
            self.merge(data, left, mid, right, temp);
        }
    }

    fn merge(&mut self, data: &mut [i32], left: usize, mid: usize, right: usize, temp: &mut [i32]) {
        let mut i = left;
        let mut j = mid + 1;
        let mut k = left;

        while i <= mid && j <= right {
            // Ties take the left run, keeping the merge stable.
            if less_than(&mut self.stats, data[i], data[j])
                || !less_than(&mut self.stats, data[j], data[i])
            {
                temp[k] = data[i];
                i += 1;
            } else {
                temp[k] = data[j];
                j += 1;
            }
            k += 1;
        }

        while i <= mid {
            temp[k] = data[i];
            i += 1;
            k += 1;
        }

        while j <= right {
            temp[k] = data[j];
            j += 1;
            k += 1;
        }

        for idx in left..=right {
            data[idx] = temp[idx];
            self.stats.exchanges += 1;
        }
    }
}

impl Sorter for MergeSort {
    fn sort(&mut self, data: &mut [i32]) {
        if data.len() <= 1 {
            return;
        }
        let mut temp = vec![0; data.len()];
        let right = data.len() - 1;
        self.merge_sort(data, 0, right, &mut temp);
    }

    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn stats(&self) -> SortStats {
        self.stats
    }

    fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_sorted;
    use rand::Rng;

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<i32> = vec![];
        MergeSort::new().sort(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![42];
        MergeSort::new().sort(&mut data);
        assert_eq!(data, vec![42]);
    }

    #[test]
    fn test_sort_two() {
        let mut data = vec![2, 1];
        MergeSort::new().sort(&mut data);
        assert_eq!(data, vec![1, 2]);
    }

    #[test]
    fn test_sort_reverse() {
        let mut data: Vec<i32> = (0..100).rev().collect();
        MergeSort::new().sort(&mut data);
        assert_eq!(data, (0..100).collect::<Vec<i32>>());
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..1000).map(|_| rng.gen_range(-1000..1000)).collect();
        let mut expected = data.clone();
        expected.sort();

        MergeSort::new().sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_exchanges_count_buffer_writes() {
        // Every merge level copies all n elements back, so a 4-element
        // input produces 4 writes at the bottom level pairs plus 4 at the
        // top merge.
        let mut data = vec![4, 3, 2, 1];
        let mut sorter = MergeSort::new();
        sorter.sort(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4]);
        assert_eq!(sorter.stats().exchanges, 8);
    }

    #[test]
    fn test_sort_duplicates() {
        let mut data = vec![5, 3, 5, 1, 3, 5, 1, 1];
        MergeSort::new().sort(&mut data);
        assert_eq!(data, vec![1, 1, 1, 3, 3, 5, 5, 5]);
    }
}
