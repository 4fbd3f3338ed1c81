//! Radix Sort (LSD, base 10)
//!
//! Repeated stable counting-sort passes keyed on successive decimal digits
//! (`exp = 1, 10, 100, ...`) until the largest key runs out of digits.
//! Digit extraction works on `value - bias` where the bias is the minimum
//! value when negatives are present, so non-negative input behaves exactly
//! like the plain non-negative formulation and negative input still sorts
//! correctly.

use crate::stats::{SortStats, Sorter};

#[derive(Debug, Default)]
pub struct RadixSort {
    stats: SortStats,
}

impl RadixSort {
    pub fn new() -> Self {
        Self::default()
    }

    /// One stable counting pass on the decimal digit selected by `exp`.
    fn counting_pass(&mut self, data: &mut [i32], exp: i64, bias: i64) {
        let n = data.len();
        let mut output = vec![0i32; n];
        let mut count = [0usize; 10];

        let digit_of = |v: i32| (((v as i64 - bias) / exp) % 10) as usize;

        for &v in data.iter() {
            count[digit_of(v)] += 1;
            self.stats.comparisons += 1;
        }

        for i in 1..10 {
            count[i] += count[i - 1];
        }

        for &v in data.iter().rev() {
            let digit = digit_of(v);
            count[digit] -= 1;
            output[count[digit]] = v;
            self.stats.exchanges += 1;
        }

        data.copy_from_slice(&output);
    }
}

impl Sorter for RadixSort {
    fn sort(&mut self, data: &mut [i32]) {
        if data.is_empty() {
            return;
        }

        let mut min = data[0];
        let mut max = data[0];
        for &v in &data[1..] {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }

        let bias = (min as i64).min(0);
        let top = max as i64 - bias;

        let mut exp = 1i64;
        while top / exp > 0 {
            self.counting_pass(data, exp, bias);
            exp *= 10;
        }
    }

    fn name(&self) -> &'static str {
        "Radix Sort"
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
        RadixSort::new().sort(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![42];
        RadixSort::new().sort(&mut data);
        assert_eq!(data, vec![42]);
    }

    #[test]
    fn test_sort_basic() {
        let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66];
        RadixSort::new().sort(&mut data);
        assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn test_all_same_still_moves_elements() {
        // One digit pass still routes every element through the output
        // buffer.
        let mut data = vec![3, 3, 3, 3];
        let mut sorter = RadixSort::new();
        sorter.sort(&mut data);
        assert_eq!(data, vec![3, 3, 3, 3]);
        assert!(sorter.stats().exchanges > 0);
        assert_eq!(sorter.stats().exchanges, 4);
    }

    #[test]
    fn test_sort_negative_values() {
        let mut data = vec![-170, 45, -75, 90, -802, 24, 2, -66];
        RadixSort::new().sort(&mut data);
        assert_eq!(data, vec![-802, -170, -75, -66, 2, 24, 45, 90]);
    }

    #[test]
    fn test_sort_random_non_negative() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..1000).map(|_| rng.gen_range(0..100_000)).collect();
        let mut expected = data.clone();
        expected.sort();

        RadixSort::new().sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }

    #[test]
    fn test_sort_random_mixed_sign() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<i32> = (0..1000).map(|_| rng.gen_range(-50_000..50_000)).collect();
        let mut expected = data.clone();
        expected.sort();

        RadixSort::new().sort(&mut data);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_pass_count_follows_widest_key() {
        // Keys up to three digits take three passes of n tallies each.
        let mut data = vec![5, 321, 47];
        let mut sorter = RadixSort::new();
        sorter.sort(&mut data);
        assert_eq!(data, vec![5, 47, 321]);
        assert_eq!(sorter.stats().comparisons, 9);
        assert_eq!(sorter.stats().exchanges, 9);
    }

    #[test]
    fn test_sort_extreme_values() {
        let mut data = vec![i32::MAX, i32::MIN, 0, -1, 1];
        RadixSort::new().sort(&mut data);
        assert_eq!(data, vec![i32::MIN, -1, 0, 1, i32::MAX]);
    }
}
