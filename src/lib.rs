//! Instrumented in-memory integer sorting algorithms.
//!
//! Nine sorting strategies share one instrumentation contract: every
//! ordering decision routes through an instrumented comparison and every
//! element movement is tallied, so operation counts are directly
//! comparable across algorithms. Two of them are hybrids — an STL-style
//! introsort and a simplified Python-style timsort — that privately own
//! and delegate to the elementary algorithms.
//!
//! The `sorting-bench` binary exercises all nine across six synthetic
//! input distributions and writes console tables plus a CSV report.

pub mod counting_sort;
pub mod data_gen;
pub mod heap_sort;
pub mod insertion_sort;
pub mod intro_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod radix_sort;
pub mod report;
pub mod shell_sort;
pub mod stats;
pub mod tim_sort;

pub use counting_sort::CountingSort;
pub use heap_sort::HeapSort;
pub use insertion_sort::InsertionSort;
pub use intro_sort::IntroSort;
pub use merge_sort::MergeSort;
pub use quick_sort::QuickSort;
pub use radix_sort::RadixSort;
pub use shell_sort::ShellSort;
pub use stats::{SortStats, Sorter};
pub use tim_sort::TimSort;

/// All nine algorithms with fresh counters, in benchmark order.
pub fn all_sorters() -> Vec<Box<dyn Sorter>> {
    vec![
        Box::new(InsertionSort::new()),
        Box::new(MergeSort::new()),
        Box::new(QuickSort::new()),
        Box::new(HeapSort::new()),
        Box::new(IntroSort::new()),
        Box::new(TimSort::new()),
        Box::new(ShellSort::new()),
        Box::new(CountingSort::new()),
        Box::new(RadixSort::new()),
    ]
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
