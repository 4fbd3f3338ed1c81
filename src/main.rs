//! Sorting Algorithms Benchmark Suite
//!
//! Runs nine instrumented sorting algorithms across six synthetic input
//! distributions, measuring wall-clock time and the comparison/exchange
//! counts each algorithm accumulates. Every output is verified to be
//! non-decreasing, results are printed as console tables and persisted to
//! `benchmark_results.csv`.

use std::path::Path;
use std::time::Instant;

use sorting_bench::data_gen::{self, Distribution};
use sorting_bench::report::{BenchmarkRecord, BenchmarkReport};
use sorting_bench::{all_sorters, is_sorted, Sorter};

/// Default array sizes for a full benchmark run.
const DEFAULT_SIZES: [usize; 5] = [100, 1000, 5000, 10_000, 50_000];

const CSV_PATH: &str = "benchmark_results.csv";

fn main() {
    println!("Sorting Algorithms Benchmark Suite");
    println!("===================================\n");

    // Positional arguments override the default size list.
    let args: Vec<String> = std::env::args().collect();
    let sizes: Vec<usize> = if args.len() > 1 {
        args[1..].iter().filter_map(|a| a.parse().ok()).collect()
    } else {
        DEFAULT_SIZES.to_vec()
    };

    if sizes.is_empty() {
        println!("No valid sizes given; expected positive integers.");
        return;
    }

    let mut algorithms = all_sorters();

    println!("Algorithms tested: {}", algorithms.len());
    println!("Sizes: {:?}", sizes);
    println!(
        "Distributions: {}",
        Distribution::ALL
            .iter()
            .map(|d| d.label())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut report = BenchmarkReport::new("CPU sorting algorithm comparison");

    for &size in &sizes {
        for distribution in Distribution::ALL {
            run_benchmark(&mut algorithms, &mut report, size, distribution);
        }
    }

    println!("\n{}", "=".repeat(80));
    match report.save_csv(Path::new(CSV_PATH)) {
        Ok(()) => println!("Benchmark complete! Results saved to {}", CSV_PATH),
        Err(e) => println!("Benchmark complete, but writing {} failed: {}", CSV_PATH, e),
    }
    println!("{}", "=".repeat(80));
}

/// Run all algorithms on one (size, distribution) pair, printing one table
/// and appending one record per algorithm.
fn run_benchmark(
    algorithms: &mut [Box<dyn Sorter>],
    report: &mut BenchmarkReport,
    size: usize,
    distribution: Distribution,
) {
    println!("\n{}", "=".repeat(80));
    println!(
        "Testing with {} data, Size: {}",
        distribution.label(),
        size
    );
    println!("{}\n", "=".repeat(80));

    println!(
        "{:<25}{:>12}{:>15}{:>12}{:>10}",
        "Algorithm", "Time(ms)", "Comparisons", "Exchanges", "Status"
    );
    println!("{}", "-".repeat(74));

    for algo in algorithms.iter_mut() {
        let mut data = data_gen::generate(size, distribution);

        algo.reset_stats();

        let start = Instant::now();
        algo.sort(&mut data);
        let time_ms = start.elapsed().as_secs_f64() * 1000.0;

        let stats = algo.stats();
        let sorted_ok = is_sorted(&data);

        println!(
            "{:<25}{:>12.3}{:>15}{:>12}{:>10}",
            algo.name(),
            time_ms,
            stats.comparisons,
            stats.exchanges,
            if sorted_ok { "OK" } else { "FAILED" }
        );

        report.add_record(BenchmarkRecord {
            algorithm: algo.name().to_string(),
            distribution: distribution.label().to_string(),
            size,
            time_ms,
            comparisons: stats.comparisons,
            exchanges: stats.exchanges,
            sorted_ok,
        });
    }
}
