//! Benchmark report generation.
//!
//! Collects one record per (algorithm, distribution, size) run and renders
//! the whole set as CSV (the persisted format) or as a markdown summary.
//! The CSV can be parsed back for post-processing.

use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;

/// A single benchmark measurement for one algorithm on one input.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Algorithm display name (e.g. "Intro Sort (STL-style)").
    pub algorithm: String,
    /// Input distribution label (e.g. "Nearly Sorted").
    pub distribution: String,
    /// Input length in elements.
    pub size: usize,
    /// Wall-clock sort duration in milliseconds.
    pub time_ms: f64,
    /// Comparison count reported by the algorithm.
    pub comparisons: u64,
    /// Exchange count reported by the algorithm.
    pub exchanges: u64,
    /// Whether the output verified as non-decreasing.
    pub sorted_ok: bool,
}

/// A complete benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Description of the run.
    pub description: String,
    /// All collected records, in run order.
    pub records: Vec<BenchmarkRecord>,
}

const CSV_HEADER: &str = "Algorithm,Data Type,Size,Time(ms),Comparisons,Exchanges,Sorted Correctly";

impl BenchmarkReport {
    pub fn new(description: &str) -> Self {
        BenchmarkReport {
            description: description.to_string(),
            records: Vec::new(),
        }
    }

    pub fn add_record(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    /// Render all records as CSV with a fixed seven-column header.
    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        writeln!(output, "{}", CSV_HEADER).ok();
        for r in &self.records {
            writeln!(
                output,
                "{},{},{},{:.3},{},{},{}",
                r.algorithm,
                r.distribution,
                r.size,
                r.time_ms,
                r.comparisons,
                r.exchanges,
                if r.sorted_ok { "Yes" } else { "No" }
            )
            .ok();
        }
        output
    }

    /// Save the report as a CSV file.
    pub fn save_csv(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_csv())
    }

    /// Render a markdown summary: one table per (size, distribution) block.
    pub fn to_markdown_table(&self) -> String {
        let mut output = String::new();

        writeln!(output, "# Sorting Benchmark Report").ok();
        writeln!(output).ok();
        writeln!(output, "**Description:** {}", self.description).ok();

        let mut sizes: Vec<usize> = self.records.iter().map(|r| r.size).collect();
        sizes.sort_unstable();
        sizes.dedup();

        for size in &sizes {
            let mut distributions: Vec<&str> = self
                .records
                .iter()
                .filter(|r| r.size == *size)
                .map(|r| r.distribution.as_str())
                .collect();
            distributions.dedup();

            for dist in distributions {
                writeln!(output).ok();
                writeln!(output, "## {} elements, {}", format_size(*size), dist).ok();
                writeln!(output).ok();
                writeln!(
                    output,
                    "| Algorithm | Time (ms) | Comparisons | Exchanges | Verified |"
                )
                .ok();
                writeln!(output, "|-----------|-----------|-------------|-----------|----------|").ok();

                for r in self
                    .records
                    .iter()
                    .filter(|r| r.size == *size && r.distribution == dist)
                {
                    writeln!(
                        output,
                        "| {} | {:.3} | {} | {} | {} |",
                        r.algorithm,
                        r.time_ms,
                        r.comparisons,
                        r.exchanges,
                        if r.sorted_ok { "yes" } else { "NO" }
                    )
                    .ok();
                }
            }
        }

        output
    }

    /// Save the markdown summary to a file.
    pub fn save_markdown(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_markdown_table())
    }

    /// Parse a CSV report produced by [`BenchmarkReport::to_csv`].
    ///
    /// Returns `None` when the header does not match or no record parses.
    pub fn parse_csv(content: &str) -> Option<BenchmarkReport> {
        let mut lines = content.lines();
        if lines.next()?.trim() != CSV_HEADER {
            return None;
        }

        let mut report = BenchmarkReport::new("Parsed report");
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 7 {
                continue;
            }
            let (Ok(size), Ok(time_ms), Ok(comparisons), Ok(exchanges)) = (
                fields[2].parse::<usize>(),
                fields[3].parse::<f64>(),
                fields[4].parse::<u64>(),
                fields[5].parse::<u64>(),
            ) else {
                continue;
            };
            report.records.push(BenchmarkRecord {
                algorithm: fields[0].to_string(),
                distribution: fields[1].to_string(),
                size,
                time_ms,
                comparisons,
                exchanges,
                sorted_ok: fields[6] == "Yes",
            });
        }

        if report.records.is_empty() {
            None
        } else {
            Some(report)
        }
    }
}

/// Format a size as a human-readable string (e.g. "1K", "1M").
pub fn format_size(size: usize) -> String {
    if size >= 1_000_000 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> BenchmarkRecord {
        BenchmarkRecord {
            algorithm: "Quick Sort".to_string(),
            distribution: "Random".to_string(),
            size: 1000,
            time_ms: 1.5,
            comparisons: 12345,
            exchanges: 6789,
            sorted_ok: true,
        }
    }

    #[test]
    fn test_to_csv() {
        let mut report = BenchmarkReport::new("Test run");
        report.add_record(sample_record());

        let csv = report.to_csv();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(lines.next(), Some("Quick Sort,Random,1000,1.500,12345,6789,Yes"));
    }

    #[test]
    fn test_csv_roundtrip() {
        let mut report = BenchmarkReport::new("Test run");
        report.add_record(sample_record());
        report.add_record(BenchmarkRecord {
            algorithm: "Heap Sort".to_string(),
            distribution: "Few Unique".to_string(),
            size: 50000,
            time_ms: 12.25,
            comparisons: 999,
            exchanges: 0,
            sorted_ok: false,
        });

        let parsed = BenchmarkReport::parse_csv(&report.to_csv()).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0], report.records[0]);
        assert_eq!(parsed.records[1].algorithm, "Heap Sort");
        assert!(!parsed.records[1].sorted_ok);
    }

    #[test]
    fn test_parse_rejects_foreign_content() {
        assert!(BenchmarkReport::parse_csv("").is_none());
        assert!(BenchmarkReport::parse_csv("not,a,report\n1,2,3").is_none());
        assert!(BenchmarkReport::parse_csv(CSV_HEADER).is_none());
    }

    #[test]
    fn test_markdown_contains_records() {
        let mut report = BenchmarkReport::new("Test run");
        report.add_record(sample_record());

        let md = report.to_markdown_table();
        assert!(md.contains("# Sorting Benchmark Report"));
        assert!(md.contains("## 1K elements, Random"));
        assert!(md.contains("| Quick Sort | 1.500 | 12345 | 6789 | yes |"));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500");
        assert_eq!(format_size(1000), "1K");
        assert_eq!(format_size(50000), "50K");
        assert_eq!(format_size(1_000_000), "1M");
    }
}
