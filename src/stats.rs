/// Size accounting and the formatting used in conversion reports
use crate::constants::{BYTES_PER_KIB, BYTES_PER_MIB};
use std::path::{Path, PathBuf};

/// Running totals for one statistics scope (a directory, or a whole tree)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryTotals {
    pub files_converted: u32,
    pub total_original_bytes: u64,
    pub total_new_bytes: u64,
}

impl DirectoryTotals {
    pub fn record(&mut self, original_bytes: u64, new_bytes: u64) {
        self.files_converted += 1;
        self.total_original_bytes += original_bytes;
        self.total_new_bytes += new_bytes;
    }

    pub fn merge(&mut self, other: &DirectoryTotals) {
        self.files_converted += other.files_converted;
        self.total_original_bytes += other.total_original_bytes;
        self.total_new_bytes += other.total_new_bytes;
    }

    pub fn is_empty(&self) -> bool {
        self.files_converted == 0
    }

    pub fn reduction_percent(&self) -> f64 {
        calculate_reduction(self.total_original_bytes, self.total_new_bytes)
    }
}

/// Totals for one directory, tagged with where they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySummary {
    pub directory: PathBuf,
    pub totals: DirectoryTotals,
}

/// Size reduction as a percentage of the original
///
/// Positive means the output is smaller, negative means it grew.
/// An empty original yields 0.
pub fn calculate_reduction(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - new_size as f64) / original_size as f64) * 100.0
}

/// `"60.00%"` style rendering of [`calculate_reduction`]
pub fn format_reduction(original_size: u64, new_size: u64) -> String {
    format!("{:.2}%", calculate_reduction(original_size, new_size))
}

pub fn format_kib(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / BYTES_PER_KIB)
}

pub fn format_mib(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MIB)
}

/// Lines printed for a single-file conversion when sizes are compared
pub fn conversion_report_lines(original_size: u64, new_size: u64) -> Vec<String> {
    vec![
        format!("  Original size: {}", format_kib(original_size)),
        format!("  New size: {}", format_kib(new_size)),
        format!("  Size reduction: {}", format_reduction(original_size, new_size)),
    ]
}

/// Lines printed once a statistics scope has finished
pub fn summary_lines(scope: &Path, totals: &DirectoryTotals) -> Vec<String> {
    vec![
        format!("Conversion results in directory {}:", scope.display()),
        format!("  Number of converted files: {}", totals.files_converted),
        format!(
            "  Total original size: {}",
            format_mib(totals.total_original_bytes)
        ),
        format!("  Total new size: {}", format_mib(totals.total_new_bytes)),
        format!(
            "  Total size reduction: {}",
            format_reduction(totals.total_original_bytes, totals.total_new_bytes)
        ),
    ]
}
