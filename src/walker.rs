use crate::codec::{Codec, LibWebpCodec};
use crate::constants::SUMMARY_PREFIX;
use crate::convert::convert_file;
use crate::error::Result;
use crate::formats::is_eligible;
use crate::options::{ConvertOptions, SummaryMode};
use crate::stats::{summary_lines, DirectorySummary, DirectoryTotals};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What a directory walk converted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    /// Totals of every directory that converted at least one file, in the
    /// order their subtrees finished.
    pub directories: Vec<DirectorySummary>,
    /// Everything converted under the root.
    pub tree: DirectoryTotals,
}

impl WalkReport {
    pub fn totals_for(&self, directory: &Path) -> Option<&DirectoryTotals> {
        self.directories
            .iter()
            .find(|summary| summary.directory == directory)
            .map(|summary| &summary.totals)
    }
}

/// Converts every JPEG/PNG under `root` to a sibling WebP.
///
/// Entries are visited in filesystem listing order, depth first, and
/// subdirectories only when `options.recursive` is set. Directory-mode
/// conversions never compare sizes, so every WebP written is kept.
///
/// The first error aborts the walk. Files already converted stay converted.
pub fn walk_directory<C: Codec + ?Sized>(
    codec: &C,
    root: &Path,
    options: &ConvertOptions,
) -> Result<WalkReport> {
    let result = try_walk_directory(codec, root, options);
    if let Err(e) = &result {
        tracing::error!(directory = %root.display(), error = %e, "Error processing directory");
    }
    result
}

/// Walks with libwebp and default settings.
pub fn convert_directory_images(root: &Path, quality: i32, recursive: bool) -> Result<WalkReport> {
    let options = ConvertOptions {
        recursive,
        ..ConvertOptions::with_quality(quality)
    };
    walk_directory(&LibWebpCodec, root, &options)
}

fn try_walk_directory<C: Codec + ?Sized>(
    codec: &C,
    root: &Path,
    options: &ConvertOptions,
) -> Result<WalkReport> {
    let max_depth = if options.recursive { usize::MAX } else { 1 };
    // Contents first: a directory is yielded once its whole subtree is done,
    // which is exactly when its summary is due.
    let walker = WalkDir::new(root).contents_first(true).max_depth(max_depth);

    let file_options = ConvertOptions {
        compare_size: false,
        ..options.clone()
    };
    let mut pending: HashMap<PathBuf, DirectoryTotals> = HashMap::new();
    let mut report = WalkReport::default();

    for entry in walker {
        let entry = entry?;
        let file_type = entry.file_type();
        let path = entry.path();

        if file_type.is_dir() {
            // Listed but never entered.
            if !options.recursive && entry.depth() > 0 {
                continue;
            }
            let totals = pending.remove(path).unwrap_or_default();
            finish_directory(path, totals, options.summary, &mut report);
        } else if file_type.is_file() && is_eligible(path) {
            let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
            let result = convert_file(codec, path, &file_options)?;
            pending
                .entry(directory)
                .or_default()
                .record(result.original_size, result.new_size);
        } else {
            tracing::trace!(path = %path.display(), "skipping entry");
        }
    }

    if options.summary == SummaryMode::Tree && !report.tree.is_empty() {
        print_summary(root, &report.tree);
    }

    Ok(report)
}

fn finish_directory(
    directory: &Path,
    totals: DirectoryTotals,
    mode: SummaryMode,
    report: &mut WalkReport,
) {
    if totals.is_empty() {
        return;
    }

    if mode == SummaryMode::PerDirectory {
        print_summary(directory, &totals);
    }
    report.tree.merge(&totals);
    report.directories.push(DirectorySummary {
        directory: directory.to_path_buf(),
        totals,
    });
}

fn print_summary(scope: &Path, totals: &DirectoryTotals) {
    crate::info!();
    for (i, line) in summary_lines(scope, totals).iter().enumerate() {
        if i == 0 {
            crate::info!("{} {}", SUMMARY_PREFIX, line);
        } else {
            crate::info!("{}", line);
        }
    }
}
