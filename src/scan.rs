use std::path::Path;

use anyhow::Context;
use walkdir::WalkDir;

use crate::{codec, padding, FileOutcome, ScanSummary};

const EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

fn is_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Pad a single image file in place.
///
/// Errors returned here are per-file and recoverable; the scan loop logs
/// them and moves on to the next file.
pub fn process_file(path: &Path) -> crate::Result<FileOutcome> {
    let (img, format) = codec::decode(path)
        .with_context(|| format!("decoding {}", path.display()))?;
    let (width, height) = (img.width(), img.height());

    let Some(canvas) = padding::pad_to_even(&img) else {
        log::debug!("{} is already {}x{}, skipping", path.display(), width, height);
        return Ok(FileOutcome::Unchanged);
    };

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<non-utf8>");
    println!(
        "Processing {}: {}x{} -> {}x{}",
        name,
        width,
        height,
        canvas.width(),
        canvas.height()
    );

    codec::encode(&canvas, format, path)
        .with_context(|| format!("re-encoding {}", path.display()))?;

    Ok(FileOutcome::Padded {
        from: (width, height),
        to: (canvas.width(), canvas.height()),
    })
}

/// Walk `root` recursively and pad every candidate image that has an odd
/// dimension. Per-file failures are reported and tallied, never fatal; a
/// missing root directory is.
pub fn run(root: &Path) -> crate::Result<ScanSummary> {
    if !root.is_dir() {
        return Err(anyhow::anyhow!("Directory not found: {}", root.display()));
    }

    println!("Scanning directory: {}", root.display());

    let mut summary = ScanSummary::default();

    // Walk order is filesystem-dependent; nothing below relies on it.
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() || !is_candidate(entry.path()) {
            continue;
        }

        let outcome = process_file(entry.path()).unwrap_or_else(|e| {
            println!("Failed to process {}: {:#}", entry.path().display(), e);
            FileOutcome::Failed(format!("{e:#}"))
        });
        summary.record(&outcome);
    }

    log::info!(
        "scan complete: {} padded, {} unchanged, {} failed",
        summary.padded,
        summary.unchanged,
        summary.failed
    );

    Ok(summary)
}
