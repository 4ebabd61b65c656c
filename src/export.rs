//! Frame image export: filename sanitization and the batch download loop.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::client::{FigmaClient, ImageFormat};
use crate::error::Result;

/// Characters reserved by common filesystems, replaced with `_`.
const RESERVED: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect()
}

/// Thousands-separated byte count for the per-item report lines.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Outcome of one batch of asset downloads.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub requested: usize,
    pub succeeded: usize,
    pub written: Vec<PathBuf>,
}

/// Download each requested node's asset into `out_dir`.
///
/// The directory is created if absent. Per-item failures (missing URL,
/// download error, write error) are reported through `progress` and never
/// abort the batch. Items are attempted in the order they were requested.
pub fn download_batch(
    client: &FigmaClient,
    node_ids: &[String],
    images: &HashMap<String, Option<String>>,
    out_dir: &Path,
    format: ImageFormat,
    mut progress: impl FnMut(&str),
) -> Result<BatchSummary> {
    fs::create_dir_all(out_dir)?;

    let mut summary = BatchSummary {
        requested: node_ids.len(),
        ..BatchSummary::default()
    };

    for node_id in node_ids {
        let url = images.get(node_id).and_then(|u| u.as_deref()).unwrap_or("");
        if url.is_empty() {
            progress(&format!(
                "✗ {node_id}: No image URL returned (node may not exist or is not exportable)"
            ));
            continue;
        }

        let filename = format!("{}.{}", sanitize_filename(node_id), format.as_str());
        let output_path = out_dir.join(&filename);

        match fetch_and_write(client, url, &output_path) {
            Ok(size) => {
                progress(&format!(
                    "✓ {node_id} → {filename} ({} bytes)",
                    group_digits(size)
                ));
                summary.succeeded += 1;
                summary.written.push(output_path);
            }
            Err(err) => {
                progress(&format!("✗ {node_id}: {err}"));
            }
        }
    }

    Ok(summary)
}

fn fetch_and_write(client: &FigmaClient, url: &str, path: &Path) -> Result<u64> {
    let bytes = client.download_asset(url)?;
    fs::write(path, &bytes)?;
    Ok(bytes.len() as u64)
}
