use std::path::Path;

use figr_lib::{download_batch, FigrError, ImageFormat, Result};

/// Run the frames command: request rendered images for the given nodes and
/// download each asset. Per-item failures do not abort the batch; the
/// invocation fails only when nothing was downloaded at all.
pub fn run_frames(
    env_file: &Path,
    verbose: bool,
    file_key: &str,
    node_ids: &[String],
    format: ImageFormat,
    scale: u32,
    out_dir: &Path,
) -> Result<()> {
    let client = super::client_from_env_file(env_file)?;

    println!("Requesting images for {} node(s)...", node_ids.len());
    match format {
        ImageFormat::Png => println!("Format: {}, Scale: {scale}", format.as_str()),
        ImageFormat::Svg => println!("Format: {}, Scale: N/A", format.as_str()),
    }
    println!();

    if verbose {
        eprintln!("Calling images endpoint for {file_key}…");
    }
    let response = client.get_images(file_key, node_ids, format, scale)?;

    if let Some(err) = response.err.filter(|err| !err.is_empty()) {
        return Err(FigrError::Api(err));
    }
    if response.images.is_empty() {
        return Err(FigrError::EmptyResult(
            "No images returned from API".to_string(),
        ));
    }

    std::fs::create_dir_all(out_dir)?;
    let resolved = out_dir.canonicalize().unwrap_or_else(|_| out_dir.to_path_buf());
    println!("Downloading to: {}", resolved.display());
    println!("{}", "-".repeat(80));

    let summary = download_batch(
        &client,
        node_ids,
        &response.images,
        out_dir,
        format,
        |line| println!("{line}"),
    )?;

    println!("{}", "-".repeat(80));
    println!(
        "Downloaded {}/{} images successfully",
        summary.succeeded, summary.requested
    );

    if summary.succeeded == 0 {
        return Err(FigrError::EmptyResult(
            "no images could be downloaded".to_string(),
        ));
    }
    Ok(())
}
