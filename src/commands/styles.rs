use std::path::Path;

use figr_lib::{collect_style_usage, render_styles_report, Result, StyleUsage};

/// Run the styles command: walk the full document for colors, text styles
/// and effects, list published style metadata alongside.
pub fn run_styles(env_file: &Path, verbose: bool, file_key: &str) -> Result<()> {
    let client = super::client_from_env_file(env_file)?;

    if verbose {
        eprintln!("Fetching file {file_key}…");
    }
    let file = client.get_file(file_key, None)?;

    if verbose {
        eprintln!("Fetching published styles…");
    }
    let styles = client.get_published_styles(file_key)?;

    let usage = match &file.document {
        Some(document) => collect_style_usage(document),
        None => StyleUsage::default(),
    };
    let published: Vec<_> = styles.meta.styles.iter().collect();

    print!(
        "{}",
        render_styles_report(&file, file_key, &usage, &published)
    );
    Ok(())
}
