use std::path::Path;

use figr_lib::{render_components_report, Result};

/// Run the components command: list published components with the page each
/// one lives on.
pub fn run_components(env_file: &Path, verbose: bool, file_key: &str) -> Result<()> {
    let client = super::client_from_env_file(env_file)?;

    if verbose {
        eprintln!("Fetching components for {file_key}…");
    }
    let components = client.get_components(file_key)?;

    // The document tree is only needed to resolve containing pages.
    if verbose {
        eprintln!("Fetching file for page lookup…");
    }
    let file = client.get_file(file_key, None)?;

    let collection = &components.meta.components;
    print!(
        "{}",
        render_components_report(&file, file_key, collection.iter(), collection.len())
    );
    Ok(())
}
