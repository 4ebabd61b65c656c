use std::path::Path;

use figr_lib::{render_file_report, Result};

/// Run the file command: fetch the tree to `depth` and print it.
pub fn run_file(env_file: &Path, verbose: bool, file_key: &str, depth: u32) -> Result<()> {
    let client = super::client_from_env_file(env_file)?;

    if verbose {
        eprintln!("Fetching file {file_key} (depth {depth})…");
    }
    let file = client.get_file(file_key, Some(depth))?;

    print!("{}", render_file_report(&file, file_key));
    Ok(())
}
