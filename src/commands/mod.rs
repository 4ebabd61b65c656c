mod components;
mod file;
mod frames;
mod styles;

pub use components::run_components;
pub use file::run_file;
pub use frames::run_frames;
pub use styles::run_styles;

use std::path::Path;

use figr_lib::{api_base_from_env, load_access_token, FigmaClient, Result};

/// Shared command preamble: read the credential, build the client.
pub(crate) fn client_from_env_file(env_file: &Path) -> Result<FigmaClient> {
    let token = load_access_token(env_file)?;
    FigmaClient::with_base(&api_base_from_env(), token)
}
