use std::fs;
use std::io;
use std::path::Path;

use crate::error::{FigrError, Result};

/// Key looked up in the env file.
pub const TOKEN_KEY: &str = "FIGMA_ACCESS_TOKEN";

/// Read the access token from a line-oriented `KEY=VALUE` file.
///
/// Blank lines and `#` comments are skipped, the value may be wrapped in
/// single or double quotes. The file is re-read on every invocation.
pub fn load_access_token(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            FigrError::CredentialFile {
                path: path.display().to_string(),
            }
        } else {
            FigrError::Io(e)
        }
    })?;

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if key.trim() == TOKEN_KEY {
            return Ok(strip_quotes(value.trim()).to_string());
        }
    }

    Err(FigrError::CredentialKey {
        key: TOKEN_KEY,
        path: path.display().to_string(),
    })
}

fn strip_quotes(value: &str) -> &str {
    value.trim_matches('"').trim_matches('\'')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_env(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(".env");
        let mut file = fs::File::create(&path).expect("create env file");
        file.write_all(contents.as_bytes()).expect("write env file");
        path
    }

    #[test]
    fn returns_trimmed_unquoted_value() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_env(&dir, "FIGMA_ACCESS_TOKEN = \"figd_abc123\"  \n");
        let token = load_access_token(&path).expect("token");
        assert_eq!(token, "figd_abc123");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_env(
            &dir,
            "# figma credentials\n\nOTHER=1\nFIGMA_ACCESS_TOKEN='figd_xyz'\n",
        );
        assert_eq!(load_access_token(&path).expect("token"), "figd_xyz");
    }

    #[test]
    fn splits_on_first_equals_only() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_env(&dir, "FIGMA_ACCESS_TOKEN=figd=with=equals\n");
        assert_eq!(load_access_token(&path).expect("token"), "figd=with=equals");
    }

    #[test]
    fn missing_key_is_credential_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_env(&dir, "SOME_OTHER_KEY=value\n");
        let err = load_access_token(&path).expect_err("should fail");
        assert!(matches!(err, FigrError::CredentialKey { .. }), "{err}");
    }

    #[test]
    fn missing_file_is_credential_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("does-not-exist.env");
        let err = load_access_token(&path).expect_err("should fail");
        assert!(matches!(err, FigrError::CredentialFile { .. }), "{err}");
    }
}
