use crate::utils::errors::{KeystoreCsrError, Result};
use dirs;
use std::fs;
use std::path::{Path, PathBuf};

pub struct KeystoreCsrPaths;
const PROGRAM_NAME: &str = "keystore-csr";

impl KeystoreCsrPaths {
    /// Get the config directory: ~/.config/keystore-csr/
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(PROGRAM_NAME))
            .ok_or_else(|| {
                KeystoreCsrError::Config("Cannot determine config directory".to_string())
            })
    }

    /// Get the default settings file: ~/.config/keystore-csr/config.yaml
    pub fn default_config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Ensure an output directory exists
    pub fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }
}

/// Sanitize filename by replacing problematic characters
pub fn sanitize_filename(name: &str) -> String {
    name.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("server1"), "server1");
        assert_eq!(sanitize_filename("a/b:c"), "a_b_c");
    }
}
