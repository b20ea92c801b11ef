use crate::csr::RequestParams;
use crate::utils::errors::{KeystoreCsrError, Result};
use crate::utils::paths::KeystoreCsrPaths;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Passphrase keytool is given when nothing else is configured
pub const DEFAULT_STOREPASS: &str = "password";

/// Settings file contents; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub storepass: Option<String>,
    pub keytool: Option<PathBuf>,
    pub openssl: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub default_bits: Option<u32>,
    pub default_md: Option<String>,
    pub submission_hint: Option<String>,
}

impl SettingsFile {
    /// Load settings from `path`.
    ///
    /// An explicitly requested file must exist; the default location is
    /// optional and silently skipped when absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (KeystoreCsrPaths::default_config_file()?, false),
        };

        if !path.exists() {
            if explicit {
                return Err(KeystoreCsrError::Config(format!(
                    "Settings file {} does not exist",
                    path.display()
                )));
            }
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        tracing::debug!("Loading settings from {}", path.display());
        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub storepass: Option<String>,
    pub keytool: Option<PathBuf>,
    pub openssl: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
}

/// Effective settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub storepass: String,
    pub keytool: Option<PathBuf>,
    pub openssl: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub request: RequestParams,
    pub submission_hint: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::merge(SettingsOverrides::default(), SettingsFile::default())
    }
}

impl Settings {
    /// Command line wins over the settings file, which wins over built-in defaults
    pub fn merge(overrides: SettingsOverrides, file: SettingsFile) -> Self {
        let defaults = RequestParams::default();

        Self {
            storepass: overrides
                .storepass
                .or(file.storepass)
                .unwrap_or_else(|| DEFAULT_STOREPASS.to_string()),
            keytool: overrides.keytool.or(file.keytool),
            openssl: overrides.openssl.or(file.openssl),
            out_dir: overrides
                .out_dir
                .or(file.out_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            request: RequestParams {
                default_bits: file.default_bits.unwrap_or(defaults.default_bits),
                default_md: file.default_md.unwrap_or(defaults.default_md),
            },
            submission_hint: file.submission_hint,
        }
    }
}
