use super::Keystore;
use crate::utils::errors::{KeystoreCsrError, Result};
use crate::utils::tools::diagnostic;
use std::ffi::OsStr;
use std::path::Path;

impl Keystore {
    /// Export the certificate stored under `alias` to `destination` as RFC 1421 PEM
    pub fn export_certificate(&self, alias: &str, destination: &Path) -> Result<()> {
        let mut command = self.command([
            OsStr::new("-export"),
            OsStr::new("-rfc"),
            OsStr::new("-alias"),
            OsStr::new(alias),
            OsStr::new("-file"),
            destination.as_os_str(),
        ]);

        let output = self.keytool.execute("export certificate", &mut command)?;
        self.check_passphrase(&output)?;
        if !output.status.success() {
            return Err(KeystoreCsrError::Export {
                keystore: self.path.display().to_string(),
                alias: alias.to_string(),
                stderr: diagnostic(&output),
            });
        }

        tracing::info!(
            "Certificate for alias '{alias}' exported to {}",
            destination.display()
        );
        Ok(())
    }
}
