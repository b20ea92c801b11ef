use crate::utils::errors::Result;
use crate::utils::tools::ExternalTool;
use std::fs;
use std::path::Path;

/// Runs `openssl req` against a request config file
pub struct CsrGenerator {
    openssl: ExternalTool,
}

impl CsrGenerator {
    pub fn new(openssl: ExternalTool) -> Self {
        Self { openssl }
    }

    /// Write a new CSR and its unencrypted private key, then return the CSR text
    pub fn generate(&self, config: &Path, csr: &Path, key: &Path) -> Result<String> {
        let mut command = self.openssl.command();
        command
            .args(["req", "-new", "-out"])
            .arg(csr)
            .arg("-keyout")
            .arg(key)
            .arg("-config")
            .arg(config);
        self.openssl.capture("create CSR", &mut command)?;

        tracing::info!(
            "Certificate signing request {} and key {} created",
            csr.display(),
            key.display()
        );
        Ok(fs::read_to_string(csr)?)
    }
}
