use crate::cert::{Subject, SubjectAltNames};
use crate::utils::errors::Result;
use crate::utils::tools::ExternalTool;
use std::path::Path;

/// `-certopt` flags suppressing everything in `x509 -text` except the extensions
const EXTENSIONS_ONLY: &str =
    "no_subject,no_header,no_version,no_serial,no_signame,no_validity,no_issuer,no_pubkey,no_sigdump,no_aux";

/// Reads subject and SAN data out of an exported certificate with `openssl x509`
pub struct CertificateReader {
    openssl: ExternalTool,
}

impl CertificateReader {
    pub fn new(openssl: ExternalTool) -> Self {
        Self { openssl }
    }

    pub fn subject(&self, pem_file: &Path) -> Result<Subject> {
        let mut command = self.openssl.command();
        command
            .args(["x509", "-noout", "-subject", "-nameopt", "RFC2253", "-in"])
            .arg(pem_file);
        let output = self
            .openssl
            .capture("read the certificate subject", &mut command)?;

        let subject = Subject::parse_line(&output)?;
        tracing::debug!("Subject of {}: {subject}", pem_file.display());
        Ok(subject)
    }

    pub fn subject_alt_names(&self, pem_file: &Path) -> Result<SubjectAltNames> {
        let mut command = self.openssl.command();
        command
            .args(["x509", "-text", "-noout", "-certopt", EXTENSIONS_ONLY, "-in"])
            .arg(pem_file);
        let output = self
            .openssl
            .capture("read the certificate extensions", &mut command)?;

        let sans = SubjectAltNames::parse_dump(&output);
        tracing::debug!(
            "Subject alternative names of {}: {:?}",
            pem_file.display(),
            sans.entries()
        );
        Ok(sans)
    }
}
