use crate::cert::CertificateReader;
use crate::csr::{CsrGenerator, RequestConfig, RequestParams};
use crate::keystore::Keystore;
use crate::utils::errors::Result;
use crate::utils::paths::{sanitize_filename, KeystoreCsrPaths};
use crate::utils::settings::Settings;
use crate::utils::tools::{ExternalTool, OpenSslRelease};
use std::path::{Path, PathBuf};

/// Files written for one alias, all named after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasArtifacts {
    pub certificate: PathBuf,
    pub config: PathBuf,
    pub csr: PathBuf,
    pub key: PathBuf,
}

impl AliasArtifacts {
    pub fn new(out_dir: &Path, alias: &str) -> Self {
        let stem = sanitize_filename(alias);
        Self {
            certificate: out_dir.join(format!("{stem}.pem")),
            config: out_dir.join(format!("{stem}.ini")),
            csr: out_dir.join(format!("{stem}.csr")),
            key: out_dir.join(format!("{stem}.key")),
        }
    }
}

/// Outcome of a successful run for one alias
#[derive(Debug, Clone)]
pub struct GeneratedCsr {
    pub artifacts: AliasArtifacts,
    pub csr_pem: String,
}

/// Export, inspect, configure and request, one alias at a time
pub struct CsrPipeline {
    keystore: Keystore,
    reader: CertificateReader,
    generator: CsrGenerator,
    out_dir: PathBuf,
    params: RequestParams,
}

impl CsrPipeline {
    /// Resolve both tools, confirm the OpenSSL release, and prepare the output directory
    pub fn new(keystore: &Path, settings: &Settings) -> Result<Self> {
        let keytool = ExternalTool::resolve("keytool", settings.keytool.as_deref())?;
        let openssl = ExternalTool::resolve("openssl", settings.openssl.as_deref())?;
        OpenSslRelease::check(&openssl)?;

        KeystoreCsrPaths::ensure_dir_exists(&settings.out_dir)?;

        Ok(Self {
            keystore: Keystore::new(keystore, settings.storepass.clone(), keytool),
            reader: CertificateReader::new(openssl.clone()),
            generator: CsrGenerator::new(openssl),
            out_dir: settings.out_dir.clone(),
            params: settings.request.clone(),
        })
    }

    pub fn aliases(&self) -> Result<Vec<String>> {
        self.keystore.list_aliases()
    }

    /// Run every step for `alias`; the first failure ends it and earlier files stay on disk
    pub fn process_alias(&self, alias: &str) -> Result<GeneratedCsr> {
        tracing::info!(
            "Generating CSR for alias '{alias}' from {}",
            self.keystore.path().display()
        );
        let artifacts = AliasArtifacts::new(&self.out_dir, alias);

        self.keystore
            .export_certificate(alias, &artifacts.certificate)?;

        let subject = self.reader.subject(&artifacts.certificate)?;
        let sans = self.reader.subject_alt_names(&artifacts.certificate)?;

        RequestConfig::new(alias, subject, sans, self.params.clone())?.write(&artifacts.config)?;

        let csr_pem = self
            .generator
            .generate(&artifacts.config, &artifacts.csr, &artifacts.key)?;

        Ok(GeneratedCsr {
            artifacts,
            csr_pem,
        })
    }
}
