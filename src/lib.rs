pub mod cert;
pub mod cli;
pub mod csr;
pub mod keystore;
pub mod utils;

pub use cert::{CertificateReader, Subject, SubjectAltNames};
pub use cli::{args, commands};
pub use csr::{AliasArtifacts, CsrPipeline, GeneratedCsr, RequestConfig, RequestParams};
pub use keystore::Keystore;
pub use utils::{errors, settings};
