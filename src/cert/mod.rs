pub mod reader;
pub mod san;
pub mod subject;

pub use reader::CertificateReader;
pub use san::SubjectAltNames;
pub use subject::Subject;
