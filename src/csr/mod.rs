pub mod config;
pub mod generate;
pub mod pipeline;

pub use config::{RequestConfig, RequestParams};
pub use generate::CsrGenerator;
pub use pipeline::{AliasArtifacts, CsrPipeline, GeneratedCsr};
