use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeystoreCsrError {
    #[error("Incorrect number of arguments.\n{0}")]
    Usage(String),

    #[error("{tool} command not found: {reason}")]
    ToolNotFound { tool: String, reason: String },

    #[error("Unable to {action} with {tool}: {stderr}")]
    ToolFailed {
        tool: String,
        action: String,
        stderr: String,
    },

    #[error("Could not export alias '{alias}' from {keystore}. The keystore file name or alias name is incorrect, or the configured passphrase does not open this keystore. ({stderr})")]
    Export {
        keystore: String,
        alias: String,
        stderr: String,
    },

    #[error("Keystore {0} rejected the configured passphrase; set --storepass or use --ask-storepass")]
    UnsupportedPassphrase(String),

    #[error("Unsupported OpenSSL release: {0}")]
    UnsupportedToolVersion(String),

    #[error("No aliases found in keystore {0}. Cannot generate CSR.")]
    NoAliases(String),

    #[error("Subject fields are empty for alias '{0}', cannot proceed for CSR creation")]
    EmptySubject(String),

    #[error("Subject parsing error: {0}")]
    SubjectParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, KeystoreCsrError>;
