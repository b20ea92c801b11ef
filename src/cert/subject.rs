use crate::utils::errors::{KeystoreCsrError, Result};
use std::fmt;

/// Distinguished-name fields of a certificate subject, in certificate order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    fields: Vec<String>,
}

impl Subject {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Parse `openssl x509 -noout -subject -nameopt RFC2253` output,
    /// e.g. `subject=CN=gateway3ds-02,OU=IT,O=Example,L=Sydney,ST=NSW,C=AU`.
    ///
    /// Fields are passed through as printed; only surrounding whitespace is removed.
    pub fn parse_line(line: &str) -> Result<Self> {
        let (_, rest) = line.trim().split_once('=').ok_or_else(|| {
            KeystoreCsrError::SubjectParse(format!("expected 'subject=<fields>', got '{}'", line.trim()))
        })?;

        let fields = rest
            .split(',')
            .map(|field| field.trim().to_string())
            .collect();

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// True when no field carries any text
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|field| field.is_empty())
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join(","))
    }
}
