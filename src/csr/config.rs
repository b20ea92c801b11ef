use crate::cert::{Subject, SubjectAltNames};
use crate::utils::errors::{KeystoreCsrError, Result};
use std::fs;
use std::path::Path;

/// Fixed `[req]` parameters of the generated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    pub default_bits: u32,
    pub default_md: String,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            default_bits: 2048,
            default_md: "sha256".to_string(),
        }
    }
}

/// `openssl req -config` file for one alias
#[derive(Debug, Clone)]
pub struct RequestConfig {
    params: RequestParams,
    subject: Subject,
    sans: SubjectAltNames,
}

impl RequestConfig {
    /// A request needs a subject; an empty one is refused here, before anything is written
    pub fn new(
        alias: &str,
        subject: Subject,
        sans: SubjectAltNames,
        params: RequestParams,
    ) -> Result<Self> {
        if subject.is_empty() {
            return Err(KeystoreCsrError::EmptySubject(alias.to_string()));
        }

        Ok(Self {
            params,
            subject,
            sans,
        })
    }

    pub fn render(&self) -> String {
        let has_sans = !self.sans.is_empty();

        let mut lines = vec![
            "[req]".to_string(),
            format!("default_bits={}", self.params.default_bits),
            "prompt=no".to_string(),
            "encrypt_key=no".to_string(),
            format!("default_md={}", self.params.default_md),
            "distinguished_name=dn".to_string(),
        ];
        if has_sans {
            lines.push("req_extensions=req_ext".to_string());
            lines.push(String::new());
        }

        lines.push("[dn]".to_string());
        lines.extend(self.subject.fields().iter().cloned());

        if has_sans {
            lines.push(String::new());
            lines.push("[req_ext]".to_string());
            lines.push(format!("subjectAltName={}", self.sans.to_config_value()));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        tracing::info!("Config file {} created", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(fields: &[&str]) -> Subject {
        Subject::new(fields.iter().map(|f| f.to_string()).collect())
    }

    fn sans(entries: &[&str]) -> SubjectAltNames {
        SubjectAltNames::new(entries.iter().map(|e| e.to_string()).collect())
    }

    #[test]
    fn test_without_sans() {
        let config =
            RequestConfig::new("x", subject(&["CN=x"]), sans(&[]), RequestParams::default())
                .unwrap();
        let text = config.render();

        assert_eq!(
            text,
            "[req]\ndefault_bits=2048\nprompt=no\nencrypt_key=no\ndefault_md=sha256\ndistinguished_name=dn\n[dn]\nCN=x\n"
        );
        assert!(!text.contains("req_extensions"));
        assert!(!text.contains("[req_ext]"));
    }

    #[test]
    fn test_with_sans() {
        let config = RequestConfig::new(
            "x",
            subject(&["CN=x", "O=Example"]),
            sans(&["DNS:a"]),
            RequestParams::default(),
        )
        .unwrap();
        let text = config.render();

        assert!(text.contains("distinguished_name=dn\nreq_extensions=req_ext\n\n[dn]\n"));
        assert!(text.ends_with("[dn]\nCN=x\nO=Example\n\n[req_ext]\nsubjectAltName=DNS:a\n"));
    }

    #[test]
    fn test_sans_are_comma_joined() {
        let config = RequestConfig::new(
            "x",
            subject(&["CN=x"]),
            sans(&["DNS:a.example.com", "IP:1.2.3.4"]),
            RequestParams::default(),
        )
        .unwrap();

        assert!(config
            .render()
            .contains("\nsubjectAltName=DNS:a.example.com,IP:1.2.3.4\n"));
    }

    #[test]
    fn test_custom_params() {
        let params = RequestParams {
            default_bits: 4096,
            default_md: "sha384".to_string(),
        };
        let config = RequestConfig::new("x", subject(&["CN=x"]), sans(&[]), params).unwrap();
        let text = config.render();

        assert!(text.contains("default_bits=4096\n"));
        assert!(text.contains("default_md=sha384\n"));
    }

    #[test]
    fn test_empty_subject_writes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("x.ini");

        let result = RequestConfig::new("x", subject(&[]), sans(&["DNS:a"]), RequestParams::default())
            .and_then(|config| config.write(&path));

        assert!(matches!(result, Err(KeystoreCsrError::EmptySubject(alias)) if alias == "x"));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("x.ini");

        let config =
            RequestConfig::new("x", subject(&["CN=x"]), sans(&["DNS:a"]), RequestParams::default())
                .unwrap();
        config.write(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), config.render());
    }
}
