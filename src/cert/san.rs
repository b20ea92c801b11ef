/// Subject Alternative Names in `openssl req` config syntax (`DNS:host`, `IP:addr`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectAltNames {
    entries: Vec<String>,
}

impl SubjectAltNames {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Pick SAN entries out of an `openssl x509 -text` extension dump.
    ///
    /// openssl prints `DNS:a.example.com, IP Address:1.2.3.4`; the dump is split on
    /// commas and then on whitespace, and `Address:` tokens become `IP:`.
    pub fn parse_dump(dump: &str) -> Self {
        let entries = dump
            .split(',')
            .flat_map(str::split_whitespace)
            .filter_map(|token| {
                if token.starts_with("DNS") {
                    Some(token.to_string())
                } else if token.starts_with("Address") {
                    Some(token.replacen("Address", "IP", 1))
                } else {
                    None
                }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Comma-joined value for a `subjectAltName=` line
    pub fn to_config_value(&self) -> String {
        self.entries.join(",")
    }
}
