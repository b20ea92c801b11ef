use super::Keystore;
use crate::utils::errors::{KeystoreCsrError, Result};
use crate::utils::tools::diagnostic;

/// Word every alias line of a keytool listing carries, in any of its locales
const ALIAS_MARKER: &str = "Alias";

impl Keystore {
    /// List every alias in the keystore, in keytool's order
    pub fn list_aliases(&self) -> Result<Vec<String>> {
        let mut command = self.command(["-list", "-v"]);

        let output = self.keytool.execute("list keystore aliases", &mut command)?;
        self.check_passphrase(&output)?;
        if !output.status.success() {
            return Err(KeystoreCsrError::ToolFailed {
                tool: self.keytool.name().to_string(),
                action: "list keystore aliases".to_string(),
                stderr: diagnostic(&output),
            });
        }

        let listing = String::from_utf8(output.stdout)?;
        let aliases = parse_alias_listing(&listing);
        if aliases.is_empty() {
            return Err(KeystoreCsrError::NoAliases(self.path.display().to_string()));
        }

        tracing::info!(
            "Found {} alias(es) in {}",
            aliases.len(),
            self.path.display()
        );
        Ok(aliases)
    }
}

/// Extract alias names from `keytool -v -list` output.
///
/// Lines carrying the alias marker contribute the trimmed text after their
/// first `:`; everything else is ignored.
pub fn parse_alias_listing(listing: &str) -> Vec<String> {
    listing
        .lines()
        .filter(|line| line.contains(ALIAS_MARKER))
        .filter_map(|line| line.split_once(':'))
        .map(|(_, alias)| alias.trim().to_string())
        .filter(|alias| !alias.is_empty())
        .collect()
}
