pub mod aliases;
pub mod export;

pub use aliases::parse_alias_listing;

use crate::utils::errors::{KeystoreCsrError, Result};
use crate::utils::tools::{diagnostic, ExternalTool};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Environment variable keytool reads the passphrase from (`-storepass:env`)
const STOREPASS_ENV: &str = "KEYSTORE_CSR_KEYTOOL_STOREPASS";

/// JVM options keeping keytool's listing and diagnostics in English
const ENGLISH_LOCALE: [&str; 2] = ["-J-Duser.language=en", "-J-Duser.country=US"];

/// keytool's diagnostic when the passphrase does not open the keystore
const WRONG_PASSWORD_MARKER: &str = "password was incorrect";

/// A Java keystore accessed through `keytool`
pub struct Keystore {
    path: PathBuf,
    storepass: String,
    keytool: ExternalTool,
}

impl Keystore {
    pub fn new(
        path: impl Into<PathBuf>,
        storepass: impl Into<String>,
        keytool: ExternalTool,
    ) -> Self {
        Self {
            path: path.into(),
            storepass: storepass.into(),
            keytool,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// keytool command: `args` first, then locale, keystore and passphrase options
    fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = self.keytool.command();
        command
            .args(args)
            .args(ENGLISH_LOCALE)
            .env(STOREPASS_ENV, &self.storepass)
            .arg("-keystore")
            .arg(&self.path)
            .arg("-storepass:env")
            .arg(STOREPASS_ENV);
        command
    }

    /// Map a rejected passphrase to its own error; any other failure is left to the caller
    fn check_passphrase(&self, output: &Output) -> Result<()> {
        if !output.status.success() && diagnostic(output).contains(WRONG_PASSWORD_MARKER) {
            return Err(KeystoreCsrError::UnsupportedPassphrase(
                self.path.display().to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn keystore() -> Keystore {
        let keytool = ExternalTool::resolve("keytool", Some(Path::new("/bin/sh"))).unwrap();
        Keystore::new("store.jks", "password", keytool)
    }

    #[test]
    fn test_command_pins_english_output() {
        let command = keystore().command(["-list", "-v"]);
        let args: Vec<_> = command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();

        assert_eq!(&args[..2], ["-list", "-v"]);
        assert!(args.contains(&"-J-Duser.language=en".to_string()));
        assert!(args.contains(&"-J-Duser.country=US".to_string()));
        assert!(args.ends_with(&[
            "-keystore".to_string(),
            "store.jks".to_string(),
            "-storepass:env".to_string(),
            STOREPASS_ENV.to_string(),
        ]));
    }

    #[test]
    fn test_passphrase_stays_off_the_command_line() {
        let command = keystore().command(["-list"]);
        assert!(!command
            .get_args()
            .any(|arg| arg.to_string_lossy() == "password"));
    }
}
