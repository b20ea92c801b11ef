use crate::utils::errors::{KeystoreCsrError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// An external command-line program resolved to an executable path
#[derive(Debug, Clone)]
pub struct ExternalTool {
    name: &'static str,
    path: PathBuf,
}

impl ExternalTool {
    /// Resolve a tool either from an explicit path or by searching `PATH`
    pub fn resolve(name: &'static str, configured: Option<&Path>) -> Result<Self> {
        let candidate = configured.unwrap_or_else(|| Path::new(name));
        let path = which::which(candidate).map_err(|e| KeystoreCsrError::ToolNotFound {
            tool: name.to_string(),
            reason: format!("{} ({e})", candidate.display()),
        })?;

        tracing::debug!("Resolved {name} to {}", path.display());
        Ok(Self { name, path })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Build a command for this tool; callers add arguments and environment
    pub fn command(&self) -> Command {
        Command::new(&self.path)
    }

    /// Run a prepared command and wait for it, without judging the exit status
    pub fn execute(&self, action: &str, command: &mut Command) -> Result<Output> {
        // Only the arguments are logged; secrets travel through the environment
        let args = command
            .get_args()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        tracing::debug!("Executing: {} {args}", self.name);

        command.output().map_err(|e| KeystoreCsrError::ToolFailed {
            tool: self.name.to_string(),
            action: action.to_string(),
            stderr: e.to_string(),
        })
    }

    /// Run the tool with `args` and return its standard output
    pub fn run<I, S>(&self, action: &str, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = self.command();
        command.args(args);
        self.capture(action, &mut command)
    }

    /// Run a prepared command and return its standard output.
    ///
    /// A non-zero exit status becomes [`KeystoreCsrError::ToolFailed`] carrying
    /// the tool's diagnostic output.
    pub fn capture(&self, action: &str, command: &mut Command) -> Result<String> {
        let output = self.execute(action, command)?;

        if !output.status.success() {
            return Err(KeystoreCsrError::ToolFailed {
                tool: self.name.to_string(),
                action: action.to_string(),
                stderr: diagnostic(&output),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Collect whatever a failed tool printed, stderr first
pub fn diagnostic(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let message = [stderr.trim(), stdout.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if message.is_empty() {
        match output.status.code() {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        }
    } else {
        message
    }
}

/// OpenSSL release as reported by `openssl version`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenSslRelease {
    OpenSsl { major: u32, minor: u32, patch: u32 },
    LibreSsl,
}

/// Oldest OpenSSL release whose `x509 -certopt`/`-nameopt` output the parsers understand
const MINIMUM_OPENSSL: (u32, u32, u32) = (1, 0, 2);

impl OpenSslRelease {
    /// Parse the first line of `openssl version`, e.g. `OpenSSL 1.0.2k-fips  26 Jan 2017`
    pub fn parse(banner: &str) -> Result<Self> {
        let unsupported = || KeystoreCsrError::UnsupportedToolVersion(banner.trim().to_string());

        let mut words = banner.split_whitespace();
        let product = words.next().ok_or_else(unsupported)?;
        let version = words.next().ok_or_else(unsupported)?;

        match product {
            "LibreSSL" => Ok(Self::LibreSsl),
            "OpenSSL" => {
                let mut numbers = version.split('.').map(leading_number);
                let major = numbers.next().flatten().ok_or_else(unsupported)?;
                let minor = numbers.next().flatten().ok_or_else(unsupported)?;
                let patch = numbers.next().flatten().unwrap_or(0);
                Ok(Self::OpenSsl {
                    major,
                    minor,
                    patch,
                })
            }
            _ => Err(unsupported()),
        }
    }

    pub fn is_supported(&self) -> bool {
        match self {
            Self::LibreSsl => true,
            Self::OpenSsl {
                major,
                minor,
                patch,
            } => (*major, *minor, *patch) >= MINIMUM_OPENSSL,
        }
    }

    /// Query `openssl version` and reject releases the parsers were not written for
    pub fn check(openssl: &ExternalTool) -> Result<Self> {
        let banner = openssl.run("query the OpenSSL version", ["version"])?;
        let release = Self::parse(&banner)?;

        if !release.is_supported() {
            return Err(KeystoreCsrError::UnsupportedToolVersion(
                banner.trim().to_string(),
            ));
        }

        tracing::debug!("Using {}", banner.trim());
        Ok(release)
    }
}

/// `"2k-fips"` -> `Some(2)`
fn leading_number(part: &str) -> Option<u32> {
    let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
