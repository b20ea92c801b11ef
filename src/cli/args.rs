use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keystore-csr")]
#[command(version = "1.0.0")]
#[command(about = "Generate certificate signing requests from the certificates in a Java keystore")]
#[command(long_about = None)]
pub struct Cli {
    /// Java keystore file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub keystore: Option<PathBuf>,

    /// Only generate a CSR for this alias (default: every alias in the keystore)
    pub alias: Option<String>,

    /// Unexpected extra arguments, reported as a usage error
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Keystore passphrase handed to keytool
    #[arg(long, env = "KEYSTORE_CSR_STOREPASS", hide_env_values = true)]
    pub storepass: Option<String>,

    /// Prompt for the keystore passphrase; the answer overrides --storepass
    #[arg(long)]
    pub ask_storepass: bool,

    /// keytool executable (default: keytool on PATH)
    #[arg(long, env = "KEYSTORE_CSR_KEYTOOL", value_hint = clap::ValueHint::ExecutablePath)]
    pub keytool: Option<PathBuf>,

    /// openssl executable (default: openssl on PATH)
    #[arg(long, env = "KEYSTORE_CSR_OPENSSL", value_hint = clap::ValueHint::ExecutablePath)]
    pub openssl: Option<PathBuf>,

    /// Directory receiving the .pem, .ini, .csr and .key files (default: current directory)
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,

    /// Settings file (default: ~/.config/keystore-csr/config.yaml)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more verbosity: -v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keystore_only() {
        let cli = Cli::try_parse_from(["keystore-csr", "store.jks"]).unwrap();
        assert_eq!(cli.keystore, Some(PathBuf::from("store.jks")));
        assert!(cli.alias.is_none());
        assert!(cli.extra.is_empty());
    }

    #[test]
    fn test_keystore_and_alias() {
        let cli = Cli::try_parse_from(["keystore-csr", "store.jks", "server1", "-vv"]).unwrap();
        assert_eq!(cli.alias.as_deref(), Some("server1"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_extra_arguments_are_collected() {
        let cli = Cli::try_parse_from(["keystore-csr", "store.jks", "server1", "more"]).unwrap();
        assert_eq!(cli.extra, vec!["more".to_string()]);
    }

    #[test]
    fn test_storepass_accepted_with_prompt() {
        let cli = Cli::try_parse_from([
            "keystore-csr",
            "store.jks",
            "--storepass",
            "changeit",
            "--ask-storepass",
        ])
        .unwrap();
        assert!(cli.ask_storepass);
        assert_eq!(cli.storepass.as_deref(), Some("changeit"));
    }
}
