use crate::cli::args::Cli;
use crate::cli::completions::print_completions;
use crate::csr::CsrPipeline;
use crate::utils::errors::{KeystoreCsrError, Result};
use crate::utils::output::{print_alias_list, print_csr};
use crate::utils::settings::{Settings, SettingsFile, SettingsOverrides};
use std::io;
use std::path::Path;

pub const USAGE: &str = "Usage:  keystore-csr <JKS file> <alias name>\nUsage:  keystore-csr <JKS file>";

pub fn handle_command(cli: Cli) -> Result<()> {
    // Initialize logging - always to stderr
    if !cli.quiet {
        let log_level = match cli.verbose {
            0 => "keystore_csr=warn",  // Default: warnings only
            1 => "keystore_csr=info",  // -v: info level
            2 => "keystore_csr=debug", // -vv: debug level
            _ => "keystore_csr=trace", // -vvv+: trace level
        };

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(log_level)
            .init();
    }

    if let Some(shell) = cli.completions {
        print_completions(shell);
        return Ok(());
    }

    if !cli.extra.is_empty() {
        return Err(KeystoreCsrError::Usage(USAGE.to_string()));
    }

    let Some(keystore) = cli.keystore.as_deref() else {
        println!("{USAGE}");
        return Ok(());
    };

    let settings = load_settings(&cli)?;
    let pipeline = CsrPipeline::new(keystore, &settings)?;

    match cli.alias.as_deref() {
        Some(alias) => generate_for_alias(&pipeline, alias)?,
        None => generate_for_keystore(&pipeline)?,
    }

    if let Some(hint) = &settings.submission_hint {
        println!("{hint}");
    }

    Ok(())
}

fn generate_for_keystore(pipeline: &CsrPipeline) -> Result<()> {
    let aliases = pipeline.aliases()?;
    print_alias_list(&aliases);

    for alias in &aliases {
        generate_for_alias(pipeline, alias)?;
    }
    Ok(())
}

fn generate_for_alias(pipeline: &CsrPipeline, alias: &str) -> Result<()> {
    let generated = pipeline.process_alias(alias)?;
    print_csr(&file_name(&generated.artifacts.csr), &generated.csr_pem);
    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let file = SettingsFile::load(cli.config.as_deref())?;

    let storepass = resolve_storepass(cli, || {
        rpassword::prompt_password("Keystore passphrase: ")
            .map_err(|e| KeystoreCsrError::Config(format!("Failed to read passphrase: {e}")))
    })?;

    let overrides = SettingsOverrides {
        storepass,
        keytool: cli.keytool.clone(),
        openssl: cli.openssl.clone(),
        out_dir: cli.out_dir.clone(),
    };

    Ok(Settings::merge(overrides, file))
}

/// A prompted passphrase wins over one given by option or environment
fn resolve_storepass<F>(cli: &Cli, prompt: F) -> Result<Option<String>>
where
    F: FnOnce() -> Result<String>,
{
    if cli.ask_storepass {
        Ok(Some(prompt()?))
    } else {
        Ok(cli.storepass.clone())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
