use keystore_csr::cli::{handle_command, Cli};
use keystore_csr::utils::errors::Result;

fn main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    if let Err(e) = handle_command(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
