use crate::cli::args::Cli;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

const APP_NAME: &str = "keystore-csr";

/// Write the completion script for `shell` to `out`
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, APP_NAME, out);
}

pub fn print_completions(shell: Shell) {
    write_completions(shell, &mut io::stdout());
}
