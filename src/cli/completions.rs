//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::args::Cli;
use crate::APP_NAME;

/// Print completion script for the requested shell to stdout.
pub fn print(shell: Shell) {
    write_script(shell, &mut io::stdout());
}

/// Write the completion script for `shell` into `out`.
pub fn write_script(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, APP_NAME, out);
}
