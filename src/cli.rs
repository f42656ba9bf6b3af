use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::serve::ServeArgs;

#[derive(Parser)]
#[command(
    name = "initiative-relay",
    bin_name = "relay",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Serve the submission endpoint
    Serve(ServeArgs),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn print_completions(shell: Shell) {
    let mut command = Cli::command();
    let bin_name = command.get_bin_name().unwrap_or("relay").to_string();
    clap_complete::generate(shell, &mut command, bin_name, &mut std::io::stdout());
}
