mod check;
mod init;

pub use check::*;
use clap::Subcommand;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file or its directory
        #[arg(default_value = "config")]
        path: PathBuf,

        /// Plain output without colors
        #[arg(short, long, default_value = "false")]
        plain: bool,

        /// Output the validation report as JSON
        #[arg(long, conflicts_with = "plain")]
        json: bool,
    },

    /// Initialize a new config directory
    Init {
        /// Path to config directory
        #[arg(default_value = "config")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain, json } => check(path, plain, json),
        ConfigCmd::Init { path } => init(path),
    }
}
