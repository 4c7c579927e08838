use clap::{Parser, Subcommand};
use quill_core::cli;
use quill_core::time::Zone;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "quill",
    version,
    about = "quill: log line prefixes and host alias tooling"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },

    /// Show how host aliases compile
    Alias {
        #[arg(required = true)]
        aliases: Vec<String>,
    },

    /// Render a time (ISO-8601 with fraction, default now) in every supported format
    Time {
        time: Option<String>,

        #[arg(long, default_value = "local")]
        zone: Zone,
    },

    /// Print the log prefix for the current time
    Prefix {
        #[arg(long, default_value = "qul")]
        tag: String,

        #[arg(long, default_value = "INF")]
        level: String,

        #[arg(long, default_value = "local")]
        zone: Zone,
    },

    /// Match Host header values read from stdin against the configured aliases
    Match {
        /// Path to the config file or its directory
        #[arg(long, default_value = "config")]
        config: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config { cmd } => cli::conf::run(cmd),
        Command::Alias { aliases } => cli::alias::run(&aliases),
        Command::Time { time, zone } => cli::time::run(time, zone),
        Command::Prefix { tag, level, zone } => cli::prefix::run(&tag, &level, zone),
        Command::Match { config } => cli::matching::run(&config),
    };

    if let Err(e) = result {
        eprintln!("quill error: {e:#}");
        std::process::exit(1);
    }
}
