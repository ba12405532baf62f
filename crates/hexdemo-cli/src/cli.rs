//! CLI argument definitions for the collection demo.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use hexdemo_store::DEFAULT_CAPACITY;

#[derive(Parser)]
#[command(
    name = "hexdemo",
    version,
    about = "Array vs. list collection demo",
    long_about = "Drive a fixed-capacity array store and a growable list store of\n\
                  lettered, colored hex items side by side.\n\n\
                  Run without a subcommand for an interactive session."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Number of slots in the array store.
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_CAPACITY,
        value_parser = parse_capacity,
        global = true
    )]
    pub capacity: usize,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive session reading commands from stdin.
    Repl,

    /// Execute a file of session commands.
    Run(RunArgs),

    /// List the operations each store supports.
    Ops,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Command file, one command per line (`-` for stdin).
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Print the final session state as JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_capacity(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(capacity) => Ok(capacity),
        Err(error) => Err(error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn capacity_must_be_positive() {
        assert_eq!(parse_capacity("5"), Ok(5));
        assert!(parse_capacity("0").is_err());
        assert!(parse_capacity("-2").is_err());
    }

    #[test]
    fn run_accepts_json_flag() {
        let cli = Cli::try_parse_from(["hexdemo", "--capacity", "3", "run", "demo.txt", "--json"])
            .unwrap();
        assert_eq!(cli.capacity, 3);
        match cli.command {
            Some(Command::Run(args)) => {
                assert!(args.json);
                assert_eq!(args.script, PathBuf::from("demo.txt"));
            }
            _ => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn log_timestamps_flag_is_global() {
        let cli = Cli::try_parse_from(["hexdemo", "ops", "--log-timestamps"]).unwrap();
        assert!(cli.log_timestamps);
        let cli = Cli::try_parse_from(["hexdemo", "ops"]).unwrap();
        assert!(!cli.log_timestamps);
    }
}
