//! isstrack CLI - Command-line interface
//!
//! This binary provides a command-line interface to the isstrack library.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::locate::LocateArgs;
use commands::track::TrackArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "isstrack")]
#[command(version = isstrack::VERSION)]
#[command(about = "Track the International Space Station in real time", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the ISS position and print each fix until stopped
    Track {
        /// Seconds between fetches (default: from config, 3)
        #[arg(long)]
        interval: Option<f64>,

        /// Position feed URL (default: from config)
        #[arg(long)]
        url: Option<String>,

        /// Request timeout in seconds (default: from config, 10)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,

        /// Stop after this many fixes
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        count: Option<u64>,

        /// Also print log output to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Fetch and print the current ISS position once
    Where {
        /// Position feed URL (default: from config)
        #[arg(long)]
        url: Option<String>,

        /// Request timeout in seconds (default: from config, 10)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,

        /// Also print log output to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result: Result<(), CliError> = match cli.command {
        Commands::Track {
            interval,
            url,
            timeout,
            count,
            verbose,
        } => {
            commands::track::run(TrackArgs {
                interval,
                url,
                timeout,
                count,
                verbose,
            })
            .await
        }
        Commands::Where {
            url,
            timeout,
            verbose,
        } => {
            commands::locate::run(LocateArgs {
                url,
                timeout,
                verbose,
            })
            .await
        }
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_track_arguments() {
        let cli = Cli::try_parse_from([
            "isstrack",
            "track",
            "--interval",
            "1.5",
            "--count",
            "4",
            "--url",
            "http://localhost/iss-now.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Track {
                interval,
                count,
                url,
                timeout,
                verbose,
            } => {
                assert_eq!(interval, Some(1.5));
                assert_eq!(count, Some(4));
                assert_eq!(url.as_deref(), Some("http://localhost/iss-now.json"));
                assert_eq!(timeout, None);
                assert!(!verbose);
            }
            _ => panic!("Expected track command"),
        }
    }

    #[test]
    fn test_zero_count_and_timeout_rejected() {
        assert!(Cli::try_parse_from(["isstrack", "track", "--count", "0"]).is_err());
        assert!(Cli::try_parse_from(["isstrack", "where", "--timeout", "0"]).is_err());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from(["isstrack", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::Init { force: true }
            }
        ));
    }
}
