//! Where command - fetch and print the current ISS position once.

use chrono::{Local, Utc};
use isstrack::source::PositionSource;
use isstrack::tracking::decode;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the where command.
pub struct LocateArgs {
    pub url: Option<String>,
    pub timeout: Option<u64>,
    pub verbose: bool,
}

/// Run the where command.
pub async fn run(args: LocateArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.verbose)?;
    runner.log_startup("where");

    let client = runner.create_client(runner.source_config(args.url, args.timeout))?;

    let raw = client.fetch().await?;
    let position = decode(&raw).map_err(CliError::Decode)?;
    info!(%position, timestamp = position.observed_at_unix_seconds(), "Position fetched");

    println!("ISS: {}", position);
    match position.observed_at() {
        Some(observed) => {
            println!(
                "Observed: {} ({} ago)",
                observed.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S %:z"),
                format_age((Utc::now() - observed).num_seconds())
            );
        }
        None => println!("Observed: unix time {}", position.observed_at_unix_seconds()),
    }

    Ok(())
}

/// Human-readable age of an observation in seconds.
fn format_age(secs: i64) -> String {
    match secs {
        s if s < 0 => "0s".to_string(),
        s if s < 60 => format!("{}s", s),
        s if s < 3600 => format!("{}m {}s", s / 60, s % 60),
        s => format!("{}h {}m", s / 3600, (s % 3600) / 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(-5), "0s");
        assert_eq!(format_age(4), "4s");
        assert_eq!(format_age(125), "2m 5s");
        assert_eq!(format_age(7380), "2h 3m");
    }
}
