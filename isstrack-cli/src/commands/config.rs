//! Configuration management CLI commands.
//!
//! Provides `config path`, `config show` and `config init` for inspecting and
//! creating `~/.isstrack/config.ini`.

use clap::Subcommand;
use isstrack::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Show the effective configuration (file values over defaults)
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Init { force } => run_init(force),
    }
}

/// Show the configuration file path.
fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}

/// Show all effective configuration settings.
fn run_show() -> Result<(), CliError> {
    let path = config_file_path();
    let config = ConfigFile::load()?;

    println!("Configuration Settings");
    println!("======================");
    if path.exists() {
        println!("File: {}", path.display());
    } else {
        println!("File: {} (not found, using defaults)", path.display());
    }
    println!();
    print!("{}", render_settings(&config));

    Ok(())
}

/// Create the configuration file.
fn run_init(force: bool) -> Result<(), CliError> {
    let path = config_file_path();

    if force {
        ConfigFile::default().save()?;
        println!("Wrote default configuration: {}", path.display());
        return Ok(());
    }

    if path.exists() {
        println!("Configuration already exists: {}", path.display());
        println!("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    let path = ConfigFile::ensure_exists()?;
    println!("Created configuration: {}", path.display());

    Ok(())
}

fn render_settings(config: &ConfigFile) -> String {
    format!(
        "[source]\n  url = {}\n  timeout = {}\n\n[tracking]\n  interval = {}\n\n[logging]\n  directory = {}\n  file = {}\n",
        config.source.url,
        config.source.timeout,
        config.tracking.interval,
        config.logging.directory.display(),
        config.logging.file,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_settings_lists_every_key() {
        let rendered = render_settings(&ConfigFile::default());

        for key in ["url = ", "timeout = 10", "interval = 3", "directory = ", "file = isstrack.log"] {
            assert!(rendered.contains(key), "missing {key} in:\n{rendered}");
        }
    }
}
