//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[source]
; JSON endpoint returning the current ISS position (Open Notify format)
url = {}
; Timeout in seconds for each request (default: 10)
timeout = {}

[tracking]
; Seconds between position fetches, fractions allowed (default: 3)
; Tracking halts on the first failed fetch; run the tracker again to restart
interval = {}

[logging]
; Directory for the session log (cleared at the start of each session)
directory = {}
; Log file name
file = {}
"#,
        config.source.url,
        config.source.timeout,
        config.tracking.interval,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

/// Render a path for the INI file, collapsing the home directory to `~`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
