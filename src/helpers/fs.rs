//! File System Utilities
//!
//! Configuration directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use home::home_dir;
use std::fs;
use std::path::PathBuf;

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/dap-gui/` or `$XDG_CONFIG_HOME/dap-gui/`
/// - **macOS**: `~/Library/Application Support/com.doublea.dap-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\doublea\dap-gui\config\`
///
/// Falls back to `~/.dap-gui` when the platform directories cannot be
/// resolved.
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let config_dir = match ProjectDirs::from("com", "doublea", "dap-gui") {
        Some(project_dirs) => project_dirs.config_dir().to_path_buf(),
        None => {
            let Some(home) = home_dir() else {
                return Err(Error::Invalid {
                    message: "Could not determine a configuration directory".to_string(),
                });
            };
            home.join(".dap-gui")
        }
    };

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}
