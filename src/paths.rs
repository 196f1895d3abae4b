//! Where Framecraft keeps its config file and session logs.
//!
//! Debug builds keep both beside the working directory so a checkout stays
//! self-contained. Release builds use the platform directories from `dirs`:
//! - Config: `~/.config/framecraft/`, `%APPDATA%\Framecraft\`,
//!   `~/Library/Application Support/Framecraft/`
//! - Logs: a `logs/` folder under the local data directory

use std::io;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
const APP_DIR_NAME: &str = "framecraft";

#[cfg(not(target_os = "linux"))]
const APP_DIR_NAME: &str = "Framecraft";

const CONFIG_FILE_NAME: &str = "config.json";
const LOGS_DIR_NAME: &str = "logs";

/// The two places Framecraft writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    Config,
    Logs,
}

impl Root {
    fn platform_dir(self) -> Option<PathBuf> {
        match self {
            Root::Config => dirs::config_dir(),
            Root::Logs => dirs::data_local_dir(),
        }
    }

    /// App directory for this root. Falls back to the working directory
    /// when the platform has no such location.
    fn resolve(self) -> PathBuf {
        if is_dev_mode() {
            return PathBuf::from(".");
        }
        self.platform_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// True for `cargo run` and debug builds.
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

pub fn config_file() -> PathBuf {
    Root::Config.resolve().join(CONFIG_FILE_NAME)
}

pub fn logs_dir() -> PathBuf {
    Root::Logs.resolve().join(LOGS_DIR_NAME)
}

/// Creates the config and log directories, returning the log directory.
pub fn ensure_directories() -> io::Result<PathBuf> {
    std::fs::create_dir_all(Root::Config.resolve())?;
    let logs = logs_dir();
    std::fs::create_dir_all(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_is_json() {
        assert_eq!(
            config_file().file_name().and_then(|n| n.to_str()),
            Some(CONFIG_FILE_NAME)
        );
    }

    #[test]
    fn test_logs_dir_ends_with_logs() {
        assert!(logs_dir().ends_with(LOGS_DIR_NAME));
    }

    #[test]
    fn test_debug_build_resolves_locally() {
        assert!(is_dev_mode());
        assert_eq!(Root::Config.resolve(), PathBuf::from("."));
        assert_eq!(Root::Logs.resolve(), PathBuf::from("."));
        assert_eq!(config_file(), PathBuf::from("./config.json"));
    }

    #[test]
    fn test_ensure_directories_returns_logs_dir() {
        let logs = ensure_directories().unwrap();
        assert_eq!(logs, logs_dir());
        assert!(logs.is_dir());
    }
}
