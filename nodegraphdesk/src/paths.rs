use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const CONFIG_FILE_NAME: &str = "nodegraphdesk_config.json";

/// Directory holding the package; the document lives directly inside it.
pub const ENV_DIR: &str = "NODEGRAPHDESK";

/// Location of the configuration document:
/// `$NODEGRAPHDESK/nodegraphdesk_config.json`, else the per-user config dir.
pub fn default_config_path() -> Result<PathBuf> {
    resolve_config_path(std::env::var_os(ENV_DIR), dirs::config_dir())
        .context("Could not determine a configuration directory (set NODEGRAPHDESK)")
}

fn resolve_config_path(env_dir: Option<OsString>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE_NAME));
    }
    config_dir.map(|d| d.join("nodegraphdesk").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_dir_wins() {
        let path = resolve_config_path(
            Some(OsString::from("/opt/nodegraphdesk")),
            Some(PathBuf::from("/home/u/.config")),
        );
        assert_eq!(
            path,
            Some(PathBuf::from("/opt/nodegraphdesk/nodegraphdesk_config.json"))
        );
    }

    #[test]
    fn test_falls_back_to_config_dir() {
        let path = resolve_config_path(None, Some(PathBuf::from("/home/u/.config")));
        assert_eq!(
            path,
            Some(PathBuf::from(
                "/home/u/.config/nodegraphdesk/nodegraphdesk_config.json"
            ))
        );
    }

    #[test]
    fn test_empty_env_dir_is_ignored() {
        let path = resolve_config_path(Some(OsString::new()), Some(PathBuf::from("/cfg")));
        assert_eq!(
            path,
            Some(PathBuf::from("/cfg/nodegraphdesk/nodegraphdesk_config.json"))
        );
    }

    #[test]
    fn test_no_location() {
        assert_eq!(resolve_config_path(None, None), None);
    }
}
