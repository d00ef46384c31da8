// src/infra/paths.rs — Path management
//
// All paths respect the PRAKTIKUM_HOME environment variable for isolation.
// When unset, config lives under ~/.praktikum/.

use std::path::PathBuf;

/// Returns the PRAKTIKUM_HOME override, if set.
fn praktikum_home() -> Option<PathBuf> {
    std::env::var_os("PRAKTIKUM_HOME").map(PathBuf::from)
}

/// Configuration directory: $PRAKTIKUM_HOME/ or ~/.praktikum/
pub fn config_dir() -> PathBuf {
    if let Some(home) = praktikum_home() {
        return home;
    }
    dirs_home().join(".praktikum")
}

/// Home directory
pub fn dirs_home() -> PathBuf {
    directories::BaseDirs::new()
        .expect("Could not determine home directory")
        .home_dir()
        .to_path_buf()
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
