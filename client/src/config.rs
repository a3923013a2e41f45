use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::games::snake::Settings;

const SETTINGS_FILE_NAME: &str = "snake_xenzia_settings.yaml";

pub type FileSettingsStore = ConfigManager<FileContentConfigProvider, Settings, YamlConfigSerializer>;

/// Settings live next to the executable unless a path is given.
pub fn get_settings_path(explicit: Option<PathBuf>) -> String {
    if let Some(path) = explicit {
        return path.to_string_lossy().into_owned();
    }
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(SETTINGS_FILE_NAME).to_string_lossy().into_owned();
    }
    SETTINGS_FILE_NAME.to_string()
}

pub fn get_settings_store(explicit: Option<PathBuf>) -> FileSettingsStore {
    ConfigManager::from_yaml_file(&get_settings_path(explicit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("custom/settings.yaml");
        assert_eq!(get_settings_path(Some(path.clone())), path.to_string_lossy());
    }

    #[test]
    fn test_default_path_uses_file_name() {
        assert!(get_settings_path(None).ends_with(SETTINGS_FILE_NAME));
    }
}
