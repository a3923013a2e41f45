use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::log;
use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, MemoryContentProvider,
    Validate, YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfigContentProvider, TConfig> ConfigManager<TConfigContentProvider, TConfig, YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: YamlConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer::new())
    }
}

impl<TConfig> ConfigManager<MemoryContentProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn in_memory() -> Self {
        Self::new(MemoryContentProvider::new(), YamlConfigSerializer::new())
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    /// Loads the stored record, or the default one when nothing is stored yet.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let mut config = self.config_serializer.deserialize(&config_data)?;
        config.repair();
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    /// Like [`ConfigManager::get_config`], but unreadable or invalid content degrades to defaults.
    pub fn load_or_default(&self) -> TConfig {
        match self.get_config() {
            Ok(config) => config,
            Err(e) => {
                log!("{}; falling back to defaults", e);
                TConfig::default()
            }
        }
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}
