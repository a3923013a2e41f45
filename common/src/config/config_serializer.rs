use std::any::type_name;

use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// Short type name for error messages, `Settings` rather than `common::games::snake::Settings`.
fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[derive(Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to write {} as YAML: {}", short_type_name::<TConfig>(), e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to read {} from YAML: {}", short_type_name::<TConfig>(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        level: u32,
    }

    #[test]
    fn test_error_names_the_record() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Sample, String> = serializer.deserialize("name: [");
        let error = result.unwrap_err();
        assert!(error.starts_with("Failed to read Sample from YAML"), "{}", error);
    }

    #[test]
    fn test_yaml_field_names_are_kept() {
        let serializer = YamlConfigSerializer::new();
        let yaml = serializer
            .serialize(&Sample {
                name: "snake".to_string(),
                level: 3,
            })
            .unwrap();
        assert!(yaml.contains("name: snake"));
        assert!(yaml.contains("level: 3"));
    }
}
