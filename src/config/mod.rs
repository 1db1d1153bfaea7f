mod types;

pub use types::{DuplicateFieldPolicy, GeneratorConfig, TagKeys};

use crate::error::{Result, StructinatorError};
use std::fs;

/// Load generator configuration from a TOML file
pub fn load_config(path: &str) -> Result<GeneratorConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        StructinatorError::Config(format!("Failed to read config file '{}': {}", path, e))
    })?;

    let config: GeneratorConfig = toml::from_str(&contents)?;

    config.validate().map_err(StructinatorError::Config)?;

    Ok(config)
}

/// Save generator configuration to a TOML file
pub fn save_config(config: &GeneratorConfig, path: &str) -> Result<()> {
    config.validate().map_err(StructinatorError::Config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string).map_err(|e| {
        StructinatorError::Config(format!("Failed to write config file '{}': {}", path, e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
input_suffix = "Args"
duplicate_fields = "reject"
ident_fallback = true

[tags]
serialization = "serde"
schema = "gql"
"#;
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.input_suffix, "Args");
        assert_eq!(config.duplicate_fields, DuplicateFieldPolicy::Reject);
        assert_eq!(config.tags.serialization, "serde");
        assert_eq!(config.tags.schema, "gql");
        assert!(config.ident_fallback);
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let temp_file = NamedTempFile::new().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap()).unwrap();

        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_load_invalid_suffix() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"input_suffix = \"\"\n").unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap());
        assert!(matches!(config, Err(StructinatorError::Config(_))));
    }

    #[test]
    fn test_load_unknown_policy() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"duplicate_fields = \"merge\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap());
        assert!(matches!(config, Err(StructinatorError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let config = load_config("/nonexistent/structinator.toml");
        assert!(config.is_err());
    }

    #[test]
    fn test_save_and_load_config() {
        let config = GeneratorConfig {
            input_suffix: "Payload".to_string(),
            duplicate_fields: DuplicateFieldPolicy::Reject,
            tags: TagKeys::default(),
            ident_fallback: true,
        };

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        save_config(&config, path).unwrap();
        let loaded_config = load_config(path).unwrap();

        assert_eq!(loaded_config, config);
    }
}
