use serde::{Deserialize, Serialize};

/// Top-level generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Suffix appended to the record name for the input type (e.g. "A" → "AInput")
    #[serde(default = "default_input_suffix")]
    pub input_suffix: String,

    /// What to do when two fields share a serialization name
    #[serde(default)]
    pub duplicate_fields: DuplicateFieldPolicy,

    /// Use the Rust field identifier when the serialization name is empty
    #[serde(default)]
    pub ident_fallback: bool,

    /// Tag keys the default metadata provider reads
    #[serde(default)]
    pub tags: TagKeys,
}

fn default_input_suffix() -> String {
    "Input".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_suffix: default_input_suffix(),
            duplicate_fields: DuplicateFieldPolicy::default(),
            ident_fallback: false,
            tags: TagKeys::default(),
        }
    }
}

impl GeneratorConfig {
    /// Validate generator configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.input_suffix.is_empty() {
            return Err("Input suffix must not be empty".to_string());
        }

        // The suffix ends up inside a GraphQL type name
        if !self.input_suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(format!(
                "Input suffix '{}' must be alphanumeric",
                self.input_suffix
            ));
        }

        self.tags.validate()
    }
}

/// Handling of serialization names that appear more than once in a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateFieldPolicy {
    /// Later field replaces the earlier one
    #[default]
    Overwrite,
    /// Generation fails with `DuplicateField`
    Reject,
}

/// Tag keys for field annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagKeys {
    /// Tag holding `name,option,...` (name plus `omitempty`)
    #[serde(default = "default_serialization_key")]
    pub serialization: String,

    /// Tag holding schema markers such as `readonly`
    #[serde(default = "default_schema_key")]
    pub schema: String,
}

fn default_serialization_key() -> String {
    "json".to_string()
}

fn default_schema_key() -> String {
    "graphql".to_string()
}

impl Default for TagKeys {
    fn default() -> Self {
        Self {
            serialization: default_serialization_key(),
            schema: default_schema_key(),
        }
    }
}

impl TagKeys {
    pub fn validate(&self) -> Result<(), String> {
        if self.serialization.is_empty() || self.schema.is_empty() {
            return Err("Tag keys must not be empty".to_string());
        }
        if self.serialization == self.schema {
            return Err(format!(
                "Serialization and schema tag keys must differ (both '{}')",
                self.schema
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.input_suffix, "Input");
        assert_eq!(config.duplicate_fields, DuplicateFieldPolicy::Overwrite);
        assert_eq!(config.tags.serialization, "json");
        assert_eq!(config.tags.schema, "graphql");
        assert!(!config.ident_fallback);
    }

    #[test]
    fn test_empty_suffix_invalid() {
        let config = GeneratorConfig {
            input_suffix: String::new(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_alphanumeric_suffix_invalid() {
        let config = GeneratorConfig {
            input_suffix: "-Input".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_identical_tag_keys_invalid() {
        let config = GeneratorConfig {
            tags: TagKeys {
                serialization: "json".to_string(),
                schema: "json".to_string(),
            },
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }
}
