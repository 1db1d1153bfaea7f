use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructinatorError {
    #[error("Invalid input kind: expected a record type, got {kind}")]
    InvalidInputKind { kind: String },

    #[error("Field '{field}' of type '{type_name}' has no GraphQL type")]
    UnresolvedFieldType { type_name: String, field: String },

    #[error("Invalid GraphQL field name '{field}' in type '{type_name}'")]
    InvalidFieldName { type_name: String, field: String },

    #[error("Duplicate field '{field}' in type '{type_name}'")]
    DuplicateField { type_name: String, field: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for StructinatorError {
    fn from(err: toml::de::Error) -> Self {
        StructinatorError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for StructinatorError {
    fn from(err: toml::ser::Error) -> Self {
        StructinatorError::Serialization(format!("TOML serialization error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, StructinatorError>;
