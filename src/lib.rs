pub mod config;
pub mod error;
pub mod reflect;
pub mod schema;

// Re-export commonly used types
pub use config::{DuplicateFieldPolicy, GeneratorConfig, TagKeys};
pub use error::{Result, StructinatorError};
pub use reflect::{Kind, Reflect, Shape};
pub use schema::{InputObjectDescriptor, ObjectDescriptor, ObjectGenerator, ScalarTable};
