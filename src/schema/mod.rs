/// GraphQL type generation from reflected records
///
/// This module provides the scalar table, shape resolution, field metadata
/// extraction and the generated descriptors, including their conversion into
/// `async-graphql` dynamic types.

mod builder;
mod descriptor;
mod metadata;
mod type_mapping;

pub use builder::ObjectGenerator;
pub use descriptor::{FieldTypes, InputObjectDescriptor, ObjectDescriptor};
pub use metadata::{
    parse_schema_tag, parse_serialization_tag, FieldMetadata, FieldMetadataProvider, TagMetadata,
};
pub use type_mapping::{resolve_schema_type, ScalarTable};
