/// Field annotation extraction
///
/// The mapper only needs three facts about a field: the name it serializes
/// under, whether it may be omitted, and whether it is readonly. Where those
/// facts come from is left to a `FieldMetadataProvider`.

use crate::config::TagKeys;
use crate::reflect::FieldDescriptor;

/// Serialization metadata of a single field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Serialization name (may be empty)
    pub name: String,
    /// Field may be absent in serialized form
    pub omit_empty: bool,
    /// Field is excluded from the input type
    pub readonly: bool,
}

/// Source of per-field metadata
pub trait FieldMetadataProvider {
    fn metadata(&self, field: &FieldDescriptor) -> FieldMetadata;
}

/// Reads metadata from struct-tag style annotation strings
///
/// * serialization tag: `name,option,...`, omit flag set by `omitempty`
/// * schema tag: `option,...`, readonly flag set by `readonly`
#[derive(Debug, Clone, Default)]
pub struct TagMetadata {
    keys: TagKeys,
}

impl TagMetadata {
    pub fn new(keys: TagKeys) -> Self {
        Self { keys }
    }
}

impl FieldMetadataProvider for TagMetadata {
    fn metadata(&self, field: &FieldDescriptor) -> FieldMetadata {
        let (name, omit_empty) = parse_serialization_tag(field.tags.get(&self.keys.serialization));
        let readonly = parse_schema_tag(field.tags.get(&self.keys.schema));

        FieldMetadata {
            name: name.to_string(),
            omit_empty,
            readonly,
        }
    }
}

/// Split `name,option,...` into the name and the `omitempty` flag
pub fn parse_serialization_tag(tag: &str) -> (&str, bool) {
    let mut tokens = tag.split(',');
    let name = tokens.next().unwrap_or("");
    let omit_empty = tokens.any(|token| token == "omitempty");
    (name, omit_empty)
}

/// `true` if the schema tag carries `readonly`
pub fn parse_schema_tag(tag: &str) -> bool {
    tag.split(',').any(|token| token == "readonly")
}
