/// Structural description of Rust types
///
/// A `Shape` is built once per type by `Reflect::shape()` and then walked
/// by the type mapper without touching the original type again.

use crate::reflect::Kind;

use indexmap::IndexMap;
use std::fmt;

/// Structural type of a value or field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Leaf value of a primitive kind
    Primitive(Kind),
    /// Indirection (`&T`, `Box<T>`, `Option<T>`, ...)
    Pointer(Box<Shape>),
    /// Fixed or variable length sequence (`[T; N]`, `Vec<T>`, ...)
    Sequence(Box<Shape>),
    /// Record with named, ordered fields
    Record(RecordType),
}

impl Shape {
    pub fn pointer(inner: Shape) -> Self {
        Shape::Pointer(Box::new(inner))
    }

    pub fn sequence(element: Shape) -> Self {
        Shape::Sequence(Box::new(element))
    }

    /// Follow pointers until a non-pointer shape is reached
    pub fn strip_pointers(&self) -> &Shape {
        let mut shape = self;
        while let Shape::Pointer(inner) = shape {
            shape = inner;
        }
        shape
    }

    pub fn as_record(&self) -> Option<&RecordType> {
        match self {
            Shape::Record(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Primitive(kind) => write!(f, "{}", kind),
            Shape::Pointer(inner) => write!(f, "*{}", inner),
            Shape::Sequence(element) => write!(f, "[{}]", element),
            Shape::Record(record) => f.write_str(&record.name),
        }
    }
}

/// Reflected description of a record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordType {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl RecordType {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// A single declared field of a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust identifier of the field
    pub ident: String,
    pub shape: Shape,
    pub tags: Tags,
}

impl FieldDescriptor {
    pub fn new(ident: impl Into<String>, shape: Shape) -> Self {
        Self {
            ident: ident.into(),
            shape,
            tags: Tags::default(),
        }
    }

    /// Attach an annotation string under `key`, replacing any previous one
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key, value);
        self
    }
}

/// Per-field annotation strings, keyed like struct tags (`json`, `graphql`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(IndexMap<String, String>);

impl Tags {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Annotation string for `key`, if present
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Annotation string for `key`; absent keys read as empty
    pub fn get(&self, key: &str) -> &str {
        self.lookup(key).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_pointers_unwraps_all_pointers() {
        let shape = Shape::pointer(Shape::pointer(Shape::Primitive(Kind::Bool)));
        assert_eq!(shape.strip_pointers(), &Shape::Primitive(Kind::Bool));
    }

    #[test]
    fn test_strip_pointers_stops_at_sequence() {
        let shape = Shape::pointer(Shape::sequence(Shape::pointer(Shape::Primitive(
            Kind::Bool,
        ))));
        assert!(matches!(shape.strip_pointers(), Shape::Sequence(_)));
    }

    #[test]
    fn test_display() {
        let record = Shape::Record(RecordType::new("A", Vec::new()));
        assert_eq!(record.to_string(), "A");

        let shape = Shape::sequence(Shape::pointer(Shape::Primitive(Kind::String)));
        assert_eq!(shape.to_string(), "[*string]");
    }

    #[test]
    fn test_tags_missing_key_reads_empty() {
        let field = FieldDescriptor::new("one", Shape::Primitive(Kind::String))
            .with_tag("json", "one,omitempty");

        assert_eq!(field.tags.get("json"), "one,omitempty");
        assert_eq!(field.tags.get("graphql"), "");
        assert!(field.tags.lookup("graphql").is_none());
    }
}
