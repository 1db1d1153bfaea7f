/// Object generator
///
/// This module provides the `ObjectGenerator` which derives a GraphQL output
/// type and input type from a reflected record type.

use crate::config::{DuplicateFieldPolicy, GeneratorConfig};
use crate::error::{Result, StructinatorError};
use crate::reflect::{RecordType, Reflect, Shape};
use crate::schema::descriptor::{FieldTypes, InputObjectDescriptor, ObjectDescriptor};
use crate::schema::metadata::{FieldMetadataProvider, TagMetadata};
use crate::schema::type_mapping::{resolve_schema_type, ScalarTable};

/// Generator for GraphQL object/input-object pairs
pub struct ObjectGenerator {
    /// Primitive kind → scalar name
    scalars: ScalarTable,
    config: GeneratorConfig,
    metadata: Box<dyn FieldMetadataProvider + Send + Sync>,
}

impl ObjectGenerator {
    /// Create a generator with the default scalar table and configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator from configuration
    ///
    /// The metadata provider reads the tag keys named in `config.tags`.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            scalars: ScalarTable::default(),
            metadata: Box::new(TagMetadata::new(config.tags.clone())),
            config,
        }
    }

    /// Replace the scalar table
    pub fn with_scalar_table(mut self, scalars: ScalarTable) -> Self {
        self.scalars = scalars;
        self
    }

    /// Replace the source of field metadata
    pub fn with_metadata_provider<P>(mut self, provider: P) -> Self
    where
        P: FieldMetadataProvider + Send + Sync + 'static,
    {
        self.metadata = Box::new(provider);
        self
    }

    pub fn scalars(&self) -> &ScalarTable {
        &self.scalars
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate descriptors from the type of `value`
    ///
    /// Only the type is inspected; `value` itself is never read. References
    /// and other indirections are unwrapped to the record they point to.
    pub fn generate_object<T: Reflect + ?Sized>(
        &self,
        _value: &T,
    ) -> Result<(ObjectDescriptor, InputObjectDescriptor)> {
        self.generate::<T>()
    }

    /// Generate descriptors for `T`
    pub fn generate<T: Reflect + ?Sized>(
        &self,
    ) -> Result<(ObjectDescriptor, InputObjectDescriptor)> {
        self.generate_from_shape(&T::shape())
    }

    /// Generate descriptors from an already reflected shape
    ///
    /// # Errors
    ///
    /// `InvalidInputKind` if the shape is not a record once pointers are
    /// removed. `DuplicateField` if two fields share a name and the
    /// configuration rejects duplicates.
    pub fn generate_from_shape(
        &self,
        shape: &Shape,
    ) -> Result<(ObjectDescriptor, InputObjectDescriptor)> {
        let record = shape
            .strip_pointers()
            .as_record()
            .ok_or_else(|| StructinatorError::InvalidInputKind {
                kind: shape.to_string(),
            })?;

        tracing::info!(
            "Generating GraphQL types for record: {} ({} fields)",
            record.name,
            record.fields.len()
        );

        let output = ObjectDescriptor::new(&record.name, self.output_fields(record)?);
        let input = InputObjectDescriptor::new(
            format!("{}{}", record.name, self.config.input_suffix),
            self.input_fields(record)?,
        );

        Ok((output, input))
    }

    fn output_fields(&self, record: &RecordType) -> Result<FieldTypes> {
        self.collect_fields(record, &record.name, false)
    }

    fn input_fields(&self, record: &RecordType) -> Result<FieldTypes> {
        let type_name = format!("{}{}", record.name, self.config.input_suffix);
        self.collect_fields(record, &type_name, true)
    }

    fn collect_fields(
        &self,
        record: &RecordType,
        type_name: &str,
        skip_readonly: bool,
    ) -> Result<FieldTypes> {
        let mut fields = FieldTypes::new();

        for field in &record.fields {
            let metadata = self.metadata.metadata(field);

            if skip_readonly && metadata.readonly {
                tracing::debug!("Skipping readonly field '{}' in {}", field.ident, type_name);
                continue;
            }

            let name = if metadata.name.is_empty() && self.config.ident_fallback {
                field.ident.clone()
            } else {
                metadata.name
            };

            let type_ref = resolve_schema_type(&self.scalars, &field.shape, metadata.omit_empty);

            match &type_ref {
                Some(type_ref) => tracing::debug!(
                    "Mapped {}.{} ({}) to {}",
                    type_name,
                    name,
                    field.shape,
                    type_ref
                ),
                None => tracing::warn!(
                    "No GraphQL type for field '{}' of shape {} in {}",
                    field.ident,
                    field.shape,
                    type_name
                ),
            }

            if fields.contains_key(&name) {
                match self.config.duplicate_fields {
                    DuplicateFieldPolicy::Overwrite => tracing::warn!(
                        "Field '{}' in {} is declared more than once, keeping the last one",
                        name,
                        type_name
                    ),
                    DuplicateFieldPolicy::Reject => {
                        return Err(StructinatorError::DuplicateField {
                            type_name: type_name.to_string(),
                            field: name,
                        })
                    }
                }
            }

            fields.insert(name, type_ref);
        }

        Ok(fields)
    }
}

impl Default for ObjectGenerator {
    fn default() -> Self {
        Self::new()
    }
}
