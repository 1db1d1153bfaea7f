/// Generated object and input-object descriptors
///
/// Descriptors are plain data: a type name and an ordered mapping from field
/// name to resolved type. They convert into `async-graphql` dynamic types for
/// registration in a schema.

use crate::error::{Result, StructinatorError};

use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputObject, InputValue, Object, TypeRef,
};
use async_graphql::Value;
use indexmap::IndexMap;

/// Field name → resolved type; `None` marks a type that could not be mapped
pub type FieldTypes = IndexMap<String, Option<TypeRef>>;

/// Query-facing object type generated from a record
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDescriptor {
    name: String,
    fields: FieldTypes,
}

/// Mutation-facing input type generated from a record
#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectDescriptor {
    name: String,
    fields: FieldTypes,
}

macro_rules! descriptor_accessors {
    ($descriptor:ident) => {
        impl $descriptor {
            pub fn new(name: impl Into<String>, fields: FieldTypes) -> Self {
                Self {
                    name: name.into(),
                    fields,
                }
            }

            pub fn name(&self) -> &str {
                &self.name
            }

            pub fn fields(&self) -> &FieldTypes {
                &self.fields
            }

            /// Resolved type of `name`, if the field exists and has a type
            pub fn field(&self, name: &str) -> Option<&TypeRef> {
                self.fields.get(name).and_then(Option::as_ref)
            }

            pub fn len(&self) -> usize {
                self.fields.len()
            }

            pub fn is_empty(&self) -> bool {
                self.fields.is_empty()
            }

            /// Field names whose type could not be mapped
            pub fn unresolved_fields(&self) -> impl Iterator<Item = &str> {
                self.fields
                    .iter()
                    .filter(|(_, type_ref)| type_ref.is_none())
                    .map(|(name, _)| name.as_str())
            }

            fn resolved_fields(self) -> Result<(String, Vec<(String, TypeRef)>)> {
                let name = self.name;
                let fields = self
                    .fields
                    .into_iter()
                    .map(|(field, type_ref)| {
                        if !is_valid_name(&field) {
                            return Err(StructinatorError::InvalidFieldName {
                                type_name: name.clone(),
                                field,
                            });
                        }
                        match type_ref {
                            Some(type_ref) => Ok((field, type_ref)),
                            None => Err(StructinatorError::UnresolvedFieldType {
                                type_name: name.clone(),
                                field,
                            }),
                        }
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok((name, fields))
            }
        }
    };
}

/// GraphQL name rule: `[_A-Za-z][_0-9A-Za-z]*`
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

descriptor_accessors!(ObjectDescriptor);
descriptor_accessors!(InputObjectDescriptor);

impl ObjectDescriptor {
    /// Build an `async-graphql` object type
    ///
    /// Fails if a field has no type or its name is not a valid GraphQL name
    /// (such as the empty name of an untagged field).
    ///
    /// Each field resolves by looking up its own name in the parent value,
    /// which must be a `Value::Object` passed via `FieldValue::owned_any`.
    /// Missing entries resolve to `null`.
    pub fn into_object(self) -> Result<Object> {
        let (name, fields) = self.resolved_fields()?;
        let mut object = Object::new(name);

        for (field_name, type_ref) in fields {
            let field_name_for_closure = field_name.clone();

            let graphql_field = Field::new(field_name, type_ref, move |ctx| {
                let field_name = field_name_for_closure.clone();
                FieldFuture::new(async move {
                    let parent = ctx.parent_value.try_downcast_ref::<Value>()?;

                    if let Value::Object(obj) = parent {
                        if let Some(value) = obj.get(field_name.as_str()) {
                            return Ok(Some(FieldValue::value(value.clone())));
                        }
                    }

                    Ok(Some(FieldValue::NULL))
                })
            });

            object = object.field(graphql_field);
        }

        Ok(object)
    }
}

impl InputObjectDescriptor {
    /// Build an `async-graphql` input object type
    ///
    /// Fails under the same conditions as `ObjectDescriptor::into_object`.
    pub fn into_input_object(self) -> Result<InputObject> {
        let (name, fields) = self.resolved_fields()?;

        let input = fields
            .into_iter()
            .fold(InputObject::new(name), |input, (field_name, type_ref)| {
                input.field(InputValue::new(field_name, type_ref))
            });

        Ok(input)
    }
}
