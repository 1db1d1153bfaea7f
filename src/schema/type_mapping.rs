/// Shape to GraphQL type mapping
///
/// This module holds the scalar table and the recursive resolution that turns
/// a field `Shape` into a GraphQL `TypeRef` with the right nullability.

use crate::reflect::{Kind, Shape};

use async_graphql::dynamic::TypeRef;
use indexmap::IndexMap;

/// Mapping from primitive kinds to GraphQL scalar names
///
/// # Default mapping
///
/// - `bool` → `Boolean`
/// - signed and unsigned integers of every width → `Int`
/// - `uintptr` (raw pointers) → `String`
/// - floats and complex numbers → `Float`
/// - `String`, `str`, `char` → `String`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarTable {
    scalars: IndexMap<Kind, String>,
}

impl ScalarTable {
    /// Table with no entries
    pub fn empty() -> Self {
        Self {
            scalars: IndexMap::new(),
        }
    }

    /// Map `kind` to the scalar `name`, replacing any previous entry
    pub fn with(mut self, kind: Kind, name: impl Into<String>) -> Self {
        self.scalars.insert(kind, name.into());
        self
    }

    /// Drop the entry for `kind`
    pub fn without(mut self, kind: Kind) -> Self {
        self.scalars.shift_remove(&kind);
        self
    }

    pub fn get(&self, kind: Kind) -> Option<&str> {
        self.scalars.get(&kind).map(String::as_str)
    }

    pub fn contains(&self, kind: Kind) -> bool {
        self.scalars.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }
}

impl Default for ScalarTable {
    fn default() -> Self {
        let scalars = Kind::ALL
            .iter()
            .map(|&kind| (kind, default_scalar(kind).to_string()))
            .collect();

        Self { scalars }
    }
}

/// Scalar a kind maps to in the default table
///
/// The match stays exhaustive so a new `Kind` has to pick its scalar.
fn default_scalar(kind: Kind) -> &'static str {
    if kind.is_signed_integer() || kind.is_unsigned_integer() {
        return TypeRef::INT;
    }
    if kind.is_float() || kind.is_complex() {
        return TypeRef::FLOAT;
    }

    match kind {
        Kind::Bool => TypeRef::BOOLEAN,
        Kind::Uintptr | Kind::String | Kind::Char => TypeRef::STRING,
        Kind::Int
        | Kind::Int8
        | Kind::Int16
        | Kind::Int32
        | Kind::Int64
        | Kind::Int128
        | Kind::Uint
        | Kind::Uint8
        | Kind::Uint16
        | Kind::Uint32
        | Kind::Uint64
        | Kind::Uint128 => TypeRef::INT,
        Kind::Float32 | Kind::Float64 | Kind::Complex64 | Kind::Complex128 => TypeRef::FLOAT,
    }
}

/// Resolve a field shape to a GraphQL type
///
/// # Arguments
///
/// * `scalars` - Scalar table for primitive kinds
/// * `shape` - The field's declared shape
/// * `omittable` - Whether the field may be omitted; `false` makes the
///   outermost type non-null
///
/// # Returns
///
/// `None` if the shape bottoms out in a kind missing from the table, or in a
/// nested record. Wrappers around a missing type stay missing.
///
/// # Resolution Rules
///
/// 1. Not omittable → `NonNull` of the same shape resolved as omittable
/// 2. Sequence → `List` of the element
/// 3. Pointer → the pointee, no wrapper
/// 4. Primitive → scalar table lookup
pub fn resolve_schema_type(
    scalars: &ScalarTable,
    shape: &Shape,
    omittable: bool,
) -> Option<TypeRef> {
    if !omittable {
        return resolve_schema_type(scalars, shape, true)
            .map(|inner| TypeRef::NonNull(Box::new(inner)));
    }

    match shape {
        Shape::Sequence(element) => resolve_schema_type(scalars, element, omittable)
            .map(|inner| TypeRef::List(Box::new(inner))),
        Shape::Pointer(inner) => resolve_schema_type(scalars, inner, omittable),
        Shape::Primitive(kind) => scalars.get(*kind).map(TypeRef::named),
        Shape::Record(_) => None,
    }
}
