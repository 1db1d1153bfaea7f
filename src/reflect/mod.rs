/// Type introspection for record types
///
/// Rust has no runtime reflection, so types describe themselves through the
/// `Reflect` trait. The result is a closed `Shape` tree that the schema
/// module walks.

mod impls;
mod kind;
mod macros;
mod shape;

pub use impls::Reflect;
pub use kind::Kind;
pub use shape::{FieldDescriptor, RecordType, Shape, Tags};
