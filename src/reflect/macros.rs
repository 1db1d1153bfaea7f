/// Define a struct together with its [`Reflect`](crate::reflect::Reflect) impl
///
/// Field annotations follow the type after `=>`, one string per tag key:
///
/// ```
/// structinator::reflect_record! {
///     #[derive(Debug, Default)]
///     pub struct A {
///         pub one: Vec<Option<String>> => { json: "one" },
///         pub two: i64 => { json: "two,omitempty", graphql: "readonly" },
///     }
/// }
///
/// let generator = structinator::ObjectGenerator::new();
/// let (output, input) = generator.generate::<A>().unwrap();
/// assert_eq!(output.name(), "A");
/// assert_eq!(input.name(), "AInput");
/// ```
#[macro_export]
macro_rules! reflect_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
                $(=> { $($key:ident : $value:literal),* $(,)? })?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::reflect::Reflect for $name {
            fn shape() -> $crate::reflect::Shape {
                $crate::reflect::Shape::Record($crate::reflect::RecordType::new(
                    stringify!($name),
                    ::std::vec![
                        $(
                            $crate::reflect::FieldDescriptor::new(
                                stringify!($field),
                                <$ty as $crate::reflect::Reflect>::shape(),
                            )
                            $($(.with_tag(stringify!($key), $value))*)?
                        ),*
                    ],
                ))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::reflect::{Kind, Reflect, Shape};

    crate::reflect_record! {
        #[derive(Debug, Default)]
        struct Tagged {
            id: u64 => { json: "id" },
            #[allow(dead_code)]
            note: Option<String> => { json: "note,omitempty", graphql: "readonly" },
            plain: bool,
        }
    }

    crate::reflect_record! {
        #[allow(dead_code)]
        struct Empty {}
    }

    #[test]
    fn test_record_shape() {
        let shape = Tagged::shape();
        let record = shape.as_record().expect("record shape");

        assert_eq!(record.name, "Tagged");
        assert_eq!(record.fields.len(), 3);

        assert_eq!(record.fields[0].ident, "id");
        assert_eq!(record.fields[0].shape, Shape::Primitive(Kind::Uint64));
        assert_eq!(record.fields[0].tags.get("json"), "id");

        assert_eq!(
            record.fields[1].shape,
            Shape::pointer(Shape::Primitive(Kind::String))
        );
        assert_eq!(record.fields[1].tags.get("json"), "note,omitempty");
        assert_eq!(record.fields[1].tags.get("graphql"), "readonly");

        assert!(record.fields[2].tags.is_empty());
    }

    #[test]
    fn test_struct_is_usable() {
        let tagged = Tagged::default();
        assert_eq!(tagged.id, 0);
        assert!(!tagged.plain);
    }

    #[test]
    fn test_empty_record() {
        let shape = Empty::shape();
        let record = shape.as_record().expect("record shape");

        assert_eq!(record.name, "Empty");
        assert!(record.fields.is_empty());
    }
}
