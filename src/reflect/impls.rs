use crate::reflect::{Kind, Shape};

use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

/// Types that can describe their own structure
///
/// Implemented here for primitives, indirections and sequences. Record types
/// get an implementation from [`reflect_record!`](crate::reflect_record).
pub trait Reflect {
    fn shape() -> Shape;
}

macro_rules! reflect_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn shape() -> Shape {
                    Shape::Primitive(Kind::$kind)
                }
            }
        )*
    };
}

reflect_primitive! {
    bool => Bool,
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    i128 => Int128,
    usize => Uint,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    u128 => Uint128,
    f32 => Float32,
    f64 => Float64,
    String => String,
    str => String,
    char => Char,
}

impl<T: ?Sized> Reflect for *const T {
    fn shape() -> Shape {
        Shape::Primitive(Kind::Uintptr)
    }
}

impl<T: ?Sized> Reflect for *mut T {
    fn shape() -> Shape {
        Shape::Primitive(Kind::Uintptr)
    }
}

macro_rules! reflect_pointer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $ty {
                fn shape() -> Shape {
                    Shape::pointer(T::shape())
                }
            }
        )*
    };
}

reflect_pointer!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<T: Reflect> Reflect for Option<T> {
    fn shape() -> Shape {
        Shape::pointer(T::shape())
    }
}

impl<T: Reflect> Reflect for [T] {
    fn shape() -> Shape {
        Shape::sequence(T::shape())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn shape() -> Shape {
        Shape::sequence(T::shape())
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn shape() -> Shape {
        Shape::sequence(T::shape())
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn shape() -> Shape {
        Shape::sequence(T::shape())
    }
}
