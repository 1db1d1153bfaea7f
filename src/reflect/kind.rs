use std::fmt;

/// Primitive kind categories a field shape can bottom out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Bool,
    /// `isize`
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    /// `usize`
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uint128,
    /// Opaque address-like values (raw pointers)
    Uintptr,
    Float32,
    Float64,
    /// Pair of `f32` (real, imaginary)
    Complex64,
    /// Pair of `f64` (real, imaginary)
    Complex128,
    String,
    Char,
}

impl Kind {
    /// Every kind, in declaration order
    pub const ALL: [Kind; 20] = [
        Kind::Bool,
        Kind::Int,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::Int128,
        Kind::Uint,
        Kind::Uint8,
        Kind::Uint16,
        Kind::Uint32,
        Kind::Uint64,
        Kind::Uint128,
        Kind::Uintptr,
        Kind::Float32,
        Kind::Float64,
        Kind::Complex64,
        Kind::Complex128,
        Kind::String,
        Kind::Char,
    ];

    pub fn is_signed_integer(self) -> bool {
        matches!(
            self,
            Kind::Int | Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64 | Kind::Int128
        )
    }

    pub fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            Kind::Uint | Kind::Uint8 | Kind::Uint16 | Kind::Uint32 | Kind::Uint64 | Kind::Uint128
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, Kind::Float32 | Kind::Float64)
    }

    pub fn is_complex(self) -> bool {
        matches!(self, Kind::Complex64 | Kind::Complex128)
    }

    /// Lowercase name, as used in log and error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "isize",
            Kind::Int8 => "i8",
            Kind::Int16 => "i16",
            Kind::Int32 => "i32",
            Kind::Int64 => "i64",
            Kind::Int128 => "i128",
            Kind::Uint => "usize",
            Kind::Uint8 => "u8",
            Kind::Uint16 => "u16",
            Kind::Uint32 => "u32",
            Kind::Uint64 => "u64",
            Kind::Uint128 => "u128",
            Kind::Uintptr => "uintptr",
            Kind::Float32 => "f32",
            Kind::Float64 => "f64",
            Kind::Complex64 => "complex64",
            Kind::Complex128 => "complex128",
            Kind::String => "string",
            Kind::Char => "char",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
