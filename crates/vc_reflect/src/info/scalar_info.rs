use core::fmt;

use crate::info::{Type, TypePath, impl_type_fn};

/// The primitive shape of a scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    /// Signed integers of any width.
    Int,
    /// Unsigned integers of any width.
    Uint,
    Float32,
    Float64,
    String,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.pad("bool"),
            Self::Int => f.pad("int"),
            Self::Uint => f.pad("uint"),
            Self::Float32 => f.pad("float32"),
            Self::Float64 => f.pad("float64"),
            Self::String => f.pad("string"),
        }
    }
}

/// A container for compile-time scalar info, e.g. `i32` or `String`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{ScalarKind, Typed};
///
/// assert_eq!(u16::type_info().as_scalar().unwrap().scalar_kind(), ScalarKind::Uint);
/// assert_eq!(f32::type_info().as_scalar().unwrap().scalar_kind(), ScalarKind::Float32);
/// ```
#[derive(Clone, Debug)]
pub struct ScalarInfo {
    ty: Type,
    kind: ScalarKind,
}

impl ScalarInfo {
    impl_type_fn!(ty);

    /// Create a new [`ScalarInfo`].
    #[inline]
    pub fn new<T: TypePath + ?Sized>(kind: ScalarKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the primitive shape of the scalar.
    #[inline]
    pub const fn scalar_kind(&self) -> ScalarKind {
        self.kind
    }
}
