use crate::Reflect;
use crate::info::{ReflectKind, ReflectKindError, ScalarKind};
use crate::ops::{Array, List, Pointer, Struct};

// -----------------------------------------------------------------------------
// ScalarRef

/// The value of a scalar, widened to the largest type of its shape.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, ops::{ReflectRef, ScalarRef}};
///
/// let ReflectRef::Scalar(v) = (-3_i8).reflect_ref() else { unreachable!() };
/// assert_eq!(v, ScalarRef::Int(-3));
/// assert!(!v.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    Bool(bool),
    Int(i128),
    Uint(u128),
    Float32(f32),
    Float64(f64),
    String(&'a str),
}

impl ScalarRef<'_> {
    /// Returns the [`ScalarKind`] of the value.
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::Int(_) => ScalarKind::Int,
            Self::Uint(_) => ScalarKind::Uint,
            Self::Float32(_) => ScalarKind::Float32,
            Self::Float64(_) => ScalarKind::Float64,
            Self::String(_) => ScalarKind::String,
        }
    }

    /// Returns `true` for `false`, `0`, `0.0` (either sign) and `""`.
    pub fn is_zero(&self) -> bool {
        match *self {
            Self::Bool(v) => !v,
            Self::Int(v) => v == 0,
            Self::Uint(v) => v == 0,
            Self::Float32(v) => v == 0.0,
            Self::Float64(v) => v == 0.0,
            Self::String(v) => v.is_empty(),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable, kind-specific view of a reflected value.
///
/// Obtained from [`Reflect::reflect_ref`].
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Pointer(&'a dyn Pointer),
    Scalar(ScalarRef<'a>),
    Function(&'a dyn Reflect),
    Opaque(&'a dyn Reflect),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $ty:ty) => {
        /// Convert to the kind-specific view.
        #[inline]
        pub fn $name(self) -> Result<$ty, ReflectKindError> {
            match self {
                Self::$kind(value) => Ok(value),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl<'a> ReflectRef<'a> {
    impl_cast_method!(as_struct: Struct => &'a dyn Struct);
    impl_cast_method!(as_list: List => &'a dyn List);
    impl_cast_method!(as_array: Array => &'a dyn Array);
    impl_cast_method!(as_pointer: Pointer => &'a dyn Pointer);
    impl_cast_method!(as_scalar: Scalar => ScalarRef<'a>);

    /// Returns the [`ReflectKind`] of the view.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Scalar(_) => ReflectKind::Scalar,
            Self::Function(_) => ReflectKind::Function,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }
}
