use core::{error, fmt};

use crate::info::{ArrayInfo, FunctionInfo, ListInfo, PointerInfo};
use crate::info::{OpaqueInfo, ScalarInfo, StructInfo, Type};
use crate::text::MarshalTextFn;

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`],
/// [`ReflectRef::kind`] or [`TypeInfo::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Array,
    Pointer,
    Scalar,
    Function,
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Array => f.pad("Array"),
            Self::Pointer => f.pad("Pointer"),
            Self::Scalar => f.pad("Scalar"),
            Self::Function => f.pad("Function"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for reflected types.
///
/// Obtained from [`Typed::type_info`] when the type is known statically,
/// or from [`DynamicTyped::reflect_type_info`] on a `dyn Reflect`.
///
/// Field descriptors only hold the *declared* type of a field, so a consumer
/// can decide how to handle a field before looking at any value.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Pointer(PointerInfo),
    Scalar(ScalarInfo),
    Function(FunctionInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_pointer: Pointer => PointerInfo);
    impl_cast_method!(as_scalar: Scalar => ScalarInfo);
    impl_cast_method!(as_function: Function => FunctionInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata for this `TypeInfo`.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Pointer(info) => info.ty(),
            Self::Scalar(info) => info.ty(),
            Self::Function(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] for this `TypeInfo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_reflect::info::{Typed, ReflectKind};
    ///
    /// assert_eq!(i32::type_info().kind(), ReflectKind::Scalar);
    /// assert_eq!(<Option<i32>>::type_info().kind(), ReflectKind::Pointer);
    /// ```
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

    /// Returns the text conversion declared by the type, if any.
    ///
    /// Only structs and opaque types can declare one.
    pub const fn marshal_text(&self) -> Option<MarshalTextFn> {
        match self {
            Self::Struct(info) => info.marshal_text(),
            Self::Opaque(info) => info.marshal_text(),
            _ => None,
        }
    }
}
