use core::fmt;

use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};
use crate::text::{MarshalText, MarshalTextFn};

// -----------------------------------------------------------------------------
// ZeroCheckFn

/// A type-erased "is this the zero value" check.
#[derive(Clone, Copy)]
pub struct ZeroCheckFn(fn(&dyn Reflect) -> bool);

impl ZeroCheckFn {
    /// Compare against [`Default::default`].
    pub fn of<T: Default + PartialEq + Reflect>() -> Self {
        Self(|value| value.downcast_ref::<T>().is_some_and(|v| *v == T::default()))
    }

    /// Returns `true` if `value` is the zero value. Values of another type are never zero.
    #[inline]
    pub fn call(&self, value: &dyn Reflect) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for ZeroCheckFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ZeroCheckFn(..)")
    }
}

// -----------------------------------------------------------------------------
// OpaqueInfo

/// A container for compile-time info of types with hidden content.
///
/// Opaque types can optionally declare a text conversion and a zero check.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use vc_reflect::info::Typed;
///
/// let info = Duration::type_info().as_opaque().unwrap();
/// assert_eq!(info.is_zero(&Duration::ZERO), Some(true));
/// assert!(info.marshal_text().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct OpaqueInfo {
    ty: Type,
    marshal_text: Option<MarshalTextFn>,
    zero_check: Option<ZeroCheckFn>,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub fn new<T: TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            marshal_text: None,
            zero_check: None,
        }
    }

    /// Declare that the type converts itself to text.
    #[inline]
    pub fn with_marshal_text<T: MarshalText + Reflect + TypePath>(self) -> Self {
        Self {
            marshal_text: Some(MarshalTextFn::of::<T>()),
            ..self
        }
    }

    /// Declare that `T::default()` is the zero value of the type.
    #[inline]
    pub fn with_zero_check<T: Default + PartialEq + Reflect>(self) -> Self {
        Self {
            zero_check: Some(ZeroCheckFn::of::<T>()),
            ..self
        }
    }

    /// Returns the text conversion of the type, if declared.
    #[inline]
    pub const fn marshal_text(&self) -> Option<MarshalTextFn> {
        self.marshal_text
    }

    /// Returns whether `value` is the zero value, `None` without a zero check.
    #[inline]
    pub fn is_zero(&self, value: &dyn Reflect) -> Option<bool> {
        self.zero_check.map(|check| check.call(value))
    }
}

// -----------------------------------------------------------------------------
// FunctionInfo

/// A container for compile-time function pointer info, e.g. `fn(u8) -> bool`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::Typed;
///
/// let info = <fn(u8, u8) -> bool>::type_info().as_function().unwrap();
/// assert_eq!(info.arity(), 2);
/// assert_eq!(info.type_path(), "fn(u8, u8) -> bool");
/// ```
#[derive(Clone, Debug)]
pub struct FunctionInfo {
    ty: Type,
    arity: usize,
}

impl FunctionInfo {
    impl_type_fn!(ty);

    /// Create a new [`FunctionInfo`].
    #[inline]
    pub fn new<T: TypePath + ?Sized>(arity: usize) -> Self {
        Self {
            ty: Type::of::<T>(),
            arity,
        }
    }

    /// Returns the number of arguments.
    #[inline]
    pub const fn arity(&self) -> usize {
        self.arity
    }
}
