//! Text conversion capability.
//!
//! A type implementing [`MarshalText`] can present itself as a single string.
//! The capability is declared in the type's [`TypeInfo`](crate::info::TypeInfo),
//! so consumers can look it up without a value at hand:
//!
//! - `#[derive(Reflect)] #[reflect(text)]` on structs.
//! - `impl_reflect_opaque!(Type, text)` on opaque types.

use alloc::boxed::Box;
use alloc::string::String;
use core::{error, fmt};

use crate::Reflect;
use crate::info::TypePath;

/// Error produced by a failed text conversion.
pub type TextError = Box<dyn error::Error + Send + Sync>;

/// Conversion of a value to its textual form.
///
/// # Examples
///
/// ```
/// use vc_reflect::text::{MarshalText, TextError};
///
/// struct Celsius(f32);
///
/// impl MarshalText for Celsius {
///     fn marshal_text(&self) -> Result<String, TextError> {
///         if self.0 < -273.15 {
///             return Err("below absolute zero".into());
///         }
///         Ok(format!("{}C", self.0))
///     }
/// }
///
/// assert_eq!(Celsius(21.5).marshal_text().unwrap(), "21.5C");
/// assert!(Celsius(-300.0).marshal_text().is_err());
/// ```
pub trait MarshalText {
    /// Returns the textual form of the value.
    fn marshal_text(&self) -> Result<String, TextError>;
}

/// A type-erased [`MarshalText::marshal_text`].
#[derive(Clone, Copy)]
pub struct MarshalTextFn {
    type_path: fn() -> &'static str,
    func: fn(&dyn Reflect) -> Result<String, TextError>,
}

impl MarshalTextFn {
    /// Erase the conversion of `T`.
    pub fn of<T: MarshalText + Reflect + TypePath>() -> Self {
        Self {
            type_path: T::type_path,
            func: marshal_erased::<T>,
        }
    }

    /// Convert `value`, failing if it is not of the erased type.
    #[inline]
    pub fn call(&self, value: &dyn Reflect) -> Result<String, TextError> {
        (self.func)(value)
    }

    /// Returns the path of the erased type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        (self.type_path)()
    }
}

impl fmt::Debug for MarshalTextFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MarshalTextFn({})", self.type_path())
    }
}

fn marshal_erased<T>(value: &dyn Reflect) -> Result<String, TextError>
where
    T: MarshalText + Reflect + TypePath,
{
    match value.downcast_ref::<T>() {
        Some(value) => value.marshal_text(),
        None => Err(Box::new(TypeMismatch {
            expected: T::type_path(),
            received: value.reflect_type_path(),
        })),
    }
}

/// The value handed to a [`MarshalTextFn`] is of another type.
#[derive(Debug)]
pub struct TypeMismatch {
    pub expected: &'static str,
    pub received: &'static str,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "text conversion of `{}` called with `{}`",
            self.expected, self.received
        )
    }
}

impl error::Error for TypeMismatch {}

#[cfg(test)]
mod tests {
    use super::{MarshalText, MarshalTextFn, TextError};
    use crate::impl_reflect_opaque;
    use crate::info::{TypeInfo, Typed};
    use alloc::format;
    use alloc::string::{String, ToString};

    #[derive(Debug)]
    struct Hex(u32);

    impl MarshalText for Hex {
        fn marshal_text(&self) -> Result<String, TextError> {
            Ok(format!("{:#x}", self.0))
        }
    }

    impl_reflect_opaque!(Hex, text);

    #[test]
    fn erased_call() {
        let f = MarshalTextFn::of::<Hex>();
        assert_eq!(f.call(&Hex(255)).unwrap(), "0xff");
        assert!(f.type_path().ends_with("::Hex"));

        let err = f.call(&1_u8).unwrap_err();
        assert!(err.to_string().contains("called with `u8`"));
    }

    #[test]
    fn declared_on_opaque_info() {
        let TypeInfo::Opaque(info) = Hex::type_info() else {
            panic!("expected an opaque type");
        };
        let f = info.marshal_text().unwrap();
        assert_eq!(f.call(&Hex(16)).unwrap(), "0x10");
        assert!(u8::type_info().marshal_text().is_none());
    }
}
