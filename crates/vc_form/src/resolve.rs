use alloc::boxed::Box;
use core::fmt;

use vc_reflect::Reflect;
use vc_reflect::info::{ScalarKind, TypePath};
use vc_reflect::ops::{ReflectRef, ScalarRef};
use vc_reflect::text::MarshalTextFn;

use crate::ConvertError;

/// Output of a nil pointer.
pub const NULL: &str = "null";

// -----------------------------------------------------------------------------
// RegisteredEncoder

type EncodeFn = dyn Fn(&dyn Reflect) -> Option<String> + Send + Sync;

/// A user supplied conversion for one concrete type.
///
/// Created by [`Encoder::register_encoder`](crate::Encoder::register_encoder).
pub struct RegisteredEncoder {
    type_path: &'static str,
    func: Box<EncodeFn>,
}

impl RegisteredEncoder {
    pub(crate) fn new<T: Reflect + TypePath>(
        encoder: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            type_path: T::type_path(),
            func: Box::new(move |value| value.downcast_ref::<T>().map(&encoder)),
        }
    }

    /// Returns the type path of the registered type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Converts `value`, which must be of the registered type.
    pub fn call(&self, value: &dyn Reflect) -> Result<String, ConvertError> {
        (self.func)(value).ok_or_else(|| ConvertError::Mismatch {
            encoder: self.type_path,
            found: value.reflect_type_path(),
        })
    }
}

impl fmt::Debug for RegisteredEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegisteredEncoder")
            .field(&self.type_path)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// TypeEncoder

/// A `value -> string` converter for one static type.
///
/// Returned by [`Encoder::resolve`](crate::Encoder::resolve).
///
/// # Examples
///
/// ```
/// use vc_form::{Encoder, TypeEncoder};
/// use vc_reflect::info::Typed;
///
/// let encoder = Encoder::new();
/// let converter = encoder.resolve(f64::type_info()).unwrap();
///
/// assert!(matches!(converter, TypeEncoder::Float64));
/// assert_eq!(converter.encode(&(1.0_f64 / 3.0)).unwrap(), "0.333333");
/// assert_eq!(converter.encode(&f64::NEG_INFINITY).unwrap(), "-Inf");
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum TypeEncoder<'a> {
    Registered(&'a RegisteredEncoder),
    Text(MarshalTextFn),
    Bool,
    Int,
    Uint,
    Float32,
    Float64,
    String,
    /// Encodes the pointee, or [`NULL`] for a nil pointer.
    Pointer(Box<TypeEncoder<'a>>),
}

impl TypeEncoder<'_> {
    pub(crate) const fn scalar(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Bool => Self::Bool,
            ScalarKind::Int => Self::Int,
            ScalarKind::Uint => Self::Uint,
            ScalarKind::Float32 => Self::Float32,
            ScalarKind::Float64 => Self::Float64,
            ScalarKind::String => Self::String,
        }
    }

    /// A short name used in conversion errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Registered(registered) => registered.type_path(),
            Self::Text(text) => text.type_path(),
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Pointer(_) => "pointer",
        }
    }

    /// Converts `value` to its string form.
    pub fn encode(&self, value: &dyn Reflect) -> Result<String, ConvertError> {
        match (self, value.reflect_ref()) {
            (Self::Registered(registered), _) => registered.call(value),
            (Self::Text(text), _) => text.call(value).map_err(ConvertError::Text),
            (Self::Pointer(inner), ReflectRef::Pointer(pointer)) => match pointer.pointee() {
                Some(pointee) => inner.encode(pointee),
                None => Ok(NULL.to_owned()),
            },
            (Self::Bool, ReflectRef::Scalar(ScalarRef::Bool(v))) => Ok(v.to_string()),
            (Self::Int, ReflectRef::Scalar(ScalarRef::Int(v))) => Ok(v.to_string()),
            (Self::Uint, ReflectRef::Scalar(ScalarRef::Uint(v))) => Ok(v.to_string()),
            (Self::Float32, ReflectRef::Scalar(ScalarRef::Float32(v))) => {
                Ok(format_float(f64::from(v)))
            }
            (Self::Float64, ReflectRef::Scalar(ScalarRef::Float64(v))) => Ok(format_float(v)),
            (Self::String, ReflectRef::Scalar(ScalarRef::String(v))) => Ok(v.to_owned()),
            _ => Err(ConvertError::Mismatch {
                encoder: self.name(),
                found: value.reflect_type_path(),
            }),
        }
    }
}

/// Fixed point with six fractional digits.
///
/// Widening an `f32` is exact, so both widths share this path.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_owned()
    } else if v == f64::INFINITY {
        "+Inf".to_owned()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_owned()
    } else {
        format!("{v:.6}")
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{NULL, RegisteredEncoder, TypeEncoder, format_float};
    use crate::ConvertError;

    #[test]
    fn scalars() {
        assert_eq!(TypeEncoder::Bool.encode(&true).unwrap(), "true");
        assert_eq!(TypeEncoder::Int.encode(&i128::MIN).unwrap(), i128::MIN.to_string());
        assert_eq!(TypeEncoder::Int.encode(&-7_isize).unwrap(), "-7");
        assert_eq!(TypeEncoder::Uint.encode(&u64::MAX).unwrap(), "18446744073709551615");
        assert_eq!(TypeEncoder::String.encode(&String::from("a b")).unwrap(), "a b");
        assert_eq!(TypeEncoder::Float32.encode(&0.1_f32).unwrap(), "0.100000");
    }

    #[test]
    fn floats() {
        assert_eq!(format_float(1.0 / 3.0), "0.333333");
        assert_eq!(format_float(-2.5), "-2.500000");
        assert_eq!(format_float(1e21), "1000000000000000000000.000000");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::INFINITY), "+Inf");
    }

    #[test]
    fn pointers() {
        let converter = TypeEncoder::Pointer(Box::new(TypeEncoder::Int));
        assert_eq!(converter.encode(&Some(3_i8)).unwrap(), "3");
        assert_eq!(converter.encode(&None::<i8>).unwrap(), NULL);
        assert_eq!(converter.encode(&Box::new(-1_i64)).unwrap(), "-1");
    }

    #[test]
    fn mismatch() {
        let err = TypeEncoder::Bool.encode(&1_u8).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Mismatch { encoder: "bool", found: "u8" }
        ));

        let registered = RegisteredEncoder::new::<u8>(|v| format!("0x{v:02x}"));
        assert_eq!(registered.call(&10_u8).unwrap(), "0x0a");
        assert_eq!(
            registered.call(&10_u16).unwrap_err().to_string(),
            "`u8` encoder cannot convert a value of type `u16`"
        );
    }
}
