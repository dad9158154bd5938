use alloc::borrow::Cow;
use alloc::string::String;

use crate::Reflect;
use crate::impls::NonGenericTypeInfoCell;
use crate::info::{ReflectKind, ScalarInfo, ScalarKind, TypeInfo, TypePath, Typed};
use crate::ops::{ReflectRef, ScalarRef};

macro_rules! impl_reflect_scalar {
    ($ty:ty, $path:expr, $name:expr, $kind:ident, |$v:ident| $value:expr) => {
        impl TypePath for $ty {
            #[inline(always)]
            fn type_path() -> &'static str {
                $path
            }

            #[inline(always)]
            fn type_name() -> &'static str {
                $name
            }
        }

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::Scalar(ScalarInfo::new::<Self>(ScalarKind::$kind)))
            }
        }

        impl Reflect for $ty {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Scalar
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                let $v = self;
                ReflectRef::Scalar($value)
            }
        }
    };
    ($($ty:ident => $kind:ident as $wide:ty),* $(,)?) => {
        $(
            impl_reflect_scalar!(
                $ty,
                stringify!($ty),
                stringify!($ty),
                $kind,
                |v| ScalarRef::$kind(<$wide>::from(*v))
            );
        )*
    };
}

impl_reflect_scalar!(
    i8 => Int as i128,
    i16 => Int as i128,
    i32 => Int as i128,
    i64 => Int as i128,
    i128 => Int as i128,
    u8 => Uint as u128,
    u16 => Uint as u128,
    u32 => Uint as u128,
    u64 => Uint as u128,
    u128 => Uint as u128,
    f32 => Float32 as f32,
    f64 => Float64 as f64,
    bool => Bool as bool,
);

// No `From<isize>` for `i128`.
impl_reflect_scalar!(isize, "isize", "isize", Int, |v| ScalarRef::Int(*v as i128));
impl_reflect_scalar!(usize, "usize", "usize", Uint, |v| ScalarRef::Uint(*v as u128));

impl_reflect_scalar!(
    String,
    "alloc::string::String",
    "String",
    String,
    |v| ScalarRef::String(v.as_str())
);

impl_reflect_scalar!(
    Cow<'static, str>,
    "alloc::borrow::Cow<str>",
    "Cow<str>",
    String,
    |v| ScalarRef::String(v.as_ref())
);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{ScalarKind, TypePath, Typed};
    use crate::ops::ScalarRef;
    use alloc::string::String;

    fn scalar(value: &dyn Reflect) -> ScalarRef<'_> {
        value.reflect_ref().as_scalar().unwrap()
    }

    #[test]
    fn widened_values() {
        assert_eq!(scalar(&-5_i8), ScalarRef::Int(-5));
        assert_eq!(scalar(&u64::MAX), ScalarRef::Uint(u128::from(u64::MAX)));
        assert_eq!(scalar(&7_usize), ScalarRef::Uint(7));
        assert_eq!(scalar(&-7_isize), ScalarRef::Int(-7));
        assert_eq!(scalar(&true), ScalarRef::Bool(true));
        assert_eq!(scalar(&String::from("x")), ScalarRef::String("x"));
    }

    #[test]
    fn paths_and_kinds() {
        assert_eq!(i32::type_path(), "i32");
        assert_eq!(String::type_path(), "alloc::string::String");
        let info = f64::type_info().as_scalar().unwrap();
        assert_eq!(info.scalar_kind(), ScalarKind::Float64);
    }
}
