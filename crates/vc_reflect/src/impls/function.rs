use alloc::string::String;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{FunctionInfo, ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::ReflectRef;

fn signature(args: &[&str], ret: &str) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(args.len() * 2 + 3);
    parts.push("fn(");
    for (index, &arg) in args.iter().enumerate() {
        if index > 0 {
            parts.push(", ");
        }
        parts.push(arg);
    }
    parts.push(") -> ");
    parts.push(ret);
    concat(&parts)
}

macro_rules! impl_reflect_fn {
    ($($arg:ident),*) => {
        impl<R: TypePath, $($arg: TypePath),*> TypePath for fn($($arg),*) -> R {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| signature(&[$($arg::type_path()),*], R::type_path()))
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| signature(&[$($arg::type_name()),*], R::type_name()))
            }
        }

        impl<R: TypePath, $($arg: TypePath),*> Typed for fn($($arg),*) -> R {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    let args: &[&str] = &[$(stringify!($arg)),*];
                    TypeInfo::Function(FunctionInfo::new::<Self>(args.len()))
                })
            }
        }

        impl<R: TypePath, $($arg: TypePath),*> Reflect for fn($($arg),*) -> R {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Function
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Function(self)
            }
        }
    };
}

impl_reflect_fn!();
impl_reflect_fn!(A0);
impl_reflect_fn!(A0, A1);
impl_reflect_fn!(A0, A1, A2);

#[cfg(test)]
mod tests {
    use crate::info::{TypePath, Typed};
    use alloc::string::String;

    #[test]
    fn fn_paths() {
        assert_eq!(<fn()>::type_path(), "fn() -> ()");
        assert_eq!(<fn(i32) -> String>::type_path(), "fn(i32) -> alloc::string::String");
        assert_eq!(<fn(u8, bool) -> u8>::type_name(), "fn(u8, bool) -> u8");
        assert_eq!(<fn(u8, u8, u8) -> u8>::type_info().as_function().unwrap().arity(), 3);
    }
}
