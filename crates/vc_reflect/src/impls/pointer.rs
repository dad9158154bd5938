use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{PointerInfo, ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::{Pointer, ReflectRef};

macro_rules! impl_reflect_pointer {
    ($ptr:ident, $path:literal, $name:literal, $nullable:literal, |$v:ident| $pointee:expr) => {
        impl<T: TypePath> TypePath for $ptr<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[$path, "<", T::type_path(), ">"]))
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[$name, "<", T::type_name(), ">"]))
            }
        }

        impl<T: Reflect + Typed> Typed for $ptr<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::Pointer(PointerInfo::new::<Self, T>($nullable))
                })
            }
        }

        impl<T: Reflect + Typed> Reflect for $ptr<T> {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::Pointer
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Pointer(self)
            }
        }

        impl<T: Reflect + Typed> Pointer for $ptr<T> {
            #[inline]
            fn pointee(&self) -> Option<&dyn Reflect> {
                let $v = self;
                $pointee
            }
        }
    };
}

impl_reflect_pointer!(Option, "core::option::Option", "Option", true, |v| {
    v.as_ref().map(|inner| inner as &dyn Reflect)
});
impl_reflect_pointer!(Box, "alloc::boxed::Box", "Box", false, |v| {
    Some(&**v as &dyn Reflect)
});
impl_reflect_pointer!(Arc, "alloc::sync::Arc", "Arc", false, |v| {
    Some(&**v as &dyn Reflect)
});

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::Pointer;
    use alloc::boxed::Box;
    use alloc::string::String;

    #[test]
    fn pointer_paths() {
        assert_eq!(
            <Option<Box<String>>>::type_path(),
            "core::option::Option<alloc::boxed::Box<alloc::string::String>>"
        );
        assert!(<Option<u8>>::type_info().as_pointer().unwrap().is_nullable());
    }

    #[test]
    fn pointee_access() {
        let boxed: &dyn Pointer = &Box::new(3_u8);
        assert!(!boxed.is_null());
        assert!(boxed.pointee().is_some_and(|v: &dyn Reflect| v.is::<u8>()));
    }
}
