use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ListInfo, ReflectKind, TypeInfo, TypePath, Typed};
use crate::ops::{List, ReflectRef};

macro_rules! impl_reflect_list {
    ($list:ident, $path:literal, $name:literal, |$v:ident, $i:ident| $get:expr) => {
        impl<T: TypePath> TypePath for $list<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[$path, "<", T::type_path(), ">"]))
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[$name, "<", T::type_name(), ">"]))
            }
        }

        impl<T: Reflect + Typed> Typed for $list<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed> Reflect for $list<T> {
            #[inline]
            fn reflect_kind(&self) -> ReflectKind {
                ReflectKind::List
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::List(self)
            }
        }

        impl<T: Reflect + Typed> List for $list<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                let ($v, $i) = (self, index);
                $get.map(|item| item as &dyn Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                <$list<T>>::len(self)
            }
        }
    };
}

impl_reflect_list!(Vec, "alloc::vec::Vec", "Vec", |v, i| v.as_slice().get(i));
impl_reflect_list!(
    VecDeque,
    "alloc::collections::VecDeque",
    "VecDeque",
    |v, i| VecDeque::get(v, i)
);

#[cfg(test)]
mod tests {
    use crate::info::{TypePath, Typed};
    use crate::ops::List;
    use alloc::collections::VecDeque;
    use alloc::vec::Vec;
    use alloc::{format, vec};

    #[test]
    fn nested_paths() {
        assert_eq!(<Vec<Vec<u8>>>::type_path(), "alloc::vec::Vec<alloc::vec::Vec<u8>>");
        assert_eq!(<VecDeque<i32>>::type_name(), "VecDeque<i32>");
        assert!(<Vec<bool>>::type_info().as_list().unwrap().item_is::<bool>());
    }

    #[test]
    fn list_access() {
        let mut deque = VecDeque::from(vec![2_u8, 3]);
        deque.push_front(1);
        let list: &dyn List = &deque;
        let items: Vec<_> = list.iter().map(|v| format!("{v:?}")).collect();
        assert_eq!(items, ["Uint(1)", "Uint(2)", "Uint(3)"]);
        assert!(list.get(3).is_none());
    }
}
