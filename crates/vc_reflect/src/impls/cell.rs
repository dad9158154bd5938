//! Containers for static storage of type information.
//!
//! Usually used to implement [`Typed`](crate::info::Typed) and
//! [`TypePath`](crate::info::TypePath).
//!
//! - [`NonGenericTypeInfoCell`]: a [`OnceLock`] holding one [`TypeInfo`].
//! - [`GenericTypeInfoCell`], [`GenericTypePathCell`]: the `static CELL` in a
//!   generic function is shared by every instantiation, so these hold a
//!   [`TypeIdMap`] behind a [`RwLock`].

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use std::sync::OnceLock;

use parking_lot::RwLock;
use vc_utils::TypeIdMap;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use vc_reflect::impls::NonGenericTypeInfoCell;
/// use vc_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
///
/// struct Token;
///
/// impl TypePath for Token {
///     fn type_path() -> &'static str { "my_crate::Token" }
///     fn type_name() -> &'static str { "Token" }
/// }
///
/// impl Typed for Token {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert_eq!(Token::type_info().type_name(), "Token");
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, initializing it with `f` on first access.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// Container for static storage of type information with generics.
///
/// See [`GenericTypeInfoCell`] and [`GenericTypePathCell`].
pub struct GenericTypeCell<T: ?Sized + 'static>(RwLock<TypeIdMap<&'static T>>);

/// Container for static storage of [`TypeInfo`] with generics.
///
/// ## Example
///
/// ```
/// use vc_reflect::impls::{GenericTypeInfoCell, GenericTypePathCell};
/// use vc_reflect::info::{ListInfo, TypeInfo, TypePath, Typed};
/// # use vc_reflect::{Reflect, info::ReflectKind, ops::{List, ReflectRef}};
///
/// struct Stack<T>(Vec<T>);
///
/// impl<T: Typed> TypePath for Stack<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| format!("my_crate::Stack<{}>", T::type_path()))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| format!("Stack<{}>", T::type_name()))
///     }
/// }
///
/// impl<T: Reflect + Typed> Typed for Stack<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
///     }
/// }
/// # impl<T: Reflect + Typed> Reflect for Stack<T> {
/// #     fn reflect_kind(&self) -> ReflectKind { ReflectKind::List }
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::List(self) }
/// # }
/// # impl<T: Reflect + Typed> List for Stack<T> {
/// #     fn get(&self, index: usize) -> Option<&dyn Reflect> { self.0.get(index).map(|v| v as _) }
/// #     fn len(&self) -> usize { self.0.len() }
/// # }
///
/// assert_eq!(<Stack<u8>>::type_info().type_name(), "Stack<u8>");
/// assert_eq!(<Stack<i8>>::type_info().type_name(), "Stack<i8>");
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Container for static storage of type paths with generics.
///
/// See the example of [`GenericTypeInfoCell`].
pub type GenericTypePathCell = GenericTypeCell<str>;

impl<T: ?Sized + 'static> GenericTypeCell<T> {
    /// Create an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static T> {
        self.0.read().get(&type_id).copied()
    }

    // The value is built before locking: building a path may recurse into
    // this very cell for another instantiation (`Vec<Vec<u8>>`).
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: &'static T) -> &'static T {
        *self.0.write().get_or_insert_with(type_id, || value)
    }
}

impl GenericTypeCell<TypeInfo> {
    /// Returns the info of type `G`, creating it with `f` on first access.
    #[inline]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &'static TypeInfo {
        let type_id = TypeId::of::<G>();
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, Box::leak(Box::new(f()))),
        }
    }
}

impl GenericTypeCell<str> {
    /// Returns the path of type `G`, creating it with `f` on first access.
    #[inline]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> String) -> &'static str {
        let type_id = TypeId::of::<G>();
        match self.get_by_type_id(type_id) {
            Some(path) => path,
            None => self.insert_by_type_id(type_id, Box::leak(f().into_boxed_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GenericTypePathCell;
    use alloc::string::ToString;

    #[test]
    fn path_cell_is_keyed_by_type() {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();

        let a = CELL.get_or_insert::<u8>(|| "a".to_string());
        let b = CELL.get_or_insert::<u16>(|| "b".to_string());
        let again = CELL.get_or_insert::<u8>(|| "unused".to_string());

        assert_eq!((a, b, again), ("a", "b", "a"));
        assert!(core::ptr::eq(a, again));
    }
}
