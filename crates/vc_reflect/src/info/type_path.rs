use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// A stable alternative to [`core::any::type_name`], the output does not
/// change between compiler versions.
///
/// - [`type_path`]: the unique identifier of the type, with generics.
/// - [`type_name`]: the type name without module path, may be duplicated.
///
/// Names never start with `::`.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::TypePath;
///
/// assert_eq!(<Option<Vec<usize>>>::type_path(), "core::option::Option<alloc::vec::Vec<usize>>");
/// assert_eq!(<Option<Vec<usize>>>::type_name(), "Option<Vec<usize>>");
/// ```
///
/// Generic types store their formatted paths in a
/// [`GenericTypePathCell`](crate::impls::GenericTypePathCell):
///
/// ```
/// use vc_reflect::info::TypePath;
/// use vc_reflect::impls::GenericTypePathCell;
///
/// struct Foo<T>(T);
///
/// impl<T: TypePath> TypePath for Foo<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| format!("my_crate::Foo<{}>", T::type_path()))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| format!("Foo<{}>", T::type_name()))
///     }
/// }
///
/// assert_eq!(<Foo<u8>>::type_path(), "my_crate::Foo<u8>");
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
pub trait TypePath: 'static {
    /// Returns the fully qualified path with generics of the target type.
    fn type_path() -> &'static str;

    /// Returns a short, pretty-print enabled path to the type.
    fn type_name() -> &'static str;
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Provide dynamic dispatch for types that implement [`TypePath`].
///
/// Auto impl for all types that implemented [`TypePath`].
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        T::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        T::type_name()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The base representation of a Rust type: its [`TypeId`] and path functions.
///
/// Equality and hashing only consider the [`TypeId`].
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
}

impl Type {
    /// Create a new [`Type`] from a type that implements [`TypePath`].
    #[inline]
    pub fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_path: T::type_path,
            type_name: T::type_name,
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.type_path)()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Implement the [`Type`] accessors for an info struct.
///
/// `impl_type_fn!(ty)` reads the given field, `impl_type_fn!()` expects a `ty()` method.
macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Returns the type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// Returns the type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().is::<T>()
        }
    };
}

pub(crate) use impl_type_fn;

#[cfg(test)]
mod tests {
    use super::{Type, TypePath};
    use alloc::string::String;

    #[test]
    fn type_equality_ignores_paths() {
        let a = Type::of::<String>();
        let b = Type::of::<String>();
        assert_eq!(a, b);
        assert_ne!(a, Type::of::<u8>());
        assert!(a.is::<String>());
        assert_eq!(a.path(), String::type_path());
        assert_eq!(a.name(), "String");
    }
}
