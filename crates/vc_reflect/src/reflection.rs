use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, ReflectKind};
use crate::ops::{Pointer, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait of runtime reflection.
///
/// A `Reflect` value can report its type information (through the
/// [`DynamicTypePath`] and [`DynamicTyped`] super-traits) and hand out a
/// kind-specific view of its data with [`reflect_ref`](Reflect::reflect_ref).
///
/// Use [`#[derive(Reflect)]`](crate::derive::Reflect) for structs and
/// [`impl_reflect_opaque!`](crate::impl_reflect_opaque) for types whose
/// content should not be inspected.
///
/// # Type Identification
///
/// [`Any::type_id`] on a `Box<dyn Reflect>` returns the id of the box.
/// Use [`Reflect::ty_id`] instead:
///
/// ```
/// use core::any::{Any, TypeId};
/// use vc_reflect::Reflect;
///
/// let x: Box<dyn Reflect> = Box::new(32_i32);
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Returns the [`TypeId`] of the underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the [kind](ReflectKind) of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::{Reflect, info::ReflectKind};
    /// assert_eq!(vec![1, 2, 3].reflect_kind(), ReflectKind::List);
    /// assert_eq!(Some(1_u8).reflect_kind(), ReflectKind::Pointer);
    /// ```
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable, kind-specific view of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::{Reflect, ops::{ReflectRef, ScalarRef}};
    /// let ReflectRef::Scalar(v) = 7_u16.reflect_ref() else { unreachable!() };
    /// assert_eq!(v, ScalarRef::Uint(7));
    /// ```
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Debug formatter for the value.
    ///
    /// The default implementation walks the value by kind.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(val) => {
                let mut debug = f.debug_struct(self.reflect_type_name());
                for index in 0..val.field_len() {
                    if let (Some(name), Some(field)) = (val.name_at(index), val.field_at(index)) {
                        debug.field(name, &field as &dyn fmt::Debug);
                    }
                }
                debug.finish()
            }
            ReflectRef::List(val) => f.debug_list().entries(val.iter()).finish(),
            ReflectRef::Array(val) => f.debug_list().entries(val.iter()).finish(),
            ReflectRef::Pointer(val) => debug_pointer(val, f),
            ReflectRef::Scalar(val) => fmt::Debug::fmt(&val, f),
            ReflectRef::Function(_) | ReflectRef::Opaque(_) => {
                write!(f, "Reflect({})", self.reflect_type_path())
            }
        }
    }
}

// Non-nullable pointers (`Box`, `Arc`) are transparent.
fn debug_pointer(val: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let transparent = val
        .reflect_type_info()
        .as_pointer()
        .is_ok_and(|info| !info.is_nullable());

    match val.pointee() {
        Some(pointee) if transparent => pointee.reflect_debug(f),
        Some(pointee) => f.debug_tuple("Some").field(&pointee).finish(),
        None => f.pad("None"),
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vc_reflect::Reflect;
    /// let x: &dyn Reflect = &10_i64;
    /// assert_eq!(x.downcast_ref::<i64>(), Some(&10));
    /// assert_eq!(x.downcast_ref::<u64>(), None);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn debug_by_kind() {
        let list: &dyn Reflect = &vec![1_u8, 2];
        assert_eq!(format!("{list:?}"), "[Uint(1), Uint(2)]");

        let none: &dyn Reflect = &Option::<String>::None;
        assert_eq!(format!("{none:?}"), "None");

        let f: fn(u8) -> u8 = |x| x;
        let f: &dyn Reflect = &f;
        assert_eq!(format!("{f:?}"), "Reflect(fn(u8) -> u8)");
    }

    #[test]
    fn downcast() {
        let s: &dyn Reflect = &String::from("x");
        assert!(s.is::<String>());
        assert_eq!(s.downcast_ref::<String>().map(String::as_str), Some("x"));
    }
}
