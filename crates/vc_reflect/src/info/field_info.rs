use core::any::{Any, TypeId};

use crate::info::{FieldTags, TypeInfo, Typed};

/// Field information of a named struct field.
///
/// The declared type is stored lazily as a function, so descriptors of
/// self-referential types (`struct Node { next: Option<Box<Node>> }`) can be built.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::{FieldTags, NamedField, ReflectKind};
///
/// let field = NamedField::new::<Vec<u8>>("bytes")
///     .with_tags(FieldTags::new(&[("schema", "b")]));
///
/// assert_eq!(field.name(), "bytes");
/// assert_eq!(field.type_path(), "alloc::vec::Vec<u8>");
/// assert_eq!(field.type_info().kind(), ReflectKind::List);
/// assert_eq!(field.tags().get("schema"), Some("b"));
/// ```
#[derive(Clone, Debug)]
pub struct NamedField {
    name: &'static str,
    ty_id: TypeId,
    type_path: fn() -> &'static str,
    type_info: fn() -> &'static TypeInfo,
    tags: FieldTags,
}

impl NamedField {
    /// Create a new [`NamedField`] with a declared type of `T`.
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<T>(),
            type_path: T::type_path,
            type_info: T::type_info,
            tags: FieldTags::EMPTY,
        }
    }

    /// Attach tags to the field.
    #[inline]
    pub const fn with_tags(self, tags: FieldTags) -> Self {
        Self { tags, ..self }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`TypeId`] of the declared type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the declared type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the path of the declared type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        (self.type_path)()
    }

    /// Returns the [`TypeInfo`] of the declared type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns the tags attached to the field.
    #[inline]
    pub const fn tags(&self) -> &FieldTags {
        &self.tags
    }
}
