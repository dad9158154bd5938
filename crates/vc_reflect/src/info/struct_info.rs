use alloc::boxed::Box;

use vc_utils::hash::HashMap;

use crate::Reflect;
use crate::info::{NamedField, Type, TypePath, impl_type_fn};
use crate::ops::Struct;
use crate::text::{MarshalText, MarshalTextFn};

/// A container for compile-time named struct info.
///
/// # Examples
///
/// ```rust
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct A {
///     val: f32,
///     #[reflect(tag(schema = "b"))]
///     other: String,
/// }
///
/// let info = <A as Typed>::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("other"), Some(1));
/// assert_eq!(info.field("other").unwrap().tags().get("schema"), Some("b"));
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    indices: HashMap<&'static str, usize>,
    marshal_text: Option<MarshalTextFn>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// The order of internal fields is fixed, depends on the input order.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            indices,
            marshal_text: None,
        }
    }

    /// Declare that the struct converts itself to text.
    ///
    /// Consumers that honour text conversions treat such a struct as a leaf value.
    #[inline]
    pub fn with_marshal_text<T: MarshalText + Reflect + TypePath>(self) -> Self {
        Self {
            marshal_text: Some(MarshalTextFn::of::<T>()),
            ..self
        }
    }

    /// Returns the text conversion of the struct, if declared.
    #[inline]
    pub const fn marshal_text(&self) -> Option<MarshalTextFn> {
        self.marshal_text
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the index of the field with the given `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns an iterator over the fields in **declaration order**.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }
}
