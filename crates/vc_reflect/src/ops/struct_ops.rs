use core::iter::FusedIterator;

use crate::Reflect;

/// Reflection access for structs with named fields.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect), fields are
/// indexed in declaration order.
///
/// # Examples
///
/// ```
/// use vc_reflect::{Reflect, derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let point = Point { x: 1, y: 2 };
/// let point: &dyn Struct = &point;
///
/// assert_eq!(point.field_len(), 2);
/// assert_eq!(point.name_at(1), Some("y"));
/// assert_eq!(point.field("x").unwrap().downcast_ref::<i32>(), Some(&1));
///
/// let names: Vec<_> = point.iter_fields().map(|(name, _)| name).collect();
/// assert_eq!(names, ["x", "y"]);
/// ```
pub trait Struct: Reflect {
    /// Returns the field with the given `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of fields.
    fn field_len(&self) -> usize;
}

impl dyn Struct {
    /// Returns an iterator over `(name, value)` in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> FieldIter<'_> {
        FieldIter {
            value: self,
            index: 0,
        }
    }
}

/// An iterator over the fields of a [`Struct`].
pub struct FieldIter<'a> {
    value: &'a dyn Struct,
    index: usize,
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.value.name_at(self.index)?;
        let field = self.value.field_at(self.index)?;
        self.index += 1;
        Some((name, field))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let hint = self.value.field_len().saturating_sub(self.index);
        (hint, Some(hint))
    }
}

impl ExactSizeIterator for FieldIter<'_> {}
impl FusedIterator for FieldIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};
    use crate::ops::{ReflectRef, Struct};
    use crate::text::{MarshalText, TextError};
    use crate::Reflect;

    #[derive(Reflect)]
    struct Node {
        value: u8,
        next: Option<Box<Node>>,
    }

    #[derive(Reflect)]
    struct Page<T, const N: usize> {
        items: [T; N],
        #[reflect(tag(schema = "total,omitempty", json = "t"))]
        total: u64,
        #[reflect(ignore)]
        _scratch: Vec<char>,
    }

    #[derive(Reflect)]
    #[reflect(text)]
    struct Rgb {
        r: u8,
        g: u8,
        b: u8,
    }

    impl MarshalText for Rgb {
        fn marshal_text(&self) -> Result<String, TextError> {
            Ok(format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b))
        }
    }

    #[derive(Reflect)]
    struct Keyword {
        r#type: String,
    }

    #[test]
    fn recursive_struct() {
        let node = Node {
            value: 1,
            next: Some(Box::new(Node { value: 2, next: None })),
        };
        let ReflectRef::Struct(s) = node.reflect_ref() else {
            panic!("expected a struct");
        };
        assert_eq!(s.field_len(), 2);
        assert_eq!(s.name_at(1), Some("next"));
        assert_eq!(
            format!("{:?}", node.as_reflect()),
            "Node { value: Uint(1), next: Some(Node { value: Uint(2), next: None }) }"
        );

        let info = Node::type_info().as_struct().unwrap();
        let next = info.field("next").unwrap().type_info().as_pointer().unwrap();
        assert!(next.is_nullable());
        assert_eq!(next.pointee_info().as_pointer().unwrap().pointee_info().kind(), ReflectKind::Struct);
    }

    #[test]
    fn generic_struct() {
        type P = Page<u8, 2>;
        assert_eq!(P::type_name(), "Page<u8, 2>");
        assert!(P::type_path().ends_with("::Page<u8, 2>"));
        assert_ne!(P::type_path(), <Page<i8, 2>>::type_path());

        let info = P::type_info().as_struct().unwrap();
        assert_eq!(info.field_len(), 2);
        assert!(info.field("_scratch").is_none());
        let tags = info.field("total").unwrap().tags();
        assert_eq!(tags.get("schema"), Some("total,omitempty"));
        assert_eq!(tags.get("json"), Some("t"));

        let page = P { items: [1, 2], total: 9, _scratch: Vec::new() };
        let page: &dyn Struct = &page;
        let names: Vec<_> = page.iter_fields().map(|(name, _)| name).collect();
        assert_eq!(names, ["items", "total"]);
        assert!(page.field("_scratch").is_none());
    }

    #[test]
    fn text_struct() {
        let info = Rgb::type_info();
        let text = info.marshal_text().unwrap();
        assert_eq!(text.call(&Rgb { r: 255, g: 0, b: 16 }).unwrap(), "#ff0010");
        assert!(Node::type_info().marshal_text().is_none());
    }

    #[test]
    fn raw_identifier() {
        let info = Keyword::type_info().as_struct().unwrap();
        assert_eq!(info.field_at(0).unwrap().name(), "type");
        let value = Keyword { r#type: String::from("a") };
        assert!(Struct::field(&value, "type").is_some());
    }
}
