use core::fmt;

/// Key/value annotations attached to a struct field.
///
/// Written as `#[reflect(tag(schema = "name,omitempty", json = "name"))]`
/// and stored in declaration order.
///
/// # Examples
///
/// ```
/// use vc_reflect::info::FieldTags;
///
/// const TAGS: FieldTags = FieldTags::new(&[("schema", "id,omitempty"), ("json", "id")]);
///
/// assert_eq!(TAGS.get("schema"), Some("id,omitempty"));
/// assert_eq!(TAGS.get("xml"), None);
/// assert_eq!(TAGS.to_string(), r#"schema:"id,omitempty" json:"id""#);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldTags(&'static [(&'static str, &'static str)]);

impl FieldTags {
    /// A tag set without entries.
    pub const EMPTY: Self = Self(&[]);

    /// Create a tag set from `(key, value)` pairs.
    #[inline]
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self(pairs)
    }

    /// Returns the value of the first tag named `key`.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Returns `true` if a tag named `key` exists, even with an empty value.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the `(key, value)` pairs.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, &'static str)> {
        self.0.iter().copied()
    }
}

impl fmt::Display for FieldTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}:{value:?}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for FieldTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter().copied()).finish()
    }
}
