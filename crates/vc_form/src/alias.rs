use vc_reflect::info::NamedField;

// -----------------------------------------------------------------------------
// Constants

/// Alias that removes a field from the output.
pub const SKIP_FIELD: &str = "-";

/// Option that omits a field holding its zero value.
pub const OMIT_EMPTY: &str = "omitempty";

// -----------------------------------------------------------------------------
// TagOptions

/// The comma separated options following the alias in a field tag.
///
/// For `#[reflect(tag(schema = "id,omitempty"))]` the options are
/// `omitempty`. Empty segments are ignored.
///
/// # Examples
///
/// ```
/// use vc_form::{field_alias, OMIT_EMPTY};
/// use vc_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Query {
///     #[reflect(tag(schema = "id,omitempty"))]
///     user_id: u64,
/// }
///
/// let info = Query::type_info().as_struct().unwrap();
/// let (alias, options) = field_alias(info.field_at(0).unwrap(), "schema");
///
/// assert_eq!(alias, "id");
/// assert!(options.contains(OMIT_EMPTY));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct TagOptions(&'static str);

impl TagOptions {
    /// Returns `true` if `option` is present.
    pub fn contains(&self, option: &str) -> bool {
        self.iter().any(|o| o == option)
    }

    /// Iterates over the non-empty options, in tag order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> {
        self.0.split(',').filter(|o| !o.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl core::fmt::Debug for TagOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// -----------------------------------------------------------------------------
// field_alias

/// Returns the output name and options of `field` under `tag_key`.
///
/// The tag value is split at the first comma. A missing tag, or an empty
/// alias such as `",omitempty"`, falls back to the field name.
pub fn field_alias(field: &NamedField, tag_key: &str) -> (&'static str, TagOptions) {
    let (alias, options) = match field.tags().get(tag_key) {
        Some(tag) => split_tag(tag),
        None => ("", TagOptions::default()),
    };

    if alias.is_empty() {
        (field.name(), options)
    } else {
        (alias, options)
    }
}

fn split_tag(tag: &'static str) -> (&'static str, TagOptions) {
    match tag.split_once(',') {
        Some((alias, options)) => (alias, TagOptions(options)),
        None => (tag, TagOptions::default()),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{OMIT_EMPTY, SKIP_FIELD, TagOptions, field_alias, split_tag};
    use vc_reflect::derive::Reflect;
    use vc_reflect::info::{NamedField, Typed};

    #[derive(Reflect)]
    struct Tagged {
        #[reflect(tag(schema = "json_name"))]
        renamed: u8,
        #[reflect(tag(schema = ",omitempty"))]
        unnamed: u8,
        #[reflect(tag(schema = "-"))]
        hidden: u8,
        #[reflect(tag(json = "other"))]
        plain: u8,
    }

    fn field(index: usize) -> &'static NamedField {
        Tagged::type_info()
            .as_struct()
            .unwrap()
            .field_at(index)
            .unwrap()
    }

    #[test]
    fn alias_resolution() {
        let (alias, options) = field_alias(field(0), "schema");
        assert_eq!(alias, "json_name");
        assert!(options.is_empty());

        let (alias, options) = field_alias(field(1), "schema");
        assert_eq!(alias, "unnamed");
        assert!(options.contains(OMIT_EMPTY));

        assert_eq!(field_alias(field(2), "schema").0, SKIP_FIELD);
        assert_eq!(field_alias(field(3), "schema").0, "plain");
        assert_eq!(field_alias(field(3), "json").0, "other");
    }

    #[test]
    fn option_parsing() {
        let (alias, options) = split_tag("id,omitempty,,extra");
        assert_eq!(alias, "id");
        assert_eq!(options.iter().collect::<Vec<_>>(), ["omitempty", "extra"]);
        assert!(!options.contains(""));
        assert_eq!(format!("{options:?}"), r#"["omitempty", "extra"]"#);

        assert_eq!(split_tag("id,"), ("id", TagOptions("")));
        assert!(split_tag("id,").1.is_empty());
    }
}
