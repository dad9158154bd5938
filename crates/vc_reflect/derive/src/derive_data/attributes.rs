use syn::ext::IdentExt;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes on the type, `#[reflect(text)]`.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// The type implements `MarshalText`.
    pub text: bool,
}

impl TypeAttributes {
    pub(crate) fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(REFLECT_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("text") {
                    if this.text {
                        return Err(meta.error("duplicate `text` attribute"));
                    }
                    this.text = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported type attribute, expected `text`"))
                }
            })?;
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes on a field, `#[reflect(ignore)]` and `#[reflect(tag(key = "value"))]`.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub ignore: bool,
    /// `(key, value)` in declaration order, keys are unique.
    pub tags: Vec<(String, LitStr)>,
}

impl FieldAttributes {
    pub(crate) fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(REFLECT_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("ignore") {
                    this.ignore = true;
                    Ok(())
                } else if meta.path.is_ident("tag") {
                    meta.parse_nested_meta(|tag| {
                        let Some(ident) = tag.path.get_ident() else {
                            return Err(tag.error("tag key must be an identifier"));
                        };
                        let key = ident.unraw().to_string();
                        if this.tags.iter().any(|(k, _)| *k == key) {
                            return Err(tag.error(format!("duplicate tag `{key}`")));
                        }
                        let value: LitStr = tag.value()?.parse()?;
                        this.tags.push((key, value));
                        Ok(())
                    })
                } else {
                    Err(meta.error("unsupported field attribute, expected `ignore` or `tag(..)`"))
                }
            })?;
        }

        Ok(this)
    }
}
