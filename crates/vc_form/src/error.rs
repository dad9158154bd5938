use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use core::fmt;

use thiserror::Error;
use vc_reflect::text::TextError;

// -----------------------------------------------------------------------------
// ConvertError

/// A failed `value -> string` conversion.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The text capability of the value reported an error.
    #[error("{0}")]
    Text(TextError),

    /// The converter was handed a value of another type.
    #[error("`{encoder}` encoder cannot convert a value of type `{found}`")]
    Mismatch {
        encoder: &'static str,
        found: &'static str,
    },
}

// -----------------------------------------------------------------------------
// FieldError

/// A recoverable failure of one field, see [`MultiError`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FieldError {
    /// No converter exists for the field type, or for its items.
    #[error("schema: encoder not found for `{field}` of type `{type_path}`")]
    NoEncoder {
        field: String,
        type_path: &'static str,
    },

    /// The converter of a field failed.
    #[error("schema: failed to encode field `{field}`: {source}")]
    Field {
        field: String,
        source: ConvertError,
    },

    /// The converter failed on the `index`-th item of a sequence.
    #[error("schema: failed to encode slice element `{field}[{index}]`: {source}")]
    Element {
        field: String,
        index: usize,
        source: ConvertError,
    },
}

// -----------------------------------------------------------------------------
// MultiError

/// Every field failure of one encoding, keyed by field path.
///
/// Keys look like `Type.field`, `Type.nested.field` or `Type.list[3]`.
/// Iteration and [`Display`](fmt::Display) follow key order.
#[derive(Debug, Default)]
pub struct MultiError(BTreeMap<String, FieldError>);

impl MultiError {
    /// Creates an empty collection.
    #[inline]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Records `error` under `key`, replacing a previous failure.
    pub fn insert(&mut self, key: String, error: FieldError) -> Option<FieldError> {
        log::debug!("{error}");
        self.0.insert(key, error)
    }

    /// Moves every failure of `other` into `self`.
    pub fn merge(&mut self, mut other: MultiError) {
        self.0.append(&mut other.0);
    }

    /// Returns the failure recorded under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&FieldError> {
        self.0.get(key)
    }

    /// Returns the number of failed fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &FieldError)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `Ok(())` if no failure was recorded.
    pub fn into_result(self) -> Result<(), MultiError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut errors = self.0.values();
        if let Some(first) = errors.next() {
            fmt::Display::fmt(first, f)?;
        }
        for error in errors {
            f.write_str("; ")?;
            fmt::Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl core::error::Error for MultiError {}

impl IntoIterator for MultiError {
    type Item = (String, FieldError);
    type IntoIter = btree_map::IntoIter<String, FieldError>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// -----------------------------------------------------------------------------
// EncodeError

/// The failure of [`Encoder::encode`](crate::Encoder::encode).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EncodeError {
    /// The source is not a struct, nothing was written.
    #[error("schema: interface must be a struct, found `{type_path}`")]
    NotAStruct { type_path: &'static str },

    /// Some fields failed; the others were written.
    #[error(transparent)]
    Fields(#[from] MultiError),
}

impl EncodeError {
    /// Returns the field failures, if any.
    pub fn fields(&self) -> Option<&MultiError> {
        match self {
            Self::Fields(errors) => Some(errors),
            Self::NotAStruct { .. } => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{ConvertError, EncodeError, FieldError, MultiError};

    fn no_encoder(field: &str) -> FieldError {
        FieldError::NoEncoder {
            field: field.to_owned(),
            type_path: "fn()",
        }
    }

    #[test]
    fn display_joins_in_key_order() {
        let mut errors = MultiError::new();
        assert!(errors.to_string().is_empty());

        errors.insert("T.b".into(), no_encoder("T.b"));
        errors.insert(
            "T.a".into(),
            FieldError::Field {
                field: "T.a".into(),
                source: ConvertError::Text("bad".into()),
            },
        );

        assert_eq!(
            errors.to_string(),
            "schema: failed to encode field `T.a`: bad; \
             schema: encoder not found for `T.b` of type `fn()`"
        );
        assert_eq!(errors.keys().collect::<Vec<_>>(), ["T.a", "T.b"]);
    }

    #[test]
    fn merge_and_result() {
        let mut parent = MultiError::new();
        let mut child = MultiError::new();
        child.insert("T.x.y".into(), no_encoder("T.x.y"));

        parent.merge(child);
        assert_eq!(parent.len(), 1);
        assert!(parent.get("T.x.y").is_some());

        let err = EncodeError::from(parent.into_result().unwrap_err());
        assert_eq!(err.fields().map(MultiError::len), Some(1));
        assert!(MultiError::new().into_result().is_ok());
    }
}
