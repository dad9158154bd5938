//! Encode reflected structs into form values, `name -> [value]`.
//!
//! The [`Encoder`] walks the fields of any `#[derive(Reflect)]` struct and
//! writes their string form into a [`FormSink`], such as [`FormValues`] or a
//! plain `HashMap<String, Vec<String>>`.
//!
//! Output names come from a field tag (`schema` by default):
//!
//! | tag                          | effect                              |
//! |------------------------------|-------------------------------------|
//! | none, or `",..."`            | the field name                      |
//! | `schema = "name"`            | `name`                              |
//! | `schema = "name,omitempty"`  | `name`, skipped when [zero](is_zero) |
//! | `schema = "-"`               | never written                       |
//!
//! Values are converted by a [`TypeEncoder`]: a registered converter, the
//! [`MarshalText`](vc_reflect::text::MarshalText) capability when enabled,
//! or the built-in scalars (`bool`, integers, floats with six decimals,
//! strings). Pointers encode their target, or `null`.
//!
//! ```
//! use vc_form::{Encoder, FormValues};
//! use vc_reflect::derive::Reflect;
//!
//! #[derive(Reflect)]
//! struct Filter {
//!     #[reflect(tag(schema = "q"))]
//!     query: String,
//!     #[reflect(tag(schema = "ratio,omitempty"))]
//!     ratio: f64,
//!     #[reflect(tag(schema = "id"))]
//!     ids: Vec<u32>,
//!     limit: Option<u8>,
//! }
//!
//! let filter = Filter {
//!     query: "rust".into(),
//!     ratio: 1.0 / 3.0,
//!     ids: vec![3, 5],
//!     limit: None,
//! };
//!
//! let mut values = FormValues::new();
//! Encoder::new().encode(&filter, &mut values).unwrap();
//!
//! assert_eq!(
//!     values.into_sorted_pairs(),
//!     [
//!         ("id".to_owned(), vec!["3".to_owned(), "5".to_owned()]),
//!         ("limit".to_owned(), vec!["null".to_owned()]),
//!         ("q".to_owned(), vec!["rust".to_owned()]),
//!         ("ratio".to_owned(), vec!["0.333333".to_owned()]),
//!     ]
//! );
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod alias;
mod encoder;
mod error;
mod plan;
mod resolve;
mod sink;
mod values;
mod zero;

// -----------------------------------------------------------------------------
// Exports

pub use alias::{OMIT_EMPTY, SKIP_FIELD, TagOptions, field_alias};
pub use encoder::{DEFAULT_ALIAS_TAG, Encoder};
pub use error::{ConvertError, EncodeError, FieldError, MultiError};
pub use resolve::{NULL, RegisteredEncoder, TypeEncoder};
pub use sink::FormSink;
pub use values::FormValues;
pub use zero::is_zero;
