//! Encode reflected structs into form values.
//!
//! This is the umbrella crate of the workspace, re-exporting:
//!
//! - [`form`]: the encoder, `struct -> name -> [value]`.
//! - [`reflect`]: the runtime reflection used to inspect records.
//! - [`utils`]: hash containers shared by the other crates.
//!
//! ```
//! use vc_schema::form::{Encoder, FormValues};
//! use vc_schema::reflect::derive::Reflect;
//!
//! #[derive(Reflect)]
//! struct Query {
//!     #[reflect(tag(schema = "q"))]
//!     text: String,
//!     #[reflect(tag(schema = "page,omitempty"))]
//!     page: u32,
//! }
//!
//! let mut values = FormValues::new();
//! Encoder::new()
//!     .encode(&Query { text: "rust".into(), page: 0 }, &mut values)
//!     .unwrap();
//!
//! assert_eq!(values.get("q"), Some("rust"));
//! assert!(!values.contains_key("page"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_form as form;
pub use vc_reflect as reflect;
pub use vc_utils as utils;
