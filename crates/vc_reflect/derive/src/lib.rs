//! See following macros:
//!
//! - [`Reflect`]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Struct Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits for structs with named fields:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `Struct`
///
/// Tuple structs, unit structs, enums and unions are rejected, so are
/// lifetime parameters. Type parameters get `T: Reflect + Typed` bounds.
///
/// ## Type Attributes
///
/// `text` declares that the struct implements `MarshalText`, consumers
/// then treat it as a single value instead of walking its fields.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(text)]
/// struct Date { year: u16, month: u8, day: u8 }
///
/// impl MarshalText for Date { /* ... */ }
/// ```
///
/// ## Field Attributes
///
/// `tag(key = "value", ...)` attaches key/value tags to a field, retrieved
/// through `NamedField::tags`. `ignore` hides a field from reflection.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Query {
///     #[reflect(tag(schema = "q", json = "query"))]
///     text: String,
///     #[reflect(tag(schema = "page,omitempty"))]
///     page: u32,
///     #[reflect(ignore)]
///     cache: Rc<()>,
/// }
/// ```
///
/// Raw identifiers are unescaped: a field `r#type` is named `type`.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_derive_input(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
