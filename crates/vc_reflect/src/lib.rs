//! Runtime reflection for the `vc_*` crates.
//!
//! Types describe themselves through [`info::Typed`] (static [`TypeInfo`])
//! and expose their data through [`Reflect::reflect_ref`]. The set of kinds
//! is closed, see [`ReflectKind`]:
//!
//! | kind       | examples                                  | access            |
//! |------------|-------------------------------------------|-------------------|
//! | `Struct`   | `#[derive(Reflect)] struct A { .. }`      | [`ops::Struct`]   |
//! | `List`     | `Vec<T>`, `VecDeque<T>`                   | [`ops::List`]     |
//! | `Array`    | `[T; N]`                                  | [`ops::Array`]    |
//! | `Pointer`  | `Option<T>`, `Box<T>`, `Arc<T>`           | [`ops::Pointer`]  |
//! | `Scalar`   | `bool`, integers, floats, `String`        | [`ops::ScalarRef`]|
//! | `Function` | `fn(A) -> R`                              | none              |
//! | `Opaque`   | `Duration`, `IpAddr`, `impl_reflect_opaque!` | downcast       |
//!
//! ```
//! use vc_reflect::{Reflect, derive::Reflect, info::Typed, ops::ReflectRef};
//!
//! #[derive(Reflect)]
//! struct User {
//!     #[reflect(tag(schema = "user_name"))]
//!     name: String,
//!     age: u8,
//! }
//!
//! let info = User::type_info().as_struct().unwrap();
//! assert_eq!(info.field_at(0).unwrap().tags().get("schema"), Some("user_name"));
//!
//! let user = User { name: "ada".into(), age: 36 };
//! let ReflectRef::Struct(s) = user.reflect_ref() else { unreachable!() };
//! assert_eq!(s.field("age").unwrap().downcast_ref::<u8>(), Some(&36));
//! ```
//!
//! [`TypeInfo`]: info::TypeInfo
//! [`ReflectKind`]: info::ReflectKind
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names `::vc_reflect`, which must also resolve in this crate's own tests.
extern crate self as vc_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod text;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports {
    pub use alloc::format;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec::Vec;
}

pub use reflection::Reflect;
pub use vc_reflect_derive as derive;
