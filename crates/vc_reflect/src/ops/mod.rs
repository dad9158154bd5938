//! Data access for reflected values.
//!
//! [`Reflect::reflect_ref`](crate::Reflect::reflect_ref) returns a
//! [`ReflectRef`], each variant gives access to one kind:
//!
//! - [`Struct`]: named fields (e.g. `A { .. }`).
//! - [`List`]: variable-length sequences (e.g. `Vec<i32>`).
//! - [`Array`]: fixed-size sequences (e.g. `[i32; 5]`).
//! - [`Pointer`]: optional indirection (e.g. `Option<T>`, `Box<T>`).
//! - [`ScalarRef`]: primitive values.

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod kind;
mod list_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use array_ops::{Array, ArrayItemIter};
pub use kind::{ReflectRef, ScalarRef};
pub use list_ops::{List, ListItemIter};
pub use pointer_ops::Pointer;
pub use struct_ops::{FieldIter, Struct};
