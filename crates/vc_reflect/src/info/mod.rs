//! Compile-time type information.
//!
//! - [`TypePath`]: stable type paths and names.
//! - [`Typed`]: access to the static [`TypeInfo`] of a type.
//! - [`TypeInfo`]: one variant per [`ReflectKind`], each with its own info struct.
//! - [`NamedField`]: declared type and [`FieldTags`] of a struct field.

mod container_info;
mod field_info;
mod opaque_info;
mod scalar_info;
mod struct_info;
mod tags;
mod type_info;
mod type_path;
mod typed;

pub use container_info::{ArrayInfo, ListInfo, PointerInfo};
pub use field_info::NamedField;
pub use opaque_info::{FunctionInfo, OpaqueInfo, ZeroCheckFn};
pub use scalar_info::{ScalarInfo, ScalarKind};
pub use struct_info::StructInfo;
pub use tags::FieldTags;
pub use type_info::{ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};

pub(crate) use type_path::impl_type_fn;
