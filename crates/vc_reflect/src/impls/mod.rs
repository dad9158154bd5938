//! Provide some utilities for implementing reflection traits.
//!
//! - [`concat`]: An efficient string concatenation function.
//! - [`NonGenericTypeInfoCell`]: Used to implement [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: Used to implement [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: Used to implement [`Typed`] for generic types.
//!
//! ## Implemented Menu
//!
//! - scalar: `bool`, `i8`-`i128`, `isize`, `u8`-`u128`, `usize`, `f32`, `f64`,
//!   `String`, `Cow<'static, str>`
//! - list: `Vec<T>`, `VecDeque<T>`
//! - array: `[T; N]`
//! - pointer: `Option<T>` (nullable), `Box<T>`, `Arc<T>`
//! - function: `fn() -> R` up to three arguments
//! - opaque: `()`, `Duration` (zero), `IpAddr`, `Ipv4Addr`, `Ipv6Addr`, `SocketAddr` (text)
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed

use alloc::string::String;

// -----------------------------------------------------------------------------
// Modules

mod cell;

mod array;
mod function;
mod list;
mod opaque;
mod pointer;
mod scalar;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, GenericTypeInfoCell, GenericTypePathCell, NonGenericTypeInfoCell};
pub use opaque::short_name;

/// An efficient string concatenation function.
///
/// This is usually used for the implementation of `TypePath`.
///
/// # Example
///
/// ```
/// use vc_reflect::impls;
///
/// let s = impls::concat(&["module", "::", "name", "<", "T" , ">"]);
///
/// assert_eq!(s, "module::name<T>");
/// assert_eq!(s.capacity(), 15);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> String {
    let len = arr.iter().map(|item| item.len()).sum();
    let mut res = String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}
