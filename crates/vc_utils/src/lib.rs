//! Hash containers shared by the `vc_*` crates.
//!
//! - [`hash`]: `hashbrown` maps with `foldhash` based, fixed-seed hashers.
//! - [`TypeIdMap`]: a map keyed by [`TypeId`](core::any::TypeId), used by
//!   type registries and static type-info cells.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
