//! The recursive attribute container
//!
//! A [`DeepStruct`] owns an ordered table from attribute key to [`Value`].
//! Nested mappings are wrapped on construction and on assignment, so the
//! whole tree is made of structs, sequences and leaves.
//!
//! The struct is a shared handle: cloning it clones the handle, not the
//! table. That is what lets a struct hold a reference to itself, and it is
//! why inspection, equality, export and deep search all carry a per-call
//! visited stack.
//!
//! [`Value`]: crate::value::Value

mod accessors;
mod core;
mod equality;
mod inspect;

pub use self::core::DeepStruct;
