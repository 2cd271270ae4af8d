//! `bistro-core` — shared building blocks for the back-office calculation crates.
//!
//! This crate contains **pure** primitives (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{CalcError, CalcResult};
pub use id::ItemId;
pub use value_object::ValueObject;
