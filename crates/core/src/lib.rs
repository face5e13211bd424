//! `mejorsol-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O, no UI concerns).

pub mod entity;
pub mod error;
pub mod sku;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use sku::Sku;
