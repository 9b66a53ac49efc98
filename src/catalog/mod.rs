//! Vehicle catalog types
//!
//! The catalog is decoded once by the caller and handed to the ranking engine
//! read-only. Nothing in this crate mutates it.

mod store;
mod vehicle;

pub use store::Catalog;
pub use vehicle::Vehicle;
