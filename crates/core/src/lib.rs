//! Domain types, errors, and pure logic shared by the ironlog backend crates.
//!
//! This crate has no I/O: persistence lives in `ironlog-db` and the HTTP
//! surface in `ironlog-api`.

pub mod catalog;
pub mod error;
pub mod stats;
pub mod types;

pub use error::CoreError;
