//! Namestamp Core - Fundamental types and static tables
//!
//! This crate defines the building blocks of the deterministic timestamp
//! assignment engine:
//! - Ordering alphabet and rank function (CharsetTable)
//! - Category order table, override table, and built-in name list
//! - The `Plan` output record
//! - Error types

pub mod category;
pub mod charset;
pub mod error;
pub mod plan;

pub use category::*;
pub use charset::*;
pub use error::*;
pub use plan::*;
