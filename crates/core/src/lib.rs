//! Domain types for the product catalog.
//!
//! This crate has zero internal deps so the repository layer, the RPC
//! binding and the export worker can all share the same transfer shapes
//! and validation rules.

pub mod error;
pub mod filter;
pub mod product;
pub mod rpc;
pub mod types;
