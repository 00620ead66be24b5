//! Scheduled catalog export.
//!
//! On every tick the [`task::ExportTask`] calls `GetAllProducts` on the
//! product service, converts the reply into a snapshot document, and
//! replaces the single JSON file in the output directory. Faults never
//! escape a tick; the next tick is the only recovery.

pub mod client;
pub mod config;
pub mod output;
pub mod schedule;
pub mod snapshot;
pub mod task;
