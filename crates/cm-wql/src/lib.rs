//! cm-wql - WQL construction layer for cmclient
//!
//! This crate renders WQL filter clauses, queries, and instance paths as
//! plain strings. It performs no I/O and no schema validation: unknown or
//! malformed class and field names surface as provider-side failures at
//! execution time.

pub mod filter;
pub mod query;

pub use filter::{Constraint, FilterBuilder};
pub use query::{instance_path, select_all};
