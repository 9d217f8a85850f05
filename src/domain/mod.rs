//! Resource modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Request inputs and response types
//! - `wire.rs`: Request bodies as sent to the backend (where there are any)
//! - `client.rs`: Sub-client mapping methods to endpoint paths

pub mod domains;
pub mod stats;
