//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` structs matching the rows the repositories return
//! - `Deserialize` DTOs for request payloads
//!
//! Serialized field names are camelCase to match the HTTP contract.

pub mod layout;
pub mod project;
