//! Domain logic for the floor-plan project store.
//!
//! Contains no I/O: shared id/timestamp types, the domain error type,
//! field validation and the layout filename/stamping rules used by both the
//! repository layer and the HTTP handlers.

pub mod error;
pub mod layout;
pub mod naming;
pub mod project;
pub mod types;
