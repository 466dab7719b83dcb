//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `floorplan_db` and
//! map errors via [`crate::error::AppError`].

pub mod layout;
pub mod legacy;
pub mod project;
