//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every method issues exactly one
//! statement; callers compose them.

pub mod layout_repo;
pub mod project_repo;

pub use layout_repo::LayoutRepo;
pub use project_repo::ProjectRepo;
