//! Project field validation.

use crate::error::CoreError;

/// Maximum allowed length for a project name (matches `VARCHAR(100)`).
pub const MAX_PROJECT_NAME_LENGTH: usize = 100;

/// Validate a project name: must be present, not blank, and within
/// [`MAX_PROJECT_NAME_LENGTH`] characters.
pub fn validate_project_name(name: Option<&str>) -> Result<(), CoreError> {
    let name = name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Project name is required".into()));
    }
    let len = name.chars().count();
    if len > MAX_PROJECT_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Project name must not exceed {MAX_PROJECT_NAME_LENGTH} characters, got {len}"
        )));
    }
    Ok(())
}
