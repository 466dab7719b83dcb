/// Primary key of `projects` and `layouts` (BIGSERIAL).
pub type DbId = i64;

/// Stored as TIMESTAMPTZ, always handled in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
