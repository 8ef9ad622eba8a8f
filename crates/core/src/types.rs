/// Users, recipes, and categories are keyed by UUID surrogate ids.
pub type DbId = uuid::Uuid;

/// Junction rows use a BIGSERIAL identity.
pub type LinkId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
