/// All primary keys and owner ids are UUIDs (v7 for rows created here).
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a new time-ordered id for a row.
pub fn new_id() -> DbId {
    uuid::Uuid::now_v7()
}
