/// Product primary key (`products.id`, a Postgres `BIGSERIAL`).
pub type DbId = i64;

/// UTC instant stamped on export files and their contents.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
