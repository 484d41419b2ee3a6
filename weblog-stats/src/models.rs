use chrono::NaiveDateTime;

/// Columns per data row: path, timestamp, user agent, status code, size.
pub const LOG_FIELDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub path: String,
    pub timestamp: NaiveDateTime,
    pub user_agent: String,
    pub status: String,
    pub bytes: u64,
}
