use std::{io::ErrorKind, path::Path};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::{
    analytics::Summary,
    error::AnalyzeError,
    invariants::ImagePattern,
    models::{LOG_FIELDS, LogRecord},
};

// Timestamp format for log rows: 2014-01-27 00:00:01
const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Single pass over the downloaded log. The first line is assumed to be
/// the header and skipped, empty lines are ignored, everything else must
/// parse.
pub async fn scan_log(path: &Path, images: &ImagePattern) -> Result<Summary, AnalyzeError> {
    let text = tokio::fs::read_to_string(path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            AnalyzeError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AnalyzeError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut summary = Summary::default();
    for (index, line) in text.lines().enumerate().skip(1) {
        if line.is_empty() {
            continue;
        }
        let record = parse_record(index + 1, line)?;
        summary.record(&record, images);
    }
    debug!(
        rows = summary.total_requests(),
        "finished scanning {}",
        path.display()
    );
    Ok(summary)
}

fn parse_record(number: usize, line: &str) -> Result<LogRecord, AnalyzeError> {
    let fields = split_fields(line);
    let found = fields.len();
    let Ok([path, timestamp, user_agent, status, bytes]) = <[String; LOG_FIELDS]>::try_from(fields)
    else {
        return Err(AnalyzeError::MalformedRow {
            line: number,
            found,
        });
    };
    let parsed_timestamp = NaiveDateTime::parse_from_str(timestamp.trim(), TS_FORMAT).map_err(
        |source| AnalyzeError::Timestamp {
            line: number,
            value: timestamp,
            source,
        },
    )?;
    let parsed_bytes = bytes.trim().parse().map_err(|source| AnalyzeError::Size {
        line: number,
        value: bytes,
        source,
    })?;
    Ok(LogRecord {
        path,
        timestamp: parsed_timestamp,
        user_agent,
        status: status.trim().to_string(),
        bytes: parsed_bytes,
    })
}

/// Comma split with just enough quoting support for real logs: a field may
/// be wrapped in double quotes to protect embedded commas, and `""` inside
/// a quoted field stands for a literal quote.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::with_capacity(LOG_FIELDS);
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if current.is_empty() => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
