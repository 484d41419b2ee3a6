use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use rand::{SeedableRng, rngs::StdRng};

use crate::generator::{HEADER, generate_row};

/// All generated timestamps fall inside this one day so the hourly report
/// has something to bucket.
fn log_day() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2014, 1, 27)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

pub async fn write_log(path: &Path, rows: u64, seed: Option<u64>) -> std::io::Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let day_start = log_day();
    let mut buffer = String::with_capacity((rows as usize + 1) * 128);
    buffer.push_str(HEADER);
    buffer.push('\n');
    for _ in 0..rows {
        buffer.push_str(&generate_row(&mut rng, day_start));
        buffer.push('\n');
    }
    tokio::fs::write(path, buffer).await
}
