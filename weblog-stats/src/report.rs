use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::{analytics::Summary, error::AnalyzeError};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Frozen view of a finished pass, ready for printing or encoding.
#[derive(Debug, Serialize)]
pub struct Report {
    total_requests: u64,
    image_requests: u64,
    image_bytes: u64,
    image_percentage: f64,
    image_megabytes: f64,
    most_popular_browser: String,
    browsers: BTreeMap<String, u64>,
    statuses: BTreeMap<String, u64>,
    hourly_hits: Vec<HourlyHits>,
}

#[derive(Debug, Serialize)]
struct HourlyHits {
    hour: u8,
    hits: u64,
}

impl TryFrom<&Summary> for Report {
    type Error = AnalyzeError;

    fn try_from(summary: &Summary) -> Result<Self, Self::Error> {
        let image_percentage = summary.image_percentage().ok_or(AnalyzeError::EmptyInput)?;
        let most_popular_browser = summary
            .most_popular_browser()
            .ok_or(AnalyzeError::EmptyInput)?
            .to_string();
        Ok(Self {
            total_requests: summary.total_requests(),
            image_requests: summary.image_requests(),
            image_bytes: summary.image_bytes(),
            image_percentage,
            image_megabytes: summary.image_bytes() as f64 / BYTES_PER_MB,
            most_popular_browser,
            browsers: summary.browser_counts(),
            statuses: summary.status_counts().clone(),
            hourly_hits: summary
                .hourly_hits()
                .into_iter()
                .map(|(hour, hits)| HourlyHits {
                    hour: hour.get(),
                    hits,
                })
                .collect(),
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Image requests account for {:.1}% of all requests",
            self.image_percentage
        )?;
        writeln!(
            f,
            "The total size of all image requests equals {:.1} MB",
            self.image_megabytes
        )?;
        writeln!(
            f,
            "The most popular browser is: {}",
            self.most_popular_browser
        )?;
        writeln!(f)?;
        writeln!(f, "Hourly Log Report:")?;
        for HourlyHits { hour, hits } in &self.hourly_hits {
            writeln!(f, "Hour {hour:02} has {hits} hits")?;
        }
        Ok(())
    }
}
