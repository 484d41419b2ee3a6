use std::collections::{BTreeMap, HashMap};

use derive_more::Display;

use crate::{
    invariants::{Hour, ImagePattern},
    models::LogRecord,
};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Firefox,
    Chrome,
    Safari,
    #[display("Internet Explorer")]
    InternetExplorer,
    Other,
}

impl Browser {
    /// First matching rule wins. Chrome is tested before Safari, so a user
    /// agent advertising both counts as Chrome.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains("Firefox") {
            Self::Firefox
        } else if user_agent.contains("Chrome") {
            Self::Chrome
        } else if user_agent.contains("Safari") && !user_agent.contains("Chrome") {
            Self::Safari
        } else if user_agent.contains("MSIE") || user_agent.contains("Trident") {
            Self::InternetExplorer
        } else {
            Self::Other
        }
    }
}

/// Accumulator for one pass over the log. Owned by the pass, folded once
/// per row, read out at the end.
#[derive(Debug, Default)]
pub struct Summary {
    total_requests: u64,
    image_requests: u64,
    image_bytes: u64,
    browsers: HashMap<Browser, u64>,
    statuses: BTreeMap<String, u64>,
    by_hour: HashMap<Hour, u64>,
}

impl Summary {
    pub fn record(&mut self, record: &LogRecord, images: &ImagePattern) {
        self.total_requests += 1;
        if images.matches(&record.path) {
            self.image_requests += 1;
            self.image_bytes += record.bytes;
        }
        let browser = Browser::from_user_agent(&record.user_agent);
        *self.browsers.entry(browser).or_default() += 1;
        *self.statuses.entry(record.status.clone()).or_default() += 1;
        *self.by_hour.entry(record.timestamp.into()).or_default() += 1;
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    pub fn image_requests(&self) -> u64 {
        self.image_requests
    }

    pub fn image_bytes(&self) -> u64 {
        self.image_bytes
    }

    /// Share of image requests over all requests, `None` before any row
    /// was recorded.
    pub fn image_percentage(&self) -> Option<f64> {
        (self.total_requests > 0)
            .then(|| self.image_requests as f64 / self.total_requests as f64 * 100.0)
    }

    /// Highest hit count wins; ties go to the lexicographically smaller
    /// label so repeated runs agree.
    pub fn most_popular_browser(&self) -> Option<Browser> {
        let mut entries: Vec<_> = self.browsers.iter().map(|(b, c)| (*b, *c)).collect();
        entries.sort_unstable_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| a.0.to_string().cmp(&b.0.to_string()))
        });
        entries.first().map(|(browser, _)| *browser)
    }

    pub fn browser_counts(&self) -> BTreeMap<String, u64> {
        self.browsers
            .iter()
            .map(|(browser, count)| (browser.to_string(), *count))
            .collect()
    }

    pub fn status_counts(&self) -> &BTreeMap<String, u64> {
        &self.statuses
    }

    /// Hits per hour of day, ascending, observed hours only.
    pub fn hourly_hits(&self) -> Vec<(Hour, u64)> {
        let mut hits: Vec<_> = self.by_hour.iter().map(|(h, c)| (*h, *c)).collect();
        hits.sort_unstable_by_key(|(hour, _)| *hour);
        hits
    }
}
