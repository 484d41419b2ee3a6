use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use derive_more::Display;
use regex::Regex;

/// Request paths ending in one of the common raster formats, any casing.
pub const IMAGE_PATTERN: &str = r"(?i)\.(jpg|gif|png)$";

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{_0:02}")]
pub struct Hour(u8);

impl Hour {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl From<NaiveDateTime> for Hour {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.hour() as u8)
    }
}

#[derive(Debug, Clone)]
pub struct ImagePattern(Regex);

impl ImagePattern {
    pub fn matches(&self, path: &str) -> bool {
        self.0.is_match(path)
    }
}

impl Default for ImagePattern {
    fn default() -> Self {
        IMAGE_PATTERN.parse().expect("default pattern is valid")
    }
}

impl FromStr for ImagePattern {
    type Err = regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Regex::new(s).map(Self)
    }
}
