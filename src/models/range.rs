use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the active date range is derived from its anchor day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    Daily,
    Weekly,
    Monthly,
}

impl RangeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeMode::Daily => "daily",
            RangeMode::Weekly => "weekly",
            RangeMode::Monthly => "monthly",
        }
    }
}

/// Contiguous, inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub mode: RangeMode,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// One rendered grid column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateColumn {
    pub date: NaiveDate,
    pub label: String,
    pub weekend: bool,
}
