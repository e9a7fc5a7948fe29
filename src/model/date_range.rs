use super::error::StatsError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Inclusive range of play dates. A missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeFilter {
    pub from_date: Option<DateTime<FixedOffset>>,
    pub to_date: Option<DateTime<FixedOffset>>
}

impl DateRangeFilter {
    pub fn new(
        from_date: Option<DateTime<FixedOffset>>,
        to_date: Option<DateTime<FixedOffset>>
    ) -> Result<DateRangeFilter, StatsError> {
        if let (Some(from), Some(to)) = (from_date, to_date) {
            if to < from {
                return Err(StatsError::InvalidRange { from, to });
            }
        }

        Ok(DateRangeFilter { from_date, to_date })
    }

    pub fn all_time() -> DateRangeFilter {
        DateRangeFilter::default()
    }

    pub fn contains(&self, date: &DateTime<FixedOffset>) -> bool {
        self.from_date.map_or(true, |from| *date >= from) && self.to_date.map_or(true, |to| *date <= to)
    }
}
