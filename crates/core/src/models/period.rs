use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A named time window over which transactions are aggregated.
///
/// The UI sends period keys as strings (`week`, `month`, `3months`,
/// `year`, `all`); unrecognized keys fall back to `Month` at the
/// string boundary, so everything past it works with this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    #[serde(rename = "3months")]
    ThreeMonths,
    Year,
    All,
}

impl Period {
    /// Parse a period key as sent by the UI. Returns `None` for
    /// unrecognized keys — callers decide the fallback.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            "3months" => Some(Period::ThreeMonths),
            "year" => Some(Period::Year),
            "all" => Some(Period::All),
            _ => None,
        }
    }

    /// The wire key for this period.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::ThreeMonths => "3months",
            Period::Year => "year",
            Period::All => "all",
        }
    }

    /// Display label shown on chart headers (e.g., "Last 30 days").
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "Last 7 days",
            Period::Month => "Last 30 days",
            Period::ThreeMonths => "Last 3 months",
            Period::Year => "Last 12 months",
            Period::All => "All time",
        }
    }

    /// Concrete inclusive date window ending at `as_of`.
    /// `All` has no bounds and returns `None`.
    #[must_use]
    pub fn date_range(&self, as_of: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let start = match self {
            Period::Week => as_of - Duration::days(7),
            Period::Month => as_of
                .checked_sub_months(Months::new(1))
                .unwrap_or(NaiveDate::MIN),
            Period::ThreeMonths => as_of
                .checked_sub_months(Months::new(3))
                .unwrap_or(NaiveDate::MIN),
            Period::Year => as_of
                .checked_sub_months(Months::new(12))
                .unwrap_or(NaiveDate::MIN),
            Period::All => return None,
        };
        Some((start, as_of))
    }

    /// Infer the period from a concrete date window (the reverse of
    /// `date_range`). A window with a missing bound is `All`.
    #[must_use]
    pub fn infer(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let (start, end) = match (start, end) {
            (Some(s), Some(e)) => (s, e),
            _ => return Period::All,
        };

        let days = (end - start).num_days();
        if days <= 7 {
            Period::Week
        } else if days <= 35 {
            Period::Month
        } else if days <= 100 {
            Period::ThreeMonths
        } else if days <= 370 {
            Period::Year
        } else {
            Period::All
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
