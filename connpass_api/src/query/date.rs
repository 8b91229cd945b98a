//! Date filters and their `ymd` / `ym` bucket encoding.

/// Which month values a [`EventDate`] may carry and still be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MonthRule {
    /// Months 1 through 11. December is dropped, matching the historical
    /// behavior of the connpass client libraries.
    #[default]
    Legacy,
    /// Months 1 through 12.
    Calendar,
}

impl MonthRule {
    fn accepts(self, month: u32) -> bool {
        match self {
            MonthRule::Legacy => (1..=11).contains(&month),
            MonthRule::Calendar => (1..=12).contains(&month),
        }
    }
}

/// A date filter: a whole month, or a single day when `day` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventDate {
    pub year: i32,
    pub month: u32,
    pub day: Option<u32>,
}

impl EventDate {
    /// A single day, sent in the `ymd` bucket.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day: Some(day),
        }
    }

    /// A whole month, sent in the `ym` bucket.
    pub fn ym(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            day: None,
        }
    }

    fn is_valid(&self, rule: MonthRule) -> bool {
        self.year > 0 && rule.accepts(self.month)
    }
}

/// Formatted `ymd` and `ym` buckets, in input order.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct DateBuckets {
    pub ymd: Vec<String>,
    pub ym: Vec<String>,
}

/// Splits dates into exact-day and year-month buckets, silently dropping
/// entries the rule rejects. A day of zero counts as absent.
pub(super) fn partition_dates(dates: &[EventDate], rule: MonthRule) -> DateBuckets {
    let mut buckets = DateBuckets::default();
    for date in dates.iter().filter(|d| d.is_valid(rule)) {
        match date.day {
            Some(day) if day > 0 => buckets
                .ymd
                .push(format!("{:04}{:02}{:02}", date.year, date.month, day)),
            _ => buckets.ym.push(format!("{:04}{:02}", date.year, date.month)),
        }
    }
    buckets
}
