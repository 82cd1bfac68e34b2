//! Time-bucketed trend helpers
//!
//! Buckets follow Postgres `DATE_TRUNC` semantics evaluated in UTC: months
//! start on the 1st, weeks start on Monday.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};

use super::store::TimeBucket;
use crate::constants::statistics::{MONTHLY_TREND_MONTHS, WEEKLY_TREND_WEEKS};

/// Truncation granularity of a trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruncateUnit {
    Month,
    Week,
}

impl TruncateUnit {
    /// Field name understood by `DATE_TRUNC`
    pub fn sql_field(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Week => "week",
        }
    }

    /// First day of the bucket containing `instant`
    pub fn truncate(&self, instant: DateTime<Utc>) -> NaiveDate {
        let day = instant.date_naive();
        match self {
            Self::Month => day.with_day(1).unwrap_or(day),
            Self::Week => day - Duration::days(i64::from(day.weekday().num_days_from_monday())),
        }
    }

    /// Inclusive lower bound of the trailing window ending at `now`
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Month => now
                .checked_sub_months(Months::new(MONTHLY_TREND_MONTHS))
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            Self::Week => now - Duration::weeks(WEEKLY_TREND_WEEKS),
        }
    }

    /// Response key of a bucket: `YYYY-MM` for months, `YYYY-MM-DD` for weeks
    pub fn format_key(&self, bucket: NaiveDate) -> String {
        match self {
            Self::Month => bucket.format("%Y-%m").to_string(),
            Self::Week => bucket.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Group `(created_at, problem_id)` pairs at or after `since` into buckets,
/// ascending. Empty buckets are not produced.
pub fn bucket_by_truncation<I>(solutions: I, unit: TruncateUnit, since: DateTime<Utc>) -> Vec<TimeBucket>
where
    I: IntoIterator<Item = (DateTime<Utc>, i64)>,
{
    let mut buckets: BTreeMap<NaiveDate, (HashSet<i64>, i64)> = BTreeMap::new();

    for (created_at, problem_id) in solutions {
        if created_at < since {
            continue;
        }
        let entry = buckets.entry(unit.truncate(created_at)).or_default();
        entry.0.insert(problem_id);
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(bucket, (problems, total))| TimeBucket {
            bucket,
            distinct_problems: problems.len() as i64,
            total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 15, 30, 0).unwrap()
    }

    #[test]
    fn test_month_truncation() {
        let bucket = TruncateUnit::Month.truncate(at(2024, 3, 17));
        assert_eq!(bucket, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(TruncateUnit::Month.format_key(bucket), "2024-03");
    }

    #[test]
    fn test_week_truncation_starts_on_monday() {
        // 2024-03-17 is a Sunday
        let bucket = TruncateUnit::Week.truncate(at(2024, 3, 17));
        assert_eq!(bucket, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(TruncateUnit::Week.format_key(bucket), "2024-03-11");

        let monday = TruncateUnit::Week.truncate(at(2024, 3, 11));
        assert_eq!(monday, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
    }

    #[test]
    fn test_window_start() {
        let now = at(2024, 3, 31);
        assert_eq!(TruncateUnit::Month.window_start(now), at(2023, 3, 31));
        assert_eq!(TruncateUnit::Week.window_start(now), at(2024, 2, 4));

        // Month arithmetic clamps to the last valid day
        let leap = at(2024, 2, 29);
        assert_eq!(TruncateUnit::Month.window_start(leap), at(2023, 2, 28));
    }

    #[test]
    fn test_bucketing_counts_distinct_problems_and_skips_old_rows() {
        let since = at(2024, 1, 1);
        let rows = vec![
            (at(2023, 12, 31), 1),
            (at(2024, 1, 5), 1),
            (at(2024, 1, 20), 1),
            (at(2024, 1, 21), 2),
            (at(2024, 3, 2), 3),
        ];

        let buckets = bucket_by_truncation(rows, TruncateUnit::Month, since);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].bucket, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(buckets[0].distinct_problems, 2);
        assert_eq!(buckets[0].total, 3);
        // February has no solutions and does not appear
        assert_eq!(buckets[1].bucket, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(buckets[1].total, 1);
    }
}
