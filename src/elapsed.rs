//! Japanese relative durations ("3分", "2時間", ...)
//!
//! Follows the threshold table of the day.js `relativeTime` plugin with the
//! `ja` locale, without a suffix. Each step compares the rounded amount in
//! its unit against a limit; an amount of 1 falls back to the singular label
//! of the previous step.

use chrono::{DateTime, Utc};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
/// Mean Gregorian month
const DAYS_PER_MONTH: f64 = 365.2425 / 12.0;

#[derive(Clone, Copy)]
enum Label {
    Seconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Month,
    Months,
    Year,
    Years,
}

impl Label {
    fn render(self, amount: i64) -> String {
        match self {
            Label::Seconds => "数秒".to_string(),
            Label::Minute => "1分".to_string(),
            Label::Minutes => format!("{amount}分"),
            Label::Hour => "1時間".to_string(),
            Label::Hours => format!("{amount}時間"),
            Label::Day => "1日".to_string(),
            Label::Days => format!("{amount}日"),
            Label::Month => "1ヶ月".to_string(),
            Label::Months => format!("{amount}ヶ月"),
            Label::Year => "1年".to_string(),
            Label::Years => format!("{amount}年"),
        }
    }
}

/// Unit an amount is measured in
#[derive(Clone, Copy)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    fn of(self, seconds: f64) -> f64 {
        match self {
            Unit::Second => seconds,
            Unit::Minute => seconds / SECONDS_PER_MINUTE,
            Unit::Hour => seconds / SECONDS_PER_HOUR,
            Unit::Day => seconds / SECONDS_PER_DAY,
            Unit::Month => seconds / SECONDS_PER_DAY / DAYS_PER_MONTH,
            Unit::Year => seconds / SECONDS_PER_DAY / DAYS_PER_MONTH / 12.0,
        }
    }
}

/// (label, unit switched to at this step, inclusive limit)
const THRESHOLDS: [(Label, Option<Unit>, Option<i64>); 11] = [
    (Label::Seconds, Some(Unit::Second), Some(44)),
    (Label::Minute, None, Some(89)),
    (Label::Minutes, Some(Unit::Minute), Some(44)),
    (Label::Hour, None, Some(89)),
    (Label::Hours, Some(Unit::Hour), Some(21)),
    (Label::Day, None, Some(35)),
    (Label::Days, Some(Unit::Day), Some(25)),
    (Label::Month, None, Some(45)),
    (Label::Months, Some(Unit::Month), Some(10)),
    (Label::Year, None, Some(17)),
    (Label::Years, Some(Unit::Year), None),
];

/// Human-readable span between two instants, order-insensitive
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn humanize(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let seconds = (to - from).num_milliseconds().abs() as f64 / 1_000.0;

    let mut amount = 0_i64;
    for (i, (label, unit, limit)) in THRESHOLDS.iter().enumerate() {
        if let Some(unit) = unit {
            amount = unit.of(seconds).round() as i64;
        }
        if limit.map_or(true, |limit| amount <= limit) {
            let label = if amount <= 1 && i > 0 {
                THRESHOLDS[i - 1].0
            } else {
                *label
            };
            return label.render(amount);
        }
    }

    Label::Years.render(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn span(d: Duration) -> String {
        let t0 = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        humanize(t0, t0 + d)
    }

    #[test]
    fn test_seconds() {
        assert_eq!(span(Duration::seconds(0)), "数秒");
        assert_eq!(span(Duration::seconds(44)), "数秒");
        assert_eq!(span(Duration::seconds(45)), "1分");
        assert_eq!(span(Duration::seconds(89)), "1分");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(span(Duration::seconds(90)), "2分");
        assert_eq!(span(Duration::minutes(3)), "3分");
        assert_eq!(span(Duration::minutes(44)), "44分");
        assert_eq!(span(Duration::minutes(45)), "1時間");
        assert_eq!(span(Duration::minutes(89)), "1時間");
    }

    #[test]
    fn test_hours_and_days() {
        assert_eq!(span(Duration::minutes(90)), "2時間");
        assert_eq!(span(Duration::hours(21)), "21時間");
        assert_eq!(span(Duration::hours(22)), "1日");
        assert_eq!(span(Duration::hours(36)), "2日");
        assert_eq!(span(Duration::days(25)), "25日");
    }

    #[test]
    fn test_months_and_years() {
        assert_eq!(span(Duration::days(26)), "1ヶ月");
        assert_eq!(span(Duration::days(60)), "2ヶ月");
        assert_eq!(span(Duration::days(400)), "1年");
        assert_eq!(span(Duration::days(365 * 3)), "3年");
    }

    #[test]
    fn test_order_insensitive() {
        let t0 = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let t1 = t0 + Duration::minutes(10);
        assert_eq!(humanize(t1, t0), "10分");
    }
}
