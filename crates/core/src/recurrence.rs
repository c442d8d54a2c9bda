//! Repeat rules and next-occurrence projection for recurring todos.
//!
//! Completing a todo that carries a repeat rule spawns a successor whose
//! due and reminder dates are projected forward by [`next_occurrence`].
//! The projection is a pure function; the repository layer decides when
//! to call it.

use chrono::{Datelike, Duration, Months, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// How a completed todo's dates are projected onto its successor.
///
/// Serialized as a lowercase string; the non-recurring case is the empty
/// string, matching the stored `repeat` column. Unknown values decode as
/// non-recurring rather than failing the row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RepeatRule {
    /// Non-recurring. The empty string on the wire and in storage.
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    /// Daily, skipping Saturday and Sunday.
    Weekdays,
}

impl RepeatRule {
    pub fn as_str(self) -> &'static str {
        match self {
            RepeatRule::None => "",
            RepeatRule::Daily => "daily",
            RepeatRule::Weekly => "weekly",
            RepeatRule::Monthly => "monthly",
            RepeatRule::Weekdays => "weekdays",
        }
    }

    /// Whether completing a todo with this rule spawns a successor.
    pub fn is_recurring(self) -> bool {
        !matches!(self, RepeatRule::None)
    }
}

impl From<&str> for RepeatRule {
    fn from(s: &str) -> Self {
        match s {
            "daily" => RepeatRule::Daily,
            "weekly" => RepeatRule::Weekly,
            "monthly" => RepeatRule::Monthly,
            "weekdays" => RepeatRule::Weekdays,
            _ => RepeatRule::None,
        }
    }
}

impl From<String> for RepeatRule {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<RepeatRule> for String {
    fn from(rule: RepeatRule) -> Self {
        rule.as_str().to_owned()
    }
}

/// Project a timestamp forward by one occurrence of `rule`.
///
/// `None` in means `None` out: a todo with no date gets no date on its
/// successor. `monthly` is calendar-aware (Jan 31 -> Feb 28/29, via
/// [`chrono::Months`]), not a fixed 30-day shift. A non-recurring rule
/// applies no shift; callers guard on [`RepeatRule::is_recurring`].
pub fn next_occurrence(current: Option<Timestamp>, rule: RepeatRule) -> Option<Timestamp> {
    let ts = current?;
    let next = match rule {
        RepeatRule::None => ts,
        RepeatRule::Daily => ts + Duration::days(1),
        RepeatRule::Weekly => ts + Duration::days(7),
        RepeatRule::Monthly => ts.checked_add_months(Months::new(1))?,
        RepeatRule::Weekdays => {
            let mut next = ts + Duration::days(1);
            while matches!(next.weekday(), Weekday::Sat | Weekday::Sun) {
                next += Duration::days(1);
            }
            next
        }
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()
    }

    #[test]
    fn daily_adds_one_day() {
        assert_eq!(
            next_occurrence(Some(ts(2024, 3, 14)), RepeatRule::Daily),
            Some(ts(2024, 3, 15))
        );
    }

    #[test]
    fn weekly_adds_seven_days() {
        assert_eq!(
            next_occurrence(Some(ts(2024, 3, 14)), RepeatRule::Weekly),
            Some(ts(2024, 3, 21))
        );
    }

    #[test]
    fn monthly_is_calendar_aware() {
        assert_eq!(
            next_occurrence(Some(ts(2024, 3, 14)), RepeatRule::Monthly),
            Some(ts(2024, 4, 14))
        );
        // Jan 31 clamps to the end of February, leap year included.
        assert_eq!(
            next_occurrence(Some(ts(2024, 1, 31)), RepeatRule::Monthly),
            Some(ts(2024, 2, 29))
        );
        assert_eq!(
            next_occurrence(Some(ts(2023, 1, 31)), RepeatRule::Monthly),
            Some(ts(2023, 2, 28))
        );
    }

    #[test]
    fn monthly_crosses_year_boundary() {
        assert_eq!(
            next_occurrence(Some(ts(2024, 12, 15)), RepeatRule::Monthly),
            Some(ts(2025, 1, 15))
        );
    }

    #[test]
    fn weekdays_friday_lands_on_monday() {
        // 2024-03-15 is a Friday.
        assert_eq!(
            next_occurrence(Some(ts(2024, 3, 15)), RepeatRule::Weekdays),
            Some(ts(2024, 3, 18))
        );
    }

    #[test]
    fn weekdays_saturday_lands_on_monday() {
        // 2024-03-16 is a Saturday.
        assert_eq!(
            next_occurrence(Some(ts(2024, 3, 16)), RepeatRule::Weekdays),
            Some(ts(2024, 3, 18))
        );
    }

    #[test]
    fn weekdays_midweek_is_plain_daily() {
        // 2024-03-12 is a Tuesday.
        assert_eq!(
            next_occurrence(Some(ts(2024, 3, 12)), RepeatRule::Weekdays),
            Some(ts(2024, 3, 13))
        );
    }

    #[test]
    fn absent_timestamp_stays_absent() {
        for rule in [
            RepeatRule::Daily,
            RepeatRule::Weekly,
            RepeatRule::Monthly,
            RepeatRule::Weekdays,
        ] {
            assert_eq!(next_occurrence(None, rule), None);
        }
    }

    #[test]
    fn recurring_rules_move_strictly_forward() {
        // Every day of a couple of weeks, every recurring rule: the
        // result is strictly later than the input.
        for day in 1..=14 {
            let t = ts(2024, 7, day);
            for rule in [
                RepeatRule::Daily,
                RepeatRule::Weekly,
                RepeatRule::Monthly,
                RepeatRule::Weekdays,
            ] {
                let next = next_occurrence(Some(t), rule).unwrap();
                assert!(next > t, "{rule:?} from day {day} did not advance");
            }
        }
    }

    #[test]
    fn weekdays_always_lands_mon_to_fri_within_three_days() {
        for day in 1..=31 {
            let t = ts(2024, 7, day);
            let next = next_occurrence(Some(t), RepeatRule::Weekdays).unwrap();
            assert!(!matches!(next.weekday(), Weekday::Sat | Weekday::Sun));
            assert!(next <= t + Duration::days(3));
        }
    }

    #[test]
    fn rule_round_trips_through_strings() {
        for (rule, s) in [
            (RepeatRule::None, ""),
            (RepeatRule::Daily, "daily"),
            (RepeatRule::Weekly, "weekly"),
            (RepeatRule::Monthly, "monthly"),
            (RepeatRule::Weekdays, "weekdays"),
        ] {
            assert_eq!(rule.as_str(), s);
            assert_eq!(RepeatRule::from(s), rule);
        }
        // Unknown values are tolerated as non-recurring.
        assert_eq!(RepeatRule::from("fortnightly"), RepeatRule::None);
    }
}
