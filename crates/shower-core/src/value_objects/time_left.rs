//! Time remaining until the event, split into display units

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Whole days/hours/minutes/seconds left until a target instant
///
/// Never negative: once the target has passed every unit is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// All-zero value shown once the event has started
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Compute the time left from `now` until `target`
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let distance = (target - now).num_milliseconds();
        if distance <= 0 {
            return Self::ZERO;
        }
        Self {
            days: distance / MS_PER_DAY,
            hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Units paired with their labels, each value zero-padded to two digits
    pub fn units(&self) -> [(&'static str, String); 4] {
        [
            ("Días", format!("{:02}", self.days)),
            ("Horas", format!("{:02}", self.hours)),
            ("Minutos", format!("{:02}", self.minutes)),
            ("Segundos", format!("{:02}", self.seconds)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 31, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_decomposes_with_floor_division() {
        let now = target()
            - Duration::days(2)
            - Duration::hours(3)
            - Duration::minutes(4)
            - Duration::seconds(5)
            - Duration::milliseconds(900);
        let left = TimeLeft::until(target(), now);
        assert_eq!(
            left,
            TimeLeft {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
    }

    #[test]
    fn test_sub_second_remainder_floors_to_zero() {
        let now = target() - Duration::milliseconds(999);
        assert!(TimeLeft::until(target(), now).is_zero());
    }

    #[test]
    fn test_past_target_is_zero() {
        let now = target() + Duration::days(400);
        let left = TimeLeft::until(target(), now);
        assert_eq!(left, TimeLeft::ZERO);
        assert!(left.days >= 0 && left.hours >= 0 && left.minutes >= 0 && left.seconds >= 0);
    }

    #[test]
    fn test_exact_target_is_zero() {
        assert!(TimeLeft::until(target(), target()).is_zero());
    }

    #[test]
    fn test_units_are_padded() {
        let left = TimeLeft {
            days: 12,
            hours: 3,
            minutes: 0,
            seconds: 9,
        };
        let units = left.units();
        assert_eq!(units[0], ("Días", "12".to_string()));
        assert_eq!(units[1], ("Horas", "03".to_string()));
        assert_eq!(units[2], ("Minutos", "00".to_string()));
        assert_eq!(units[3], ("Segundos", "09".to_string()));
    }
}
