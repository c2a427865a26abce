use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Period of the countdown refresh, in milliseconds
pub const TICK_MILLIS: u32 = 1_000;

/// Time left until the event, broken into display units
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRemaining {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Decompose `target - now`. Anything at or past the target is all zeros.
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let difference = (target - now).num_milliseconds();
        if difference <= 0 {
            return Self::ZERO;
        }

        Self {
            days: (difference / MS_PER_DAY) as u32,
            hours: ((difference / MS_PER_HOUR) % 24) as u32,
            minutes: ((difference / MS_PER_MINUTE) % 60) as u32,
            seconds: ((difference / MS_PER_SECOND) % 60) as u32,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Labelled units in display order
    pub fn units(&self) -> [(&'static str, u32); 4] {
        [
            ("Days", self.days),
            ("Hours", self.hours),
            ("Minutes", self.minutes),
            ("Seconds", self.seconds),
        ]
    }
}

/// Two digit rendering used by the timer (`7` -> `07`)
pub fn pad_unit(value: u32) -> String {
    format!("{:02}", value)
}

/// Countdown towards a fixed instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn remaining_at(&self, now: DateTime<Utc>) -> TimeRemaining {
        TimeRemaining::between(self.target, now)
    }

    pub fn is_finished(&self, now: DateTime<Utc>) -> bool {
        now >= self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 13, 23, 0, 0).unwrap()
    }

    #[test]
    fn test_exact_decomposition() {
        let now = target()
            - (Duration::days(3)
                + Duration::hours(4)
                + Duration::minutes(5)
                + Duration::seconds(6)
                + Duration::milliseconds(999));

        let remaining = TimeRemaining::between(target(), now);
        assert_eq!(
            remaining,
            TimeRemaining { days: 3, hours: 4, minutes: 5, seconds: 6 }
        );
    }

    #[test]
    fn test_sub_second_truncates_to_zero() {
        let now = target() - Duration::milliseconds(999);
        assert_eq!(TimeRemaining::between(target(), now), TimeRemaining::ZERO);
    }

    #[test]
    fn test_past_target_is_zero() {
        let countdown = Countdown::new(target());

        assert!(countdown.remaining_at(target()).is_zero());
        assert!(countdown.remaining_at(target() + Duration::days(400)).is_zero());
        assert!(countdown.is_finished(target()));
        assert!(!countdown.is_finished(target() - Duration::seconds(1)));
    }

    #[test]
    fn test_long_horizon() {
        let now = target() - Duration::days(120) - Duration::hours(23);
        let remaining = TimeRemaining::between(target(), now);
        assert_eq!(remaining.days, 120);
        assert_eq!(remaining.hours, 23);
        assert_eq!(remaining.minutes, 0);
        assert_eq!(remaining.seconds, 0);
    }

    #[test]
    fn test_units_and_padding() {
        let remaining = TimeRemaining { days: 12, hours: 7, minutes: 0, seconds: 59 };
        let rendered: Vec<(&str, String)> = remaining
            .units()
            .iter()
            .map(|(label, value)| (*label, pad_unit(*value)))
            .collect();

        assert_eq!(
            rendered,
            vec![
                ("Days", "12".to_string()),
                ("Hours", "07".to_string()),
                ("Minutes", "00".to_string()),
                ("Seconds", "59".to_string()),
            ]
        );
    }
}
