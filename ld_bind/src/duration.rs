//! ISO 8601 / `xsd:duration` values.

use std::fmt;
use std::str::FromStr;

use crate::error::BindError;

/// A duration as written, component by component.
///
/// Years and months have no fixed length, so components are kept apart
/// instead of being folded into a number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Duration {
    pub negative: bool,
    pub years: u64,
    pub months: u64,
    pub weeks: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

impl Duration {
    pub fn parse(text: &str) -> Option<Duration> {
        let (negative, rest) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let rest = rest.strip_prefix('P')?;
        let (date, time) = match rest.split_once('T') {
            Some((date, time)) => {
                if time.is_empty() {
                    return None;
                }
                (date, Some(time))
            }
            None => (rest, None),
        };

        let mut duration = Duration {
            negative,
            ..Duration::default()
        };
        let mut seen = false;

        let mut order = 0;
        for (number, designator) in components(date)? {
            let (slot, rank) = match designator {
                'Y' => (&mut duration.years, 1),
                'M' => (&mut duration.months, 2),
                'W' => (&mut duration.weeks, 3),
                'D' => (&mut duration.days, 4),
                _ => return None,
            };
            if rank <= order {
                return None;
            }
            order = rank;
            *slot = number.parse().ok()?;
            seen = true;
        }

        if let Some(time) = time {
            let mut order = 0;
            for (number, designator) in components(time)? {
                let rank = match designator {
                    'H' => 1,
                    'M' => 2,
                    'S' => 3,
                    _ => return None,
                };
                if rank <= order {
                    return None;
                }
                order = rank;
                match designator {
                    'H' => duration.hours = number.parse().ok()?,
                    'M' => duration.minutes = number.parse().ok()?,
                    _ => duration.seconds = parse_seconds(number)?,
                }
                seen = true;
            }
        }

        seen.then_some(duration)
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0.0
    }

    /// Exact length, available when no calendar component is set.
    pub fn to_chrono(&self) -> Option<chrono::Duration> {
        if self.years != 0 || self.months != 0 {
            return None;
        }
        let whole = self.weeks.checked_mul(7 * 86_400)?
            .checked_add(self.days.checked_mul(86_400)?)?
            .checked_add(self.hours.checked_mul(3_600)?)?
            .checked_add(self.minutes.checked_mul(60)?)?;
        let millis = (self.seconds * 1_000.0).round();
        if !millis.is_finite() {
            return None;
        }
        let total = chrono::Duration::try_seconds(i64::try_from(whole).ok()?)?
            .checked_add(&chrono::Duration::try_milliseconds(millis as i64)?)?;
        Some(if self.negative { -total } else { total })
    }
}

/// Split `12Y3M` into `[("12", 'Y'), ("3", 'M')]`.
fn components(text: &str) -> Option<Vec<(&str, char)>> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            continue;
        }
        let number = &text[start..i];
        if number.is_empty() {
            return None;
        }
        out.push((number, c));
        start = i + c.len_utf8();
    }
    if start != text.len() {
        return None;
    }
    Some(out)
}

fn parse_seconds(number: &str) -> Option<f64> {
    if number.starts_with('.') || number.ends_with('.') {
        return None;
    }
    let seconds: f64 = number.parse().ok()?;
    (seconds.is_finite() && seconds >= 0.0).then_some(seconds)
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        if self.is_zero() {
            return f.write_str("T0S");
        }
        for (value, designator) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value != 0 {
                write!(f, "{}{}", value, designator)?;
            }
        }
        if self.hours != 0 || self.minutes != 0 || self.seconds != 0.0 {
            f.write_str("T")?;
            if self.hours != 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes != 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds != 0.0 {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Duration::parse(s).ok_or_else(|| BindError::InvalidLiteral {
            kind: "duration",
            text: s.to_string(),
        })
    }
}
