//! Calendar / Julian-day time scale used by the ephemeris.
//!
//! [`TimeEpoch`] is an immutable value type pairing a Julian Day with its calendar
//! decomposition. Conversions use the classical astronomical day-number algorithm:
//! the Gregorian leap-year correction is applied for years after 1582 and the
//! proleptic Julian calendar before, so historical dates keep their conventional
//! day numbers. Round-tripping is exercised over 1600–2200, the range the orbit
//! display is documented for.

use crate::constants::{
    JulianDay, DAYS_PER_CENTURY, DAYS_PER_YEAR, JD1900, JD2000, JD_SERIES_EPOCH,
};
use crate::errors::OrreryError;

/// Direction of a calendar step, used by the transport controls of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[inline]
    fn signum(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// A calendar-valued span of time.
///
/// The year and month components step the calendar (a month is a calendar month,
/// not 30.44 days); the remaining components are exact Julian-day offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSpan {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: f64,
}

impl TimeSpan {
    pub const fn new(years: i32, months: i32, days: i32, hours: i32, minutes: i32, seconds: f64) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// The sub-month part of the span expressed in days.
    #[inline]
    fn fractional_days(&self) -> f64 {
        self.days as f64
            + self.hours as f64 / 24.0
            + self.minutes as f64 / 1440.0
            + self.seconds / 86400.0
    }
}

impl std::fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut wrote = false;
        for (value, unit) in [
            (self.years, "y"),
            (self.months, "mo"),
            (self.days, "d"),
            (self.hours, "h"),
            (self.minutes, "min"),
        ] {
            if value != 0 {
                if wrote {
                    write!(f, " ")?;
                }
                write!(f, "{value}{unit}")?;
                wrote = true;
            }
        }
        if self.seconds != 0.0 || !wrote {
            if wrote {
                write!(f, " ")?;
            }
            write!(f, "{}s", self.seconds)?;
        }
        Ok(())
    }
}

/// An epoch on the astronomical Julian-day scale with its calendar decomposition.
///
/// Immutable value type: every operation returns a new `TimeEpoch`. Equality
/// compares the Julian Day only.
#[derive(Debug, Clone, Copy)]
pub struct TimeEpoch {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    jd: JulianDay,
}

impl PartialEq for TimeEpoch {
    fn eq(&self, other: &Self) -> bool {
        self.jd == other.jd
    }
}

impl TimeEpoch {
    /// Build an epoch from a Julian Day.
    ///
    /// Non-finite input is rejected at this boundary rather than letting NaN
    /// flow into downstream trigonometry.
    pub fn from_jd(jd: JulianDay) -> Result<Self, OrreryError> {
        if !jd.is_finite() {
            return Err(OrreryError::NonFiniteInput("julian day"));
        }
        Ok(Self::from_jd_unchecked(jd))
    }

    fn from_jd_unchecked(jd: JulianDay) -> Self {
        let (year, month, day_frac) = jd_to_ymd(jd);
        let day = day_frac.trunc();
        // decompose at microsecond resolution so exact clock times survive the
        // trip through the fractional day
        let mut secs = ((day_frac - day) * 86400.0 * 1e6).round() / 1e6;
        if secs >= 86400.0 {
            secs = 86399.999999;
        }
        let hour = (secs / 3600.0).trunc();
        let minute = ((secs - hour * 3600.0) / 60.0).trunc();
        let second = secs - hour * 3600.0 - minute * 60.0;
        Self {
            year,
            month,
            day: day as u32,
            hour: hour as u32,
            minute: minute as u32,
            second,
            jd,
        }
    }

    /// Build an epoch from a calendar date with a fractional day
    /// (e.g. `day_fraction = 15.5` for noon on the 15th).
    pub fn from_ymd(year: i32, month: u32, day_fraction: f64) -> Result<Self, OrreryError> {
        if !day_fraction.is_finite() {
            return Err(OrreryError::NonFiniteInput("day fraction"));
        }
        if !(1..=12).contains(&month) {
            return Err(OrreryError::InvalidDate(format!("month {month} out of range")));
        }
        Ok(Self::from_jd_unchecked(ymd_to_jd(year, month, day_fraction)))
    }

    /// Build an epoch from full calendar components.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, OrreryError> {
        if !second.is_finite() {
            return Err(OrreryError::NonFiniteInput("seconds"));
        }
        let day_fraction =
            day as f64 + hour as f64 / 24.0 + minute as f64 / 1440.0 + second / 86400.0;
        Self::from_ymd(year, month, day_fraction)
    }

    /// Step the epoch by a calendar span.
    ///
    /// Year and month components move through the calendar first (the day of
    /// month is clamped to the target month's length, so one month after
    /// January 31 is February 28/29); day and sub-day components are then
    /// applied as an exact Julian-day offset.
    pub fn advance(&self, span: &TimeSpan, direction: Direction) -> TimeEpoch {
        let sign = direction.signum();
        let mut year = self.year + sign * span.years;
        let mut month = self.month as i32 + sign * span.months;
        while month < 1 {
            month += 12;
            year -= 1;
        }
        while month > 12 {
            month -= 12;
            year += 1;
        }
        let month = month as u32;
        let day = self.day.min(days_in_month(year, month));

        let day_fraction = day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86400.0;
        let jd = ymd_to_jd(year, month, day_fraction) + sign as f64 * span.fractional_days();
        Self::from_jd_unchecked(jd)
    }

    #[inline]
    pub fn julian_day(&self) -> JulianDay {
        self.jd
    }

    /// Julian centuries elapsed since J2000.0.
    #[inline]
    pub fn century_fraction(&self) -> f64 {
        (self.jd - JD2000) / DAYS_PER_CENTURY
    }

    /// Julian centuries elapsed since 1900 January 0.5, the argument of the
    /// classical mean-element polynomials.
    #[inline]
    pub fn century_fraction_1900(&self) -> f64 {
        (self.jd - JD1900) / DAYS_PER_CENTURY
    }

    /// Julian years elapsed since the periodic-series origin (1974-12-31.0 ET).
    #[inline]
    pub(crate) fn series_years(&self) -> f64 {
        (self.jd - JD_SERIES_EPOCH) / DAYS_PER_YEAR
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.minute
    }

    #[inline]
    pub fn second(&self) -> f64 {
        self.second
    }
}

impl std::fmt::Display for TimeEpoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:04.1}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Calendar date with fractional day → Julian Day.
///
/// Gregorian leap rule after 1582, proleptic Julian before.
fn ymd_to_jd(year: i32, month: u32, day_fraction: f64) -> JulianDay {
    let (y, m) = if month < 3 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let mut jd =
        (365.25 * y).floor() + (30.59 * (m as f64 - 2.0)).floor() + day_fraction + 1721086.5;
    if y > 1582.0 {
        jd += (y / 400.0).floor() - (y / 100.0).floor() + 2.0;
    }
    jd
}

/// Julian Day → calendar date with fractional day (inverse of [`ymd_to_jd`]).
fn jd_to_ymd(jd: JulianDay) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    // Dates on or after 1582-10-15 fall in the Gregorian calendar
    let a = if z >= 2299161.0 {
        let alpha = ((z - 1867216.25) / 36524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    } else {
        z
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_fraction = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_fraction)
}

/// Number of days in a calendar month, consistent with [`ymd_to_jd`]'s leap rule.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    (ymd_to_jd(next_year, next_month, 1.0) - ymd_to_jd(year, month, 1.0)) as u32
}
