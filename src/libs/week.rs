//! Week boundary arithmetic in a configured timezone.
//!
//! A [`WeekCalendar`] pairs an IANA timezone with a week-start convention
//! (Sunday-first, Monday-first, or any other weekday) and answers "which week
//! does this day belong to" questions. The boundaries are a pure function of
//! that pair: two calendars with different week-start days legitimately
//! disagree about where the "same" week begins.
//!
//! ## Day Interpretation
//!
//! Anything implementing [`CalendarDay`] can be used as a reference day:
//!
//! - **`NaiveDate` / `NaiveDateTime`**: zone-less values are taken to be
//!   wall-clock values in the calendar's timezone already.
//! - **`DateTime<Z>`**: zoned instants are converted into the calendar's
//!   timezone before their calendar day is taken.
//!
//! ## Boundaries
//!
//! - **Week start**: local `00:00:00.000` of the first day of the week.
//! - **Week end**: local `23:59:59.999` of the sixth day after it.
//!
//! When a local boundary time does not exist (a DST gap, or a skipped
//! calendar day), the first valid instant after it is used for starts and the
//! last valid instant before the next day for ends. Ambiguous local times
//! resolve to the earliest candidate for starts and the latest for ends.
//!
//! "Now" is never read from the system inside this module. Callers pass a
//! [`Clock`], which keeps the arithmetic deterministic under test.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use chrono_tz::Asia::Taipei;
//! use tally::libs::week::WeekCalendar;
//!
//! let calendar = WeekCalendar::new(Taipei, Weekday::Sun);
//! let thursday = NaiveDate::from_ymd_opt(2025, 6, 26).unwrap();
//!
//! let start = calendar.week_start(&thursday);
//! assert_eq!(start.format("%Y-%m-%d %H:%M:%S").to_string(), "2025-06-22 00:00:00");
//!
//! let end = calendar.week_end(&thursday);
//! assert_eq!(end.format("%Y-%m-%d %H:%M:%S%.3f").to_string(), "2025-06-28 23:59:59.999");
//! ```

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A value that names a calendar day in a given timezone.
pub trait CalendarDay {
    fn calendar_day(&self, timezone: &Tz) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self, _timezone: &Tz) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self, _timezone: &Tz) -> NaiveDate {
        self.date()
    }
}

impl<Z: TimeZone> CalendarDay for DateTime<Z> {
    fn calendar_day(&self, timezone: &Tz) -> NaiveDate {
        self.with_timezone(timezone).date_naive()
    }
}

/// Maps a settings index (0 = Sunday … 6 = Saturday) to a weekday.
pub fn week_start_day_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Parses an IANA timezone name such as `Asia/Taipei`.
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.trim().parse::<Tz>().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCalendar {
    timezone: Tz,
    week_start: Weekday,
}

impl WeekCalendar {
    pub fn new(timezone: Tz, week_start: Weekday) -> Self {
        Self { timezone, week_start }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn week_start_day(&self) -> Weekday {
        self.week_start
    }

    /// The calendar day `day` falls on in this calendar's timezone.
    pub fn local_date<D: CalendarDay + ?Sized>(&self, day: &D) -> NaiveDate {
        day.calendar_day(&self.timezone)
    }

    /// Today's date in this calendar's timezone.
    pub fn today(&self, clock: &dyn Clock) -> NaiveDate {
        self.local_date(&clock.now())
    }

    /// First calendar day of the week containing `day`.
    pub fn first_day<D: CalendarDay + ?Sized>(&self, day: &D) -> NaiveDate {
        let date = self.local_date(day);
        let offset = (7 + date.weekday().num_days_from_sunday() - self.week_start.num_days_from_sunday()) % 7;
        date.checked_sub_days(Days::new(u64::from(offset))).unwrap_or(NaiveDate::MIN)
    }

    /// Start of the first day of the week containing `day`.
    pub fn week_start<D: CalendarDay + ?Sized>(&self, day: &D) -> DateTime<Tz> {
        self.start_of_day(self.first_day(day))
    }

    /// End of the last day of the week containing `day`.
    pub fn week_end<D: CalendarDay + ?Sized>(&self, day: &D) -> DateTime<Tz> {
        let last = self.first_day(day).checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
        self.end_of_day(last)
    }

    /// Returns `true` if both days fall in the same week.
    pub fn is_same_week<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: CalendarDay + ?Sized,
        B: CalendarDay + ?Sized,
    {
        self.first_day(a) == self.first_day(b)
    }

    /// The seven calendar days of the week containing `day`, ascending.
    pub fn week_dates<D: CalendarDay + ?Sized>(&self, day: &D) -> [NaiveDate; 7] {
        let first = self.first_day(day);
        std::array::from_fn(|offset| first.checked_add_days(Days::new(offset as u64)).unwrap_or(NaiveDate::MAX))
    }

    /// Boundaries of the week containing the clock's current instant.
    pub fn current_week(&self, clock: &dyn Clock) -> (DateTime<Tz>, DateTime<Tz>) {
        let now = clock.now();
        (self.week_start(&now), self.week_end(&now))
    }

    /// First instant of `date` in this calendar's timezone.
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Tz> {
        let midnight = date.and_time(NaiveTime::MIN);
        // DST gaps are at most a few hours; a skipped calendar day is a full 24.
        let mut candidate = midnight;
        for _ in 0..=(48 * 4) {
            if let Some(instant) = self.timezone.from_local_datetime(&candidate).earliest() {
                return instant;
            }
            candidate += Duration::minutes(15);
        }
        self.timezone.from_utc_datetime(&midnight)
    }

    /// Last millisecond of `date` in this calendar's timezone.
    pub fn end_of_day(&self, date: NaiveDate) -> DateTime<Tz> {
        let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("23:59:59.999 is a valid time");
        match self.timezone.from_local_datetime(&date.and_time(last_milli)).latest() {
            Some(instant) => instant,
            None => {
                let next = date.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX);
                self.start_of_day(next) - Duration::milliseconds(1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::Sao_Paulo;

    #[test]
    fn test_week_start_day_index_round_trip() {
        for index in 0..7 {
            let weekday = week_start_day_from_index(index).unwrap();
            assert_eq!(weekday.num_days_from_sunday(), u32::from(index));
        }
        assert_eq!(week_start_day_from_index(7), None);
    }

    #[test]
    fn test_start_of_day_inside_dst_gap() {
        // Brazil started DST at local midnight on 2018-11-04.
        let calendar = WeekCalendar::new(Sao_Paulo, Weekday::Sun);
        let date = NaiveDate::from_ymd_opt(2018, 11, 4).unwrap();
        let start = calendar.start_of_day(date);
        assert_eq!(start.date_naive(), date);
        assert_eq!(start.format("%H:%M").to_string(), "01:00");
    }
}
