use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::ZoomLevel;
use crate::error::{ChartError, ChartResult};

/// First hour shown in day view.
pub const DAY_VIEW_START_HOUR: u32 = 6;
/// Hour at which the day view ends (exclusive).
pub const DAY_VIEW_END_HOUR: u32 = 21;

/// Whether the domain end instant belongs to the visible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEnd {
    Exclusive,
    Inclusive,
}

/// Wall-clock date range shown on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDomain {
    start: NaiveDateTime,
    end: NaiveDateTime,
    end_bound: DomainEnd,
}

impl TimeDomain {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, end_bound: DomainEnd) -> ChartResult<Self> {
        if end <= start {
            return Err(ChartError::InvalidData(format!(
                "time domain end {end} must be after start {start}"
            )));
        }
        Ok(Self {
            start,
            end,
            end_bound,
        })
    }

    #[must_use]
    pub fn start(self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub fn end(self) -> NaiveDateTime {
        self.end
    }

    #[must_use]
    pub fn end_bound(self) -> DomainEnd {
        self.end_bound
    }

    #[must_use]
    pub fn span(self) -> Duration {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(self, instant: NaiveDateTime) -> bool {
        match self.end_bound {
            DomainEnd::Exclusive => self.start <= instant && instant < self.end,
            DomainEnd::Inclusive => self.start <= instant && instant <= self.end,
        }
    }

    /// Number of calendar days the domain touches.
    #[must_use]
    pub fn covered_days(self) -> i64 {
        let last_date = match self.end_bound {
            DomainEnd::Inclusive => self.end.date(),
            DomainEnd::Exclusive if self.end.time() == NaiveTime::MIN => {
                self.end.date().pred_opt().unwrap_or(self.end.date())
            }
            DomainEnd::Exclusive => self.end.date(),
        };
        (last_date - self.start.date()).num_days() + 1
    }
}

/// Computes the visible date range for `zoom` around `reference`.
///
/// - day: `[06:00, 21:00)` of the reference date
/// - week: `[Monday 00:00, next Monday 00:00)` of the reference week
/// - month: `[1st 00:00, last day 00:00]` of the reference month
pub fn compute_time_domain(zoom: ZoomLevel, reference: NaiveDateTime) -> ChartResult<TimeDomain> {
    let date = reference.date();
    match zoom {
        ZoomLevel::Day => TimeDomain::new(
            at_hour(date, DAY_VIEW_START_HOUR)?,
            at_hour(date, DAY_VIEW_END_HOUR)?,
            DomainEnd::Exclusive,
        ),
        ZoomLevel::Week => {
            let monday = week_start_monday(date)?;
            let next_monday = monday
                .checked_add_signed(Duration::days(7))
                .ok_or_else(|| out_of_range(date))?;
            TimeDomain::new(
                monday.and_time(NaiveTime::MIN),
                next_monday.and_time(NaiveTime::MIN),
                DomainEnd::Exclusive,
            )
        }
        ZoomLevel::Month => {
            let first = month_start(date)?;
            let last = first
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .ok_or_else(|| out_of_range(date))?;
            TimeDomain::new(
                first.and_time(NaiveTime::MIN),
                last.and_time(NaiveTime::MIN),
                DomainEnd::Inclusive,
            )
        }
    }
}

/// Most recent Monday on or before `date`.
pub fn week_start_monday(date: NaiveDate) -> ChartResult<NaiveDate> {
    let back = i64::from(date.weekday().num_days_from_monday());
    date.checked_sub_signed(Duration::days(back))
        .ok_or_else(|| out_of_range(date))
}

pub fn month_start(date: NaiveDate) -> ChartResult<NaiveDate> {
    date.with_day(1).ok_or_else(|| out_of_range(date))
}

fn at_hour(date: NaiveDate, hour: u32) -> ChartResult<NaiveDateTime> {
    date.and_hms_opt(hour, 0, 0)
        .ok_or_else(|| out_of_range(date))
}

fn out_of_range(date: NaiveDate) -> ChartError {
    ChartError::InvalidData(format!("reference date {date} is outside the supported range"))
}
