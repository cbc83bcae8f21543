use chrono::{DateTime, NaiveDateTime};

use crate::core::{LinearScale, TimeDomain};
use crate::error::{ChartError, ChartResult};

/// Maps a wall-clock domain onto `[0, drawable_width]` whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: TimeDomain,
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain: TimeDomain, drawable_width: f64) -> ChartResult<Self> {
        if !drawable_width.is_finite() || drawable_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale width must be finite and > 0".to_owned(),
            ));
        }
        let linear = LinearScale::new(
            naive_to_millis(domain.start()),
            naive_to_millis(domain.end()),
        )?
        .with_range_round(0.0, drawable_width)?;
        Ok(Self { domain, linear })
    }

    #[must_use]
    pub fn domain(self) -> TimeDomain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn time_to_pixel(self, instant: NaiveDateTime) -> ChartResult<f64> {
        self.linear.map(naive_to_millis(instant))
    }

    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<NaiveDateTime> {
        let millis = self.linear.invert(pixel)?.round();
        if millis > (i64::MAX as f64) || millis < (i64::MIN as f64) {
            return Err(ChartError::InvalidData(
                "pixel maps outside representable time".to_owned(),
            ));
        }
        millis_to_naive(millis as i64)
    }
}

pub(crate) fn naive_to_millis(instant: NaiveDateTime) -> f64 {
    instant.and_utc().timestamp_millis() as f64
}

fn millis_to_naive(millis: i64) -> ChartResult<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| ChartError::InvalidData("timestamp out of range".to_owned()))
}
