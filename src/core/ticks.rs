use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::{TimeDomain, ZoomLevel};

/// The three stacked time axes, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubAxis {
    Month,
    Day,
    Hour,
}

impl SubAxis {
    pub const ALL: [Self; 3] = [Self::Month, Self::Day, Self::Hour];

    /// Row index in the stacked arrangement; row 1 sits right below the top margin.
    #[must_use]
    pub const fn row(self) -> u32 {
        match self {
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }
}

/// Boundary generator for one sub-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickInterval {
    /// Hour boundaries whose hour-of-day is a multiple of `every`.
    Hours { every: u32 },
    /// Midnights whose zero-based day-of-month is a multiple of `every`.
    Days { every: u32 },
    /// Midnight of every `starts_on` weekday.
    Weeks { starts_on: Weekday },
}

impl TickInterval {
    /// Boundaries inside the closed range `[domain.start, domain.end]`.
    #[must_use]
    pub fn ticks(self, domain: TimeDomain) -> Vec<NaiveDateTime> {
        let step = match self {
            Self::Hours { .. } => Duration::hours(1),
            Self::Days { .. } | Self::Weeks { .. } => Duration::days(1),
        };

        let mut ticks = Vec::new();
        let Some(mut cursor) = self.boundary_at_or_after(domain.start()) else {
            return ticks;
        };
        while cursor <= domain.end() {
            if self.accepts(cursor) {
                ticks.push(cursor);
            }
            match cursor.checked_add_signed(step) {
                Some(next) => cursor = next,
                None => break,
            }
        }
        ticks
    }

    fn boundary_at_or_after(self, instant: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Self::Hours { .. } => {
                let floor = instant.date().and_hms_opt(instant.hour(), 0, 0)?;
                if floor == instant {
                    Some(floor)
                } else {
                    floor.checked_add_signed(Duration::hours(1))
                }
            }
            Self::Days { .. } | Self::Weeks { .. } => {
                let floor = instant.date().and_time(NaiveTime::MIN);
                if floor == instant {
                    Some(floor)
                } else {
                    floor.checked_add_signed(Duration::days(1))
                }
            }
        }
    }

    fn accepts(self, boundary: NaiveDateTime) -> bool {
        match self {
            Self::Hours { every } => every > 0 && boundary.hour() % every == 0,
            Self::Days { every } => every > 0 && boundary.day0() % every == 0,
            Self::Weeks { starts_on } => boundary.weekday() == starts_on,
        }
    }
}

/// How far a tick line reaches into the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridLine {
    /// No tick line at all.
    None,
    /// Line spanning the full drawable height.
    FullHeight,
}

/// Label format of a sub-axis tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickFormat {
    /// "October 16" (day space-padded).
    MonthDay,
    /// Zero-padded day of month, "05".
    DayOfMonth,
    /// Full weekday name, "Friday".
    Weekday,
    /// Zero-padded hour, "06".
    Hour,
    /// "06:00".
    HourMinute,
    /// No label.
    Blank,
}

impl TickFormat {
    #[must_use]
    pub const fn pattern(self) -> Option<&'static str> {
        match self {
            Self::MonthDay => Some("%B %e"),
            Self::DayOfMonth => Some("%d"),
            Self::Weekday => Some("%A"),
            Self::Hour => Some("%H"),
            Self::HourMinute => Some("%H:%M"),
            Self::Blank => None,
        }
    }

    #[must_use]
    pub fn format(self, instant: NaiveDateTime) -> String {
        match self.pattern() {
            Some(pattern) => instant.format(pattern).to_string(),
            None => String::new(),
        }
    }
}

/// Interval, gridline and label format of one sub-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRule {
    pub interval: TickInterval,
    pub grid: GridLine,
    pub format: TickFormat,
}

impl TickRule {
    const fn new(interval: TickInterval, grid: GridLine, format: TickFormat) -> Self {
        Self {
            interval,
            grid,
            format,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubAxisRules {
    pub month: TickRule,
    pub day: TickRule,
    pub hour: TickRule,
}

impl SubAxisRules {
    #[must_use]
    pub fn get(self, axis: SubAxis) -> TickRule {
        match axis {
            SubAxis::Month => self.month,
            SubAxis::Day => self.day,
            SubAxis::Hour => self.hour,
        }
    }
}

/// Tick rules of all three sub-axes for `zoom`.
#[must_use]
pub const fn tick_rules(zoom: ZoomLevel) -> SubAxisRules {
    use GridLine::FullHeight;
    use TickFormat::{Blank, DayOfMonth, Hour, HourMinute, MonthDay};

    match zoom {
        ZoomLevel::Month => SubAxisRules {
            month: TickRule::new(
                TickInterval::Weeks {
                    starts_on: Weekday::Mon,
                },
                FullHeight,
                MonthDay,
            ),
            day: TickRule::new(TickInterval::Days { every: 1 }, FullHeight, DayOfMonth),
            hour: TickRule::new(TickInterval::Hours { every: 6 }, GridLine::None, Blank),
        },
        ZoomLevel::Week => SubAxisRules {
            month: TickRule::new(
                TickInterval::Weeks {
                    starts_on: Weekday::Sun,
                },
                FullHeight,
                MonthDay,
            ),
            day: TickRule::new(
                TickInterval::Days { every: 1 },
                FullHeight,
                TickFormat::Weekday,
            ),
            hour: TickRule::new(TickInterval::Hours { every: 6 }, GridLine::None, Hour),
        },
        ZoomLevel::Day => SubAxisRules {
            month: TickRule::new(TickInterval::Hours { every: 21 }, FullHeight, MonthDay),
            day: TickRule::new(
                TickInterval::Hours { every: 21 },
                FullHeight,
                TickFormat::Weekday,
            ),
            hour: TickRule::new(TickInterval::Hours { every: 1 }, FullHeight, HourMinute),
        },
    }
}
