pub mod appointment;
pub mod resource_scale;
pub mod scale;
pub mod ticks;
pub mod time_domain;
pub mod time_scale;
pub mod types;
pub mod zoom;

pub use appointment::{Appointment, Resource, appointments_from_json_str, flatten_resource_names};
pub use resource_scale::{ResourceEntry, ResourceScale, compute_resource_domain};
pub use scale::LinearScale;
pub use ticks::{GridLine, SubAxis, SubAxisRules, TickFormat, TickInterval, TickRule, tick_rules};
pub use time_domain::{DomainEnd, TimeDomain, compute_time_domain, month_start, week_start_monday};
pub use time_scale::TimeScale;
pub use types::{Dimensions, Margin, Viewport};
pub use zoom::ZoomLevel;
