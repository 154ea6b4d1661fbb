use chrono::{DateTime, Utc};
use ferrous_visits_application::ports::Clock;

/// Wall clock backed by the host's UTC time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
