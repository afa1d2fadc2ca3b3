//! Source of "now" for cart expiry and receipts.
//!
//! The cart engine never reads the system clock itself; the session asks a
//! `Clock` and passes the instant in.

use chrono::{DateTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Hand-driven clock for tests.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct ManualClock(std::cell::Cell<DateTime<Utc>>);

#[cfg(test)]
impl ManualClock {
    pub(crate) fn at(rfc3339: &str) -> Self {
        let start = DateTime::parse_from_rfc3339(rfc3339)
            .expect("valid timestamp")
            .with_timezone(&Utc);
        ManualClock(std::cell::Cell::new(start))
    }

    pub(crate) fn advance(&self, by: chrono::Duration) {
        self.0.set(self.0.get() + by);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.get()
    }
}
