//! Clock source for operations that depend on "now".

use chrono::{NaiveDateTime, Utc};

pub trait Clock: Send + Sync {
    /// Current UTC time as stored in timestamp columns.
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// Clock frozen at a given instant, used by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<K: Clock + ?Sized> Clock for &K {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
