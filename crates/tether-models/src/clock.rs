use std::cell::Cell;
use std::rc::Rc;

use chrono::{Local, NaiveTime, TimeDelta};

/// Source of the current local time of day.
pub trait WallClock: 'static {
    fn now(&self) -> NaiveTime;
}

pub struct SystemClock;
impl WallClock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// A clock you can set and advance by hand. Clones share the same time.
#[derive(Clone, Debug)]
pub struct FixedClock {
    t: Rc<Cell<NaiveTime>>,
}

impl FixedClock {
    pub fn new(t: NaiveTime) -> Self {
        Self {
            t: Rc::new(Cell::new(t)),
        }
    }

    pub fn set(&self, t: NaiveTime) {
        self.t.set(t);
    }

    /// Wraps around midnight.
    pub fn advance_secs(&self, secs: i64) {
        self.t.set(self.t.get() + TimeDelta::seconds(secs));
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.t.get()
    }
}

/// Long time format: `3:04:05 PM`.
pub fn long_time(t: NaiveTime) -> String {
    t.format("%-I:%M:%S %p").to_string()
}
