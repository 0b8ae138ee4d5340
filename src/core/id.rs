use crate::models::WorkoutId;
use chrono::{DateTime, Local};

/// Source of "now" for new workouts.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant: every record lands in the same tick.
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Mints strictly increasing ids seeded from the millisecond clock.
///
/// `next = max(last + 1, now_millis)`: two records created in the same
/// millisecond (or with a clock that went backwards) still get distinct ids.
pub struct IdGenerator {
    clock: Box<dyn Clock>,
    last: u64,
}

impl IdGenerator {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock, last: 0 }
    }

    pub fn system() -> Self {
        Self::new(Box::new(SystemClock))
    }

    /// Next id together with the creation timestamp it was derived from.
    pub fn mint(&mut self) -> (WorkoutId, DateTime<Local>) {
        let now = self.clock.now();
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let raw = millis.max(self.last.saturating_add(1));
        self.last = raw;
        (WorkoutId::from_raw(raw), now)
    }

    /// Make sure ids restored from storage are never minted again.
    pub fn observe(&mut self, id: WorkoutId) {
        self.last = self.last.max(id.raw());
    }
}
