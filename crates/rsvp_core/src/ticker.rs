use std::time::Duration;

/// A scheduled repeating task driving word advancement.
///
/// The reader owns exactly one ticker and routes every (re)schedule through
/// a cancel-then-start sequence, so implementations may assume `start` is
/// never called while a previous schedule is still wanted. The ticker only
/// schedules; the driver delivers each fire by calling
/// [`Reader::tick`](crate::Reader::tick).
pub trait Ticker {
    /// Begins firing at the given interval, replacing any prior schedule.
    fn start(&mut self, interval: Duration);
    /// Stops firing. Idempotent.
    fn cancel(&mut self);
}
