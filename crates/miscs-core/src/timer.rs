//! Cumulative elapsed-time measurement.
//!
//! A [`Timer`] sums the durations of any number of measured spans. Each span
//! is opened with [`Timer::start`] and closed when the returned [`Span`] is
//! dropped (or explicitly [stopped](Span::stop)), so early returns and `?`
//! inside a span are still accounted for.
//!
//! The time source is abstracted by the [`Clock`] trait; [`MonotonicClock`]
//! is the default.
//!
//! # Examples
//!
//! ```
//! use miscs_core::Timer;
//!
//! let mut timer = Timer::new();
//! let sum: u64 = timer.time(|| (0..1000).sum());
//! assert_eq!(sum, 499_500);
//!
//! {
//!     let _span = timer.start();
//!     // measured work
//! }
//! println!("spent {timer} seconds");
//! ```

use std::{
    fmt::{self, Display},
    time::{Duration, Instant},
};

/// A source of timestamps.
pub trait Clock {
    /// Returns the time elapsed since an arbitrary, fixed origin.
    ///
    /// Successive calls must not go backwards.
    fn now(&self) -> Duration;
}

/// Wall-clock monotonic time based on [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl<C> Clock for &C
where
    C: Clock + ?Sized,
{
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Accumulates the duration of measured spans.
#[derive(Debug, Clone, Default)]
pub struct Timer<C = MonotonicClock> {
    clock: C,
    cumulative: Duration,
}

impl Timer {
    /// Creates a timer backed by a [`MonotonicClock`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl<C> Timer<C>
where
    C: Clock,
{
    /// Creates a timer backed by `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            cumulative: Duration::ZERO,
        }
    }

    /// Returns the backing clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the current time of the backing clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Returns the total duration of all closed spans.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.cumulative
    }

    /// Clears the accumulated duration.
    pub fn reset(&mut self) {
        self.cumulative = Duration::ZERO;
    }

    /// Opens a measured span.
    ///
    /// The span is added to the total when the returned guard is dropped.
    pub fn start(&mut self) -> Span<'_, C> {
        let started_at = self.clock.now();
        Span {
            timer: self,
            started_at,
        }
    }

    /// Runs `f` inside a measured span and returns its result.
    pub fn time<F, T>(&mut self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let _span = self.start();
        f()
    }
}

impl<C> Display for Timer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.cumulative.as_secs_f64(), f)
    }
}

/// An open measurement span of a [`Timer`].
///
/// Created by [`Timer::start`].
#[derive(Debug)]
#[must_use = "the span is closed as soon as it is dropped"]
pub struct Span<'a, C>
where
    C: Clock,
{
    timer: &'a mut Timer<C>,
    started_at: Duration,
}

impl<C> Span<'_, C>
where
    C: Clock,
{
    /// Closes the span and returns its duration.
    pub fn stop(self) -> Duration {
        let elapsed = self.elapsed();
        // Drop records the same duration
        drop(self);
        elapsed
    }

    /// Returns the time since the span was opened.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timer.clock.now().saturating_sub(self.started_at)
    }
}

impl<C> Drop for Span<'_, C>
where
    C: Clock,
{
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        self.timer.cumulative += elapsed;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// A clock that only moves when told to.
    #[derive(Debug, Default)]
    struct ManualClock {
        now: Cell<Duration>,
    }

    impl ManualClock {
        fn advance(&self, by: Duration) {
            self.now.set(self.now.get() + by);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Duration {
            self.now.get()
        }
    }

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_accumulates_spans() {
        let clock = ManualClock::default();
        let mut timer = Timer::with_clock(&clock);
        assert_eq!(timer.elapsed(), Duration::ZERO);

        {
            let _span = timer.start();
            clock.advance(secs(2));
        }
        // time outside spans is not counted
        clock.advance(secs(100));
        timer.time(|| clock.advance(secs(3)));

        assert_eq!(timer.elapsed(), secs(5));
    }

    #[test]
    fn test_stop_returns_span_duration() {
        let clock = ManualClock::default();
        let mut timer = Timer::with_clock(&clock);
        let span = timer.start();
        clock.advance(secs(4));
        assert_eq!(span.stop(), secs(4));
        assert_eq!(timer.elapsed(), secs(4));
    }

    #[test]
    fn test_reset() {
        let clock = ManualClock::default();
        let mut timer = Timer::with_clock(&clock);
        timer.time(|| clock.advance(secs(1)));
        timer.reset();
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(timer.now(), secs(1));
    }

    #[test]
    fn test_display_in_seconds() {
        let clock = ManualClock::default();
        let mut timer = Timer::with_clock(&clock);
        timer.time(|| clock.advance(Duration::from_millis(1500)));
        assert_eq!(timer.to_string(), "1.5");
    }

    #[test]
    fn test_monotonic_clock_does_not_go_backwards() {
        let mut timer = Timer::new();
        let before = timer.now();
        timer.time(|| std::hint::black_box((0..1000u64).sum::<u64>()));
        assert!(timer.now() >= before);
    }
}
