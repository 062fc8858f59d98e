// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Input debouncing.
//!
//! A [`Debouncer`] holds back a rapidly changing value until it has stopped
//! changing for a quiet interval, then releases only the latest value. It is
//! driven entirely by the caller supplying the current time, the UI loop polls
//! it on every tick.

use std::time::{Duration, Instant};

/// Default quiet interval before a value is considered settled.
pub(crate) const DEFAULT_QUIET_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug)]
struct Pending<T> {
    value: T,
    since: Instant,
}

#[derive(Debug)]
pub(crate) struct Debouncer<T> {
    quiet: Duration,
    settled: T,
    pending: Option<Pending<T>>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub(crate) fn new(settled: T, quiet: Duration) -> Self {
        Self {
            quiet,
            settled,
            pending: None,
        }
    }

    /// Records a new input value, restarting the quiet interval.
    pub(crate) fn update(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending { value, since: now });
    }

    /// Releases the pending value if the input has been quiet long enough.
    ///
    /// A value equal to the last settled value is swallowed rather than
    /// emitted again.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.since) >= self.quiet);
        if !ready {
            return None;
        }

        let pending = self.pending.take()?;
        if pending.value == self.settled {
            return None;
        }

        self.settled = pending.value.clone();
        Some(pending.value)
    }

    /// Drops any pending value without emitting it.
    pub(crate) fn cancel(&mut self) {
        self.pending = None;
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn emits_only_final_value_of_a_burst() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), DEFAULT_QUIET_INTERVAL);

        debouncer.update("b".to_string(), start);
        assert_eq!(debouncer.poll(start + ms(200)), None);
        debouncer.update("ba".to_string(), start + ms(200));
        assert_eq!(debouncer.poll(start + ms(400)), None);
        debouncer.update("bat".to_string(), start + ms(400));

        // 500ms after the first keystroke, but only 100ms after the last
        assert_eq!(debouncer.poll(start + ms(500)), None);
        assert_eq!(debouncer.poll(start + ms(899)), None);
        assert_eq!(debouncer.poll(start + ms(900)), Some("bat".to_string()));

        // Exactly once
        assert_eq!(debouncer.poll(start + ms(2000)), None);
        assert!(!debouncer.is_pending());

        // "bat" is now the settled value, re-entering it is not a change
        debouncer.update("bat".to_string(), start + ms(2100));
        assert_eq!(debouncer.poll(start + ms(2600)), None);
    }

    #[test]
    fn keeps_delaying_while_input_keeps_changing() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), DEFAULT_QUIET_INTERVAL);

        for i in 0..20u64 {
            let now = start + ms(i * 400);
            debouncer.update(format!("q{i}"), now);
            assert_eq!(debouncer.poll(now + ms(399)), None);
        }

        assert_eq!(debouncer.poll(start + ms(19 * 400 + 500)), Some("q19".to_string()));
    }

    #[test]
    fn cancel_discards_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), DEFAULT_QUIET_INTERVAL);

        debouncer.update("alien".to_string(), start);
        debouncer.cancel();

        assert_eq!(debouncer.poll(start + ms(10_000)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn unchanged_value_is_not_emitted_again() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(String::new(), DEFAULT_QUIET_INTERVAL);

        // Typed and deleted within one burst
        debouncer.update("x".to_string(), start);
        debouncer.update(String::new(), start + ms(100));

        assert_eq!(debouncer.poll(start + ms(600)), None);
        assert!(!debouncer.is_pending());
    }
}
