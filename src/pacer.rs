/*
 *  pacer.rs
 *
 *  ringsdown - five rings, one number
 *  (c) 2025-26 ringsdown authors
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */
use std::time::{Duration, Instant};

/// Deadline tracker for periodic forced redraws.
pub struct Pacer {
    next_deadline: Instant,
    period: Duration,
}

impl Pacer {
    pub fn new(period: Duration) -> Self {
        Self {
            next_deadline: Instant::now() + period,
            period,
        }
    }

    #[inline]
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    /// Returns true when the period has elapsed; if true, it also schedules
    /// the next deadline.
    #[inline]
    pub fn due(&mut self) -> bool {
        let now = Instant::now();
        if now >= self.next_deadline {
            self.next_deadline = now + self.period;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_before_period() {
        let mut pacer = Pacer::new(Duration::from_secs(60));
        assert!(!pacer.due());
    }

    #[test]
    fn test_due_after_period() {
        let mut pacer = Pacer::new(Duration::from_millis(0));
        assert!(pacer.due());
        pacer.set_period(Duration::from_secs(60));
        assert!(pacer.due()); // deadline was scheduled before set_period
    }
}
