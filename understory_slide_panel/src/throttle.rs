// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leading-edge sample throttle driven by caller timestamps.

/// Interval between cosmetic drag samples, in milliseconds.
pub const DRAG_SAMPLE_INTERVAL_MS: u64 = 100;

/// Lets one sample through per interval.
///
/// The first sample after a [`reset`](Self::reset) always passes. Samples
/// arriving within the interval of the last accepted one are dropped, not
/// queued: there is no deferred trailing call, so the last sample of an
/// interval may never be seen. For the drag class this is harmless, since the
/// animation completion settles it from the final offset anyway.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SampleThrottle {
    interval_ms: u64,
    last_ms: Option<u64>,
}

impl Default for SampleThrottle {
    fn default() -> Self {
        Self::new(DRAG_SAMPLE_INTERVAL_MS)
    }
}

impl SampleThrottle {
    /// A throttle accepting at most one sample per `interval_ms`.
    #[must_use]
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Returns `true` (and records `now_ms`) if a sample may pass now.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        match self.last_ms {
            Some(last) if now_ms.saturating_sub(last) < self.interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }

    /// Forget the last accepted sample.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
