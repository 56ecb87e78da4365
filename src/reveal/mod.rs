//! Incremental text reveal ("typing") animation.
//!
//! A [`TextReveal`] shows its source text one character at a time on a fixed
//! cadence. It is a three-state machine:
//!
//! - Revealing: starts immediately on creation with nothing shown
//! - each tick extends the revealed prefix by one character and re-publishes
//!   the [`AnimationState`]
//! - Complete: reached exactly once, on the tick that reveals the last
//!   character; no further ticks are scheduled
//!
//! Ticks are driven by a host-owned [`TimerQueue`]. The animator holds at
//! most one [`ScheduledTimer`]; tearing the animator down drops that handle,
//! which removes the pending tick from the queue. A torn-down animator has no
//! timer left that could fire, so it can never publish again.
//!
//! One tick reveals one Unicode scalar value, so every published prefix is
//! valid UTF-8.

pub mod timer;

pub use timer::{ScheduledTimer, TimerId, TimerQueue};

use crate::model::RevealError;
use std::time::Duration;
use tracing::trace;

// ===== RevealSpeed =====

/// Delay between two reveal ticks. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealSpeed(Duration);

impl RevealSpeed {
    /// Default delay for page header captions.
    pub const CAPTION: RevealSpeed = RevealSpeed(Duration::from_millis(70));

    /// Default delay for the dashboard greeting.
    pub const GREETING: RevealSpeed = RevealSpeed(Duration::from_millis(30));

    /// Smart constructor: rejects a zero delay.
    pub fn new(per_char: Duration) -> Result<Self, RevealError> {
        if per_char.is_zero() {
            Err(RevealError::NonPositiveSpeed)
        } else {
            Ok(Self(per_char))
        }
    }

    /// Delay in milliseconds, as used in configuration.
    pub fn from_millis(millis: u64) -> Result<Self, RevealError> {
        Self::new(Duration::from_millis(millis))
    }

    /// Delay between ticks.
    pub fn per_char(self) -> Duration {
        self.0
    }
}

// ===== AnimationState =====

/// Published progress of a reveal animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    source_text: String,
    revealed_length: usize,
    revealed_bytes: usize,
    is_complete: bool,
}

impl AnimationState {
    /// Full text being revealed.
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Number of characters revealed so far.
    pub fn revealed_length(&self) -> usize {
        self.revealed_length
    }

    /// The revealed prefix.
    pub fn revealed_text(&self) -> &str {
        &self.source_text[..self.revealed_bytes]
    }

    /// True once every character has been revealed.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }
}

// ===== TextReveal =====

/// One running reveal animation.
///
/// Changing the text or speed means starting a new `TextReveal`; partial
/// progress is never carried over.
#[derive(Debug)]
pub struct TextReveal {
    state: AnimationState,
    speed: RevealSpeed,
    pending: Option<ScheduledTimer>,
}

impl TextReveal {
    /// Start revealing `source_text`, scheduling the first tick on `timers`.
    ///
    /// Empty text is complete immediately and schedules nothing.
    pub fn start(source_text: impl Into<String>, speed: RevealSpeed, timers: &TimerQueue) -> Self {
        let source_text = source_text.into();
        let is_complete = source_text.is_empty();
        let pending = (!is_complete).then(|| timers.schedule(speed.per_char()));

        trace!(
            chars = source_text.chars().count(),
            speed_ms = speed.per_char().as_millis() as u64,
            "Reveal started"
        );

        Self {
            state: AnimationState {
                source_text,
                revealed_length: 0,
                revealed_bytes: 0,
                is_complete,
            },
            speed,
            pending,
        }
    }

    /// Current state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Tick delay.
    pub fn speed(&self) -> RevealSpeed {
        self.speed
    }

    /// Id of the pending tick, if one is scheduled.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.pending.as_ref().map(ScheduledTimer::id)
    }

    /// Whether this animator already shows `source_text` at `speed`.
    pub fn is_showing(&self, source_text: &str, speed: RevealSpeed) -> bool {
        self.state.source_text == source_text && self.speed == speed
    }

    /// Handle a fired timer.
    ///
    /// Returns the re-published state when `fired` is this animator's tick,
    /// `None` for any other id.
    pub fn on_timer(&mut self, fired: TimerId, timers: &TimerQueue) -> Option<&AnimationState> {
        if self.pending_timer() != Some(fired) {
            return None;
        }
        self.pending = None;

        let next = self.state.source_text[self.state.revealed_bytes..]
            .chars()
            .next()?;
        self.state.revealed_bytes += next.len_utf8();
        self.state.revealed_length += 1;

        if self.state.revealed_bytes == self.state.source_text.len() {
            self.state.is_complete = true;
            trace!(chars = self.state.revealed_length, "Reveal complete");
        } else {
            self.pending = Some(timers.schedule(self.speed.per_char()));
        }

        Some(&self.state)
    }

    /// Tear the animator down, cancelling any pending tick.
    ///
    /// Returns the last published state.
    pub fn cancel(self) -> AnimationState {
        if !self.state.is_complete {
            trace!(
                revealed = self.state.revealed_length,
                "Reveal cancelled before completion"
            );
        }
        // Dropping `pending` here removes the tick from the queue.
        self.state
    }
}

#[cfg(test)]
#[path = "reveal_tests.rs"]
mod tests;
