//! Page captions with typing animation.
//!
//! CaptionBoard owns the timer queue and at most one [`TextReveal`] per page.
//! Mounting a caption starts a fresh animation; unmounting it tears the
//! animation down, which cancels its pending tick.

use crate::model::Page;
use crate::reveal::{AnimationState, RevealSpeed, TextReveal, TimerQueue};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

/// Live captions, keyed by the page they belong to.
#[derive(Debug, Default)]
pub struct CaptionBoard {
    timers: TimerQueue,
    captions: BTreeMap<Page, TextReveal>,
}

impl CaptionBoard {
    /// Board with no captions, clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the caption for `page`.
    ///
    /// A caption already showing the same text at the same speed keeps its
    /// progress. Anything else replaces it with a new animation starting from
    /// nothing. Returns true when a new animation was started.
    pub fn mount(&mut self, page: Page, text: &str, speed: RevealSpeed) -> bool {
        if self
            .captions
            .get(&page)
            .is_some_and(|reveal| reveal.is_showing(text, speed))
        {
            return false;
        }

        // Insert drops (and so cancels) any caption being replaced.
        let reveal = TextReveal::start(text, speed, &self.timers);
        self.captions.insert(page, reveal);
        debug!(page = page.slug(), "Caption mounted");
        true
    }

    /// Unmount the caption for `page`, cancelling its pending tick.
    ///
    /// Returns its last published state.
    pub fn unmount(&mut self, page: Page) -> Option<AnimationState> {
        let reveal = self.captions.remove(&page)?;
        debug!(page = page.slug(), "Caption unmounted");
        Some(reveal.cancel())
    }

    /// Fire every tick due at or before `now`, in deadline order.
    ///
    /// Returns how many state publications happened; zero means nothing on
    /// screen changed.
    pub fn advance_to(&mut self, now: Duration) -> usize {
        let mut published = 0;
        while let Some(fired) = self.timers.pop_due(now) {
            if self
                .captions
                .values_mut()
                .any(|reveal| reveal.on_timer(fired, &self.timers).is_some())
            {
                published += 1;
            }
        }
        self.timers.settle(now);
        published
    }

    /// When the next tick is due, if any caption is still revealing.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Current state of the caption for `page`.
    pub fn caption(&self, page: Page) -> Option<&AnimationState> {
        self.captions.get(&page).map(TextReveal::state)
    }

    /// Number of mounted captions.
    pub fn mounted(&self) -> usize {
        self.captions.len()
    }

    /// Board clock.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn speed(ms: u64) -> RevealSpeed {
        RevealSpeed::from_millis(ms).unwrap()
    }

    #[test]
    fn mounted_caption_starts_empty() {
        let mut board = CaptionBoard::new();
        assert!(board.mount(Page::Cases, "abc", speed(10)));

        let state = board.caption(Page::Cases).unwrap();
        assert_eq!(state.revealed_text(), "");
        assert!(!state.is_complete());
        assert_eq!(board.next_deadline(), Some(10 * MS));
    }

    #[test]
    fn advance_reveals_all_due_ticks() {
        let mut board = CaptionBoard::new();
        board.mount(Page::Cases, "abcd", speed(10));

        assert_eq!(board.advance_to(25 * MS), 2);
        assert_eq!(board.caption(Page::Cases).unwrap().revealed_text(), "ab");
        assert_eq!(board.now(), 25 * MS);

        assert_eq!(board.advance_to(40 * MS), 2);
        let state = board.caption(Page::Cases).unwrap();
        assert!(state.is_complete());
        assert_eq!(board.next_deadline(), None);
    }

    #[test]
    fn advance_with_nothing_due_publishes_nothing() {
        let mut board = CaptionBoard::new();
        board.mount(Page::Cases, "abc", speed(10));
        assert_eq!(board.advance_to(9 * MS), 0);
    }

    #[test]
    fn unmount_cancels_pending_ticks() {
        let mut board = CaptionBoard::new();
        board.mount(Page::Cases, "abc", speed(10));
        board.advance_to(10 * MS);

        let last = board.unmount(Page::Cases).unwrap();
        assert_eq!(last.revealed_text(), "a");
        assert_eq!(board.next_deadline(), None);
        assert_eq!(board.advance_to(Duration::from_secs(1)), 0);
        assert!(board.caption(Page::Cases).is_none());
    }

    #[test]
    fn unmount_missing_caption_is_none() {
        let mut board = CaptionBoard::new();
        assert!(board.unmount(Page::Profile).is_none());
    }

    #[test]
    fn remount_same_text_and_speed_keeps_progress() {
        let mut board = CaptionBoard::new();
        board.mount(Page::Cases, "abc", speed(10));
        board.advance_to(10 * MS);

        assert!(!board.mount(Page::Cases, "abc", speed(10)));
        assert_eq!(board.caption(Page::Cases).unwrap().revealed_text(), "a");
    }

    #[test]
    fn changing_speed_restarts_from_nothing() {
        let mut board = CaptionBoard::new();
        board.mount(Page::Cases, "abc", speed(10));
        board.advance_to(20 * MS);

        assert!(board.mount(Page::Cases, "abc", speed(5)));
        assert_eq!(board.caption(Page::Cases).unwrap().revealed_length(), 0);
        // Only the new animation's tick is pending.
        assert_eq!(board.next_deadline(), Some(25 * MS));
    }

    #[test]
    fn captions_on_different_pages_run_independently() {
        let mut board = CaptionBoard::new();
        board.mount(Page::Dashboard, "hi", speed(30));
        board.mount(Page::Cases, "abc", speed(70));

        board.advance_to(70 * MS);
        assert!(board.caption(Page::Dashboard).unwrap().is_complete());
        assert_eq!(board.caption(Page::Cases).unwrap().revealed_text(), "a");
        assert_eq!(board.mounted(), 2);
    }
}
