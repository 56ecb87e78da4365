//! Typing caption widget.
//!
//! Renders the revealed prefix of an [`AnimationState`]. While the caption is
//! still typing a block cursor follows the text; once complete the cursor is
//! gone, which is the completion cue.

use super::constants::CAPTION_CURSOR;
use crate::reveal::AnimationState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Caption line widget.
pub struct Caption<'a> {
    state: Option<&'a AnimationState>,
    style: Style,
}

impl<'a> Caption<'a> {
    /// Caption for `state`. `None` renders nothing.
    pub fn new(state: Option<&'a AnimationState>, style: Style) -> Self {
        Self { state, style }
    }

    fn line(&self) -> Line<'a> {
        let Some(state) = self.state else {
            return Line::default();
        };
        let mut spans = vec![Span::styled(state.revealed_text(), self.style)];
        if !state.is_complete() {
            spans.push(Span::styled(
                CAPTION_CURSOR,
                self.style.add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for Caption<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{RevealSpeed, TextReveal, TimerQueue};
    use std::time::Duration;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn typing_caption_shows_prefix_and_cursor() {
        let timers = TimerQueue::new();
        let mut reveal = TextReveal::start("Hello", RevealSpeed::from_millis(10).unwrap(), &timers);
        for _ in 0..2 {
            let fired = timers.pop_due(Duration::from_secs(1)).unwrap();
            reveal.on_timer(fired, &timers);
        }

        let caption = Caption::new(Some(reveal.state()), Style::default());
        assert_eq!(text_of(&caption.line()), format!("He{CAPTION_CURSOR}"));
    }

    #[test]
    fn complete_caption_drops_cursor() {
        let timers = TimerQueue::new();
        let mut reveal = TextReveal::start("Hi", RevealSpeed::from_millis(10).unwrap(), &timers);
        while let Some(fired) = timers.pop_due(Duration::from_secs(1)) {
            reveal.on_timer(fired, &timers);
        }

        let caption = Caption::new(Some(reveal.state()), Style::default());
        assert_eq!(text_of(&caption.line()), "Hi");
    }

    #[test]
    fn missing_caption_renders_empty_line() {
        let caption = Caption::new(None, Style::default());
        assert_eq!(text_of(&caption.line()), "");
    }
}
