//! Tests for TextReveal and RevealSpeed.

use super::*;

const TEN_MS: Duration = Duration::from_millis(10);

fn speed_10ms() -> RevealSpeed {
    RevealSpeed::new(TEN_MS).expect("positive speed")
}

/// Fire the next due timer and hand it to `reveal`.
///
/// Returns the published state, or `None` if nothing fired for `reveal`.
fn tick(reveal: &mut TextReveal, timers: &TimerQueue) -> Option<AnimationState> {
    let deadline = timers.next_deadline()?;
    let fired = timers.pop_due(deadline)?;
    reveal.on_timer(fired, timers).cloned()
}

// ===== RevealSpeed =====

#[test]
fn speed_rejects_zero() {
    assert_eq!(
        RevealSpeed::new(Duration::ZERO),
        Err(RevealError::NonPositiveSpeed)
    );
    assert_eq!(RevealSpeed::from_millis(0), Err(RevealError::NonPositiveSpeed));
}

#[test]
fn speed_accepts_positive() {
    let speed = RevealSpeed::from_millis(70).unwrap();
    assert_eq!(speed.per_char(), Duration::from_millis(70));
}

// ===== Tick progression =====

#[test]
fn abc_reveals_one_char_per_tick_and_completes_on_third() {
    let timers = TimerQueue::new();
    let mut reveal = TextReveal::start("abc", speed_10ms(), &timers);

    // After 0 ticks
    assert_eq!(reveal.state().revealed_length(), 0);
    assert_eq!(reveal.state().revealed_text(), "");
    assert!(!reveal.state().is_complete());

    let after_1 = tick(&mut reveal, &timers).expect("tick 1 publishes");
    assert_eq!(after_1.revealed_length(), 1);
    assert_eq!(after_1.revealed_text(), "a");
    assert!(!after_1.is_complete());

    let after_2 = tick(&mut reveal, &timers).expect("tick 2 publishes");
    assert_eq!(after_2.revealed_length(), 2);
    assert_eq!(after_2.revealed_text(), "ab");
    assert!(!after_2.is_complete());

    let after_3 = tick(&mut reveal, &timers).expect("tick 3 publishes");
    assert_eq!(after_3.revealed_length(), 3);
    assert_eq!(after_3.revealed_text(), "abc");
    assert!(after_3.is_complete());
}

#[test]
fn ticks_fire_at_multiples_of_speed() {
    let timers = TimerQueue::new();
    let mut reveal = TextReveal::start("abc", speed_10ms(), &timers);

    assert_eq!(timers.next_deadline(), Some(TEN_MS));
    tick(&mut reveal, &timers);
    assert_eq!(timers.next_deadline(), Some(2 * TEN_MS));
    tick(&mut reveal, &timers);
    assert_eq!(timers.next_deadline(), Some(3 * TEN_MS));
}

#[test]
fn complete_animator_schedules_nothing_more() {
    let timers = TimerQueue::new();
    let mut reveal = TextReveal::start("ab", speed_10ms(), &timers);

    tick(&mut reveal, &timers);
    tick(&mut reveal, &timers);

    assert!(reveal.state().is_complete());
    assert_eq!(reveal.pending_timer(), None);
    assert_eq!(timers.pending(), 0);
    assert_eq!(tick(&mut reveal, &timers), None);
}

#[test]
fn empty_text_is_complete_on_start() {
    let timers = TimerQueue::new();
    let reveal = TextReveal::start("", speed_10ms(), &timers);

    assert!(reveal.state().is_complete());
    assert_eq!(reveal.state().revealed_length(), 0);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn multibyte_text_reveals_whole_characters() {
    let timers = TimerQueue::new();
    let mut reveal = TextReveal::start("§é", speed_10ms(), &timers);

    let first = tick(&mut reveal, &timers).unwrap();
    assert_eq!(first.revealed_text(), "§");
    assert_eq!(first.revealed_length(), 1);

    let second = tick(&mut reveal, &timers).unwrap();
    assert_eq!(second.revealed_text(), "§é");
    assert!(second.is_complete());
}

#[test]
fn foreign_timer_ids_are_ignored() {
    let timers = TimerQueue::new();
    let mut reveal = TextReveal::start("abc", speed_10ms(), &timers);
    let other = timers.schedule(Duration::from_millis(1));

    let fired = timers.pop_due(Duration::from_millis(1)).unwrap();
    assert_eq!(fired, other.id());
    assert!(reveal.on_timer(fired, &timers).is_none());
    assert_eq!(reveal.state().revealed_length(), 0);
}

// ===== Teardown =====

#[test]
fn cancel_after_one_tick_prevents_further_publications() {
    let timers = TimerQueue::new();
    let mut reveal = TextReveal::start("abc", speed_10ms(), &timers);

    let after_1 = tick(&mut reveal, &timers).unwrap();
    assert_eq!(after_1.revealed_length(), 1);
    assert!(reveal.pending_timer().is_some(), "tick 2 is scheduled");

    let last = reveal.cancel();
    assert_eq!(last.revealed_length(), 1);
    assert!(!last.is_complete());

    // Wait well past where ticks 2 and 3 would have fired.
    assert_eq!(timers.pending(), 0);
    assert_eq!(timers.pop_due(Duration::from_secs(1)), None);
}

#[test]
fn dropping_animator_cancels_pending_tick() {
    let timers = TimerQueue::new();
    let reveal = TextReveal::start("hello", speed_10ms(), &timers);
    assert_eq!(timers.pending(), 1);

    drop(reveal);

    assert_eq!(timers.pending(), 0);
    assert_eq!(timers.pop_due(Duration::from_secs(1)), None);
}

#[test]
fn independent_animators_do_not_interfere() {
    let timers = TimerQueue::new();
    let mut fast = TextReveal::start("ab", speed_10ms(), &timers);
    let mut slow = TextReveal::start("xy", RevealSpeed::from_millis(25).unwrap(), &timers);

    let mut fired_for = Vec::new();
    while let Some(id) = timers.pop_due(Duration::from_millis(100)) {
        if fast.on_timer(id, &timers).is_some() {
            fired_for.push(("fast", timers.now()));
        } else if slow.on_timer(id, &timers).is_some() {
            fired_for.push(("slow", timers.now()));
        }
    }

    assert_eq!(
        fired_for,
        vec![
            ("fast", Duration::from_millis(10)),
            ("fast", Duration::from_millis(20)),
            ("slow", Duration::from_millis(25)),
            ("slow", Duration::from_millis(50)),
        ]
    );
    assert!(fast.state().is_complete());
    assert!(slow.state().is_complete());
}

#[test]
fn is_showing_compares_text_and_speed() {
    let timers = TimerQueue::new();
    let reveal = TextReveal::start("abc", speed_10ms(), &timers);

    assert!(reveal.is_showing("abc", speed_10ms()));
    assert!(!reveal.is_showing("abd", speed_10ms()));
    assert!(!reveal.is_showing("abc", RevealSpeed::from_millis(11).unwrap()));
}
