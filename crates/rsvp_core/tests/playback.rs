use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;
use std::time::Duration;

use rsvp_core::{Reader, ReaderSettings, StaticSource, SwapPolicy, Ticker};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(rsvp_logging::initialize_for_tests);
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TickerCall {
    Start(Duration),
    Cancel,
}

/// Records every schedule/cancel so tests can assert ordering.
#[derive(Clone, Default)]
struct RecordingTicker {
    calls: Rc<RefCell<Vec<TickerCall>>>,
}

impl RecordingTicker {
    fn new() -> Self {
        Self::default()
    }

    fn calls(&self) -> Vec<TickerCall> {
        self.calls.borrow().clone()
    }

    fn last_started_interval(&self) -> Option<Duration> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            TickerCall::Start(interval) => Some(*interval),
            TickerCall::Cancel => None,
        })
    }
}

impl Ticker for RecordingTicker {
    fn start(&mut self, interval: Duration) {
        self.calls.borrow_mut().push(TickerCall::Start(interval));
    }

    fn cancel(&mut self) {
        self.calls.borrow_mut().push(TickerCall::Cancel);
    }
}

fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(ToString::to_string).collect()
}

fn four_word_reader() -> (Reader<RecordingTicker>, RecordingTicker) {
    let ticker = RecordingTicker::new();
    let reader = Reader::new(
        tokens(&["the", "quick", "brown", "fox"]),
        ReaderSettings::new(300, 10),
        ticker.clone(),
    );
    (reader, ticker)
}

#[test]
fn auto_starts_at_configured_rate() {
    init_logging();
    let (reader, ticker) = four_word_reader();

    // No token exceeds ten characters, so the displayed sequence is the
    // raw sequence.
    assert_eq!(reader.words(), ["the", "quick", "brown", "fox"]);
    assert!(!reader.is_paused());
    assert_eq!(reader.current_word(), "the");
    // 300 wpm -> one word every 200ms.
    assert_eq!(
        ticker.last_started_interval(),
        Some(Duration::from_millis(200))
    );

    // Every start is preceded by a cancel.
    let calls = ticker.calls();
    for (i, call) in calls.iter().enumerate() {
        if matches!(call, TickerCall::Start(_)) {
            assert!(i > 0 && calls[i - 1] == TickerCall::Cancel);
        }
    }
}

#[test]
fn empty_sequence_stays_paused() {
    init_logging();
    let ticker = RecordingTicker::new();
    let mut reader = Reader::new(Vec::new(), ReaderSettings::default(), ticker.clone());

    assert!(reader.is_paused());
    assert_eq!(reader.current_word(), "");
    assert_eq!(reader.progress(), 0.0);
    assert!(ticker.last_started_interval().is_none());

    // play() on an empty sequence remains a no-op.
    reader.play();
    assert!(reader.is_paused());
    assert!(ticker.last_started_interval().is_none());
}

#[test]
fn tick_advances_and_wraps_paused() {
    init_logging();
    let (mut reader, _ticker) = four_word_reader();

    reader.tick();
    assert_eq!(reader.current_word_index(), 1);
    assert_eq!(reader.current_word(), "quick");
    assert_eq!(reader.progress(), 25.0);

    reader.tick();
    reader.tick();
    assert_eq!(reader.current_word(), "fox");
    assert!(!reader.is_paused());

    // Advancing past the last word wraps to the start, paused.
    reader.tick();
    assert_eq!(reader.current_word_index(), 0);
    assert!(reader.is_paused());
    assert_eq!(reader.current_word(), "the");
}

#[test]
fn pause_is_idempotent() {
    init_logging();
    let (mut reader, ticker) = four_word_reader();

    reader.tick();
    reader.pause();
    let after_first = (reader.view(), ticker.calls().len());
    reader.pause();

    assert_eq!(reader.view(), after_first.0);
    // The second pause only re-cancels; no new schedule appears.
    assert!(ticker.last_started_interval() == Some(Duration::from_millis(200)));
    assert_eq!(ticker.calls().len(), after_first.1 + 1);
    assert_eq!(*ticker.calls().last().unwrap(), TickerCall::Cancel);
}

#[test]
fn play_while_playing_is_a_noop() {
    init_logging();
    let (mut reader, ticker) = four_word_reader();
    let before = ticker.calls().len();

    reader.play();
    assert_eq!(ticker.calls().len(), before);
}

#[test]
fn toggle_flips_between_states() {
    init_logging();
    let (mut reader, _ticker) = four_word_reader();

    reader.toggle_play_pause();
    assert!(reader.is_paused());
    reader.toggle_play_pause();
    assert!(!reader.is_paused());
}

#[test]
fn changing_rate_reschedules_in_place() {
    init_logging();
    let (mut reader, ticker) = four_word_reader();
    reader.tick();

    reader.set_wpm(600);
    assert_eq!(reader.wpm(), 600);
    // Position is preserved across the rate change.
    assert_eq!(reader.current_word_index(), 1);
    assert_eq!(
        ticker.last_started_interval(),
        Some(Duration::from_millis(100))
    );
}

#[test]
fn paused_rate_change_does_not_schedule() {
    init_logging();
    let (mut reader, ticker) = four_word_reader();
    reader.pause();
    let before = ticker.calls().len();

    reader.set_wpm(500);
    assert_eq!(reader.wpm(), 500);
    assert_eq!(ticker.calls().len(), before);
}

#[test]
fn rate_is_clamped_and_stepped() {
    init_logging();
    let (mut reader, _ticker) = four_word_reader();

    reader.set_wpm(5000);
    assert_eq!(reader.wpm(), 1000);
    reader.set_wpm(10);
    assert_eq!(reader.wpm(), 100);

    reader.adjust_wpm(2);
    assert_eq!(reader.wpm(), 200);
    reader.adjust_wpm(-100);
    assert_eq!(reader.wpm(), 100);
}

#[test]
fn view_reflects_playback_state() {
    init_logging();
    let (mut reader, _ticker) = four_word_reader();
    reader.tick();

    let view = reader.view();
    assert_eq!(view.current_word, "quick");
    assert_eq!(view.current_word_index, 1);
    assert_eq!(view.word_count, 4);
    assert_eq!(view.wpm, 300);
    assert_eq!(view.max_chars, 10);
    assert!(!view.is_paused);
    assert_eq!(view.progress, 25.0);
}

#[test]
fn swap_to_empty_yields_empty_word_and_zero_progress() {
    init_logging();
    let (mut reader, _ticker) = four_word_reader();

    reader.set_words(Vec::new(), SwapPolicy::Pause);
    assert_eq!(reader.current_word(), "");
    assert_eq!(reader.progress(), 0.0);
    assert!(reader.is_paused());
}

#[test]
fn swap_to_single_word_wraps_after_one_tick() {
    init_logging();
    let (mut reader, _ticker) = four_word_reader();

    reader.set_words(tokens(&["only"]), SwapPolicy::Resume);
    assert_eq!(reader.current_word(), "only");
    assert!(!reader.is_paused());

    reader.tick();
    assert!(reader.is_paused());
    assert_eq!(reader.current_word_index(), 0);
}

#[test]
fn swap_policy_controls_resume() {
    init_logging();
    let (mut reader, ticker) = four_word_reader();
    reader.pause();

    reader.set_words(tokens(&["a", "b"]), SwapPolicy::Pause);
    assert!(reader.is_paused());

    reader.set_words(tokens(&["c", "d"]), SwapPolicy::Resume);
    assert!(!reader.is_paused());
    assert_eq!(
        ticker.last_started_interval(),
        Some(Duration::from_millis(200))
    );

    // Resuming into an empty sequence still pauses.
    reader.set_words(Vec::new(), SwapPolicy::Resume);
    assert!(reader.is_paused());
}

#[test]
fn width_change_rechunks_from_raw_tokens() {
    init_logging();
    let ticker = RecordingTicker::new();
    let mut reader = Reader::new(
        tokens(&["short", "extraordinarily"]),
        ReaderSettings::new(300, 20),
        ticker,
    );
    let original = reader.words().to_vec();

    reader.tick();
    reader.set_max_chars(6);
    assert_eq!(reader.words(), ["short", "extrao", "rdinar", "ily"]);
    assert_eq!(reader.current_word_index(), 0);

    // Round trip: restoring the original budget restores the original
    // sequence, regardless of intervening ticks.
    reader.tick();
    reader.set_max_chars(20);
    assert_eq!(reader.words(), original);
}

#[test]
fn width_is_clamped_and_stepped() {
    init_logging();
    let (mut reader, _ticker) = four_word_reader();

    reader.set_max_chars(100);
    assert_eq!(reader.max_chars(), 20);
    reader.set_max_chars(1);
    assert_eq!(reader.max_chars(), 6);

    reader.adjust_max_chars(3);
    assert_eq!(reader.max_chars(), 9);
    reader.adjust_max_chars(-50);
    assert_eq!(reader.max_chars(), 6);
}

#[test]
fn reset_prefers_selection_over_page() {
    init_logging();
    let (mut reader, _ticker) = four_word_reader();

    let page_only = StaticSource::new("alpha beta gamma");
    reader.reset(&page_only);
    assert!(reader.is_paused());
    assert_eq!(reader.words(), ["alpha", "beta", "gamma"]);
    assert_eq!(reader.current_word_index(), 0);

    let with_selection = StaticSource::new("alpha beta gamma").with_selection("beta gamma");
    reader.reset(&with_selection);
    assert_eq!(reader.words(), ["beta", "gamma"]);

    // A whitespace-only selection falls back to the page.
    let blank_selection = StaticSource::new("alpha beta").with_selection("   ");
    reader.reset(&blank_selection);
    assert_eq!(reader.words(), ["alpha", "beta"]);
}
