use std::sync::Arc;

use rsvp_core::{Reader, ReaderView, SwapPolicy, WordSource};
use rsvp_logging::rsvp_debug;
use tokio::sync::mpsc;

use crate::store::SettingsStore;
use crate::ticker::TokioTicker;

/// A playback session tying the pure reader to persistence and the tokio
/// ticker. Rate and width changes are written back to the settings store;
/// play/pause/tick pass straight through.
pub struct ReaderSession {
    reader: Reader<TokioTicker>,
    store: Arc<dyn SettingsStore>,
}

impl ReaderSession {
    /// Loads settings from the store and starts a reader over
    /// `initial_tokens`. The returned receiver yields one unit per
    /// advancement interval; the driver answers each with [`tick`](Self::tick).
    pub async fn start(
        initial_tokens: Vec<String>,
        store: Arc<dyn SettingsStore>,
    ) -> (Self, mpsc::UnboundedReceiver<()>) {
        let settings = store.load().await;
        rsvp_debug!(
            "starting reader session at {} wpm, {} chars",
            settings.wpm,
            settings.max_chars
        );
        let (ticker, ticks) = TokioTicker::new();
        let reader = Reader::new(initial_tokens, settings, ticker);
        (Self { reader, store }, ticks)
    }

    pub fn reader(&self) -> &Reader<TokioTicker> {
        &self.reader
    }

    pub fn view(&self) -> ReaderView {
        self.reader.view()
    }

    pub fn tick(&mut self) {
        self.reader.tick();
    }

    pub fn play(&mut self) {
        self.reader.play();
    }

    pub fn pause(&mut self) {
        self.reader.pause();
    }

    pub fn toggle_play_pause(&mut self) {
        self.reader.toggle_play_pause();
    }

    pub fn set_words(&mut self, tokens: Vec<String>, policy: SwapPolicy) {
        self.reader.set_words(tokens, policy);
    }

    pub fn reset(&mut self, source: &dyn WordSource) {
        self.reader.reset(source);
    }

    pub async fn set_wpm(&mut self, wpm: u32) {
        self.reader.set_wpm(wpm);
        self.persist().await;
    }

    pub async fn adjust_wpm(&mut self, delta_steps: i32) {
        self.reader.adjust_wpm(delta_steps);
        self.persist().await;
    }

    pub async fn set_max_chars(&mut self, max_chars: usize) {
        self.reader.set_max_chars(max_chars);
        self.persist().await;
    }

    pub async fn adjust_max_chars(&mut self, delta_steps: i32) {
        self.reader.adjust_max_chars(delta_steps);
        self.persist().await;
    }

    async fn persist(&self) {
        self.store.save(&self.reader.settings()).await;
    }
}
