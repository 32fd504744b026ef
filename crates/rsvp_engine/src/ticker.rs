use std::time::Duration;

use rsvp_core::Ticker;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Tokio-backed repeating timer. `start` replaces any previous schedule;
/// each fire sends a unit tick over the channel handed out at construction,
/// and the driver loop turns those into `Reader::tick` calls.
///
/// Must be created and started on a running tokio runtime.
#[derive(Debug)]
pub struct TokioTicker {
    tick_tx: mpsc::UnboundedSender<()>,
    task: Option<JoinHandle<()>>,
}

impl TokioTicker {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<()>) {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        (
            Self {
                tick_tx,
                task: None,
            },
            tick_rx,
        )
    }
}

impl Ticker for TokioTicker {
    fn start(&mut self, interval: Duration) {
        self.cancel();
        let tx = self.tick_tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut timer = tokio::time::interval(interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first fire of a tokio interval is immediate; the word on
            // screen still deserves its full display time.
            timer.tick().await;
            loop {
                timer.tick().await;
                if tx.send(()).is_err() {
                    return;
                }
            }
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TokioTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
