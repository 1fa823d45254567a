use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Clone, Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// Reads terminal events on a background thread and forwards them.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_reader = Arc::clone(&stop);

        thread::spawn(move || {
            while !stop_reader.load(Ordering::Relaxed) {
                if !event::poll(POLL_INTERVAL).unwrap_or(false) {
                    continue;
                }
                let forwarded = match event::read() {
                    // Windows terminals also report key releases
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        tx.send(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(w, h)) => tx.send(Event::Resize(w, h)),
                    _ => Ok(()),
                };
                if forwarded.is_err() {
                    break;
                }
            }
        });

        EventHandler { rx, stop }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
