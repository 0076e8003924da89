//! Event handling for the TUI
//!
//! A background thread polls crossterm and emits key, resize and tick
//! events over a channel. The public IP lookup posts its result on the
//! same channel.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::settings::IpLookupSettings;
use crate::services::lookup_public_ip;

/// Events consumed by the main loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Clock tick
    Tick,
    /// Result of the public IP lookup
    IpResolved(String),
}

/// Event source for the main loop
pub struct EventHandler {
    sender: mpsc::Sender<Event>,
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let poll_sender = sender.clone();
        thread::spawn(move || poll_terminal(poll_sender, tick_rate));

        Self { sender, receiver }
    }

    /// Handle for threads that post their own events
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.sender.clone()
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

/// Poll loop; returns when the receiver is gone or the terminal errors
fn poll_terminal(sender: mpsc::Sender<Event>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    // Windows reports both press and release
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(Event::Key(key))
                    }
                    Ok(CrosstermEvent::Resize(width, height)) => Some(Event::Resize(width, height)),
                    Ok(_) => None,
                    Err(e) => {
                        debug!(error = %e, "terminal read failed; stopping event thread");
                        return;
                    }
                };
                if let Some(event) = forwarded {
                    if sender.send(event).is_err() {
                        return;
                    }
                }
            }
            Ok(false) => {}
            Err(e) => {
                debug!(error = %e, "terminal poll failed; stopping event thread");
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if sender.send(Event::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}

/// Resolve the public IP off the UI thread
///
/// Does nothing when the lookup is disabled in settings.
pub fn spawn_ip_lookup(settings: &IpLookupSettings, sender: mpsc::Sender<Event>) {
    if !settings.enabled {
        return;
    }
    let settings = settings.clone();
    thread::spawn(move || {
        let ip = lookup_public_ip(&settings);
        let _ = sender.send(Event::IpResolved(ip));
    });
}
