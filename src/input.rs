use log::info;
use minifb::{Key, KeyRepeat, Window};
use std::thread;
use std::time::Duration;

/// Input drained from the window, one entry per pending event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close request.
    Quit,
    KeyDown(Key),
}

/// Drains pending input once per loop iteration and flips the running flag on
/// a terminate signal (close request or Escape).
pub struct InputPoller {
    idle_delay: Duration,
}

impl Default for InputPoller {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPoller {
    pub fn new() -> Self {
        Self {
            idle_delay: Duration::from_millis(10),
        }
    }

    /// Snapshot the window's pending input as a list of events.
    pub fn gather(&self, window: &Window) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if !window.is_open() {
            events.push(InputEvent::Quit);
        }
        for key in window.get_keys_pressed(KeyRepeat::No) {
            events.push(InputEvent::KeyDown(key));
        }
        events
    }

    /// Drain one pass of events. When events were drained but none terminated,
    /// a single 10ms sleep backs off the CPU; an empty pass inserts no delay.
    pub fn drain<I>(&self, events: I, running: &mut bool)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut drained = 0usize;
        for event in events {
            drained += 1;
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                    info!("terminate signal: {:?}", event);
                    *running = false;
                }
                InputEvent::KeyDown(_) => {}
            }
        }
        if drained > 0 && *running {
            thread::sleep(self.idle_delay);
        }
    }

    pub fn poll(&self, window: &Window, running: &mut bool) {
        self.drain(self.gather(window), running);
    }
}
