use log::Level;
use sqltrace_core::{Fields, Logger, render};
use std::sync::{Mutex, PoisonError};

/// One event received by a [`CaptureLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub level: Level,
    pub template: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl Event {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Logger that keeps every event, for tests asserting on what was reported.
#[derive(Default, Debug)]
pub struct CaptureLogger {
    events: Mutex<Vec<Event>>,
}

impl CaptureLogger {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
    pub fn events_at(&self, level: Level) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }
    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Logger for CaptureLogger {
    fn log(&self, level: Level, message: &str, fields: Fields) {
        log::log!(level, "{}", render(message, fields));
        let event = Event {
            level,
            template: message.to_owned(),
            message: render(message, fields),
            fields: fields
                .iter()
                .map(|(k, v)| ((*k).to_owned(), v.to_string()))
                .collect(),
        };
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
