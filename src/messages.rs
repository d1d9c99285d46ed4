use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};

/// A single diagnostic line with the time it was recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageEntry {
    pub at: DateTime<Utc>,
    pub text: String,
}

/// Append-only status log scoped to one application session.
/// Handles are cheap clones sharing a single buffer; anything that
/// wants to report gets its own handle injected.
#[derive(Clone, Default)]
pub struct MessageLog {
    entries: Arc<Mutex<Vec<MessageEntry>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, text: impl Into<String>) {
        let entry = MessageEntry {
            at: Utc::now(),
            text: text.into(),
        };
        self.entries.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<MessageEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Message texts only, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|entry| entry.text.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
