// tests/support/mocks/sink.rs
use std::sync::Mutex;
use tenant_core::application::ports::logging::{FieldValue, LogField, LogLevel, LogSink};

#[derive(Debug, Clone)]
pub struct CapturedEntry {
    pub level: LogLevel,
    pub message: String,
    pub fields: Vec<LogField>,
}

impl CapturedEntry {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }
}

/// Records every entry it is handed.
#[derive(Default)]
pub struct CapturingSink {
    entries: Mutex<Vec<CapturedEntry>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<CapturedEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn single(&self) -> CapturedEntry {
        let entries = self.entries();
        assert_eq!(entries.len(), 1, "expected exactly one entry, got {entries:?}");
        entries.into_iter().next().unwrap()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries().iter().filter(|e| e.level == level).count()
    }
}

impl LogSink for CapturingSink {
    fn log(&self, level: LogLevel, message: &str, fields: &[LogField]) {
        self.entries.lock().unwrap().push(CapturedEntry {
            level,
            message: message.to_string(),
            fields: fields.to_vec(),
        });
    }
}
