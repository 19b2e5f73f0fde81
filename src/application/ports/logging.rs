// src/application/ports/logging.rs
use std::{fmt, time::Duration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Duration(Duration),
    Text(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogField {
    pub name: &'static str,
    pub value: FieldValue,
}

impl LogField {
    pub fn duration(name: &'static str, value: Duration) -> Self {
        Self {
            name,
            value: FieldValue::Duration(value),
        }
    }

    pub fn text(name: &'static str, value: impl fmt::Display) -> Self {
        Self {
            name,
            value: FieldValue::Text(value.to_string()),
        }
    }

    /// Always named `error`.
    pub fn error(err: &dyn std::error::Error) -> Self {
        Self {
            name: "error",
            value: FieldValue::Error(err.to_string()),
        }
    }
}

/// Leveled structured log output. Implementations are shared between
/// concurrent callers and must not fail; anything that goes wrong while
/// writing stays inside the sink.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, message: &str, fields: &[LogField]);
}
