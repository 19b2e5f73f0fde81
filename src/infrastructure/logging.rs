// src/infrastructure/logging.rs
use crate::application::ports::logging::{FieldValue, LogField, LogLevel, LogSink};
use std::time::Duration;
use tracing::Dispatch;

/// [`LogSink`] backed by `tracing` events.
///
/// By default events go to whatever subscriber is current at the call site.
/// `with_dispatch` pins the sink to one subscriber instead, which keeps the
/// output of a single service instance separate from the global one.
#[derive(Clone, Default)]
pub struct TracingLogSink {
    dispatch: Option<Dispatch>,
}

impl TracingLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dispatch(dispatch: Dispatch) -> Self {
        Self {
            dispatch: Some(dispatch),
        }
    }
}

impl LogSink for TracingLogSink {
    fn log(&self, level: LogLevel, message: &str, fields: &[LogField]) {
        match &self.dispatch {
            Some(dispatch) => {
                tracing::dispatcher::with_default(dispatch, || emit(level, message, fields));
            }
            None => emit(level, message, fields),
        }
    }
}

fn emit(level: LogLevel, message: &str, fields: &[LogField]) {
    let took = fields
        .iter()
        .find_map(|f| match f.value {
            FieldValue::Duration(d) => Some(d),
            _ => None,
        })
        .unwrap_or(Duration::ZERO);
    let context = render_context(fields);

    match level {
        LogLevel::Info if context.is_empty() => tracing::info!(took = ?took, "{message}"),
        LogLevel::Info => tracing::info!(took = ?took, context = %context, "{message}"),
        LogLevel::Error => {
            let error = fields
                .iter()
                .find_map(|f| match &f.value {
                    FieldValue::Error(e) => Some(e.as_str()),
                    _ => None,
                })
                .unwrap_or_default();
            if context.is_empty() {
                tracing::error!(took = ?took, error = %error, "{message}");
            } else {
                tracing::error!(took = ?took, error = %error, context = %context, "{message}");
            }
        }
    }
}

// tracing field names are static, so free-form identifiers are folded into
// one `context` field as `name=value` pairs.
fn render_context(fields: &[LogField]) -> String {
    fields
        .iter()
        .filter_map(|f| match &f.value {
            FieldValue::Text(value) => Some(format!("{}={value}", f.name)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
