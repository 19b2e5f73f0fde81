// src/application/instrumentation/timer.rs
use crate::application::ports::logging::{LogField, LogLevel, LogSink};
use std::time::Instant;

/// Field name carrying the elapsed time of a call.
pub const TOOK: &str = "took";

struct Outcome {
    level: LogLevel,
    message: String,
    fields: Vec<LogField>,
}

/// Measures one call and writes exactly one entry to the sink when dropped.
///
/// The caller records how the call ended with [`CallTimer::record`]. If the
/// timer is dropped without a recorded outcome an error entry is written
/// instead, naming whether the wrapped call panicked or the enclosing future
/// was cancelled.
pub struct CallTimer<'a> {
    sink: &'a dyn LogSink,
    operation: &'static str,
    start: Instant,
    context: Vec<LogField>,
    outcome: Option<Outcome>,
}

impl<'a> CallTimer<'a> {
    pub fn start(sink: &'a dyn LogSink, operation: &'static str) -> Self {
        Self {
            sink,
            operation,
            start: Instant::now(),
            context: Vec::new(),
            outcome: None,
        }
    }

    /// Adds an identifier that is reported if the call fails.
    pub fn with_context(mut self, field: LogField) -> Self {
        self.context.push(field);
        self
    }

    pub fn record<T, E>(
        &mut self,
        result: &Result<T, E>,
        success: &str,
        failure: impl FnOnce() -> String,
    ) where
        E: std::error::Error,
    {
        self.outcome = Some(match result {
            Ok(_) => Outcome {
                level: LogLevel::Info,
                message: success.to_string(),
                fields: Vec::new(),
            },
            Err(err) => {
                let mut fields = std::mem::take(&mut self.context);
                fields.push(LogField::error(err));
                Outcome {
                    level: LogLevel::Error,
                    message: failure(),
                    fields,
                }
            }
        });
    }
}

impl Drop for CallTimer<'_> {
    fn drop(&mut self) {
        let took = LogField::duration(TOOK, self.start.elapsed());
        match self.outcome.take() {
            Some(Outcome {
                level,
                message,
                mut fields,
            }) => {
                fields.push(took);
                self.sink.log(level, &message, &fields);
            }
            None => {
                let mut fields = std::mem::take(&mut self.context);
                fields.push(took);
                let reason = if std::thread::panicking() {
                    "panicked"
                } else {
                    "cancelled"
                };
                let message = format!("{} {reason} before completion", self.operation);
                self.sink.log(LogLevel::Error, &message, &fields);
            }
        }
    }
}
