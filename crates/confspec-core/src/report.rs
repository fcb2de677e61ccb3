//! # Error Sink
//!
//! Faults contained by a manager running in safe mode are handed to an
//! [`ErrorSink`] instead of being returned. The process-wide default is a
//! [`LogSink`] that writes a bordered block through `log::error!`; it can
//! be replaced with [`set_default_sink`], and a single manager can carry
//! its own sink.
use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, LazyLock};

use log::error;
use parking_lot::{Mutex, RwLock};

use crate::error::Error;

const BORDER: &str = "------------------------------------------------------------";

/// What is being reported
#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    /// A contained fault
    Fault(&'a Error),
    /// A plain diagnostic message
    Message(&'a str),
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Fault(err) => {
                let mut rendered = err.to_string();
                let mut source = StdError::source(*err);
                // Wrapping variants already print their inner error
                while let Some(cause) = source {
                    let cause_text = cause.to_string();
                    if !rendered.contains(&cause_text) {
                        rendered.push_str("\n  caused by: ");
                        rendered.push_str(&cause_text);
                    }
                    source = StdError::source(cause);
                }
                f.write_str(&rendered)
            }
            Report::Message(message) => f.write_str(message),
        }
    }
}

/// Receiver for contained faults
pub trait ErrorSink: Send + Sync + fmt::Debug {
    fn report(&self, report: Report<'_>);
}

/// Default sink: renders each report between two border lines on the
/// error log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&self, report: Report<'_>) {
        error!("\n{}\n{}\n{}", BORDER, report, BORDER);
    }
}

/// Sink that keeps rendered reports in memory
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered reports received so far
    pub fn reports(&self) -> Vec<String> {
        self.reports.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }

    pub fn clear(&self) {
        self.reports.lock().clear();
    }
}

impl ErrorSink for CollectingSink {
    fn report(&self, report: Report<'_>) {
        self.reports.lock().push(report.to_string());
    }
}

static DEFAULT_SINK: LazyLock<RwLock<Arc<dyn ErrorSink>>> =
    LazyLock::new(|| RwLock::new(Arc::new(LogSink)));

/// Replace the process-wide default sink. Managers built afterwards
/// without their own sink report here.
pub fn set_default_sink(sink: Arc<dyn ErrorSink>) {
    *DEFAULT_SINK.write() = sink;
}

pub fn default_sink() -> Arc<dyn ErrorSink> {
    DEFAULT_SINK.read().clone()
}

/// Report to the process-wide default sink.
pub fn report(report: Report<'_>) {
    default_sink().report(report);
}
