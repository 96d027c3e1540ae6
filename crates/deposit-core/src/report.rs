//! Error-reporting hook.
//!
//! Callers that validate user input hand a reporter to whatever does the
//! validating; there is no process-wide error log.

use std::sync::Mutex;

use crate::error::DepositError;

/// Receives validation failures as they are discovered.
pub trait ErrorReporter: Send + Sync {
    /// Records one failure for the named input field.
    fn report(&self, field: &str, error: &DepositError);
}

/// Forwards failures to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, field: &str, error: &DepositError) {
        log::warn!("validation failed for {field}: {error}");
    }
}

/// Discards every failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ErrorReporter for NoopReporter {
    fn report(&self, _field: &str, _error: &DepositError) {}
}

/// Keeps every reported message, in order.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    entries: Mutex<Vec<(String, String)>>,
}

impl CollectingReporter {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected `(field, message)` pairs.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Returns the collected messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, message)| message).collect()
    }

    /// Returns true if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl ErrorReporter for CollectingReporter {
    fn report(&self, field: &str, error: &DepositError) {
        let entry = (field.to_string(), error.to_string());
        match self.entries.lock() {
            Ok(mut guard) => guard.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_reporter_keeps_order() {
        let reporter = CollectingReporter::new();
        assert!(reporter.is_empty());

        reporter.report("principal", &DepositError::invalid_number("Principal amount", "NaN"));
        reporter.report("months", &DepositError::NotWholeMonths { name: "Duration", value: 3.5 });

        let entries = reporter.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "principal");
        assert_eq!(
            reporter.messages()[1],
            "Duration must be a whole number of months"
        );
    }

    #[test]
    fn test_reporters_are_object_safe() {
        let reporters: Vec<Box<dyn ErrorReporter>> =
            vec![Box::new(LogReporter), Box::new(NoopReporter)];
        let err = DepositError::invalid_number("Interest rate", "Infinity");
        for r in &reporters {
            r.report("rate", &err);
        }
    }
}
