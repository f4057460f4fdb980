//! Diagnostics raised alongside arithmetic results.
//!
//! No condition in this crate is fatal. An operation that can run into
//! trouble returns an [`Outcome`]: the computed (possibly truncated) value
//! together with at most one [`Diagnostic`], which the caller may surface,
//! log, ignore or escalate.

use core::fmt;

/// How serious a [`Diagnostic`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// The value is usable but may not be what was meant.
    Warning,
    /// The requested operation could not be performed; a canonical
    /// placeholder value was returned instead.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A condition detected while parsing or computing a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Diagnostic {
    /// Characters were left over after the digits of a number.
    #[error("invalid characters in number starting at byte {position}")]
    TrailingCharacters {
        /// Byte offset of the first character that was not consumed.
        position: usize,
    },
    /// The parsed magnitude needed more than 256 bits and was truncated.
    #[error("input magnitude exceeds 256 bits and was truncated")]
    InputOverflow,
    /// A carry left the most significant limb during addition.
    #[error("addition overflow")]
    AdditionOverflow,
    /// The product did not fit in 256 bits.
    #[error("multiplication overflow (result exceeds 256 bits)")]
    MultiplicationOverflow,
    /// The factorial product wrapped around to zero.
    #[error("factorial overflow at i={at}")]
    FactorialOverflow {
        /// The multiplier at which the product became zero.
        at: u32,
    },
    /// Division or modulo by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A shift count above 255 was clamped to 255.
    #[error("shift amount {requested} > 255, using 255")]
    ShiftClamped {
        /// The shift count that was asked for.
        requested: u32,
    },
    /// The text held no digits at all.
    #[error("no digits found in number")]
    NoDigits,
}

impl Diagnostic {
    /// Classify this diagnostic.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Diagnostic::DivisionByZero | Diagnostic::NoDigits => {
                Severity::Error
            }
            Diagnostic::TrailingCharacters { .. }
            | Diagnostic::InputOverflow
            | Diagnostic::AdditionOverflow
            | Diagnostic::MultiplicationOverflow
            | Diagnostic::FactorialOverflow { .. }
            | Diagnostic::ShiftClamped { .. } => Severity::Warning,
        }
    }
}

/// A computed value plus the diagnostic, if any, raised while computing it.
///
/// When several conditions are detected in one computation, the first one
/// raised is kept.
///
/// # Example
///
/// ```
/// use int256::{Diagnostic, Int256};
///
/// let outcome = Int256::from(7).div(&Int256::ZERO);
/// assert_eq!(outcome.diagnostic(), Some(Diagnostic::DivisionByZero));
/// assert_eq!(outcome.into_value(), Int256::ZERO);
/// ```
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Outcome<T> {
    value: T,
    diagnostic: Option<Diagnostic>,
}

impl<T> Outcome<T> {
    /// An outcome without any diagnostic.
    pub const fn clean(value: T) -> Self {
        Self { value, diagnostic: None }
    }

    /// An outcome carrying `diagnostic`.
    pub fn flagged(value: T, diagnostic: Diagnostic) -> Self {
        tracing::debug!(
            %diagnostic,
            severity = %diagnostic.severity(),
            "diagnostic raised"
        );
        Self { value, diagnostic: Some(diagnostic) }
    }

    /// The computed value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consume the outcome, keeping only the value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// The diagnostic raised, if any.
    #[must_use]
    pub const fn diagnostic(&self) -> Option<Diagnostic> {
        self.diagnostic
    }

    /// Returns true if no diagnostic was raised.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.diagnostic.is_none()
    }

    /// Split into the value and the diagnostic.
    #[must_use]
    pub fn into_parts(self) -> (T, Option<Diagnostic>) {
        (self.value, self.diagnostic)
    }

    /// Transform the value, keeping the diagnostic.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome { value: f(self.value), diagnostic: self.diagnostic }
    }

    /// Chain a computation that may raise its own diagnostic. A diagnostic
    /// already held by `self` takes precedence.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        let next = f(self.value);
        Outcome {
            value: next.value,
            diagnostic: self.diagnostic.or(next.diagnostic),
        }
    }

    /// Strict view: any diagnostic becomes an error.
    ///
    /// # Errors
    ///
    /// Returns the held [`Diagnostic`] if one was raised.
    pub fn into_result(self) -> Result<T, Diagnostic> {
        match self.diagnostic {
            None => Ok(self.value),
            Some(diagnostic) => Err(diagnostic),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[test]
    fn severity_classification() {
        assert_eq!(Diagnostic::DivisionByZero.severity(), Severity::Error);
        assert_eq!(Diagnostic::NoDigits.severity(), Severity::Error);
        assert_eq!(Diagnostic::AdditionOverflow.severity(), Severity::Warning);
        assert_eq!(
            Diagnostic::FactorialOverflow { at: 258 }.severity(),
            Severity::Warning
        );
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn messages() {
        assert_eq!(
            Diagnostic::TrailingCharacters { position: 3 }.to_string(),
            "invalid characters in number starting at byte 3"
        );
        assert_eq!(
            Diagnostic::ShiftClamped { requested: 300 }.to_string(),
            "shift amount 300 > 255, using 255"
        );
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn and_then_keeps_first_diagnostic() {
        let first = Outcome::flagged(1, Diagnostic::AdditionOverflow);
        let chained = first
            .and_then(|v| Outcome::flagged(v + 1, Diagnostic::DivisionByZero));
        assert_eq!(chained.value(), &2);
        assert_eq!(chained.diagnostic(), Some(Diagnostic::AdditionOverflow));

        let clean = Outcome::clean(1)
            .and_then(|v| Outcome::flagged(v * 3, Diagnostic::InputOverflow));
        assert_eq!(clean.into_parts(), (3, Some(Diagnostic::InputOverflow)));
    }

    /// Buffer shared between a test and the subscriber writing into it.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn capture_debug_events(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let sink = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || sink.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        captured.text()
    }

    #[test]
    fn flagged_emits_one_debug_event() {
        let logs = capture_debug_events(|| {
            let _ = Outcome::flagged(0, Diagnostic::DivisionByZero);
        });
        assert_eq!(logs.matches("diagnostic raised").count(), 1);
        assert!(logs.contains("DEBUG"));
        assert!(logs.contains("diagnostic=division by zero"));
        assert!(logs.contains("severity=error"));
    }

    #[test]
    fn clean_and_chained_outcomes_do_not_log_again() {
        let logs = capture_debug_events(|| {
            let _ = Outcome::clean(1).map(|v| v + 1);
        });
        assert!(logs.is_empty());

        let logs = capture_debug_events(|| {
            let _ = Outcome::flagged(1, Diagnostic::AdditionOverflow)
                .and_then(|v| Outcome::clean(v * 2))
                .map(|v| v + 1);
        });
        assert_eq!(logs.matches("diagnostic raised").count(), 1);
        assert!(logs.contains("severity=warning"));
    }

    #[test]
    fn into_result_is_strict() {
        assert_eq!(Outcome::clean(5).into_result(), Ok(5));
        assert_eq!(
            Outcome::flagged(5, Diagnostic::MultiplicationOverflow)
                .into_result(),
            Err(Diagnostic::MultiplicationOverflow)
        );
        assert!(Outcome::clean(()).is_clean());
        assert_eq!(Outcome::clean(2).map(|v| v * 10).into_value(), 20);
    }
}
