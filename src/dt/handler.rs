//! Error reporting callback for triangulation and proximity entry points.
//!
//! The orchestration layer never fails on malformed geometry. Problems are
//! reported to an [`ErrorHandler`] with a [`Severity`], and the caller gets
//! an empty or partial result. Negative severity codes mean the result
//! should be discarded; positive codes mean it is usable despite the report.

use std::fmt;

/// Report severity, ordered from most to least severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum Severity {
    Fatal = -3,
    Except = -2,
    Error = -1,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl Severity {
    /// Signed code: negative discards the result, positive keeps it.
    #[inline]
    pub const fn code(self) -> i8 {
        self as i8
    }

    /// `true` for Fatal, Except and Error.
    #[inline]
    pub const fn discards_result(self) -> bool {
        self.code() < 0
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Fatal => "FATAL",
            Severity::Except => "EXCEPT",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        };
        f.write_str(s)
    }
}

/// Receives `(severity, message)` reports.
pub trait ErrorHandler {
    fn report(&mut self, severity: Severity, message: &str);
}

impl<F> ErrorHandler for F
where
    F: FnMut(Severity, &str),
{
    fn report(&mut self, severity: Severity, message: &str) {
        self(severity, message)
    }
}

/// Forwards every report to the `log` facade at a matching level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogHandler;

impl ErrorHandler for LogHandler {
    fn report(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Fatal | Severity::Except | Severity::Error => {
                log::error!("[{severity}] {message}")
            }
            Severity::Warning => log::warn!("{message}"),
            Severity::Info => log::info!("{message}"),
            Severity::Debug => log::debug!("{message}"),
        }
    }
}

/// Keeps every report; handy for inspecting what a call complained about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectingHandler {
    pub reports: Vec<(Severity, String)>,
}

impl CollectingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most severe report so far.
    pub fn worst(&self) -> Option<Severity> {
        self.reports.iter().map(|(s, _)| *s).min()
    }

    /// `true` if any report asks for the result to be discarded.
    pub fn has_errors(&self) -> bool {
        self.reports.iter().any(|(s, _)| s.discards_result())
    }
}

impl ErrorHandler for CollectingHandler {
    fn report(&mut self, severity: Severity, message: &str) {
        self.reports.push((severity, message.to_owned()));
    }
}
