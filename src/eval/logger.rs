//! Injected logging capability.
//!
//! The evaluator writes its one-line summaries through an [`EvalLog`]
//! handed in at construction rather than a process-global logger. The
//! default sink forwards to the `log` facade; [`MemoryLog`] captures lines
//! for asserting on the log format contract in tests.

use std::sync::Mutex;

/// Separator line bracketing the final-test banner.
const SEPARATOR: &str =
    "----------------------------------------------------------------------------------------------------";

/// Logging capability the evaluator writes its summaries through.
pub trait EvalLog {
    /// Emit one summary line.
    fn info(&self, line: &str);

    /// Emit a horizontal separator line.
    fn separator(&self) {
        self.info(SEPARATOR);
    }
}

/// Default sink: forwards to the `log` facade under the `evaluar` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl EvalLog for LogFacade {
    fn info(&self, line: &str) {
        log::info!(target: "evaluar", "{line}");
    }
}

/// Capturing sink for tests: records every line in order.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    /// Create an empty capturing sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("log mutex poisoned").clone()
    }
}

impl EvalLog for MemoryLog {
    fn info(&self, line: &str) {
        self.lines.lock().expect("log mutex poisoned").push(line.to_string());
    }
}

impl<L: EvalLog + ?Sized> EvalLog for &L {
    fn info(&self, line: &str) {
        (**self).info(line);
    }

    fn separator(&self) {
        (**self).separator();
    }
}
