//! Output sinks for `print` and `load`.
//!
//! An interpreter writes every line through one [`SharedPrintHandler`]. The
//! shell installs [`stdout_handler`]. Tests and embedders install
//! [`buffer_handler`] and read the lines back with
//! [`PrintHandlerImpl::get_output`] or drain them with
//! [`PrintHandlerImpl::take_output`].
//!
//! The set of sinks is closed; each write is a `match` on [`PrintHandlerImpl`].
//! The handle is an `Arc` over a locked buffer, so captured output may be read
//! from a thread other than the one evaluating.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Lines go to the process's stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout is not an evaluation error.
        let _ = writeln!(out, "{line}");
    }
}

/// Lines accumulate in memory, each terminated by `\n`.
#[derive(Default)]
pub struct BufferPrintHandler {
    captured: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, line: &str) {
        let mut captured = self.captured.lock();
        captured.push_str(line);
        captured.push('\n');
    }

    /// Everything printed so far.
    pub fn get_output(&self) -> String {
        self.captured.lock().clone()
    }

    /// Everything printed so far, leaving the buffer empty.
    pub fn take_output(&self) -> String {
        std::mem::take(&mut *self.captured.lock())
    }

    pub fn clear(&self) {
        self.captured.lock().clear();
    }
}

/// Where `print` and `load` lines end up.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Lines are dropped.
    Silent,
}

impl PrintHandlerImpl {
    /// Write one line; the sink adds the newline.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout(sink) => sink.println(line),
            Self::Buffer(sink) => sink.println(line),
            Self::Silent => {}
        }
    }

    /// Captured lines, or nothing for sinks that don't keep them.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(sink) => sink.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Captured lines, drained.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(sink) => sink.take_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(sink) = self {
            sink.clear();
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests;
