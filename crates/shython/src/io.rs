use std::{
    borrow::Cow,
    cell::RefCell,
    io::{self, Write as _},
};

use crate::trace_error::TraceError;

/// Trait for handling diagnostic output from trace hooks.
///
/// Implement this trait to capture or redirect tracer output. The default
/// implementation `StdoutTrace` writes to stdout.
pub trait TraceWriter {
    /// Writes one fragment of diagnostic text.
    ///
    /// This method is responsible for writing only the given fragment, with
    /// no terminator added. Line terminators are emitted via [`trace_push`].
    ///
    /// # Arguments
    /// * `output` - The formatted text for a single fragment (without a
    ///   trailing newline).
    ///
    /// [`trace_push`]: TraceWriter::trace_push
    fn trace_write(&mut self, output: Cow<'_, str>) -> Result<(), TraceError>;

    /// Adds a single character to the output.
    ///
    /// Generally called to terminate the current diagnostic line.
    ///
    /// # Arguments
    /// * `end` - The character to print after the formatted output.
    fn trace_push(&mut self, end: char) -> Result<(), TraceError>;
}

/// Default `TraceWriter` that writes to stdout.
///
/// Diagnostic lines share the host program's stdout, so interleaving with
/// ordinary program output follows whatever order the traced code runs in.
#[derive(Debug)]
pub struct StdoutTrace;

thread_local! {
    /// Thread-local stdout buffer for `StdoutTrace`.
    ///
    /// Fragments accumulate here until a newline completes the diagnostic
    /// line; each completed line is written and flushed as one unit so that
    /// lines from other threads never split it.
    static STDOUT_BUFFER: RefCell<String> = const { RefCell::new(String::new()) };
}

impl TraceWriter for StdoutTrace {
    fn trace_write(&mut self, output: Cow<'_, str>) -> Result<(), TraceError> {
        STDOUT_BUFFER.with(|buffer| buffer.borrow_mut().push_str(&output));
        Ok(())
    }

    fn trace_push(&mut self, end: char) -> Result<(), TraceError> {
        STDOUT_BUFFER.with(|buffer| -> Result<(), TraceError> {
            let mut buffer = buffer.borrow_mut();
            buffer.push(end);
            if end == '\n' {
                io::stdout().write_all(buffer.as_bytes())?;
                io::stdout().flush()?;
                buffer.clear();
            }
            Ok(())
        })
    }
}

impl Drop for StdoutTrace {
    fn drop(&mut self) {
        STDOUT_BUFFER.with(|buffer| {
            let mut buffer = buffer.borrow_mut();
            if buffer.is_empty() {
                return;
            }
            let _ = io::stdout().write_all(buffer.as_bytes());
            let _ = io::stdout().flush();
            buffer.clear();
        });
    }
}

/// A `TraceWriter` that collects all output into a string.
///
/// Useful for testing or capturing diagnostic output programmatically.
#[derive(Debug, Default)]
pub struct CollectStringTrace(String);

impl CollectStringTrace {
    /// Creates a new empty `CollectStringTrace`.
    #[must_use]
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Returns the collected output as a string slice.
    #[must_use]
    pub fn output(&self) -> &str {
        self.0.as_str()
    }

    /// Consumes the writer and returns the collected output.
    #[must_use]
    pub fn into_output(self) -> String {
        self.0
    }
}

impl TraceWriter for CollectStringTrace {
    fn trace_write(&mut self, output: Cow<'_, str>) -> Result<(), TraceError> {
        self.0.push_str(&output);
        Ok(())
    }

    fn trace_push(&mut self, end: char) -> Result<(), TraceError> {
        self.0.push(end);
        Ok(())
    }
}

/// `TraceWriter` that ignores all output.
///
/// Useful for suppressing diagnostics while keeping a hook armed.
#[derive(Debug, Default)]
pub struct SinkTrace;

impl TraceWriter for SinkTrace {
    fn trace_write(&mut self, _output: Cow<'_, str>) -> Result<(), TraceError> {
        Ok(())
    }

    fn trace_push(&mut self, _end: char) -> Result<(), TraceError> {
        Ok(())
    }
}
