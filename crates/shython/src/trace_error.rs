use std::{fmt, io};

/// Error type for trace dispatch.
///
/// There is no recovery policy in the tracing layer: a failure while writing
/// a diagnostic line propagates unmodified to the host interpreter, which
/// typically disables tracing for the offending context.
#[derive(Debug)]
pub enum TraceError {
    /// Writing to the diagnostic output channel failed.
    Io(io::Error),
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "trace write failed: {error}"),
        }
    }
}

impl std::error::Error for TraceError {}

impl From<io::Error> for TraceError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}
