//! Startup wiring: arm a handle with the default tracer.

use std::{borrow::Cow, fmt};

use crate::{hook::TraceHandle, io::TraceWriter, line_trace::LineTracer, trace_error::TraceError};

/// Banner announcing that tracing is armed.
const BANNER: &str = "TRACING";

/// Arms `handle` with the default [`LineTracer`] over `writer`.
///
/// This is the tracer's startup entry point, run by the embedding
/// interpreter before any user code whose execution should be observed: it
/// announces itself with a `TRACING` banner on the output channel, then
/// installs the hook. Running it again replaces the previously installed
/// hook, so at most one callback stays active.
pub fn preload<W>(handle: &mut TraceHandle, mut writer: W) -> Result<(), TraceError>
where
    W: TraceWriter + fmt::Debug + 'static,
{
    writer.trace_write(Cow::Borrowed(BANNER))?;
    writer.trace_push('\n')?;
    handle.install(Box::new(LineTracer::new(writer)));
    Ok(())
}
