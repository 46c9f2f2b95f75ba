//! The classic shython trace hook: an event inspector plus line records.
//!
//! [`LineTracer`] is the hook `preload` installs at interpreter startup. It
//! composes two independently toggleable capabilities:
//!
//! | Capability | Output |
//! |------------|--------|
//! | Event inspector | A four-line block for every event, whatever its kind |
//! | Line records | `TRACE:shython_line:LINE:"<arg>"` for each `line` event |
//!
//! Both default to on, which is the historical shython behavior: every event
//! gets an inspector block, and `line` events get one extra record after it.

use std::{borrow::Cow, fmt};

use crate::{
    event::{EventKind, TAG_TYPE, TraceArg},
    frame::Frame,
    hook::{TraceDisposition, TraceHook},
    io::TraceWriter,
    trace_error::TraceError,
};

/// Trace hook that formats diagnostic text for every event it receives.
///
/// The tracer is generic over its [`TraceWriter`], chosen at construction:
///
/// ```
/// use shython::{CollectStringTrace, EventKind, Frame, LineTracer, TraceArg, TraceHook};
///
/// let mut tracer = LineTracer::new(CollectStringTrace::new());
/// let frame = Frame::module_level("<stdin>", 1);
/// tracer.on_event(&frame, EventKind::Call, &TraceArg::None).unwrap();
/// assert!(tracer.writer().output().starts_with("EVENT:\n"));
/// ```
#[derive(Debug)]
pub struct LineTracer<W: TraceWriter> {
    writer: W,
    /// Emit the raw event-inspector block on every invocation.
    inspect_events: bool,
    /// Emit a `TRACE:shython_line:LINE:...` record for each `line` event.
    line_records: bool,
}

impl<W: TraceWriter> LineTracer<W> {
    /// Creates a tracer with both capabilities enabled.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            inspect_events: true,
            line_records: true,
        }
    }

    /// Toggles the unconditional event-inspector block.
    #[must_use]
    pub fn with_inspector(mut self, enabled: bool) -> Self {
        self.inspect_events = enabled;
        self
    }

    /// Toggles the per-`line`-event trace record.
    #[must_use]
    pub fn with_line_records(mut self, enabled: bool) -> Self {
        self.line_records = enabled;
        self
    }

    /// Returns the underlying writer.
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the tracer and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: &str) -> Result<(), TraceError> {
        self.writer.trace_write(Cow::Borrowed(line))?;
        self.writer.trace_push('\n')
    }

    /// Emits the four-line inspector block: label, tag type, tag value, and
    /// the tag's attribute table.
    fn inspect(&mut self, kind: EventKind) -> Result<(), TraceError> {
        let tag: &'static str = kind.into();
        self.write_line("EVENT:")?;
        self.write_line(TAG_TYPE)?;
        self.write_line(tag)?;
        self.write_line(&attribute_list(kind))
    }
}

/// Renders a kind's attribute table in Python list form: `['arg', 'frame']`.
fn attribute_list(kind: EventKind) -> String {
    let attrs = kind.attributes();
    let mut list = String::with_capacity(2 + attrs.len() * 12);
    list.push('[');
    for (i, attr) in attrs.iter().enumerate() {
        if i > 0 {
            list.push_str(", ");
        }
        list.push('\'');
        list.push_str(attr);
        list.push('\'');
    }
    list.push(']');
    list
}

impl<W: TraceWriter + fmt::Debug> TraceHook for LineTracer<W> {
    fn on_event(&mut self, _frame: &Frame, kind: EventKind, arg: &TraceArg) -> Result<TraceDisposition, TraceError> {
        if self.inspect_events {
            self.inspect(kind)?;
        }
        if kind == EventKind::Line && self.line_records {
            // The record prints the auxiliary payload exactly as received; it
            // does not read the frame's line number.
            self.write_line(&format!("TRACE:shython_line:LINE:\"{arg}\""))?;
        }
        Ok(TraceDisposition::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::CollectStringTrace;

    fn run_one(kind: EventKind, arg: &TraceArg) -> String {
        let mut tracer = LineTracer::new(CollectStringTrace::new());
        let frame = Frame::module_level("<stdin>", 1);
        let disposition = tracer.on_event(&frame, kind, arg).unwrap();
        assert_eq!(disposition, TraceDisposition::Continue);
        tracer.into_writer().into_output()
    }

    #[test]
    fn line_event_emits_block_then_record() {
        let output = run_one(EventKind::Line, &TraceArg::None);
        assert_eq!(
            output,
            "EVENT:\n<class 'str'>\nline\n['arg', 'frame', 'lineno']\nTRACE:shython_line:LINE:\"None\"\n"
        );
    }

    #[test]
    fn call_event_emits_block_only() {
        let output = run_one(EventKind::Call, &TraceArg::None);
        assert_eq!(output, "EVENT:\n<class 'str'>\ncall\n['arg', 'frame', 'function']\n");
        assert!(!output.contains("TRACE:shython_line"));
    }

    #[test]
    fn unknown_event_reports_empty_attribute_table() {
        let output = run_one(EventKind::Unknown, &TraceArg::None);
        assert_eq!(output, "EVENT:\n<class 'str'>\nunknown\n[]\n");
    }

    #[test]
    fn record_renders_payload_not_frame_line() {
        let mut tracer = LineTracer::new(CollectStringTrace::new());
        let frame = Frame::new("demo.py", "helper", 42);
        tracer.on_event(&frame, EventKind::Line, &TraceArg::Str("payload".to_string())).unwrap();
        let output = tracer.into_writer().into_output();
        assert!(output.ends_with("TRACE:shython_line:LINE:\"payload\"\n"));
        assert!(!output.contains("42"), "frame line numbers never reach the record");
    }

    #[test]
    fn inspector_can_be_disabled_independently() {
        let mut tracer = LineTracer::new(CollectStringTrace::new()).with_inspector(false);
        let frame = Frame::module_level("<stdin>", 1);
        tracer.on_event(&frame, EventKind::Line, &TraceArg::None).unwrap();
        tracer.on_event(&frame, EventKind::Call, &TraceArg::None).unwrap();
        let output = tracer.into_writer().into_output();
        assert_eq!(output, "TRACE:shython_line:LINE:\"None\"\n");
    }

    #[test]
    fn line_records_can_be_disabled_independently() {
        let mut tracer = LineTracer::new(CollectStringTrace::new()).with_line_records(false);
        let frame = Frame::module_level("<stdin>", 1);
        tracer.on_event(&frame, EventKind::Line, &TraceArg::None).unwrap();
        let output = tracer.into_writer().into_output();
        assert!(output.starts_with("EVENT:\n"));
        assert!(!output.contains("TRACE:shython_line"));
    }

    #[test]
    fn disabling_both_capabilities_keeps_the_hook_armed_but_silent() {
        let mut tracer = LineTracer::new(CollectStringTrace::new())
            .with_inspector(false)
            .with_line_records(false);
        let frame = Frame::module_level("<stdin>", 1);
        let disposition = tracer.on_event(&frame, EventKind::Line, &TraceArg::None).unwrap();
        assert_eq!(disposition, TraceDisposition::Continue);
        assert!(tracer.writer().output().is_empty());
    }
}
