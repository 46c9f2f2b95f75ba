#![doc = include_str!("../../../README.md")]

mod event;
mod frame;
mod hook;
mod io;
mod line_trace;
mod preload;
mod trace_error;

pub use crate::{
    event::{EventKind, TraceArg},
    frame::Frame,
    hook::{TraceDisposition, TraceHandle, TraceHook},
    io::{CollectStringTrace, SinkTrace, StdoutTrace, TraceWriter},
    line_trace::LineTracer,
    preload::preload,
    trace_error::TraceError,
};
