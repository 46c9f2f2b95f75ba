//! The trace-hook seam: the callback trait, its continuation value, and the
//! per-context slot the host interpreter dispatches through.

use crate::{
    event::{EventKind, TraceArg},
    frame::Frame,
    trace_error::TraceError,
};

/// Continuation value a trace hook returns to the interpreter.
///
/// This is how the callback re-arms (or drops) tracing for the frame it was
/// just invoked on. Hooks that want to keep seeing `line` events in the
/// current scope must return [`TraceDisposition::Continue`]; otherwise only
/// call-level events keep firing for that frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TraceDisposition {
    /// Keep the same hook armed for this frame, including line-level events,
    /// and propagate it into nested scopes.
    Continue,
    /// Stop tracing the current frame. Frames entered later still reach the
    /// installed hook.
    Detach,
}

/// Trait for settrace-style trace callbacks.
///
/// The host interpreter invokes the installed hook synchronously, on its own
/// thread, once per traced execution step. Implementations must not retain
/// the frame or payload borrows past the callback, and must not assume any
/// ordering guarantees across threads beyond what the host's output channel
/// provides.
pub trait TraceHook: std::fmt::Debug {
    /// Called once per traced execution step.
    ///
    /// # Arguments
    /// * `frame` - The activation the event belongs to
    /// * `kind` - The event-kind tag
    /// * `arg` - The event-specific auxiliary payload
    fn on_event(&mut self, frame: &Frame, kind: EventKind, arg: &TraceArg) -> Result<TraceDisposition, TraceError>;
}

/// The active-hook slot for one execution context.
///
/// This is the explicit stand-in for the interpreter's "current trace
/// function" state: the host owns one handle per context (one per thread in
/// a multi-threaded host), installs and clears hooks through it, and routes
/// every traced step through [`TraceHandle::dispatch`]. Keeping the slot an
/// ordinary owned value means tests and embedders can arm tracing without
/// process-wide side effects.
#[derive(Debug, Default)]
pub struct TraceHandle {
    hook: Option<Box<dyn TraceHook>>,
}

impl TraceHandle {
    /// Creates a handle with no hook installed.
    #[must_use]
    pub fn new() -> Self {
        Self { hook: None }
    }

    /// Makes `hook` the active trace callback for this context.
    ///
    /// Installing while a hook is already active replaces it: the last
    /// registration wins and exactly one callback is ever invoked per event.
    /// Once installed, the hook fires for every frame entered afterwards,
    /// including frames in library code the host did not author.
    pub fn install(&mut self, hook: Box<dyn TraceHook>) {
        self.hook = Some(hook);
    }

    /// Clears the slot, returning the previously active hook.
    ///
    /// This is the only cancellation primitive the tracing layer offers.
    pub fn uninstall(&mut self) -> Option<Box<dyn TraceHook>> {
        self.hook.take()
    }

    /// Whether a hook is currently installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.hook.is_some()
    }

    /// Routes one traced execution step to the installed hook.
    ///
    /// With no hook installed this is a silent no-op that tells the
    /// interpreter to carry on. Otherwise the hook's disposition and any
    /// error pass through verbatim.
    pub fn dispatch(&mut self, frame: &Frame, kind: EventKind, arg: &TraceArg) -> Result<TraceDisposition, TraceError> {
        match &mut self.hook {
            Some(hook) => hook.on_event(frame, kind, arg),
            None => Ok(TraceDisposition::Continue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hook that records the kinds it saw into a caller-shared log.
    #[derive(Debug)]
    struct RecordKinds(std::rc::Rc<std::cell::RefCell<Vec<EventKind>>>);

    impl TraceHook for RecordKinds {
        fn on_event(&mut self, _frame: &Frame, kind: EventKind, _arg: &TraceArg) -> Result<TraceDisposition, TraceError> {
            self.0.borrow_mut().push(kind);
            Ok(TraceDisposition::Continue)
        }
    }

    fn line_event() -> (Frame, EventKind, TraceArg) {
        (Frame::module_level("<stdin>", 1), EventKind::Line, TraceArg::None)
    }

    #[test]
    fn dispatch_without_install_is_silent() {
        let mut handle = TraceHandle::new();
        let (frame, kind, arg) = line_event();
        let disposition = handle.dispatch(&frame, kind, &arg).unwrap();
        assert_eq!(disposition, TraceDisposition::Continue);
        assert!(!handle.is_installed());
    }

    #[test]
    fn install_twice_leaves_one_active_callback() {
        let first = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let second = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut handle = TraceHandle::new();
        handle.install(Box::new(RecordKinds(first.clone())));
        handle.install(Box::new(RecordKinds(second.clone())));

        let (frame, kind, arg) = line_event();
        handle.dispatch(&frame, kind, &arg).unwrap();

        assert!(first.borrow().is_empty(), "replaced hook must not fire");
        assert_eq!(*second.borrow(), vec![EventKind::Line], "one invocation per event");
    }

    #[test]
    fn uninstall_returns_the_hook_and_silences_dispatch() {
        let log = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let mut handle = TraceHandle::new();
        handle.install(Box::new(RecordKinds(log.clone())));
        assert!(handle.is_installed());

        let removed = handle.uninstall();
        assert!(removed.is_some());
        assert!(handle.uninstall().is_none(), "slot is empty after uninstall");

        let (frame, kind, arg) = line_event();
        handle.dispatch(&frame, kind, &arg).unwrap();
        assert!(log.borrow().is_empty(), "no invocation after uninstall");
    }
}
