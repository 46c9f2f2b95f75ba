//! Read-only handles to the interpreter's live execution frames.

/// One active function invocation in the host interpreter.
///
/// The interpreter creates a `Frame` per activation and hands hooks a shared
/// borrow alongside each event. Hooks treat it as an opaque location handle:
/// the interpreter may invalidate or reuse it as soon as the callback
/// returns, so nothing here is retained by the tracing layer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Script the frame's code came from (a path, or `<stdin>` for REPL input).
    script_name: String,
    /// The name of the frame (function name, or None for module-level code).
    frame_name: Option<String>,
    /// 1-based line currently executing within the frame.
    lineno: u32,
    /// Calling frame, if any (module-level frames have none).
    parent: Option<Box<Self>>,
}

impl Frame {
    /// Creates a frame for a named function activation.
    #[must_use]
    pub fn new(script_name: impl Into<String>, frame_name: impl Into<String>, lineno: u32) -> Self {
        Self {
            script_name: script_name.into(),
            frame_name: Some(frame_name.into()),
            lineno,
            parent: None,
        }
    }

    /// Creates a nameless frame for module-level code.
    #[must_use]
    pub fn module_level(script_name: impl Into<String>, lineno: u32) -> Self {
        Self {
            script_name: script_name.into(),
            frame_name: None,
            lineno,
            parent: None,
        }
    }

    /// Links this frame to its caller.
    #[must_use]
    pub fn with_parent(mut self, parent: Self) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// The script this frame's code came from.
    #[must_use]
    pub fn script_name(&self) -> &str {
        &self.script_name
    }

    /// The function name, or `None` for module-level code.
    #[must_use]
    pub fn frame_name(&self) -> Option<&str> {
        self.frame_name.as_deref()
    }

    /// The 1-based line currently executing.
    #[must_use]
    pub fn lineno(&self) -> u32 {
        self.lineno
    }

    /// The calling frame, if this activation has one.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }
}
