//! Trace events as delivered by the host interpreter.
//!
//! An event is the `(frame, kind, arg)` triple handed to the active
//! [`TraceHook`](crate::TraceHook) once per traced execution step. The
//! interpreter owns all three; hooks observe them for the duration of one
//! callback and no longer.

use std::fmt;

use strum::{Display, EnumString, IntoStaticStr};

/// Python type of every event-kind tag. Tags arrive from the interpreter as
/// strings, whatever the kind.
pub(crate) const TAG_TYPE: &str = "<class 'str'>";

/// Discriminator for what kind of execution step occurred.
///
/// The interpreter reports a fixed set of tags; anything outside that set
/// maps to [`EventKind::Unknown`] rather than failing, since new tags are a
/// host-version concern, not a caller error.
///
/// Uses strum derives for automatic `Display`, `FromStr`, and
/// `IntoStaticStr` implementations; the string form is the interpreter's
/// lowercase tag (`"line"`, `"call"`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, serde::Serialize, serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    /// A new statement is about to execute in the current frame.
    Line,
    /// A function call pushed a new frame.
    Call,
    /// A function return is about to pop the current frame.
    Return,
    /// An exception was raised in the current frame.
    Exception,
    /// A tag outside the known set (host interpreters may grow new ones).
    Unknown,
}

impl EventKind {
    /// Maps a raw interpreter tag to an event kind.
    ///
    /// Unrecognized tags become [`EventKind::Unknown`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::Unknown)
    }

    /// The inspectable attributes of an event of this kind.
    ///
    /// This is the fixed table behind the inspector's attribute-list line.
    /// It enumerates what the event carries per kind; it is a debugging aid,
    /// not a stable contract.
    #[must_use]
    pub const fn attributes(self) -> &'static [&'static str] {
        match self {
            Self::Line => &["arg", "frame", "lineno"],
            Self::Call => &["arg", "frame", "function"],
            Self::Return => &["arg", "frame", "retval"],
            Self::Exception => &["arg", "exc_type", "exc_value", "frame"],
            Self::Unknown => &[],
        }
    }
}

/// The event-specific auxiliary payload.
///
/// For `return` events this is the returned value, for `exception` events a
/// rendering of the raised exception; for `line` and `call` events the
/// interpreter passes [`TraceArg::None`].
///
/// `Display` is Python's default string conversion: `None`, `True`/`False`,
/// digit strings for numbers, raw contents (no quotes) for strings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TraceArg {
    /// Python `None`.
    None,
    /// A boolean payload.
    Bool(bool),
    /// An integer payload.
    Int(i64),
    /// A float payload.
    Float(f64),
    /// A string payload, stored as its already-converted text.
    Str(String),
}

impl fmt::Display for TraceArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => {
                if x.is_nan() {
                    f.write_str("nan")
                } else if x.is_infinite() {
                    f.write_str(if *x > 0.0 { "inf" } else { "-inf" })
                } else {
                    // ryu keeps the ".0" suffix on integral floats, matching str(1.0).
                    f.write_str(ryu::Buffer::new().format_finite(*x))
                }
            }
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for TraceArg {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for TraceArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for TraceArg {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for TraceArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}
