//! Reply definitions
//!
//! User-visible result of a successful command.

use std::fmt;

use bytes::Bytes;

/// A reply to print to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Status line for a command that changed something
    Done(String),

    /// A single record
    Record { key: String, value: Bytes },

    /// Keys returned by a range read
    Keys(Vec<String>),

    /// The session (or script) should stop
    Exit,
}

impl Reply {
    /// Create a status reply
    pub fn done(message: impl Into<String>) -> Self {
        Reply::Done(message.into())
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Done(message) => f.write_str(message),
            Reply::Record { key, value } => {
                write!(f, "key: {}, value: {}", key, String::from_utf8_lossy(value))
            }
            Reply::Keys(keys) if keys.is_empty() => f.write_str("(no keys)"),
            Reply::Keys(keys) => f.write_str(&keys.join("\n")),
            Reply::Exit => f.write_str("bye"),
        }
    }
}
