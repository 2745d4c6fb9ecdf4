//! Shell Module
//!
//! User-facing entry points over the command interpreter.
//!
//! ## Entry Points
//! - Interactive: prompt, read a line, execute, print, repeat until `exit`
//!   or end of input
//! - Batch: run every line of a script file
//!
//! Both go through the same line executor, so a command behaves the same
//! typed at the prompt or read from a file. An interactive line consisting
//! of a single path ending in the configured script extension (`.txt` by
//! default) runs that file as a script.

mod session;

pub use session::{ScriptSummary, Shell};
