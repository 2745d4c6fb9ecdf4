//! Command Module
//!
//! Line-oriented command language over the registry.
//!
//! ## Line Format
//! Whitespace-separated tokens. The first token names the command; `_` is
//! accepted in place of `-` (`add_pool` == `add-pool`). Blank lines and
//! lines starting with `#` are skipped.
//!
//! ### Commands
//! ```text
//! add-pool          <pool>
//! remove-pool       <pool>
//! add-schema        <pool> <schema>
//! remove-schema     <pool> <schema>
//! add-collection    <pool> <schema> <collection> [avl|map]
//! remove-collection <pool> <schema> <collection>
//! add-record        <pool> <schema> <collection> <key> <value...>
//! update-record     <pool> <schema> <collection> <key> <value...>
//! read-record       <pool> <schema> <collection> <key>
//! read-range        <pool> <schema> <collection> <min> <max>
//! delete-record     <pool> <schema> <collection> <key>
//! exit
//! ```
//!
//! A record value is every token after the key, joined by single spaces.

mod types;
mod parser;
mod reply;
mod interpreter;

pub use types::Command;
pub use parser::parse_line;
pub use reply::Reply;
pub use interpreter::Interpreter;
