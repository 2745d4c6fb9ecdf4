//! Line parser
//!
//! Turns one whitespace-tokenized line into a [`Command`].

use crate::error::{NestError, Result};
use crate::registry::CollectionPath;

use super::Command;

/// Parse a single line
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Ok(None);
    };
    if word.starts_with('#') {
        return Ok(None);
    }

    let name = word.replace('_', "-");
    let args: Vec<&str> = tokens.collect();

    let command = match name.as_str() {
        "add-pool" => {
            require(&name, &args, 1)?;
            Command::AddPool {
                pool: args[0].to_string(),
            }
        }
        "remove-pool" => {
            require(&name, &args, 1)?;
            Command::RemovePool {
                pool: args[0].to_string(),
            }
        }
        "add-schema" => {
            require(&name, &args, 2)?;
            Command::AddSchema {
                pool: args[0].to_string(),
                schema: args[1].to_string(),
            }
        }
        "remove-schema" => {
            require(&name, &args, 2)?;
            Command::RemoveSchema {
                pool: args[0].to_string(),
                schema: args[1].to_string(),
            }
        }
        "add-collection" => {
            require(&name, &args, 3)?;
            Command::AddCollection {
                path: path(&args),
                backend: args.get(3).map(|backend| backend.to_string()),
            }
        }
        "remove-collection" => {
            require(&name, &args, 3)?;
            Command::RemoveCollection { path: path(&args) }
        }
        "add-record" => {
            require(&name, &args, 5)?;
            Command::AddRecord {
                path: path(&args),
                key: args[3].to_string(),
                value: args[4..].join(" "),
            }
        }
        "update-record" => {
            require(&name, &args, 5)?;
            Command::UpdateRecord {
                path: path(&args),
                key: args[3].to_string(),
                value: args[4..].join(" "),
            }
        }
        "read-record" => {
            require(&name, &args, 4)?;
            Command::ReadRecord {
                path: path(&args),
                key: args[3].to_string(),
            }
        }
        "read-range" => {
            require(&name, &args, 5)?;
            Command::ReadRange {
                path: path(&args),
                min_key: args[3].to_string(),
                max_key: args[4].to_string(),
            }
        }
        "delete-record" => {
            require(&name, &args, 4)?;
            Command::DeleteRecord {
                path: path(&args),
                key: args[3].to_string(),
            }
        }
        "exit" => Command::Exit,
        _ => return Err(NestError::UnknownCommand(word.to_string())),
    };

    Ok(Some(command))
}

/// Fail with `MissingArguments` unless at least `expected` args are present
fn require(command: &str, args: &[&str], expected: usize) -> Result<()> {
    if args.len() < expected {
        return Err(NestError::MissingArguments {
            command: command.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// First three args as a collection path (caller has checked the count)
fn path(args: &[&str]) -> CollectionPath {
    CollectionPath::new(args[0], args[1], args[2])
}
