//! Command implementations for the NBA betting database CLI

pub mod init;
pub mod report;
pub mod setup;
pub mod verify;

#[cfg(test)]
mod tests;

use crate::Result;
use serde::Serialize;

/// Print a report as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
