//! Output formatting for CLI responses.

use serde::Serialize;

/// Prints `value` to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
