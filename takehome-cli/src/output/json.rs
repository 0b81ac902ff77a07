use anyhow::Result;
use serde::Serialize;

/// Pretty-prints any serializable result to stdout. Money fields come out
/// as decimal strings, so nothing is lost to float conversion.
pub fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
