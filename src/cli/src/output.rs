//! Printing of node results.

use crate::errors::CliError;
use serde_json::Value;
use tracing::info;

/// Formats a result for the terminal. Scalars print bare, objects and
/// arrays as indented JSON. `None` for a null result.
pub fn format_result(result: &Value) -> Result<Option<String>, CliError> {
    let text = match result {
        Value::Null => return Ok(None),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => serde_json::to_string_pretty(other)?,
    };
    Ok(Some(text))
}

/// Prints the result of `command`.
pub fn print_result(command: &str, result: &Value) -> Result<(), CliError> {
    match format_result(result)? {
        Some(text) => println!("\n{}", text),
        None => info!("{} Result Empty", command),
    }
    Ok(())
}
