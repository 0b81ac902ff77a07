//! CSV output: two-column `field,value` records for a single scenario
//! result, one record per line item for the comparison table.

use std::io;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use takehome_core::ComparisonRow;

/// Writes a flat result as `field,value` records.
pub fn print_fields<T: Serialize>(value: &T) -> Result<()> {
    let value = serde_json::to_value(value)?;
    let mut wtr = csv::Writer::from_writer(io::stdout().lock());
    wtr.write_record(["field", "value"])?;
    if let Value::Object(map) = value {
        for (key, val) in &map {
            let rendered = scalar(val);
            wtr.write_record([key.as_str(), rendered.as_str()])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the comparison rows, headers included, one record per row.
pub fn print_comparison(rows: &[ComparisonRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout().lock());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
