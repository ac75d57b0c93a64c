/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use serde_json::Value;

/// Encodes records as newline-delimited JSON, one record per line
pub fn to_ndjson(rows: &[Value]) -> Result<String, AppError> {
    let mut body = String::new();
    for row in rows {
        body.push_str(&serde_json::to_string(row)?);
        body.push('\n');
    }
    Ok(body)
}

/// Parses either a JSON array or newline-delimited JSON into records
pub fn parse_rows(raw: &str) -> Result<Vec<Value>, AppError> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') {
        let Value::Array(rows) = serde_json::from_str(trimmed)? else {
            return Err(AppError::InvalidInput("expected a JSON array".to_string()));
        };
        return Ok(rows);
    }
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(AppError::from))
        .collect()
}
