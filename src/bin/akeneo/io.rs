use std::fs;
use std::path::Path;

use akeneo_cli::error::AppError;
use akeneo_cli::model::bulk::parse_rows;
use serde_json::Value;

use crate::args::DataArgs;

fn read_raw(args: &DataArgs) -> Result<String, AppError> {
    if let Some(path) = &args.data_file {
        return read_file(path);
    }
    args.data
        .clone()
        .ok_or_else(|| AppError::InvalidInput("--data or --data-file is required".into()))
}

fn read_file(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|e| {
        AppError::InvalidInput(format!("failed to read input file {}: {e}", path.display()))
    })
}

/// Reads a single JSON payload
pub fn read_payload(args: &DataArgs) -> Result<Value, AppError> {
    Ok(serde_json::from_str(&read_raw(args)?)?)
}

/// Reads bulk records, given as a JSON array or as newline-delimited JSON
pub fn read_rows(args: &DataArgs) -> Result<Vec<Value>, AppError> {
    parse_rows(&read_raw(args)?)
}
