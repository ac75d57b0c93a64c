use std::io::{self, Write};

use akeneo_cli::error::AppError;
use akeneo_cli::model::http::{ApiResponse, ResponseBody};

/// Renders a response body for stdout: JSON pretty printed, text as received
pub fn render(response: &ApiResponse) -> Result<String, AppError> {
    Ok(match &response.body {
        ResponseBody::Json(value) => serde_json::to_string_pretty(value)?,
        ResponseBody::Text(text) => text.clone(),
        ResponseBody::Empty => String::new(),
    })
}

/// Writes the rendered body followed by a newline, nothing for an empty body
///
/// A reader that went away, as in `akeneo get products --all | head`, is not an error.
pub fn write_response<W: Write>(out: &mut W, response: &ApiResponse) -> Result<(), AppError> {
    let rendered = render(response)?;
    if rendered.is_empty() {
        return Ok(());
    }
    match writeln!(out, "{rendered}").and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => Ok(other?),
    }
}

pub fn print_response(response: &ApiResponse) -> Result<(), AppError> {
    write_response(&mut io::stdout().lock(), response)
}
