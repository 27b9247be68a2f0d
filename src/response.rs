use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use crate::actions::delete_file::DeleteOutcome;
use crate::errors::DeleteError;

pub(crate) const MISSING_FILENAME: &str = "Error: Filename is not provided.";
pub(crate) const IS_DIRECTORY: &str = "Error: Filename corresponds to a directory, not a file.";
pub(crate) const DELETED: &str = "File deleted successfully.";
pub(crate) const NOT_FOUND: &str = "File not found.";
pub(crate) const DELETE_FAILED: &str = "Error: Failed to delete file.";

#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// CGI headers when GATEWAY_INTERFACE is set, bare body otherwise
    #[default]
    Auto,
    /// `Status` and `Content-Type` headers followed by the body
    Cgi,
    /// Body only
    Plain,
}

impl OutputMode {
    pub fn resolve(self, gateway_interface_set: bool) -> OutputMode {
        match self {
            OutputMode::Auto if gateway_interface_set => OutputMode::Cgi,
            OutputMode::Auto => OutputMode::Plain,
            other => other,
        }
    }
}

pub(crate) fn render_body(result: &Result<DeleteOutcome, DeleteError>) -> &'static str {
    match result {
        Ok(DeleteOutcome::MissingFilename) => MISSING_FILENAME,
        Ok(DeleteOutcome::IsDirectory) => IS_DIRECTORY,
        Ok(DeleteOutcome::Deleted) => DELETED,
        Ok(DeleteOutcome::NotFound) => NOT_FOUND,
        Err(DeleteError::RemoveFailed { .. }) => DELETE_FAILED,
    }
}

pub(crate) fn status(result: &Result<DeleteOutcome, DeleteError>) -> (u16, &'static str) {
    match result {
        Ok(DeleteOutcome::Deleted) => (200, "OK"),
        Ok(DeleteOutcome::MissingFilename) => (400, "Bad Request"),
        Ok(DeleteOutcome::NotFound) => (404, "Not Found"),
        Ok(DeleteOutcome::IsDirectory) => (409, "Conflict"),
        Err(DeleteError::RemoveFailed { .. }) => (500, "Internal Server Error"),
    }
}

/// Writes the response for one invocation. `mode` must already be resolved.
pub(crate) fn write_response<W: Write>(
    out: &mut W,
    mode: OutputMode,
    result: &Result<DeleteOutcome, DeleteError>,
) -> Result<()> {
    if mode == OutputMode::Cgi {
        let (code, reason) = status(result);
        write!(out, "Status: {} {}\r\n", code, reason)
            .and_then(|_| write!(out, "Content-Type: text/plain; charset=utf-8\r\n\r\n"))
            .context("Failed to write CGI headers")?;
    }
    out.write_all(render_body(result).as_bytes())
        .context("Failed to write response body")?;
    out.flush().context("Failed to flush response")?;
    Ok(())
}
