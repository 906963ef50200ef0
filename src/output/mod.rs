//! Output formatting for scan results
//!
//! A finished `ScanResult` renders either as a JSON document (`j`) or as an
//! indented listing (`h`). `render` returns the text; `print` writes it to
//! stdout, adding colour to the listing when enabled.

mod config;
mod human;
mod json;

use std::io::{self, Write};

pub use config::{OutputConfig, OutputFormat};
pub use human::HumanFormatter;
pub use json::{format_json, parse_structured};

use crate::error::RenderError;
use crate::tree::ScanResult;

/// Render a scan in the given format.
pub fn render(
    result: &ScanResult,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Structured => Ok(format_json(result, config.pretty)?),
        OutputFormat::Human => Ok(HumanFormatter::new(config.clone()).format(result)),
    }
}

/// Render a scan given a raw format token such as `"h"` or `"j"`.
pub fn render_token(
    result: &ScanResult,
    token: &str,
    config: &OutputConfig,
) -> Result<String, RenderError> {
    render(result, token.parse()?, config)
}

/// Print a scan to stdout.
pub fn print(
    result: &ScanResult,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), RenderError> {
    match format {
        OutputFormat::Human => HumanFormatter::new(config.clone()).print(result)?,
        OutputFormat::Structured => {
            let json = format_json(result, config.pretty)?;
            io::stdout().lock().write_all(json.as_bytes())?;
        }
    }
    Ok(())
}
