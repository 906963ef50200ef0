//! Output configuration types

use std::str::FromStr;

use crate::error::RenderError;

const DEFAULT_INDENT: usize = 5;

/// The two supported renderings of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented listing, selected with `h`
    Human,
    /// JSON document, selected with `j`
    Structured,
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" => Ok(OutputFormat::Human),
            "j" => Ok(OutputFormat::Structured),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Spaces added per nesting level in the human listing
    pub indent: usize,
    /// Pretty-print JSON instead of a single line
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: false,
            indent: DEFAULT_INDENT,
            pretty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        assert_eq!("h".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!(
            "j".parse::<OutputFormat>().unwrap(),
            OutputFormat::Structured
        );
    }

    #[test]
    fn test_parse_unknown_format() {
        for token in ["x", "", "H", "json"] {
            let err = token.parse::<OutputFormat>().unwrap_err();
            assert!(matches!(err, RenderError::UnknownFormat(ref t) if t == token));
        }
    }
}
