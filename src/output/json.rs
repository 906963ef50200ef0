//! JSON output formatting

use crate::tree::ScanResult;

/// Serialize a scan as one JSON document followed by a newline.
///
/// Field and child order follow the tree as built; nothing is sorted.
pub fn format_json(result: &ScanResult, pretty: bool) -> Result<String, serde_json::Error> {
    let mut json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    json.push('\n');
    Ok(json)
}

/// Read a document produced by `format_json` back into a scan result.
pub fn parse_structured(input: &str) -> Result<ScanResult, serde_json::Error> {
    serde_json::from_str(input)
}
