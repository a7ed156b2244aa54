use std::collections::BTreeMap;

use crate::types::Language;

/// Serialize generated scripts as a JSON object keyed by language name.
///
/// When `pretty` is `true` the output is indented for readability.
pub fn format_scripts(scripts: &BTreeMap<Language, String>, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(scripts).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    } else {
        serde_json::to_string(scripts).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
