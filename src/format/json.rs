//! JSON output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::lookup::LookupResponse;

/// JSON formatter - outputs full response as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON response"
    }

    fn format(&self, response: &LookupResponse) -> Result<String> {
        Ok(serde_json::to_string_pretty(response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighborhood::{Labels, ResolutionResult};

    #[test]
    fn test_json_format() {
        let response = LookupResponse {
            result: ResolutionResult::not_found(&Labels::default()),
            location: None,
            enrichment: None,
        };

        let output = JsonFormatter.format(&response).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["title"], "Unknown Neighborhood");
        assert_eq!(parsed["provinceState"], "Unknown Province/State");
        assert!(parsed.get("location").is_none());
    }
}
