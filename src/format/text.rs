//! Human-readable text output formatter

use crate::enrich::StoreOutcome;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::lookup::LookupResponse;

/// Text formatter - outputs human-readable summary
pub struct TextFormatter;

fn outcome_line(outcome: &StoreOutcome) -> String {
    match outcome {
        StoreOutcome::Ok { records } => format!("{} record(s)", records.len()),
        StoreOutcome::Failed { error } => format!("failed ({})", error),
        StoreOutcome::Disabled => "disabled".to_string(),
    }
}

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, response: &LookupResponse) -> Result<String> {
        let mut output = String::new();
        let result = &response.result;

        output.push_str(&format!("Neighborhood: {}\n", result.title));
        output.push_str(&format!("City: {}\n", result.city));
        output.push_str(&format!("Province/State: {}\n", result.province_state));
        output.push_str(&format!("Country: {}\n", result.country));

        if let Some(location) = &response.location {
            output.push_str(&format!(
                "\nGeocoded: {} ({:.6}, {:.6})\n",
                location.display_name, location.lng, location.lat
            ));
        }

        if let Some(enrichment) = &response.enrichment {
            output.push_str("\nEnrichment:\n");
            output.push_str(&format!("  CMS: {}\n", outcome_line(&enrichment.cms)));
            output.push_str(&format!("  Database: {}\n", outcome_line(&enrichment.database)));
        }

        Ok(output)
    }
}
