//! Description field parser
//!
//! Feature descriptions are newline-delimited `key: value` blobs, e.g.
//!
//! ```text
//! city: Toronto
//! province_state: ON
//! country: Canada
//! ```
//!
//! Keys are matched case-insensitively, the value is everything after the
//! first colon with surrounding whitespace removed. Unknown keys are
//! ignored. When a key appears on several lines the last one wins.

use crate::constants::description::{CITY_KEY, COUNTRY_KEY, PROVINCE_STATE_KEY};
use crate::neighborhood::Labels;
use serde::{Deserialize, Serialize};

/// Location fields extracted from a description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFields {
    pub city: String,
    pub province_state: String,
    pub country: String,
}

impl LocationFields {
    fn defaults(labels: &Labels) -> Self {
        Self {
            city: labels.city.clone(),
            province_state: labels.province_state.clone(),
            country: labels.country.clone(),
        }
    }
}

/// Parse a description using the default labels for missing fields
pub fn parse_location_fields(description: Option<&str>) -> LocationFields {
    parse_location_fields_with(description, &Labels::default())
}

/// Parse a description, filling missing fields from `labels`
pub fn parse_location_fields_with(description: Option<&str>, labels: &Labels) -> LocationFields {
    let mut fields = LocationFields::defaults(labels);

    let Some(description) = description else {
        return fields;
    };

    for line in description.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        let key = key.trim();
        if key.eq_ignore_ascii_case(CITY_KEY) {
            fields.city = value.to_string();
        } else if key.eq_ignore_ascii_case(PROVINCE_STATE_KEY) {
            fields.province_state = value.to_string();
        } else if key.eq_ignore_ascii_case(COUNTRY_KEY) {
            fields.country = value.to_string();
        }
    }

    fields
}
