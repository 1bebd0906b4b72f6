//! Weather tool: simulated weather report by city name.
//!
//! A fixed case-insensitive table of six cities; anything else falls through
//! to a mild default. Total over its input: no error path, no side effects.

use std::collections::HashMap;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use super::{require_str_arg, Tool, ToolError, ToolOutput, ToolSpec};

/// Tool name for the weather lookup.
pub const TOOL_GET_WEATHER: &str = "get_weather";

/// Known cities keyed by lowercased name: (condition, temperature °C).
///
/// Built once at first use, never mutated. Lookup is by lowercased input;
/// the response echoes the caller's original casing.
static WEATHER_TABLE: Lazy<HashMap<&'static str, (&'static str, i32)>> = Lazy::new(|| {
    HashMap::from([
        ("seattle", ("Rainy", 12)),
        ("london", ("Cloudy", 11)),
        ("paris", ("Partly cloudy", 16)),
        ("tokyo", ("Sunny", 22)),
        ("new york", ("Clear", 18)),
        ("sydney", ("Sunny", 25)),
    ])
});

/// Celsius to Fahrenheit with integer truncation: `c * 9 / 5 + 32`.
///
/// The intermediate division truncates toward zero, so 12°C gives 53°F
/// (not the 54°F of round-to-nearest). The literal strings in the table
/// and tests depend on this exact arithmetic.
fn celsius_to_fahrenheit(c: i32) -> i32 {
    c * 9 / 5 + 32
}

/// Returns a one-line weather description for `location`.
///
/// Matching is case-insensitive against the fixed city table; no trimming, so
/// `" Seattle"` does not match. Unknown input gets the default line. Both
/// branches echo `location` exactly as supplied.
pub fn weather_report(location: &str) -> String {
    match WEATHER_TABLE.get(location.to_lowercase().as_str()) {
        Some((condition, temp_c)) => format!(
            "Weather in {}: {}, {}°C ({}°F)",
            location,
            condition,
            temp_c,
            celsius_to_fahrenheit(*temp_c)
        ),
        None => format!(
            "Weather in {}: Mild conditions, approximately 18°C (64°F)",
            location
        ),
    }
}

/// Tool wrapper: extracts the `location` argument and delegates to
/// [`weather_report`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WeatherTool;

impl WeatherTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        TOOL_GET_WEATHER
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: TOOL_GET_WEATHER.to_string(),
            description: Some(
                "Get the current weather for a given location.".to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": "The city to get the weather for, e.g. Seattle"
                    }
                },
                "required": ["location"]
            }),
        }
    }

    async fn call(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let location = require_str_arg(&args, "location")?;
        Ok(ToolOutput {
            text: weather_report(&location),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// **Scenario**: known city returns the exact literal line (truncating °F).
    #[test]
    fn known_city_exact_string() {
        assert_eq!(
            weather_report("Seattle"),
            "Weather in Seattle: Rainy, 12°C (53°F)"
        );
        assert_eq!(
            weather_report("Tokyo"),
            "Weather in Tokyo: Sunny, 22°C (71°F)"
        );
        assert_eq!(
            weather_report("New York"),
            "Weather in New York: Clear, 18°C (64°F)"
        );
    }

    /// **Scenario**: unknown city falls through to the default line, echoing input.
    #[test]
    fn unknown_city_default_line() {
        assert_eq!(
            weather_report("Atlantis"),
            "Weather in Atlantis: Mild conditions, approximately 18°C (64°F)"
        );
    }

    /// **Scenario**: match is case-insensitive but the input casing is echoed.
    #[test]
    fn case_insensitive_match_echoes_input_casing() {
        assert_eq!(
            weather_report("seattle"),
            "Weather in seattle: Rainy, 12°C (53°F)"
        );
        assert_eq!(
            weather_report("SEATTLE"),
            "Weather in SEATTLE: Rainy, 12°C (53°F)"
        );
    }

    /// **Scenario**: leading/trailing whitespace is not trimmed, so no match.
    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(
            weather_report(" Seattle"),
            "Weather in  Seattle: Mild conditions, approximately 18°C (64°F)"
        );
    }

    #[test]
    fn conversion_truncates_toward_zero() {
        assert_eq!(celsius_to_fahrenheit(12), 53);
        assert_eq!(celsius_to_fahrenheit(11), 51);
        assert_eq!(celsius_to_fahrenheit(16), 60);
        assert_eq!(celsius_to_fahrenheit(0), 32);
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(weather_report("Paris"), weather_report("Paris"));
        assert_eq!(weather_report(""), weather_report(""));
    }

    #[tokio::test]
    async fn tool_call_extracts_location() {
        let tool = WeatherTool::new();
        let out = tool.call(json!({ "location": "London" })).await.unwrap();
        assert_eq!(out.text, "Weather in London: Cloudy, 11°C (51°F)");
    }

    #[tokio::test]
    async fn tool_call_rejects_missing_location() {
        let tool = WeatherTool::new();
        let err = tool.call(json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }

    #[test]
    fn spec_names_the_location_parameter() {
        let spec = WeatherTool::new().spec();
        assert_eq!(spec.name, TOOL_GET_WEATHER);
        assert!(spec.input_schema["properties"]["location"].is_object());
        assert_eq!(spec.input_schema["required"][0], "location");
    }
}
