//! Time tool: simulated local time by timezone code.
//!
//! A fixed table of 15 common codes mapped to whole-hour UTC offsets; no
//! timezone database and no DST computation beyond the static entries
//! (PDT and PST are separate codes, likewise EDT/EST etc). Fractional-hour
//! zones are out of scope. The current instant comes from an injectable
//! [`Clock`] so tests are deterministic.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use super::{require_str_arg, Clock, SystemClock, Tool, ToolError, ToolOutput, ToolSpec};

/// Tool name for the time lookup.
pub const TOOL_GET_TIME: &str = "get_time";

/// Known timezone codes keyed by uppercased code: whole-hour offset from UTC.
static TIMEZONE_TABLE: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    HashMap::from([
        ("UTC", 0),
        ("GMT", 0),
        ("PST", -8),
        ("PDT", -7),
        ("EST", -5),
        ("EDT", -4),
        ("CST", -6),
        ("CDT", -5),
        ("MST", -7),
        ("MDT", -6),
        ("JST", 9),
        ("CET", 1),
        ("CEST", 2),
        ("AEST", 10),
        ("AEDT", 11),
    ])
});

/// Format used for all time output.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns a one-line current-time description for `timezone` at `now_utc`.
///
/// Known code (matched case-insensitively): the header shows the uppercased
/// code and the instant shifted by its offset; negative offsets can roll the
/// calendar date back. Unknown code: the header says UTC, the instant stays
/// at `now_utc`, and the input is echoed in the parenthetical with its
/// original casing.
pub fn time_report(timezone: &str, now_utc: DateTime<Utc>) -> String {
    let code = timezone.to_uppercase();
    match TIMEZONE_TABLE.get(code.as_str()) {
        Some(offset_hours) => {
            let local = now_utc + Duration::hours(i64::from(*offset_hours));
            format!("Current time in {}: {}", code, local.format(TIME_FORMAT))
        }
        None => format!(
            "Current time in UTC: {} (timezone '{}' not recognized, showing UTC)",
            now_utc.format(TIME_FORMAT),
            timezone
        ),
    }
}

/// Tool wrapper: extracts the `timezone` argument, reads the clock, and
/// delegates to [`time_report`].
pub struct TimeTool {
    clock: Arc<dyn Clock>,
}

impl TimeTool {
    /// Creates a TimeTool on the real system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a TimeTool on the given clock (tests pass a `FixedClock`).
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Default for TimeTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for TimeTool {
    fn name(&self) -> &str {
        TOOL_GET_TIME
    }

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: TOOL_GET_TIME.to_string(),
            description: Some(
                "Get the current time in a given timezone.".to_string(),
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "timezone": {
                        "type": "string",
                        "description": "Timezone code, e.g. UTC, PST, JST"
                    }
                },
                "required": ["timezone"]
            }),
        }
    }

    async fn call(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let timezone = require_str_arg(&args, "timezone")?;
        Ok(ToolOutput {
            text: time_report(&timezone, self.clock.now_utc()),
        })
    }
}
