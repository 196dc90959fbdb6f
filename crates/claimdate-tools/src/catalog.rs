//! # Tool Catalog
//!
//! Names, descriptions and parameter schemas of the claim date tools, in
//! the shape agent frameworks expect when binding callable tools: a name,
//! a description that tells the model when to call it, and a JSON Schema
//! object for the arguments.
//!
//! The catalog is static. Tool names are stable identifiers that agents
//! emit verbatim; renaming one breaks every prompt that mentions it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::ToolError;

/// The claim date tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    /// Duration between two timestamps.
    #[serde(rename = "calculate_timeline_duration")]
    TimelineDuration,
    /// Business-day count between two dates.
    #[serde(rename = "calculate_business_days")]
    BusinessDays,
    /// Deadline compliance of an event date.
    #[serde(rename = "check_policy_compliance")]
    PolicyCompliance,
}

impl Tool {
    /// Every tool, in catalog order.
    pub fn all() -> &'static [Tool] {
        &[Self::TimelineDuration, Self::BusinessDays, Self::PolicyCompliance]
    }

    /// The name agents call this tool by.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TimelineDuration => "calculate_timeline_duration",
            Self::BusinessDays => "calculate_business_days",
            Self::PolicyCompliance => "check_policy_compliance",
        }
    }

    /// Catalog entry for this tool.
    pub fn spec(&self) -> &'static ToolSpec {
        match self {
            Self::TimelineDuration => &CATALOG[0],
            Self::BusinessDays => &CATALOG[1],
            Self::PolicyCompliance => &CATALOG[2],
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|tool| tool.name() == s.trim())
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// A JSON string.
    String,
    /// A JSON integer.
    Integer,
}

impl ParamKind {
    /// The JSON Schema type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tool parameter.
#[derive(Debug, Clone, Serialize)]
pub struct ParamSpec {
    /// Argument name.
    pub name: &'static str,
    /// JSON type.
    pub kind: ParamKind,
    /// What the argument means and its expected format.
    pub description: &'static str,
    /// A valid example value, as text.
    pub example: &'static str,
}

/// Catalog entry for one tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    /// The tool this entry describes.
    pub tool: Tool,
    /// What the tool computes.
    pub description: &'static str,
    /// Phrases in a user question that should trigger this tool.
    pub triggers: &'static [&'static str],
    /// Parameters, all required.
    pub params: &'static [ParamSpec],
}

impl ToolSpec {
    /// JSON Schema object describing the tool's arguments.
    pub fn parameters_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| {
                (
                    p.name.to_string(),
                    json!({
                        "type": p.kind,
                        "description": p.description,
                        "examples": [p.example],
                    }),
                )
            })
            .collect();
        let required: Vec<&str> = self.params.iter().map(|p| p.name).collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }

    /// Function-calling definition: name, description and parameter schema.
    pub fn definition(&self) -> Value {
        let mut description = self.description.to_string();
        if !self.triggers.is_empty() {
            description.push_str(" Use when the user asks about: ");
            description.push_str(&self.triggers.join(", "));
            description.push('.');
        }
        json!({
            "name": self.tool.name(),
            "description": description,
            "parameters": self.parameters_schema(),
        })
    }
}

/// The full tool catalog, in [`Tool::all`] order.
pub fn catalog() -> &'static [ToolSpec] {
    &CATALOG
}

static CATALOG: [ToolSpec; 3] = [
    ToolSpec {
        tool: Tool::TimelineDuration,
        description: "Calculate the precise duration between two timestamps, \
                      broken down into days, hours and minutes with total hours.",
        triggers: &[
            "how long",
            "time between",
            "duration",
            "elapsed time",
            "timeline",
            "incident duration",
            "claim processing time",
        ],
        params: &[
            ParamSpec {
                name: "start_datetime",
                kind: ParamKind::String,
                description: "Start timestamp in format YYYY-MM-DD HH:MM:SS",
                example: "2024-01-15 09:30:00",
            },
            ParamSpec {
                name: "end_datetime",
                kind: ParamKind::String,
                description: "End timestamp in format YYYY-MM-DD HH:MM:SS",
                example: "2024-01-18 14:45:00",
            },
        ],
    },
    ToolSpec {
        tool: Tool::BusinessDays,
        description: "Calculate business days (Monday-Friday, weekends excluded) \
                      between two dates inclusive, with calendar and weekend day counts.",
        triggers: &[
            "business days",
            "working days",
            "weekdays",
            "excluding weekends",
            "turnaround time in business days",
        ],
        params: &[
            ParamSpec {
                name: "start_date",
                kind: ParamKind::String,
                description: "Start date in format YYYY-MM-DD",
                example: "2024-01-15",
            },
            ParamSpec {
                name: "end_date",
                kind: ParamKind::String,
                description: "End date in format YYYY-MM-DD",
                example: "2024-01-25",
            },
        ],
    },
    ToolSpec {
        tool: Tool::PolicyCompliance,
        description: "Check whether an event occurred within the required number \
                      of days after a reference date, such as a claim filing deadline.",
        triggers: &[
            "check deadline",
            "verify compliance",
            "within timeframe",
            "timely filing",
            "reported on time",
            "within X days",
            "notification requirement",
        ],
        params: &[
            ParamSpec {
                name: "event_date",
                kind: ParamKind::String,
                description: "Date of the event to check, in format YYYY-MM-DD",
                example: "2024-01-20",
            },
            ParamSpec {
                name: "reference_date",
                kind: ParamKind::String,
                description: "Reference date (e.g. incident date) in format YYYY-MM-DD",
                example: "2024-01-15",
            },
            ParamSpec {
                name: "deadline_days",
                kind: ParamKind::Integer,
                description: "Maximum allowed days between reference and event (non-negative integer)",
                example: "30",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_matches_tool_all() {
        let names: Vec<&str> = catalog().iter().map(|s| s.tool.name()).collect();
        let expected: Vec<&str> = Tool::all().iter().map(|t| t.name()).collect();
        assert_eq!(names, expected);
        for tool in Tool::all() {
            assert_eq!(tool.spec().tool, *tool);
        }
    }

    #[test]
    fn tool_name_round_trips_through_from_str() {
        for tool in Tool::all() {
            assert_eq!(tool.name().parse::<Tool>().unwrap(), *tool);
        }
        assert!(matches!(
            "calculate_weather".parse::<Tool>(),
            Err(ToolError::UnknownTool(_))
        ));
    }

    #[test]
    fn tool_serde_uses_agent_names() {
        let json = serde_json::to_string(&Tool::PolicyCompliance).unwrap();
        assert_eq!(json, "\"check_policy_compliance\"");
    }

    #[test]
    fn compliance_schema_requires_all_params() {
        let schema = Tool::PolicyCompliance.spec().parameters_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(
            schema["required"],
            json!(["event_date", "reference_date", "deadline_days"])
        );
        assert_eq!(schema["properties"]["deadline_days"]["type"], "integer");
        assert_eq!(schema["properties"]["event_date"]["type"], "string");
    }

    #[test]
    fn param_kind_displays_as_schema_type() {
        for kind in [ParamKind::String, ParamKind::Integer] {
            assert_eq!(kind.to_string(), kind.as_str());
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.as_str());
        }
        assert_eq!(ParamKind::Integer.to_string(), "integer");
        assert_eq!(ParamKind::String.to_string(), "string");
    }

    #[test]
    fn definition_carries_name_and_triggers() {
        let def = Tool::BusinessDays.spec().definition();
        assert_eq!(def["name"], "calculate_business_days");
        let description = def["description"].as_str().unwrap();
        assert!(description.contains("working days"));
        assert!(def["parameters"]["properties"]["start_date"].is_object());
    }
}
