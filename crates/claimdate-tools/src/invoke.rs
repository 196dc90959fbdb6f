//! # Tool Invocation
//!
//! Dispatches a tool call (a tool name plus JSON arguments, as emitted by a
//! function-calling model) to the matching calculator.
//!
//! Two entry points:
//!
//! - [`invoke`] returns the report or a typed [`ToolError`].
//! - [`invoke_to_text`] always returns text: the report, an `Error: ...`
//!   line, or an `INVALID: ...` line when the event precedes the reference
//!   date. This is what an agent loop feeds back to the model so that it
//!   can correct its arguments and retry.
//!
//! Arguments are read leniently the way models actually emit them: string
//! values are passed through verbatim (the calculators trim them and quote
//! the raw text on rejection), and `deadline_days` may arrive as `30`,
//! `30.0` or `"30"`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use claimdate_core::{check_compliance, compute_business_days, compute_duration, DateAnalysisError};

use crate::catalog::Tool;
use crate::error::ToolError;

/// A single tool call envelope: `{"name": "...", "arguments": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name, e.g. `check_policy_compliance`.
    pub name: String,
    /// Tool arguments; a JSON object.
    #[serde(default)]
    pub arguments: Value,
}

impl ToolCall {
    /// Build a call from a name and arguments.
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Run the call. See [`invoke`].
    pub fn invoke(&self) -> Result<String, ToolError> {
        invoke(&self.name, &self.arguments)
    }

    /// Run the call, rendering any failure as text. See [`invoke_to_text`].
    pub fn invoke_to_text(&self) -> String {
        invoke_to_text(&self.name, &self.arguments)
    }
}

/// Invoke the tool called `name` with JSON `arguments`.
///
/// # Errors
///
/// - [`ToolError::UnknownTool`] for an unrecognized name.
/// - [`ToolError::ArgumentsNotObject`], [`ToolError::MissingArgument`],
///   [`ToolError::InvalidArgument`] for malformed argument objects.
/// - [`ToolError::Analysis`] when the calculator rejects the values.
pub fn invoke(name: &str, arguments: &Value) -> Result<String, ToolError> {
    let tool: Tool = name.parse()?;
    invoke_tool(tool, arguments)
}

/// Invoke `tool` with JSON `arguments`.
pub fn invoke_tool(tool: Tool, arguments: &Value) -> Result<String, ToolError> {
    let args = arguments
        .as_object()
        .ok_or(ToolError::ArgumentsNotObject {
            tool: tool.name(),
            found: json_kind(arguments),
        })?;

    tracing::debug!(tool = tool.name(), "invoking tool");

    let report = match tool {
        Tool::TimelineDuration => {
            let start = required_str(tool, args, "start_datetime")?;
            let end = required_str(tool, args, "end_datetime")?;
            compute_duration(start, end)?.to_string()
        }
        Tool::BusinessDays => {
            let start = required_str(tool, args, "start_date")?;
            let end = required_str(tool, args, "end_date")?;
            compute_business_days(start, end)?.to_string()
        }
        Tool::PolicyCompliance => {
            let event = required_str(tool, args, "event_date")?;
            let reference = required_str(tool, args, "reference_date")?;
            let deadline = deadline_days(tool, args)?;
            check_compliance(event, reference, deadline)?.to_string()
        }
    };

    Ok(report)
}

/// Invoke the tool called `name`, rendering failures as agent-facing text.
pub fn invoke_to_text(name: &str, arguments: &Value) -> String {
    match invoke(name, arguments) {
        Ok(report) => report,
        Err(err) => {
            tracing::warn!(tool = name, error = %err, "tool call rejected");
            render_error(&err)
        }
    }
}

/// Agent-facing rendering of a failed tool call.
pub fn render_error(err: &ToolError) -> String {
    match err {
        ToolError::Analysis(DateAnalysisError::InvalidSequence {
            event,
            reference,
            offset_days,
        }) => format!(
            "INVALID: Event date ({event}) is {} days BEFORE reference date ({reference}). \
             Event should occur after reference date.",
            offset_days.unsigned_abs()
        ),
        other => format!("Error: {other}"),
    }
}

fn required_str<'a>(
    tool: Tool,
    args: &'a Map<String, Value>,
    argument: &'static str,
) -> Result<&'a str, ToolError> {
    match args.get(argument) {
        None | Some(Value::Null) => Err(ToolError::MissingArgument {
            tool: tool.name(),
            argument,
        }),
        Some(Value::String(s)) if s.trim().is_empty() => Err(ToolError::MissingArgument {
            tool: tool.name(),
            argument,
        }),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(ToolError::InvalidArgument {
            tool: tool.name(),
            argument,
            expected: "string",
            found: other.to_string(),
        }),
    }
}

/// Read `deadline_days` as an integer. Integral floats and integer strings
/// are accepted; sign is checked by the calculator.
fn deadline_days(tool: Tool, args: &Map<String, Value>) -> Result<i64, ToolError> {
    const ARGUMENT: &str = "deadline_days";

    let missing = || ToolError::MissingArgument {
        tool: tool.name(),
        argument: ARGUMENT,
    };
    let rejected = |value: &Value, reason: &'static str| {
        ToolError::Analysis(DateAnalysisError::Parameter {
            name: ARGUMENT,
            value: value.to_string(),
            reason,
        })
    };
    let not_integer = |value: &Value| rejected(value, "must be an integer");

    let value = match args.get(ARGUMENT) {
        None | Some(Value::Null) => return Err(missing()),
        Some(value) => value,
    };

    match value {
        Value::Number(n) => {
            if let Some(days) = n.as_i64() {
                return Ok(days);
            }
            // Positive integers past i64::MAX only fit serde_json's u64 slot.
            if n.as_u64().is_some() {
                return Err(rejected(value, "exceeds the largest supported deadline"));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => Ok(f as i64),
                _ => Err(not_integer(value)),
            }
        }
        Value::String(s) if s.trim().is_empty() => Err(missing()),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| not_integer(value)),
        _ => Err(not_integer(value)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn duration_call() {
        let out = invoke(
            "calculate_timeline_duration",
            &json!({"start_datetime": "2024-01-15 09:00:00", "end_datetime": "2024-01-18 14:30:00"}),
        )
        .unwrap();
        assert_eq!(
            out,
            "Duration: 3 days, 5 hours, 30 minutes (Total: 77.50 hours)"
        );
    }

    #[test]
    fn padded_string_arguments_are_accepted() {
        let out = invoke(
            "calculate_business_days",
            &json!({"start_date": " 2024-01-29 ", "end_date": "2024-02-02\n"}),
        )
        .unwrap();
        assert!(out.starts_with("Business days: 5, Calendar days: 5, Weekend days: 0"));
    }

    #[test]
    fn deadline_accepts_integer_forms() {
        for deadline in [json!(30), json!(30.0), json!("30"), json!(" 30 ")] {
            let out = invoke(
                "check_policy_compliance",
                &json!({"event_date": "2024-01-20", "reference_date": "2024-01-15", "deadline_days": deadline}),
            )
            .unwrap();
            assert!(out.contains("(25 days remaining)"), "{out}");
        }
    }

    #[test]
    fn deadline_rejects_non_integers() {
        for deadline in [json!(3.5), json!("abc"), json!(true), json!([30])] {
            let err = invoke(
                "check_policy_compliance",
                &json!({"event_date": "2024-01-20", "reference_date": "2024-01-15", "deadline_days": deadline}),
            )
            .unwrap_err();
            assert!(
                matches!(err, ToolError::Analysis(DateAnalysisError::Parameter { .. })),
                "{err:?}"
            );
        }
    }

    #[test]
    fn deadline_past_i64_is_out_of_range_not_non_integer() {
        let err = invoke(
            "check_policy_compliance",
            &json!({"event_date": "2024-01-20", "reference_date": "2024-01-15", "deadline_days": u64::MAX}),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ToolError::Analysis(DateAnalysisError::Parameter {
                name: "deadline_days",
                value: "18446744073709551615".to_string(),
                reason: "exceeds the largest supported deadline",
            })
        );
        assert!(!err.to_string().contains("must be an integer"));
    }

    #[test]
    fn rejected_dates_are_quoted_as_sent() {
        let err = invoke(
            "calculate_business_days",
            &json!({"start_date": " 01/15/2024 ", "end_date": "2024-01-25"}),
        )
        .unwrap_err();
        assert!(
            matches!(
                &err,
                ToolError::Analysis(DateAnalysisError::Format { value, .. }) if value == " 01/15/2024 "
            ),
            "{err:?}"
        );
        assert!(err.to_string().contains("\" 01/15/2024 \""));
    }

    #[test]
    fn negative_deadline_is_parameter_error() {
        let err = invoke(
            "check_policy_compliance",
            &json!({"event_date": "2024-01-20", "reference_date": "2024-01-15", "deadline_days": -5}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn missing_and_blank_arguments() {
        let err = invoke("calculate_business_days", &json!({"end_date": "2024-01-25"})).unwrap_err();
        assert_eq!(
            err,
            ToolError::MissingArgument {
                tool: "calculate_business_days",
                argument: "start_date",
            }
        );

        let err = invoke(
            "calculate_timeline_duration",
            &json!({"start_datetime": "2024-01-15 09:00:00", "end_datetime": ""}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("required"));

        let err = invoke(
            "check_policy_compliance",
            &json!({"event_date": "2024-01-20", "reference_date": "2024-01-15", "deadline_days": null}),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("deadline_days is required"));
    }

    #[test]
    fn non_string_date_is_invalid_argument() {
        let err = invoke(
            "calculate_business_days",
            &json!({"start_date": 20240115, "end_date": "2024-01-25"}),
        )
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument { expected: "string", .. }));
    }

    #[test]
    fn arguments_must_be_object() {
        let err = invoke("calculate_business_days", &json!(["2024-01-15", "2024-01-25"])).unwrap_err();
        assert_eq!(
            err,
            ToolError::ArgumentsNotObject {
                tool: "calculate_business_days",
                found: "array",
            }
        );
    }

    #[test]
    fn unknown_tool() {
        let err = invoke("calculate_interest", &json!({})).unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(ref name) if name == "calculate_interest"));
    }

    #[test]
    fn text_rendering_of_event_before_reference() {
        let out = invoke_to_text(
            "check_policy_compliance",
            &json!({"event_date": "2024-01-10", "reference_date": "2024-01-15", "deadline_days": 30}),
        );
        assert_eq!(
            out,
            "INVALID: Event date (2024-01-10) is 5 days BEFORE reference date (2024-01-15). \
             Event should occur after reference date."
        );
    }

    #[test]
    fn text_rendering_of_format_error() {
        let out = invoke_to_text(
            "calculate_timeline_duration",
            &json!({"start_datetime": "2024/01/15 09:00:00", "end_datetime": "2024-01-15 17:00:00"}),
        );
        assert!(out.starts_with("Error: invalid start_datetime format"));
        assert!(out.contains("YYYY-MM-DD HH:MM:SS"));
    }

    #[test]
    fn tool_call_envelope_deserializes() {
        let call: ToolCall = serde_json::from_str(
            r#"{"name": "check_policy_compliance",
                "arguments": {"event_date": "2024-02-20", "reference_date": "2024-01-15", "deadline_days": 30}}"#,
        )
        .unwrap();
        assert_eq!(
            call.invoke().unwrap(),
            "NON-COMPLIANT: Event occurred 36 days after reference date. Deadline: 30 days. \
             Status: EXCEEDED deadline by 6 days"
        );
    }

    #[test]
    fn tool_call_without_arguments_reports_object_error() {
        let call: ToolCall = serde_json::from_str(r#"{"name": "calculate_business_days"}"#).unwrap();
        assert!(call.invoke_to_text().starts_with("Error: arguments for calculate_business_days"));
    }
}
