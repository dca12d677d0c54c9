use std::process::ExitCode;

use chrono::{DateTime, Utc};
use epgday_core::group::{day_key, day_label, day_weight};
use epgday_core::tz::{days_between, format_rfc3339, format_rfc3339_utc, local_date};
use epgday_core::{BroadcastFormat, DisplayConfig, NO_DATE_KEY, parse_broadcast_time};
use serde::Serialize;

use crate::cli::ExplainArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{parse_display_config, parse_now};

pub fn run_explain(args: ExplainArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let config = parse_display_config(&args.display)?;
    let now = parse_now(args.display.now.as_deref(), &config)?;

    let result = explain_broadcast_time(&args.ts, now, &config);

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Input: {}", result.input);
            println!("Timezone: {}", result.tz);
            println!("Status: {}", result.status);
            if let Some(dated) = &result.dated {
                println!("Format: {}", dated.format);
                println!("UTC: {}", dated.utc);
                println!("Local: {}", dated.local);
                println!("Day offset: {}", dated.day_offset);
            }
            if let Some(reason) = &result.reason {
                println!("Reason: {}", reason);
            }
            println!("Bucket: {} ({})", result.key, result.label);
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct ExplainResult {
    input: String,
    tz: String,
    status: &'static str,
    key: String,
    label: String,
    #[serde(flatten)]
    dated: Option<DatedDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Debug, Serialize)]
struct DatedDetails {
    format: BroadcastFormat,
    utc: String,
    local: String,
    day_offset: i64,
    weight: i64,
}

/// An unparseable value is reported as undated rather than as an error,
/// mirroring how grouping treats it.
fn explain_broadcast_time(
    input: &str,
    now: DateTime<Utc>,
    config: &DisplayConfig,
) -> ExplainResult {
    match parse_broadcast_time(input, config.tz) {
        Ok(parsed) => {
            let date = parsed.local.date_naive();
            let offset = days_between(local_date(now, config.tz), date);
            ExplainResult {
                input: input.to_string(),
                tz: config.tz.to_string(),
                status: "dated",
                key: day_key(date),
                label: day_label(date, offset, config.locale),
                dated: Some(DatedDetails {
                    format: parsed.format,
                    utc: format_rfc3339_utc(&parsed.instant),
                    local: format_rfc3339(&parsed.local),
                    day_offset: offset,
                    weight: day_weight(offset),
                }),
                reason: None,
            }
        }
        Err(err) => {
            tracing::debug!(%err, "explaining undated value");
            ExplainResult {
                input: input.to_string(),
                tz: config.tz.to_string(),
                status: "undated",
                key: NO_DATE_KEY.to_string(),
                label: config.locale.no_date().to_string(),
                dated: None,
                reason: Some(err.to_string()),
            }
        }
    }
}
