use std::process::ExitCode;

use epgday_core::display::{DayOption, day_options, format_broadcast_time};
use epgday_core::policy::{nearest_actionable, sort_items_by_time};
use epgday_core::tz::format_rfc3339;
use epgday_core::{DayBucket, DisplayConfig, MovieRecord, Scheduled, group_by_day};
use serde::Serialize;

use crate::cli::{DaysArgs, GroupArgs};
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{parse_display_config, parse_now, parse_policy, read_movies};

const NO_TIME: &str = "--:--";

#[derive(Debug, Serialize)]
struct GroupOutput<'a> {
    now: String,
    tz: String,
    locale: String,
    selected: Option<&'a str>,
    buckets: &'a [DayBucket<MovieRecord>],
}

pub fn run_group(args: GroupArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let config = parse_display_config(&args.display)?;
    let now = parse_now(args.display.now.as_deref(), &config)?;
    let policy = parse_policy(&args.policy)?;
    let movies = read_movies(&args.input)?;

    let mut buckets = group_by_day(movies, now, &config);
    if args.sort_by_time {
        for bucket in &mut buckets {
            sort_items_by_time(bucket, config.tz);
        }
    }

    let selected = nearest_actionable(&buckets, now, config.tz, policy)
        .map(|idx| buckets[idx].key.as_str());

    match output_format {
        OutputFormat::Json => {
            let output = GroupOutput {
                now: format_rfc3339(&now.with_timezone(&config.tz)),
                tz: config.tz.to_string(),
                locale: config.locale.to_string(),
                selected,
                buckets: &buckets,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for bucket in &buckets {
                let is_selected = selected == Some(bucket.key.as_str());
                print!("{}", render_bucket(bucket, is_selected, &config));
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

pub fn run_days(args: DaysArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let config = parse_display_config(&args.display)?;
    let now = parse_now(args.display.now.as_deref(), &config)?;
    let movies = read_movies(&args.input)?;

    let buckets = group_by_day(&movies, now, &config);
    let options = day_options(&buckets);

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&options)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for option in &options {
                println!("{}", render_option(option));
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn render_bucket(
    bucket: &DayBucket<MovieRecord>,
    selected: bool,
    config: &DisplayConfig,
) -> String {
    let marker = if selected { '*' } else { ' ' };
    let mut out = format!(
        "{} {} [{}] ({})\n",
        marker,
        bucket.label,
        bucket.key,
        bucket.items.len()
    );

    for movie in &bucket.items {
        let time = format_broadcast_time(movie.broadcast_time(), config, false)
            .unwrap_or_else(|| NO_TIME.to_string());
        out.push_str(&format!("    {}  {}", time, movie.id));
        if let Some(title) = movie.display_title() {
            out.push_str(&format!("  {}", title));
        }
        out.push('\n');
    }

    out
}

fn render_option(option: &DayOption) -> String {
    let marker = if option.is_today { '*' } else { ' ' };
    format!("{} {}\t{}\t{}", marker, option.key, option.label, option.count)
}
