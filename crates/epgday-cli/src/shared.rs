use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use chrono::{DateTime, Utc};
use epgday_core::policy::ActionablePolicy;
use epgday_core::{DisplayConfig, MovieRecord, MoviesResponse, parse_broadcast_time};
use serde::Deserialize;

use crate::cli::DisplayArgs;
use crate::error::{CliError, CliResult};

/// Accepted input documents: a bare list or one backend page.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MovieFeed {
    List(Vec<MovieRecord>),
    Page(MoviesResponse),
}

pub fn parse_display_config(args: &DisplayArgs) -> CliResult<DisplayConfig> {
    let config = DisplayConfig::from_names(&args.tz, &args.locale)?;
    tracing::debug!(tz = %config.tz, locale = %config.locale, "display config");
    Ok(config)
}

/// Resolve `--now`, accepting the same formats as broadcast times.
pub fn parse_now(now: Option<&str>, config: &DisplayConfig) -> CliResult<DateTime<Utc>> {
    match now {
        Some(raw) => parse_broadcast_time(raw, config.tz)
            .map(|parsed| parsed.instant)
            .map_err(|e| CliError::input(format!("Invalid --now value: {}", e))),
        None => Ok(Utc::now()),
    }
}

pub fn parse_policy(s: &str) -> CliResult<ActionablePolicy> {
    s.parse::<ActionablePolicy>()
        .map_err(|e| CliError::input(e.to_string()))
}

pub fn read_movies(input: &str) -> CliResult<Vec<MovieRecord>> {
    let raw = read_input(input).map_err(|e| CliError::runtime(format!("{:#}", e)))?;

    let feed: MovieFeed = serde_json::from_str(&raw).map_err(|e| {
        CliError::input(format!(
            "Input is neither a movie list nor a movies page: {}",
            e
        ))
    })?;

    let movies = match feed {
        MovieFeed::List(movies) => movies,
        MovieFeed::Page(page) => page.movies,
    };
    tracing::debug!(count = movies.len(), "read movies");

    Ok(movies)
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to open file '{}'", input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(now: Option<&str>) -> DisplayArgs {
        DisplayArgs {
            tz: "Europe/Moscow".to_string(),
            locale: "en".to_string(),
            now: now.map(str::to_string),
        }
    }

    #[test]
    fn now_accepts_naive_display_time() {
        let args = display(Some("2024-03-15 12:00"));
        let config = parse_display_config(&args).unwrap();
        let now = parse_now(args.now.as_deref(), &config).unwrap();
        assert_eq!(now.to_rfc3339(), "2024-03-15T09:00:00+00:00");
    }

    #[test]
    fn bad_now_is_input_error() {
        let config = DisplayConfig::default();
        let err = parse_now(Some("tomorrow-ish"), &config).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT_ERROR);
    }

    #[test]
    fn bad_timezone_is_input_error() {
        let mut args = display(None);
        args.tz = "Moon/Base".to_string();
        assert!(parse_display_config(&args).is_err());
    }

    #[test]
    fn feed_accepts_list_and_page() {
        let list: MovieFeed = serde_json::from_str(r#"[{"id": "a"}]"#).unwrap();
        assert!(matches!(list, MovieFeed::List(ref m) if m.len() == 1));

        let page: MovieFeed =
            serde_json::from_str(r#"{"movies": [{"id": "a"}, {"id": "b"}]}"#).unwrap();
        assert!(matches!(page, MovieFeed::Page(ref p) if p.movies.len() == 2));
    }

    #[test]
    fn missing_file_is_runtime_error() {
        let err = read_movies("/definitely/not/here.json").unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_RUNTIME_ERROR);
    }
}
