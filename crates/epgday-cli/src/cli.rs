use clap::{Parser, Subcommand};

/// Group EPG movie feeds by broadcast day
#[derive(Parser, Debug)]
#[command(name = "epgday", version)]
#[command(about = "Group EPG movie feeds by broadcast day")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Group a movie feed into ordered day buckets
    Group(GroupArgs),
    /// List the days of a movie feed with item counts
    Days(DaysArgs),
    /// Explain how a single broadcast time is parsed and bucketed
    Explain(ExplainArgs),
}

#[derive(clap::Args, Debug)]
pub struct DisplayArgs {
    /// IANA display timezone; naive timestamps are read in this zone.
    /// Etc/GMT-3 keeps UTC+3 for dates before 2014
    #[arg(short, long, env = "EPGDAY_TZ", default_value = "Europe/Moscow")]
    pub tz: String,

    /// Label language: ru, en
    #[arg(short, long, env = "EPGDAY_LOCALE", default_value = "ru")]
    pub locale: String,

    /// Reference instant deciding "today" (defaults to the current time)
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct GroupArgs {
    #[command(flatten)]
    pub display: DisplayArgs,

    /// Input file with a JSON movie list or backend page (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Order items inside each day by broadcast time
    #[arg(long)]
    pub sort_by_time: bool,

    /// Which day to select: first_bucket, skip_elapsed_today
    #[arg(long, default_value = "first_bucket")]
    pub policy: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct DaysArgs {
    #[command(flatten)]
    pub display: DisplayArgs,

    /// Input file with a JSON movie list or backend page (use - for stdin)
    #[arg(long, default_value = "-")]
    pub input: String,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub display: DisplayArgs,

    /// Broadcast time string (e.g., 2024-03-15T20:00:00+03:00)
    #[arg(long)]
    pub ts: String,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}
