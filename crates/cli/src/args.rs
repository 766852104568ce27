//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Convert parsed flags into lifecycle inputs and options.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not apply option-combination rules for job definitions; those live
//!   in the lifecycle engine so every entry point shares them.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use sumo_config::constants::{
    DEFAULT_KEEP_ALIVE_COUNT, DEFAULT_KEEP_ALIVE_DURATION_MINUTES,
    DEFAULT_KEEP_ALIVE_INTERVAL_SECS, DEFAULT_PROCESS_FULL_LIMIT, DEFAULT_RESULTS_LIMIT,
    DEFAULT_SLEEP_SECS,
};
use sumo_lifecycle::{
    JobInputs, KeepAliveOptions, PageOptions, PollOptions, ResultFilter, RunOptions,
};

#[derive(Parser)]
#[command(name = "sumo-search-job-cli")]
#[command(about = "Run Sumo Logic search jobs from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  sumo-search-job-cli job-process-full -q 'error | count by _sourceHost' -s 1h\n  sumo-search-job-cli job-create -J job.json\n  sumo-search-job-cli job-status JOB_ID --poll\n  sumo-search-job-cli job-results JOB_ID --records --all\n  sumo-search-job-cli -R eu job-delete JOB_ID\n"
)]
pub struct Cli {
    /// Path to a custom configuration file (overrides $HOME/.sumo-search-job-cli.yaml).
    #[arg(long = "config", global = true, env = "SUMO_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Deployment region (us1, us2, eu, au, de, jp, ca, in, fed, kr, ch)
    #[arg(short = 'R', long = "region", global = true, value_name = "DEPLOYMENT")]
    pub region: Option<String>,

    /// Access id
    #[arg(long, global = true)]
    pub access_id: Option<String>,

    /// Access key
    #[arg(long, global = true)]
    pub access_key: Option<String>,

    /// API base URL, overriding the region's default (e.g. https://api.eu.sumologic.com/api)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Suppress progress output on stderr
    #[arg(short = 'S', long, global = true)]
    pub quiet: bool,

    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options that define a search job.
#[derive(Args, Debug, Clone, Default)]
pub struct JobDefinitionArgs {
    /// Full search job definition as JSON
    #[arg(short = 'j', long)]
    pub job: Option<String>,

    /// Path to a file with a full search job definition
    #[arg(short = 'J', long, value_name = "FILE")]
    pub job_file: Option<PathBuf>,

    /// Search query
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Path to a file with the search query
    #[arg(short = 'Q', long, value_name = "FILE")]
    pub query_file: Option<PathBuf>,

    /// Size of the time span ending now (e.g. 15m, 3h, 1h30m)
    #[arg(short = 's', long, allow_hyphen_values = true)]
    pub span: Option<String>,

    /// Search window start (YYYY-MM-DDTHH:MM:SS)
    #[arg(short = 'f', long)]
    pub from: Option<String>,

    /// Search window end (YYYY-MM-DDTHH:MM:SS)
    #[arg(short = 't', long)]
    pub to: Option<String>,

    /// Timezone of the search window [default: UTC]
    #[arg(short = 'z', long)]
    pub timezone: Option<String>,

    /// Use receipt time instead of message timestamps
    #[arg(short = 'b', long)]
    pub by_receipt_time: bool,

    /// Auto-parsing mode (performance, intelligent)
    #[arg(short = 'A', long = "auto-parse")]
    pub auto_parse: Option<String>,
}

impl From<JobDefinitionArgs> for JobInputs {
    fn from(args: JobDefinitionArgs) -> Self {
        JobInputs {
            job: args.job,
            job_file: args.job_file,
            query: args.query,
            query_file: args.query_file,
            span: args.span,
            from: args.from,
            to: args.to,
            timezone: args.timezone,
            by_receipt_time: args.by_receipt_time,
            auto_parse: args.auto_parse,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a search job
    JobCreate {
        #[command(flatten)]
        job: JobDefinitionArgs,
    },

    /// Check the status of a search job
    JobStatus {
        /// Search job id
        job_id: String,

        /// Poll until the job is complete
        #[arg(short, long)]
        poll: bool,

        /// Seconds to sleep between polls
        #[arg(short = 'Z', long, default_value_t = DEFAULT_SLEEP_SECS)]
        sleep: u64,
    },

    /// Fetch the results of a search job
    JobResults {
        /// Search job id
        job_id: String,

        /// Retrieve records only
        #[arg(short, long, conflicts_with = "messages")]
        records: bool,

        /// Retrieve messages only
        #[arg(short, long)]
        messages: bool,

        /// Retrieve all pages (default is the first page)
        #[arg(short, long)]
        all: bool,

        /// Page size
        #[arg(short, long, default_value_t = DEFAULT_RESULTS_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,

        /// Starting offset
        #[arg(short, long, default_value_t = 0)]
        offset: u64,

        /// Seconds to sleep between pages
        #[arg(short = 'Z', long, default_value_t = DEFAULT_SLEEP_SECS)]
        sleep: u64,
    },

    /// Delete a search job
    JobDelete {
        /// Search job id
        job_id: String,
    },

    /// Keep a search job alive with periodic status requests
    JobKeepAlive {
        /// Search job id
        job_id: String,

        /// Seconds between requests
        #[arg(short, long, default_value_t = DEFAULT_KEEP_ALIVE_INTERVAL_SECS)]
        interval: u64,

        /// Minutes to keep the job alive
        #[arg(short = 'k', long, default_value_t = DEFAULT_KEEP_ALIVE_DURATION_MINUTES)]
        duration: u64,

        /// Number of requests to send
        #[arg(short, long, default_value_t = DEFAULT_KEEP_ALIVE_COUNT)]
        count: u32,

        /// Send requests until interrupted
        #[arg(short = 'f', long)]
        forever: bool,
    },

    /// Create a job, wait for it, fetch its results, and delete it
    JobProcessFull {
        #[command(flatten)]
        job: JobDefinitionArgs,

        /// Retrieve records only
        #[arg(short, long, conflicts_with = "messages")]
        records: bool,

        /// Retrieve messages only
        #[arg(short, long)]
        messages: bool,

        /// Retrieve all pages
        #[arg(
            short,
            long,
            default_value_t = true,
            action = ArgAction::Set,
            num_args = 0..=1,
            default_missing_value = "true"
        )]
        all: bool,

        /// Page size
        #[arg(short, long, default_value_t = DEFAULT_PROCESS_FULL_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,

        /// Starting offset
        #[arg(short, long, default_value_t = 0)]
        offset: u64,

        /// Fetch status once instead of polling until complete
        #[arg(long)]
        no_poll: bool,

        /// Seconds to sleep between polls
        #[arg(short = 'Z', long, default_value_t = DEFAULT_SLEEP_SECS)]
        sleep: u64,

        /// Seconds to sleep between pages [default: --sleep]
        #[arg(long)]
        page_sleep: Option<u64>,
    },
}

impl Commands {
    /// Job definition inputs, for the subcommands that create a job.
    pub fn job_inputs(&self) -> Option<JobInputs> {
        match self {
            Commands::JobCreate { job } | Commands::JobProcessFull { job, .. } => {
                Some(job.clone().into())
            }
            _ => None,
        }
    }
}

pub fn poll_options(poll: bool, sleep: u64) -> PollOptions {
    PollOptions {
        poll,
        sleep: Duration::from_secs(sleep),
    }
}

pub fn page_options(
    records: bool,
    messages: bool,
    all: bool,
    limit: u32,
    offset: u64,
    sleep: u64,
) -> PageOptions {
    PageOptions {
        limit,
        offset,
        all,
        filter: ResultFilter::from_flags(messages, records),
        sleep: Duration::from_secs(sleep),
    }
}

pub fn keep_alive_options(
    interval: u64,
    duration: u64,
    count: u32,
    forever: bool,
) -> KeepAliveOptions {
    KeepAliveOptions {
        interval: Duration::from_secs(interval),
        duration: Duration::from_secs(duration.saturating_mul(60)),
        count,
        forever,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn run_options(
    records: bool,
    messages: bool,
    all: bool,
    limit: u32,
    offset: u64,
    no_poll: bool,
    sleep: u64,
    page_sleep: Option<u64>,
) -> RunOptions {
    RunOptions {
        poll: poll_options(!no_poll, sleep),
        pages: page_options(
            records,
            messages,
            all,
            limit,
            offset,
            page_sleep.unwrap_or(sleep),
        ),
    }
}
