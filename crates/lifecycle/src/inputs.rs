//! Raw job inputs as supplied by the user.
//!
//! Every field is kept exactly as given; nothing is parsed here. Empty
//! strings count as "not supplied" so a flag passed with an empty value
//! behaves the same as an omitted flag.

use std::fmt;
use std::path::PathBuf;

/// The input options that take part in the mutual-exclusion rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputOption {
    Job,
    JobFile,
    Query,
    QueryFile,
    Span,
    From,
    To,
    Timezone,
    AutoParse,
}

impl InputOption {
    /// The option name as shown to the user.
    pub const fn name(&self) -> &'static str {
        match self {
            InputOption::Job => "job",
            InputOption::JobFile => "job-file",
            InputOption::Query => "query",
            InputOption::QueryFile => "query-file",
            InputOption::Span => "span",
            InputOption::From => "from",
            InputOption::To => "to",
            InputOption::Timezone => "timezone",
            InputOption::AutoParse => "auto-parse",
        }
    }
}

impl fmt::Display for InputOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unparsed job inputs from up to four channels: inline job JSON, a job
/// JSON file, an inline query, or a query file, plus time options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobInputs {
    pub job: Option<String>,
    pub job_file: Option<PathBuf>,
    pub query: Option<String>,
    pub query_file: Option<PathBuf>,
    pub span: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub timezone: Option<String>,
    pub by_receipt_time: bool,
    pub auto_parse: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl JobInputs {
    /// Inputs for an inline query over a relative span.
    pub fn with_query_span(query: impl Into<String>, span: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            span: Some(span.into()),
            ..Self::default()
        }
    }

    /// True when `option` was supplied with a non-empty value.
    pub fn is_present(&self, option: InputOption) -> bool {
        match option {
            InputOption::Job => self.job().is_some(),
            InputOption::JobFile => self.job_file().is_some(),
            InputOption::Query => self.query().is_some(),
            InputOption::QueryFile => self.query_file().is_some(),
            InputOption::Span => self.span().is_some(),
            InputOption::From => self.from().is_some(),
            InputOption::To => self.to().is_some(),
            InputOption::Timezone => self.timezone().is_some(),
            InputOption::AutoParse => self.auto_parse().is_some(),
        }
    }

    pub fn job(&self) -> Option<&str> {
        non_empty(&self.job)
    }

    pub fn job_file(&self) -> Option<&PathBuf> {
        self.job_file
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    pub fn query(&self) -> Option<&str> {
        non_empty(&self.query)
    }

    pub fn query_file(&self) -> Option<&PathBuf> {
        self.query_file
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    pub fn span(&self) -> Option<&str> {
        non_empty(&self.span)
    }

    pub fn from(&self) -> Option<&str> {
        non_empty(&self.from)
    }

    pub fn to(&self) -> Option<&str> {
        non_empty(&self.to)
    }

    pub fn timezone(&self) -> Option<&str> {
        non_empty(&self.timezone)
    }

    pub fn auto_parse(&self) -> Option<&str> {
        non_empty(&self.auto_parse)
    }

    /// True when the job is defined by inline JSON or a JSON file.
    pub fn uses_job_definition(&self) -> bool {
        self.job().is_some() || self.job_file().is_some()
    }
}
