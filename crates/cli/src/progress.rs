//! Human-facing progress output.
//!
//! Responsibilities:
//! - Report job lifecycle events (creation, each status fetch, no results,
//!   deletion) on STDERR so stdout stays reserved for result JSON.
//! - Go silent under `--quiet`.

use std::io::{self, Write};

use sumo_lifecycle::{JobHandle, JobStatusSnapshot, LifecycleObserver};

/// Writes lifecycle events as tab-aligned lines.
pub(crate) struct ProgressReporter<W: Write = io::Stderr> {
    out: Option<W>,
}

impl ProgressReporter {
    /// Reporter on stderr; `quiet` disables all output.
    pub(crate) fn stderr(quiet: bool) -> Self {
        Self::new(io::stderr(), quiet)
    }
}

impl<W: Write> ProgressReporter<W> {
    pub(crate) fn new(out: W, quiet: bool) -> Self {
        Self {
            out: (!quiet).then_some(out),
        }
    }

    // Progress is best-effort; a closed stderr must not fail the job.
    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if let Some(out) = self.out.as_mut() {
            let _ = writeln!(out, "{text}");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> Option<W> {
        self.out
    }
}

impl<W: Write> LifecycleObserver for ProgressReporter<W> {
    fn job_created(&mut self, handle: &JobHandle) {
        self.line(format_args!("Location:\t{}", handle.location));
        self.line(format_args!("Job ID:\t\t{}", handle.id));
    }

    fn status(&mut self, snapshot: &JobStatusSnapshot) {
        self.line(format_args!("Status:\t\t{}", snapshot.state));
        self.line(format_args!("Message Count:\t{}", snapshot.message_count));
        self.line(format_args!("Record Count:\t{}", snapshot.record_count));
        for warning in &snapshot.pending_warnings {
            self.line(format_args!("Warning:\t{warning}"));
        }
        for error in &snapshot.pending_errors {
            self.line(format_args!("Error:\t\t{error}"));
        }
    }

    fn no_results(&mut self, job_id: &str) {
        self.line(format_args!("Job {job_id} returned no messages or records."));
    }

    fn job_deleted(&mut self, job_id: &str) {
        self.line(format_args!("Job {job_id} deleted."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sumo_lifecycle::JobState;

    #[test]
    fn test_status_lines() {
        let mut reporter = ProgressReporter::new(Vec::new(), false);
        let mut snapshot = JobStatusSnapshot::new(JobState::GatheringResults, 12, 3);
        snapshot.pending_warnings.push("slow query".to_string());
        reporter.status(&snapshot);

        let out = String::from_utf8(reporter.into_inner().unwrap()).unwrap();
        assert_eq!(
            out,
            "Status:\t\tGATHERING RESULTS\nMessage Count:\t12\nRecord Count:\t3\nWarning:\tslow query\n"
        );
    }

    #[test]
    fn test_created_and_deleted_lines() {
        let mut reporter = ProgressReporter::new(Vec::new(), false);
        let handle = JobHandle {
            id: "ABC123".to_string(),
            location: "https://api.sumologic.com/api/v1/search/jobs/ABC123".to_string(),
        };
        reporter.job_created(&handle);
        reporter.job_deleted("ABC123");

        let out = String::from_utf8(reporter.into_inner().unwrap()).unwrap();
        assert!(out.starts_with("Location:\thttps://api.sumologic.com/api/v1/search/jobs/ABC123\n"));
        assert!(out.contains("Job ID:\t\tABC123\n"));
        assert!(out.ends_with("Job ABC123 deleted.\n"));
    }

    #[test]
    fn test_quiet_writes_nothing() {
        let mut reporter = ProgressReporter::new(Vec::new(), true);
        reporter.no_results("ABC123");
        assert!(reporter.into_inner().is_none());
    }
}
