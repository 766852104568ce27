//! Result pagination tests.

mod common;

use std::time::Duration;

use common::*;
use sumo_client::{JobState, ResultBatch, ResultKind};
use sumo_lifecycle::{
    LifecycleError, NoopObserver, PageOptions, ResultFilter, ValidationError, fetch_results,
    paginate,
};

fn all_pages(limit: u32) -> PageOptions {
    PageOptions {
        limit,
        all: true,
        sleep: Duration::from_secs(1),
        ..PageOptions::default()
    }
}

#[tokio::test(start_paused = true)]
async fn test_all_pages_stop_once_offset_exceeds_count() {
    let api = ScriptedApi::new(JOB_ID);
    let status = snapshot(JobState::DoneGatheringResults, 250, 0);
    let mut sink: Vec<ResultBatch> = Vec::new();

    let summary = paginate(&api, JOB_ID, &status, &all_pages(100), &mut sink)
        .await
        .unwrap();

    assert_eq!(api.page_offsets(ResultKind::Messages), vec![0, 100, 200]);
    assert!(api.page_offsets(ResultKind::Records).is_empty());
    assert_eq!(summary.message_pages, 3);
    assert_eq!(summary.record_pages, 0);
    assert_eq!(sink.len(), 3);
    assert!(!summary.no_results);
}

#[tokio::test(start_paused = true)]
async fn test_exact_multiple_fetches_one_more_page() {
    let api = ScriptedApi::new(JOB_ID);
    let status = snapshot(JobState::DoneGatheringResults, 0, 200);
    let mut sink: Vec<ResultBatch> = Vec::new();

    paginate(&api, JOB_ID, &status, &all_pages(100), &mut sink)
        .await
        .unwrap();

    assert_eq!(api.page_offsets(ResultKind::Records), vec![0, 100, 200]);
}

#[tokio::test(start_paused = true)]
async fn test_first_page_only_without_all() {
    let api = ScriptedApi::new(JOB_ID);
    let status = snapshot(JobState::DoneGatheringResults, 250, 30);
    let opts = PageOptions {
        limit: 100,
        offset: 20,
        ..PageOptions::default()
    };
    let mut sink: Vec<ResultBatch> = Vec::new();

    let summary = paginate(&api, JOB_ID, &status, &opts, &mut sink)
        .await
        .unwrap();

    assert_eq!(api.page_offsets(ResultKind::Messages), vec![20]);
    assert_eq!(api.page_offsets(ResultKind::Records), vec![20]);
    assert_eq!(summary.total_pages(), 2);
    assert_eq!(sink[0].kind, ResultKind::Messages);
    assert_eq!(sink[1].kind, ResultKind::Records);
}

#[tokio::test(start_paused = true)]
async fn test_filters_and_zero_counts_skip_kinds() {
    let status = snapshot(JobState::DoneGatheringResults, 10, 10);

    let api = ScriptedApi::new(JOB_ID);
    let opts = PageOptions {
        filter: ResultFilter::RecordsOnly,
        ..PageOptions::default()
    };
    paginate(&api, JOB_ID, &status, &opts, &mut Vec::<ResultBatch>::new())
        .await
        .unwrap();
    assert_eq!(api.count(CallKind::Messages), 0);
    assert_eq!(api.count(CallKind::Records), 1);

    let api = ScriptedApi::new(JOB_ID);
    let opts = PageOptions {
        filter: ResultFilter::MessagesOnly,
        ..PageOptions::default()
    };
    paginate(&api, JOB_ID, &status, &opts, &mut Vec::<ResultBatch>::new())
        .await
        .unwrap();
    assert_eq!(api.count(CallKind::Messages), 1);
    assert_eq!(api.count(CallKind::Records), 0);

    let api = ScriptedApi::new(JOB_ID);
    let messages_only = snapshot(JobState::DoneGatheringResults, 10, 0);
    paginate(&api, JOB_ID, &messages_only, &PageOptions::default(), &mut Vec::<ResultBatch>::new())
        .await
        .unwrap();
    assert_eq!(api.count(CallKind::Records), 0);
}

#[tokio::test(start_paused = true)]
async fn test_zero_counts_report_no_results() {
    let api = ScriptedApi::new(JOB_ID);
    let status = snapshot(JobState::DoneGatheringResults, 0, 0);
    let mut sink: Vec<ResultBatch> = Vec::new();

    let summary = paginate(&api, JOB_ID, &status, &all_pages(100), &mut sink)
        .await
        .unwrap();

    assert!(summary.no_results);
    assert!(api.calls().is_empty());
    assert!(sink.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_zero_limit_rejected_before_fetching() {
    let api = ScriptedApi::new(JOB_ID);
    let status = snapshot(JobState::DoneGatheringResults, 5, 0);

    let err = paginate(&api, JOB_ID, &status, &all_pages(0), &mut Vec::<ResultBatch>::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::Validation(ValidationError::InvalidLimit)
    ));
    assert!(api.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_page_error_aborts() {
    let api = ScriptedApi::new(JOB_ID).failing(CallKind::Messages, 500);
    let status = snapshot(JobState::DoneGatheringResults, 250, 5);
    let mut sink: Vec<ResultBatch> = Vec::new();

    let err = paginate(&api, JOB_ID, &status, &all_pages(100), &mut sink)
        .await
        .unwrap_err();
    assert_eq!(err.as_client_error().and_then(|e| e.status()), Some(500));
    assert!(sink.is_empty());
    assert_eq!(api.count(CallKind::Records), 0);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_results_reads_status_once() {
    let api = ScriptedApi::new(JOB_ID).with_statuses([snapshot(JobState::GatheringResults, 0, 0)]);
    let mut observer = RecordingObserver::default();

    let summary = fetch_results(
        &api,
        JOB_ID,
        &PageOptions::default(),
        &mut observer,
        &mut Vec::<ResultBatch>::new(),
    )
    .await
    .unwrap();

    assert!(summary.no_results);
    assert_eq!(api.count(CallKind::Status), 1);
    assert_eq!(observer.events, vec![Observed::NoResults(JOB_ID.to_string())]);

    let api = ScriptedApi::new(JOB_ID).with_statuses([snapshot(JobState::DoneGatheringResults, 3, 0)]);
    fetch_results(
        &api,
        JOB_ID,
        &PageOptions::default(),
        &mut NoopObserver,
        &mut Vec::<ResultBatch>::new(),
    )
    .await
    .unwrap();
    assert_eq!(
        api.calls()[1],
        ApiCall::Messages {
            job_id: JOB_ID.to_string(),
            limit: 50,
            offset: 0
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_offset_near_u64_max_stops_instead_of_wrapping() {
    let api = ScriptedApi::new(JOB_ID);
    let status = snapshot(JobState::DoneGatheringResults, 250, 0);
    let opts = PageOptions {
        offset: u64::MAX - 10,
        ..all_pages(100)
    };
    let mut sink: Vec<ResultBatch> = Vec::new();

    let summary = paginate(&api, JOB_ID, &status, &opts, &mut sink)
        .await
        .unwrap();

    assert_eq!(api.page_offsets(ResultKind::Messages), vec![u64::MAX - 10]);
    assert_eq!(summary.message_pages, 1);
}
