use std::path::PathBuf;

use shared::{
    domain::{FileDescriptor, TransferProgress, UploadStatus, MAX_FILE_SIZE_BYTES},
    error::{TransportError, UploadError, ValidationError},
    messages::MessageKey,
};

use super::*;

const MIB: u64 = 1024 * 1024;

fn csv_file(name: &str, size_bytes: u64) -> FileDescriptor {
    FileDescriptor {
        name: name.to_string(),
        path: PathBuf::from("/home/user/exports").join(name),
        size_bytes,
        media_type: Some("text/csv".to_string()),
    }
}

fn plain_file(name: &str, size_bytes: u64) -> FileDescriptor {
    FileDescriptor {
        name: name.to_string(),
        path: PathBuf::from("/home/user/exports").join(name),
        size_bytes,
        media_type: Some("text/plain".to_string()),
    }
}

fn form() -> UploadForm {
    UploadForm::new(MAX_FILE_SIZE_BYTES)
}

fn assert_idle(form: &UploadForm) {
    assert!(!form.is_in_flight());
    assert_eq!(form.progress(), 0);
    assert!(form.can_pick());
}

#[test]
fn accepts_two_megabyte_csv_and_uploads_it() {
    let mut form = form();
    assert_eq!(form.pick(Some(csv_file("leads.csv", 2 * MIB))), PickOutcome::Accepted);
    assert!(form.status().is_none());
    assert!(form.can_submit());

    let submission = form.begin_submission().expect("submission");
    assert_eq!(submission.file.name, "leads.csv");
    assert!(form.is_in_flight());
    assert!(!form.can_submit());
    assert!(!form.can_pick());

    let total = 2 * MIB;
    let mut seen = Vec::new();
    for sent in [0, total / 2, total] {
        assert!(form.record_progress(submission.attempt, TransferProgress::new(sent, Some(total))));
        seen.push(form.progress());
    }
    assert_eq!(seen, vec![0, 50, 100]);

    assert!(form.finish(submission.attempt, Ok(())));
    assert_eq!(
        form.status(),
        &UploadStatus::Success(MessageKey::ScenarioStarted)
    );
    assert_eq!(form.selected(), None);
    assert_idle(&form);
}

#[test]
fn rejects_non_csv_name_and_type() {
    let mut form = form();
    assert_eq!(
        form.pick(Some(plain_file("leads.txt", 100))),
        PickOutcome::Rejected(ValidationError::NotCsv)
    );
    assert_eq!(form.selected(), None);
    assert_eq!(
        form.status(),
        &UploadStatus::Error(UploadError::Validation(ValidationError::NotCsv))
    );
    assert!(!form.can_submit());
}

#[test]
fn rejects_eleven_megabyte_csv() {
    let mut form = form();
    assert_eq!(
        form.pick(Some(csv_file("leads.csv", 11 * MIB))),
        PickOutcome::Rejected(ValidationError::TooLarge)
    );
    assert_eq!(form.selected(), None);
}

#[test]
fn rejected_pick_clears_previous_selection() {
    let mut form = form();
    form.pick(Some(csv_file("good.csv", 10)));
    form.pick(Some(plain_file("bad.txt", 10)));
    assert_eq!(form.selected(), None);
}

#[test]
fn new_pick_clears_previous_banner() {
    let mut form = form();
    form.pick(Some(plain_file("leads.txt", 10)));
    assert!(form.status().error().is_some());

    assert_eq!(form.pick(Some(csv_file("leads.csv", 10))), PickOutcome::Accepted);
    assert!(form.status().is_none());
}

#[test]
fn dismissed_dialog_only_clears_status() {
    let mut form = form();
    form.pick(Some(csv_file("leads.csv", 10)));
    let submission = form.begin_submission().expect("submission");
    form.finish(submission.attempt, Err(TransportError::ServerStatus(500)));
    assert!(form.status().error().is_some());

    assert_eq!(form.pick(None), PickOutcome::Dismissed);
    assert!(form.status().is_none());
    assert_eq!(form.selected().map(|file| file.name.as_str()), Some("leads.csv"));
}

#[test]
fn submit_without_selection_reports_missing_file() {
    let mut form = form();
    assert_eq!(form.begin_submission(), None);
    assert_eq!(
        form.status(),
        &UploadStatus::Error(UploadError::Validation(ValidationError::NoFileSelected))
    );
    assert_idle(&form);
}

#[test]
fn submit_is_refused_while_in_flight() {
    let mut form = form();
    form.pick(Some(csv_file("leads.csv", 10)));
    let first = form.begin_submission().expect("first submission");
    assert_eq!(form.begin_submission(), None);
    assert_eq!(form.pick(Some(csv_file("other.csv", 10))), PickOutcome::Unchanged);
    assert_eq!(form.selected().map(|file| file.name.as_str()), Some("leads.csv"));
    assert!(form.finish(first.attempt, Ok(())));
}

#[test]
fn every_exit_path_clears_in_flight_and_progress() {
    let outcomes = [
        Ok(()),
        Err(TransportError::ServerStatus(404)),
        Err(TransportError::NetworkFailure),
        Err(TransportError::Aborted),
        Err(TransportError::Unexpected),
    ];

    for outcome in outcomes {
        let mut form = form();
        form.pick(Some(csv_file("leads.csv", 1000)));
        let submission = form.begin_submission().expect("submission");
        form.record_progress(submission.attempt, TransferProgress::new(400, Some(1000)));
        assert_eq!(form.progress(), 40);

        assert!(form.finish(submission.attempt, outcome));
        assert_idle(&form);
    }
}

#[test]
fn network_failure_keeps_file_selected_for_resubmission() {
    let mut form = form();
    form.pick(Some(csv_file("leads.csv", 2 * MIB)));
    let submission = form.begin_submission().expect("submission");
    form.finish(submission.attempt, Err(TransportError::NetworkFailure));

    assert_eq!(
        form.status(),
        &UploadStatus::Error(UploadError::Transport(TransportError::NetworkFailure))
    );
    assert_eq!(form.selected().map(|file| file.name.as_str()), Some("leads.csv"));
    assert!(form.can_submit());

    let retry = form.begin_submission().expect("resubmission");
    assert!(retry.attempt > submission.attempt);
    assert!(form.status().is_none());
}

#[test]
fn success_resets_picker_so_same_file_can_be_picked_again() {
    let mut form = form();
    let file = csv_file("leads.csv", 10);
    form.pick(Some(file.clone()));
    assert_eq!(form.pick(Some(file.clone())), PickOutcome::Unchanged);

    let submission = form.begin_submission().expect("submission");
    form.finish(submission.attempt, Ok(()));
    assert_eq!(form.picker().value(), None);

    assert_eq!(form.pick(Some(file)), PickOutcome::Accepted);
    assert!(form.status().is_none());
}

#[test]
fn failure_keeps_picker_value() {
    let mut form = form();
    let file = csv_file("leads.csv", 10);
    form.pick(Some(file.clone()));
    let submission = form.begin_submission().expect("submission");
    form.finish(submission.attempt, Err(TransportError::Aborted));

    assert_eq!(form.pick(Some(file)), PickOutcome::Unchanged);
    assert!(form.status().error().is_some());
}

#[test]
fn progress_without_total_is_not_reported() {
    let mut form = form();
    form.pick(Some(csv_file("leads.csv", 10)));
    let submission = form.begin_submission().expect("submission");

    assert!(!form.record_progress(submission.attempt, TransferProgress::new(5, None)));
    assert_eq!(form.progress(), 0);
}

#[test]
fn progress_is_bounded_and_non_decreasing_for_growing_byte_counts() {
    let mut form = form();
    form.pick(Some(csv_file("leads.csv", 977)));
    let submission = form.begin_submission().expect("submission");

    let mut last = 0;
    for sent in (0..=977).step_by(13).chain(std::iter::once(977)) {
        form.record_progress(submission.attempt, TransferProgress::new(sent, Some(977)));
        assert!(form.progress() <= 100);
        assert!(form.progress() >= last);
        last = form.progress();
    }
    assert_eq!(last, 100);
}

#[test]
fn late_lower_progress_report_does_not_move_bar_back() {
    let mut form = form();
    form.pick(Some(csv_file("leads.csv", 1000)));
    let submission = form.begin_submission().expect("submission");

    form.record_progress(submission.attempt, TransferProgress::new(600, Some(1000)));
    form.record_progress(submission.attempt, TransferProgress::new(400, Some(1000)));
    assert_eq!(form.progress(), 60);

    form.finish(submission.attempt, Err(TransportError::NetworkFailure));
    let retry = form.begin_submission().expect("retry");
    form.record_progress(retry.attempt, TransferProgress::new(100, Some(1000)));
    assert_eq!(form.progress(), 10);
}

#[test]
fn stale_attempt_events_are_ignored() {
    let mut form = form();
    form.pick(Some(csv_file("leads.csv", 100)));
    let first = form.begin_submission().expect("first");
    form.finish(first.attempt, Err(TransportError::NetworkFailure));
    let second = form.begin_submission().expect("second");

    assert!(!form.record_progress(first.attempt, TransferProgress::new(90, Some(100))));
    assert!(!form.finish(first.attempt, Ok(())));
    assert_eq!(form.progress(), 0);
    assert!(form.is_in_flight());

    assert!(form.finish(second.attempt, Ok(())));
    assert!(!form.finish(second.attempt, Ok(())));
}
