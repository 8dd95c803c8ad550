#![allow(clippy::unwrap_used, clippy::expect_used)]

use depcheck_core::errors::{DepCheckError, ExError, ExErrorKind};
use depcheck_core::logging_facility::test_capture::init_test_capture;
use depcheck_core::{log_op_end, log_op_error, log_op_start};
use depcheck_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(
        end_events[0].fields.get("duration_ms"),
        Some(&"42".to_string())
    );
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = DepCheckError::InvalidDate {
        value: "2024-02-30".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    let error_event = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    assert_eq!(
        error_event.fields.get("err.code"),
        Some(&"ERR_VALIDATION".to_string())
    );
    assert_eq!(
        error_event.fields.get("err.kind"),
        Some(&"Validation".to_string())
    );
}

#[test]
fn test_check_fields_carried_on_start_and_end() {
    let capture = init_test_capture();
    let op_name = "test_check_fields_unique_4";

    log_op_start!(op_name, category = "Workflow Maps", requested = 3usize);
    log_op_end!(op_name, duration_ms = 7, failures = 1usize);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].category.as_deref(), Some("Workflow Maps"));
    assert_eq!(events[0].fields.get("requested"), Some(&"3".to_string()));
    assert_eq!(events[1].fields.get("failures"), Some(&"1".to_string()));
}

#[test]
fn test_ex_error_logged_directly() {
    let capture = init_test_capture();
    let op_name = "test_ex_error_direct_unique_5";

    let err = ExError::new(ExErrorKind::Backend)
        .with_op("sql_select")
        .with_message("no such table: dba.CORT_LETTER_QUERY_seq");
    log_op_error!(op_name, err, duration_ms = 1);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let count = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name)
            && e.fields.get("err.code").map(String::as_str) == Some("ERR_BACKEND")
    });
    assert_eq!(count, 1);
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();

    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}
