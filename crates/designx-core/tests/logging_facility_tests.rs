#![allow(clippy::unwrap_used, clippy::expect_used)]

use designx_core::errors::DesignXError;
use designx_core::logging_facility::test_capture::init_test_capture;
use designx_core::{log_op_end, log_op_error, log_op_start};
use designx_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events: Vec<_> = capture
        .events_for(op_name)
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
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, DesignXError::CanvasNotFound, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    let event = &error_events[0];
    assert_eq!(event.field(FIELD_ERR_CODE), Some("ERR_PRECONDITION_MISSING"));
    assert_eq!(event.field(FIELD_ERR_KIND), Some("PreconditionMissing"));
    assert_eq!(event.field("message"), Some("Could not find canvas container"));
    assert_eq!(event.level, tracing::Level::WARN);
}

#[test]
fn test_boundary_ownership_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_ownership_unique_4";

    log_op_start!(op_name, component_id = "comp-1");
    log_op_end!(op_name, duration_ms = 42, component_id = "comp-1");

    capture.assert_event_exists(op_name, EVENT_START);
    capture.assert_event_exists(op_name, EVENT_END);
    assert_eq!(capture.events_for(op_name).len(), 2);
    assert_eq!(
        capture.events_for(op_name)[1].field("component_id"),
        Some("comp-1")
    );
}

#[test]
fn test_component_field_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_field_unique_5";

    log_op_start!(op_name);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].field(FIELD_COMPONENT),
        Some("logging_facility_tests")
    );
}
