use designx_core::errors::{DesignXError, ExError, ExErrorKind};
use designx_core_types::SessionId;

#[test]
fn test_missing_designer_is_precondition() {
    let ex_err: ExError = DesignXError::DesignerNotBound.into();

    assert_eq!(ex_err.kind(), ExErrorKind::PreconditionMissing);
    assert_eq!(ex_err.code(), "ERR_PRECONDITION_MISSING");
    assert_eq!(
        ex_err.message(),
        "formDesigner not found. Locate the designer first."
    );
}

#[test]
fn test_component_not_found_carries_entity() {
    let err = DesignXError::ComponentNotFound {
        component_id: "comp-7".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.entity_id(), Some("comp-7"));
    assert!(ex_err.message().contains("comp-7"));
}

#[test]
fn test_container_not_found_distinct_from_precondition() {
    let ex_err: ExError = DesignXError::ContainerNotFound {
        container_id: "sidebar".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_ne!(ex_err.kind(), ExErrorKind::PreconditionMissing);
}

#[test]
fn test_missing_argument_is_invalid_input() {
    let ex_err: ExError = DesignXError::MissingArgument {
        field: "componentType".to_string(),
    }
    .into();

    assert_eq!(ex_err.code(), "ERR_INVALID_INPUT");
    assert_eq!(ex_err.message(), "componentType is required");
}

#[test]
fn test_invocation_failure_records_method() {
    let ex_err: ExError = DesignXError::InvocationFailed {
        method: "updateComponent".to_string(),
        reason: "settings must be an object".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvocationFailed);
    assert_eq!(ex_err.op(), Some("updateComponent"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::PreconditionMissing, "ERR_PRECONDITION_MISSING"),
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::InvocationFailed, "ERR_INVOCATION_FAILED"),
        (ExErrorKind::TaskFailed, "ERR_TASK_FAILED"),
        (ExErrorKind::Config, "ERR_CONFIG"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_session_id_attached_by_builder() {
    let session_id = SessionId::labeled("tab-1");
    let ex_err = ExError::new(ExErrorKind::TaskFailed)
        .with_op("run_crud_sessions")
        .with_session_id(session_id.clone())
        .with_message("task panicked");

    assert_eq!(ex_err.session_id(), Some(&session_id));
    assert!(ex_err.to_string().contains("ERR_TASK_FAILED"));
}

#[test]
fn test_serde_error_converts() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: DesignXError = parse_err.into();

    assert!(matches!(err, DesignXError::Serialization { .. }));
}
