#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use designx_core::errors::DesignXError;
use designx_core::Result;
use designx_core_types::SessionContext;
use designx_engine::{
    run_crud_sessions, CrudPlan, DraftFormCreator, EngineConfig, FormCreator, FormDraft, FormSpec,
    TemplateKind,
};
use serde_json::{json, Value};

fn plan() -> CrudPlan {
    let config = EngineConfig {
        module: "Shesha.Booking".to_string(),
        ..EngineConfig::default()
    };
    CrudPlan::new("Customer", &config)
}

/// Behaves per template kind so one run can mix outcomes
enum Scripted {
    Succeed,
    Fail,
    Panic,
    Hang,
}

struct ScriptedCreator {
    behavior: Scripted,
}

#[async_trait]
impl FormCreator for ScriptedCreator {
    async fn create_form(&mut self, spec: &FormSpec, context: &SessionContext) -> Result<Value> {
        match self.behavior {
            Scripted::Succeed => Ok(json!({
                "formName": spec.form_name,
                "sessionId": context.session_id.as_str(),
            })),
            Scripted::Fail => Err(DesignXError::ContainerNotFound {
                container_id: "root".to_string(),
            }),
            Scripted::Panic => panic!("designer page crashed"),
            Scripted::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(Value::Null)
            }
        }
    }
}

fn scripted(table: fn() -> Scripted) -> impl Fn(&FormSpec) -> ScriptedCreator {
    move |spec: &FormSpec| ScriptedCreator {
        behavior: match spec.kind {
            TemplateKind::Table => table(),
            _ => Scripted::Succeed,
        },
    }
}

#[tokio::test]
async fn test_all_forms_created_in_plan_order() {
    let summary = run_crud_sessions(&plan(), Duration::from_secs(5), |_| {
        DraftFormCreator::default()
    })
    .await;

    assert!(summary.all_succeeded(), "{:?}", summary);
    let names: Vec<_> = summary.reports.iter().map(|r| r.form_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["customer-table", "customer-details", "customer-create"]
    );

    for report in &summary.reports {
        let draft: FormDraft = serde_json::from_value(report.artifact.clone().unwrap()).unwrap();
        assert_eq!(draft.form.kind, report.kind);
    }
}

#[tokio::test]
async fn test_sessions_are_distinct() {
    let summary = run_crud_sessions(&plan(), Duration::from_secs(5), scripted(|| Scripted::Succeed)).await;

    let ids: HashSet<_> = summary.reports.iter().map(|r| r.session_id.clone()).collect();
    assert_eq!(ids.len(), 3);
    for report in &summary.reports {
        let artifact = report.artifact.as_ref().unwrap();
        assert_eq!(artifact["sessionId"], json!(report.session_id.as_str()));
    }
}

#[tokio::test]
async fn test_one_failure_does_not_abort_siblings() {
    let summary = run_crud_sessions(&plan(), Duration::from_secs(5), scripted(|| Scripted::Fail)).await;

    assert!(!summary.all_succeeded());
    assert_eq!(summary.successful().count(), 2);
    let failed: Vec<_> = summary.failed().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].kind, TemplateKind::Table);
    assert_eq!(failed[0].error_code.as_deref(), Some("ERR_NOT_FOUND"));
    assert!(failed[0].artifact.is_none());
}

#[tokio::test]
async fn test_panicking_session_reported_as_task_failure() {
    let summary = run_crud_sessions(&plan(), Duration::from_secs(5), scripted(|| Scripted::Panic)).await;

    assert_eq!(summary.successful().count(), 2);
    let failed: Vec<_> = summary.failed().collect();
    assert_eq!(failed[0].error_code.as_deref(), Some("ERR_TASK_FAILED"));
}

#[tokio::test]
async fn test_hanging_session_times_out() {
    let summary = run_crud_sessions(&plan(), Duration::from_millis(50), scripted(|| Scripted::Hang)).await;

    assert_eq!(summary.successful().count(), 2);
    let failed: Vec<_> = summary.failed().collect();
    assert_eq!(failed[0].error_code.as_deref(), Some("ERR_TASK_FAILED"));
    assert_eq!(failed[0].error.as_deref(), Some("timed out after 50 ms"));
}

#[tokio::test]
async fn test_partial_plan() {
    let plan = plan().only(&[TemplateKind::Create]);

    let summary = run_crud_sessions(&plan, Duration::from_secs(5), |_| DraftFormCreator::default()).await;

    assert_eq!(summary.reports.len(), 1);
    assert_eq!(summary.reports[0].form_name, "customer-create");
}
