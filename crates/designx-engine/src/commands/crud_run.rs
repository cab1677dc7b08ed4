//! Parallel form creation.
//!
//! Each form of a plan is created in its own tokio task with its own
//! session and its own [`FormCreator`]. Tasks share nothing; only the
//! final [`FormCreationReport`] of each comes back. A task that fails,
//! times out or panics is reported as failed without affecting the others.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use designx_core::errors::{ExError, ExErrorKind};
use designx_core::{log_op_end, log_op_start, Result};
use designx_core_types::{SessionContext, SessionId};
use serde::Serialize;
use serde_json::Value;

use super::crud::{CrudPlan, FormSpec, TemplateKind};

/// Creates one form within one session
#[async_trait]
pub trait FormCreator: Send {
    /// Create the form and return whatever the creator produced
    async fn create_form(&mut self, spec: &FormSpec, context: &SessionContext) -> Result<Value>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormCreationReport {
    pub kind: TemplateKind,
    pub form_name: String,
    pub session_id: SessionId,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<Value>,
}

impl FormCreationReport {
    fn created(spec: &FormSpec, context: &SessionContext, elapsed: Duration, artifact: Value) -> Self {
        Self {
            kind: spec.kind,
            form_name: spec.form_name.clone(),
            session_id: context.session_id.clone(),
            success: true,
            error: None,
            error_code: None,
            duration_ms: elapsed.as_millis() as u64,
            artifact: Some(artifact),
        }
    }

    fn failed(spec: &FormSpec, context: &SessionContext, elapsed: Duration, err: &ExError) -> Self {
        Self {
            kind: spec.kind,
            form_name: spec.form_name.clone(),
            session_id: context.session_id.clone(),
            success: false,
            error: Some(err.message().to_string()),
            error_code: Some(err.code().to_string()),
            duration_ms: elapsed.as_millis() as u64,
            artifact: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrudRunSummary {
    pub entity: String,
    pub reports: Vec<FormCreationReport>,
    pub duration_ms: u64,
}

impl CrudRunSummary {
    pub fn successful(&self) -> impl Iterator<Item = &FormCreationReport> {
        self.reports.iter().filter(|r| r.success)
    }

    pub fn failed(&self) -> impl Iterator<Item = &FormCreationReport> {
        self.reports.iter().filter(|r| !r.success)
    }

    pub fn all_succeeded(&self) -> bool {
        self.reports.iter().all(|r| r.success)
    }
}

/// Create every form of `plan` in parallel
///
/// `factory` builds a fresh creator per form. Each creation is bounded by
/// `timeout`. Reports come back in plan order.
pub async fn run_crud_sessions<F, C>(plan: &CrudPlan, timeout: Duration, factory: F) -> CrudRunSummary
where
    F: Fn(&FormSpec) -> C,
    C: FormCreator + 'static,
{
    let started = Instant::now();
    log_op_start!(
        "run_crud_sessions",
        entity = plan.entity.as_str(),
        forms = plan.forms.len()
    );

    let mut tasks = Vec::with_capacity(plan.forms.len());
    for spec in &plan.forms {
        let context = SessionContext::for_session(SessionId::labeled(spec.form_name.clone()));
        let mut creator = factory(spec);
        let task_spec = spec.clone();
        let task_context = context.clone();
        let handle = tokio::spawn(async move {
            let started = Instant::now();
            let result =
                tokio::time::timeout(timeout, creator.create_form(&task_spec, &task_context)).await;
            (result, started.elapsed())
        });
        tasks.push((spec, context, handle));
    }

    let mut reports = Vec::with_capacity(tasks.len());
    for (spec, context, handle) in tasks {
        let fail = |kind: ExErrorKind, message: String| {
            ExError::new(kind)
                .with_op("create_form")
                .with_entity_id(spec.form_name.clone())
                .with_session_id(context.session_id.clone())
                .with_message(message)
        };
        let report = match handle.await {
            Ok((Ok(Ok(artifact)), elapsed)) => {
                FormCreationReport::created(spec, &context, elapsed, artifact)
            }
            Ok((Ok(Err(err)), elapsed)) => {
                let err = ExError::from(err);
                let err = fail(err.kind(), err.message().to_string());
                FormCreationReport::failed(spec, &context, elapsed, &err)
            }
            Ok((Err(_), elapsed)) => {
                let err = fail(
                    ExErrorKind::TaskFailed,
                    format!("timed out after {} ms", timeout.as_millis()),
                );
                FormCreationReport::failed(spec, &context, elapsed, &err)
            }
            Err(join_err) => {
                let err = fail(
                    ExErrorKind::TaskFailed,
                    format!("session task failed: {}", join_err),
                );
                FormCreationReport::failed(spec, &context, started.elapsed(), &err)
            }
        };

        if report.success {
            tracing::info!(
                session_id = context.session_id.as_str(),
                form_name = report.form_name.as_str(),
                duration_ms = report.duration_ms,
                "form created"
            );
        } else {
            tracing::warn!(
                session_id = context.session_id.as_str(),
                form_name = report.form_name.as_str(),
                err.code = report.error_code.as_deref().unwrap_or_default(),
                message = report.error.as_deref().unwrap_or_default(),
                "form creation failed"
            );
        }
        reports.push(report);
    }

    let summary = CrudRunSummary {
        entity: plan.entity.clone(),
        reports,
        duration_ms: started.elapsed().as_millis() as u64,
    };
    log_op_end!(
        "run_crud_sessions",
        duration_ms = summary.duration_ms,
        succeeded = summary.successful().count(),
        failed = summary.failed().count()
    );
    summary
}
