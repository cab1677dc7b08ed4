//! DesignX Engine - Orchestration layer
//!
//! Dispatches designer commands against a session and its surface, plans
//! CRUD form sets, and runs form creation in independent parallel sessions.

pub mod commands;
pub mod config;

pub use commands::crud::{CrudPlan, FormSpec, TemplateKind};
pub use commands::crud_run::{run_crud_sessions, CrudRunSummary, FormCreationReport, FormCreator};
pub use commands::designer_command::{apply_designer_command, apply_designer_commands, DesignerCommand};
pub use commands::draft_creator::{DraftFormCreator, FormDraft};
pub use config::EngineConfig;
