//! Command orchestration layer.
//!
//! Designer command dispatch, CRUD planning and the parallel session runner.

pub mod crud;
pub mod crud_run;
pub mod designer_command;
pub mod draft_creator;
