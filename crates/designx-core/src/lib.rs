//! DesignX Core - handle resolution for externally owned component trees
//!
//! This crate provides:
//! - Bounded upward walks that locate capabilities and identifiers
//!   (`resolver`)
//! - Identifier snapshots and the diff that finds what an action created
//!   (`snapshot`, `diff`)
//! - The designer surface seam, per-session context and the operations
//!   built on top of them (`surface`, `session`, `ops`)
//! - An in-memory tree used by the CLI and the test suites (`tree`)

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod outcome;
pub mod resolver;
pub mod session;
pub mod snapshot;
pub mod surface;
pub mod tree;

// Used by the logging macros
#[doc(hidden)]
pub use designx_core_types as core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use config::ResolverConfig;
pub use diff::{diff_all, diff_new};
pub use errors::{DesignXError, ExError, ExErrorKind, Result};
pub use model::{Identifier, NodeTree};
pub use outcome::OperationOutcome;
pub use resolver::{extract_fields, extract_identifier, find_capability, Capability, FieldSpec};
pub use session::DesignerSession;
pub use snapshot::{capture_snapshot, Snapshot};
pub use surface::{DesignerCall, DesignerHandle, DesignerSurface};
pub use tree::MemoryTree;
