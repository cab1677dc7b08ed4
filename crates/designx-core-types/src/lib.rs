//! Core types shared across DesignX crates
//!
//! - **Correlation types**: SessionId, SessionContext
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction
//! - **Schema constants**: Canonical log field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{SessionContext, SessionId};
pub use sensitive::Sensitive;
