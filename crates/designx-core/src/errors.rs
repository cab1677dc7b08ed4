use designx_core_types::SessionId;
use thiserror::Error;

/// Result type alias using DesignXError
pub type Result<T> = std::result::Result<T, DesignXError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Absence found by the resolver is not an error and never shows up here;
/// these kinds classify failures at operation boundaries, where they are
/// folded into `OperationOutcome` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Resolution
    NotFound,
    /// An operation was invoked before its external context was established
    PreconditionMissing,
    InvalidInput,

    // External collaborator
    /// The external designer rejected or failed a call
    InvocationFailed,
    /// A parallel worker task panicked or was cancelled
    TaskFailed,

    // Integration/IO
    Config,
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::PreconditionMissing => "ERR_PRECONDITION_MISSING",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvocationFailed => "ERR_INVOCATION_FAILED",
            ExErrorKind::TaskFailed => "ERR_TASK_FAILED",
            ExErrorKind::Config => "ERR_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable kind plus optional context: the operation, the session
/// it ran in, and the identifier it concerned.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    session_id: Option<SessionId>,
    message: String,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            session_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the identifier (component, container) the error concerns
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(session_id) = &self.session_id {
            write!(f, " (session: {})", session_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for DesignX internals
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignXError {
    /// No designer capability has been bound to the session
    #[error("formDesigner not found. Locate the designer first.")]
    DesignerNotBound,

    /// No container eligible as the main canvas
    #[error("Could not find canvas container")]
    CanvasNotFound,

    /// The upward walk from the canvas did not reach the designer capability
    #[error("Could not find formDesigner context")]
    CapabilityNotFound,

    /// The surface found the capability but could not bind a callable handle
    #[error("formDesigner.{method} is not a function")]
    CapabilityNotCallable { method: String },

    /// A required argument was empty
    #[error("{field} is required")]
    MissingArgument { field: String },

    /// A container id did not resolve on the surface
    #[error("Container not found: {container_id}")]
    ContainerNotFound { container_id: String },

    /// A component id did not resolve on the surface
    #[error("Component not found: {component_id}")]
    ComponentNotFound { component_id: String },

    /// The designer refused the call
    #[error("Designer call {method} failed: {reason}")]
    InvocationFailed { method: String, reason: String },

    /// A tree dump could not be read into a tree
    #[error("Invalid tree dump: {reason}")]
    InvalidTreeDump { reason: String },

    /// Configuration could not be loaded
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from DesignXError to ExError for structured error handling
impl From<DesignXError> for ExError {
    fn from(err: DesignXError) -> Self {
        let message = err.to_string();
        match err {
            DesignXError::DesignerNotBound
            | DesignXError::CanvasNotFound
            | DesignXError::CapabilityNotFound
            | DesignXError::CapabilityNotCallable { .. } => {
                ExError::new(ExErrorKind::PreconditionMissing).with_message(message)
            }

            DesignXError::MissingArgument { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            DesignXError::ContainerNotFound { container_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(container_id)
                    .with_message(message)
            }

            DesignXError::ComponentNotFound { component_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(component_id)
                    .with_message(message)
            }

            DesignXError::InvocationFailed { method, .. } => {
                ExError::new(ExErrorKind::InvocationFailed)
                    .with_op(method)
                    .with_message(message)
            }

            DesignXError::InvalidTreeDump { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            DesignXError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::Config).with_message(message)
            }

            DesignXError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),

            DesignXError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for DesignXError {
    fn from(err: serde_json::Error) -> Self {
        DesignXError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for DesignXError {
    fn from(err: std::io::Error) -> Self {
        DesignXError::Io {
            message: err.to_string(),
        }
    }
}
