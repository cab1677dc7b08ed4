//! Per-session designer context.
//!
//! A `DesignerSession` owns everything one orchestration session needs:
//! its correlation ids, the resolver configuration and the designer handle
//! once it is bound. Sessions share nothing, so independent sessions can
//! run side by side against their own surfaces.

use crate::config::ResolverConfig;
use crate::errors::{DesignXError, Result};
use crate::surface::DesignerHandle;
use designx_core_types::{SessionContext, SessionId};

#[derive(Debug, Clone)]
pub struct DesignerSession<H> {
    context: SessionContext,
    config: ResolverConfig,
    designer: Option<DesignerHandle<H>>,
}

impl<H> DesignerSession<H> {
    /// Start a session with a fresh id
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_context(SessionContext::new(), config)
    }

    pub fn with_context(context: SessionContext, config: ResolverConfig) -> Self {
        Self {
            context,
            config,
            designer: None,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.context.session_id
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Bind a designer handle, replacing any previous one
    ///
    /// This is the direct path for systems that hand out a handle
    /// themselves; `ops::locate_designer` binds one found by walking the tree.
    pub fn register(&mut self, handle: DesignerHandle<H>) {
        self.designer = Some(handle);
    }

    pub fn designer(&self) -> Option<&DesignerHandle<H>> {
        self.designer.as_ref()
    }

    /// Drop the bound handle, e.g. after the page was reloaded
    pub fn release(&mut self) -> Option<DesignerHandle<H>> {
        self.designer.take()
    }

    /// The bound designer, provided it exposes `method`
    ///
    /// # Errors
    ///
    /// `DesignerNotBound` if nothing is bound, `CapabilityNotCallable` if the
    /// bound designer lacks `method`.
    pub fn require_designer(&self, method: &str) -> Result<&DesignerHandle<H>> {
        let designer = self.designer.as_ref().ok_or(DesignXError::DesignerNotBound)?;
        if !designer.supports(method) {
            return Err(DesignXError::CapabilityNotCallable {
                method: method.to_string(),
            });
        }
        Ok(designer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_designer_before_binding() {
        let session: DesignerSession<usize> = DesignerSession::new(ResolverConfig::default());
        assert_eq!(
            session.require_designer("addComponent").unwrap_err(),
            DesignXError::DesignerNotBound
        );
    }

    #[test]
    fn test_require_designer_checks_method() {
        let mut session: DesignerSession<usize> = DesignerSession::new(ResolverConfig::default());
        session.register(DesignerHandle::registered(vec!["addComponent".to_string()]));

        assert!(session.require_designer("addComponent").is_ok());
        assert_eq!(
            session.require_designer("deleteComponent").unwrap_err(),
            DesignXError::CapabilityNotCallable {
                method: "deleteComponent".to_string()
            }
        );
    }

    #[test]
    fn test_release_unbinds() {
        let mut session: DesignerSession<usize> = DesignerSession::new(ResolverConfig::default());
        session.register(DesignerHandle::registered(vec![]));
        assert!(session.release().is_some());
        assert!(session.designer().is_none());
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        let a: DesignerSession<usize> = DesignerSession::new(ResolverConfig::default());
        let b: DesignerSession<usize> = DesignerSession::new(ResolverConfig::default());
        assert_ne!(a.session_id(), b.session_id());
    }
}
