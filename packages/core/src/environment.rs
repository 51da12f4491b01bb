//! The Environment handle.

use std::fmt;
use std::sync::Arc;

use gangway_id::EnvironmentId;

use crate::enterable::{Enterable, Passthrough};

/// A live execution environment.
///
/// An `Environment` pairs a name with the capability that hooks its
/// transitions. Handles are shared as `Arc<Environment>`; identity is
/// pointer identity, and a registry returns the same handle for every
/// resolution of the same descriptor.
pub struct Environment {
    id: EnvironmentId,
    enterable: Arc<dyn Enterable>,
}

impl Environment {
    /// Create an environment with a custom capability.
    pub fn new(id: EnvironmentId, enterable: Arc<dyn Enterable>) -> Self {
        Self { id, enterable }
    }

    /// Create an environment with the identity capability.
    pub fn passthrough(id: EnvironmentId) -> Self {
        Self::new(id, Arc::new(Passthrough))
    }

    /// The environment's id.
    pub fn id(&self) -> &EnvironmentId {
        &self.id
    }

    /// The environment's transition capability.
    pub fn enterable(&self) -> &dyn Enterable {
        self.enterable.as_ref()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
