//! Environment registries: turning names into live handles.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gangway_id::EnvironmentId;

use crate::environment::Environment;
use crate::error::Result;

/// Resolve environment names to live handles.
///
/// A registry may create an environment on first resolution. Repeated
/// resolutions of the same descriptor return the same handle.
pub trait Registry: Send + Sync {
    /// Resolve an environment by id, creating it if necessary.
    fn resolve(&self, id: &EnvironmentId) -> Result<Arc<Environment>>;
}

/// Creates environments on first resolution.
pub trait EnvironmentFactory: Send + Sync {
    /// Create the environment for an id.
    fn create(&self, id: &EnvironmentId) -> Result<Arc<Environment>>;
}

/// Factory producing environments with the identity capability.
pub struct PassthroughFactory;

impl EnvironmentFactory for PassthroughFactory {
    fn create(&self, id: &EnvironmentId) -> Result<Arc<Environment>> {
        Ok(Arc::new(Environment::passthrough(id.clone())))
    }
}

/// A process-local environment pool keyed by descriptor string.
///
/// Environments are created through the factory on first resolution and
/// pooled afterward. Environments that need a custom capability are
/// pre-seeded with [`register`](InMemoryRegistry::register).
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use gangway_core::{EnvironmentId, InMemoryRegistry, Registry};
///
/// let registry = InMemoryRegistry::new();
/// let id = EnvironmentId::parse("native:ui");
/// let a = registry.resolve(&id).unwrap();
/// let b = registry.resolve(&id).unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub struct InMemoryRegistry<F: EnvironmentFactory = PassthroughFactory> {
    pool: Mutex<HashMap<String, Arc<Environment>>>,
    factory: F,
}

impl InMemoryRegistry<PassthroughFactory> {
    /// Create a registry producing passthrough environments.
    pub fn new() -> Self {
        Self::with_factory(PassthroughFactory)
    }
}

impl Default for InMemoryRegistry<PassthroughFactory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: EnvironmentFactory> InMemoryRegistry<F> {
    /// Create a registry with a custom factory.
    pub fn with_factory(factory: F) -> Self {
        Self {
            pool: Mutex::new(HashMap::new()),
            factory,
        }
    }

    /// Pre-seed the pool with an environment. A later registration for
    /// the same descriptor replaces the pooled handle.
    pub fn register(&self, env: Arc<Environment>) {
        let key = env.id().to_string();
        self.lock().insert(key, env);
    }

    /// Number of pooled environments.
    pub fn pooled(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Environment>>> {
        self.pool.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<F: EnvironmentFactory> Registry for InMemoryRegistry<F> {
    fn resolve(&self, id: &EnvironmentId) -> Result<Arc<Environment>> {
        let key = id.to_string();
        if let Some(env) = self.lock().get(&key) {
            return Ok(env.clone());
        }

        // Create outside the lock; a concurrent first resolution may win
        // the insert, in which case its handle is the pooled one.
        let created = self.factory.create(id)?;
        let mut pool = self.lock();
        Ok(pool.entry(key).or_insert(created).clone())
    }
}
