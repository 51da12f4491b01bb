//! The bridge: tracking, entering, and calling across environments.

use std::sync::Arc;

use tracing::{debug, trace};

use gangway_core::{
    Continuation, Environment, EnvironmentId, Error, InMemoryRegistry, Registry, Result, Validity,
    NATIVE_ROOT,
};
use gangway_id::PurposePath;

use crate::current::CurrentMap;
use crate::hop::{next_hop, Hop};

/// The transition bridge between execution environments.
///
/// A `Bridge` owns the per-thread current-environment tracker and a
/// registry, and exposes the four transition operations:
///
/// - [`current_environment`](Bridge::current_environment): which
///   environment the calling thread is inside
/// - [`enter`](Bridge::enter): move the calling thread to a target
///   environment, with lasting effect
/// - [`invoke`](Bridge::invoke): run one call as if inside a target
///   environment, restoring the ambient state afterward
/// - [`is_valid`](Bridge::is_valid): whether an environment is usable
///
/// Two bridges are two independent worlds; nothing is process-global.
pub struct Bridge {
    registry: Arc<dyn Registry>,
    current: CurrentMap,
}

impl Bridge {
    /// Create a bridge over a registry.
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self {
            registry,
            current: CurrentMap::new(),
        }
    }

    /// Create a bridge over a fresh in-memory registry producing
    /// passthrough environments.
    pub fn with_default_registry() -> Self {
        Self::new(Arc::new(InMemoryRegistry::new()))
    }

    /// The registry this bridge resolves through.
    pub fn registry(&self) -> &Arc<dyn Registry> {
        &self.registry
    }

    /// The per-thread current-environment tracker.
    pub fn tracker(&self) -> &CurrentMap {
        &self.current
    }

    /// The environment the calling thread should consider current.
    ///
    /// With the root purpose this is the thread's entered environment,
    /// falling back to the canonical native root when the thread has
    /// entered nothing. A non-root purpose asks for that purpose
    /// directly, under the native kind; the thread's own state does not
    /// alter an explicit request.
    pub fn current_environment(&self, purpose: &PurposePath) -> Result<Arc<Environment>> {
        if purpose.is_root() {
            match self.current.get() {
                Some(env) => Ok(env),
                None => self.registry.resolve(&NATIVE_ROOT),
            }
        } else {
            self.registry
                .resolve(&EnvironmentId::native(purpose.clone()))
        }
    }

    /// Move the calling thread into the target environment.
    ///
    /// The walk leaves and enters one purpose scope at a time, calling
    /// each environment's hooks along the way and updating the tracker
    /// after every completed hop. The effect lasts until a later `enter`
    /// toward a different target.
    ///
    /// A hook failure propagates as-is and stops the walk; the tracker
    /// keeps the last successfully completed hop, from which a caller
    /// may re-enter toward either endpoint.
    pub fn enter(&self, target: &Arc<Environment>) -> Result<()> {
        debug!("entering environment {}", target.id());
        let mut current = self.current.get();
        loop {
            let hop = next_hop(
                current.as_ref().map(|env| env.id()),
                Some(target.id()),
                self.registry.as_ref(),
            )?;
            match hop {
                Hop::Same => break,
                Hop::Outward(next) => {
                    if let Some(leaving) = &current {
                        trace!("leave {}", leaving.id());
                        leaving.enterable().leave()?;
                    }
                    self.current.set(next.clone());
                    current = next;
                }
                Hop::Inward(next) => {
                    trace!("enter {}", next.id());
                    next.enterable().enter()?;
                    self.current.set(Some(next.clone()));
                    current = Some(next);
                }
            }
        }
        Ok(())
    }

    /// Run `f` as if the calling thread were inside the target
    /// environment, then restore the ambient state.
    ///
    /// The walk mirrors [`enter`](Bridge::enter), but each hop wraps the
    /// rest of the call instead of leaving a lasting mark: on an outward
    /// hop the environment being left wraps the continuation in its
    /// `call_out`, on an inward hop the environment being entered wraps
    /// it in its `call_into`, and the innermost frame runs `f` with the
    /// tracker pointing at the target. Every frame restores the
    /// tracker's previous value on the way back out, on success, error,
    /// and unwind alike.
    ///
    /// Code inside `f` that asks for the current environment sees the
    /// target.
    pub fn invoke<R>(&self, target: &Arc<Environment>, f: impl FnOnce() -> R) -> Result<R> {
        debug!("invoking into environment {}", target.id());
        let current = self.current.get();
        let mut slot = None;
        {
            let cont: Continuation<'_> = Box::new(|| slot = Some(f()));
            self.invoke_walk(current, target, cont)?;
        }
        slot.ok_or_else(|| Error::CalleeSkipped {
            descriptor: target.id().to_string(),
        })
    }

    /// Whether an environment is still usable.
    ///
    /// With no environment given, the canonical native root answers.
    /// A native environment answers for itself; any other kind is
    /// validity-tracked through its native counterpart with the same
    /// purpose.
    pub fn is_valid(&self, env: Option<&Arc<Environment>>) -> Result<Validity> {
        match env {
            None => {
                let root = self.registry.resolve(&NATIVE_ROOT)?;
                Ok(root.enterable().is_valid())
            }
            Some(env) if env.id().is_native() => Ok(env.enterable().is_valid()),
            Some(env) => {
                let shadow = self.registry.resolve(&env.id().native_counterpart())?;
                Ok(shadow.enterable().is_valid())
            }
        }
    }

    fn invoke_walk(
        &self,
        current: Option<Arc<Environment>>,
        target: &Arc<Environment>,
        f: Continuation<'_>,
    ) -> Result<()> {
        let hop = next_hop(
            current.as_ref().map(|env| env.id()),
            Some(target.id()),
            self.registry.as_ref(),
        )?;
        match hop {
            Hop::Same => {
                let _restore = CurrentGuard::swap(&self.current, current);
                f();
                Ok(())
            }
            Hop::Outward(next) => {
                let leaving = current.ok_or_else(|| {
                    Error::Other("outward hop with no current environment".to_string())
                })?;
                trace!("call out of {}", leaving.id());
                self.wrapped_hop(HopWrap::Out(leaving), next, target, f)
            }
            Hop::Inward(next) => {
                trace!("call into {}", next.id());
                self.wrapped_hop(HopWrap::In(next.clone()), Some(next), target, f)
            }
        }
    }

    /// Perform one wrapped hop: point the tracker at `next`, let the
    /// hop's environment wrap the continuation of the walk, and restore
    /// the tracker afterward.
    fn wrapped_hop(
        &self,
        wrap: HopWrap,
        next: Option<Arc<Environment>>,
        target: &Arc<Environment>,
        f: Continuation<'_>,
    ) -> Result<()> {
        let _restore = CurrentGuard::swap(&self.current, next.clone());
        let mut nested = Ok(());
        {
            let nested_ref = &mut nested;
            let cont: Continuation<'_> = Box::new(move || {
                *nested_ref = self.invoke_walk(next, target, f);
            });
            match &wrap {
                HopWrap::Out(env) => env.enterable().call_out(cont)?,
                HopWrap::In(env) => env.enterable().call_into(cont)?,
            }
        }
        nested
    }
}

/// Which environment wraps the continuation for one hop of an invoke
/// walk: outward hops are wrapped by the environment being left, inward
/// hops by the environment being entered.
enum HopWrap {
    Out(Arc<Environment>),
    In(Arc<Environment>),
}

/// Restores the calling thread's previous current environment on drop,
/// so the scoped contract of `invoke` holds on every exit path.
struct CurrentGuard<'a> {
    map: &'a CurrentMap,
    prev: Option<Arc<Environment>>,
}

impl<'a> CurrentGuard<'a> {
    fn swap(map: &'a CurrentMap, env: Option<Arc<Environment>>) -> Self {
        let prev = map.swap(env);
        Self { map, prev }
    }
}

impl Drop for CurrentGuard<'_> {
    fn drop(&mut self) {
        self.map.set(self.prev.take());
    }
}
