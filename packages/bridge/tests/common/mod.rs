#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use gangway_bridge::{Continuation, Enterable, Environment, EnvironmentId, InMemoryRegistry, Result};

/// Shared, ordered log of hook events.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: impl Into<String>) {
        self.0.lock().unwrap().push(event.into());
    }

    /// Drain the log, returning everything recorded so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

/// Capability that records every hook call, running wrapped calls in the
/// middle so nesting shows up in the log.
pub struct Recorder {
    label: String,
    log: EventLog,
}

impl Enterable for Recorder {
    fn enter(&self) -> Result<()> {
        self.log.push(format!("enter {}", self.label));
        Ok(())
    }

    fn leave(&self) -> Result<()> {
        self.log.push(format!("leave {}", self.label));
        Ok(())
    }

    fn call_into(&self, f: Continuation<'_>) -> Result<()> {
        self.log.push(format!("into> {}", self.label));
        f();
        self.log.push(format!("<into {}", self.label));
        Ok(())
    }

    fn call_out(&self, f: Continuation<'_>) -> Result<()> {
        self.log.push(format!("out> {}", self.label));
        f();
        self.log.push(format!("<out {}", self.label));
        Ok(())
    }
}

/// Register a recording environment for `descriptor` and return it.
pub fn record(
    registry: &InMemoryRegistry,
    descriptor: &str,
    log: &EventLog,
) -> Arc<Environment> {
    let env = Arc::new(Environment::new(
        EnvironmentId::parse(descriptor),
        Arc::new(Recorder {
            label: descriptor.to_string(),
            log: log.clone(),
        }),
    ));
    registry.register(env.clone());
    env
}
