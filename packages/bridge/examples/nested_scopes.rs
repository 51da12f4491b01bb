//! Nested-scope example: entering environments and wrapping calls.
//!
//! Two purpose scopes are registered with a chatty capability so every
//! transition prints what the bridge is doing:
//!
//! 1. `enter` walks into `native:app:plugin` scope by scope
//! 2. `invoke` runs one call back in the root without leaving the plugin
//! 3. entering the root unwinds both scopes again

use std::sync::Arc;

use gangway_bridge::{
    Bridge, Continuation, Enterable, Environment, EnvironmentId, InMemoryRegistry, PurposePath,
    Registry, Result,
};

/// Capability that narrates every transition.
struct Chatty {
    label: String,
}

impl Enterable for Chatty {
    fn enter(&self) -> Result<()> {
        println!("  [{}] entered", self.label);
        Ok(())
    }

    fn leave(&self) -> Result<()> {
        println!("  [{}] left", self.label);
        Ok(())
    }

    fn call_into(&self, f: Continuation<'_>) -> Result<()> {
        println!("  [{}] wrapping a call inward", self.label);
        f();
        println!("  [{}] call finished, unwinding", self.label);
        Ok(())
    }

    fn call_out(&self, f: Continuation<'_>) -> Result<()> {
        println!("  [{}] wrapping a call outward", self.label);
        f();
        println!("  [{}] call finished, unwinding", self.label);
        Ok(())
    }
}

fn chatty(registry: &InMemoryRegistry, descriptor: &str) {
    registry.register(Arc::new(Environment::new(
        EnvironmentId::parse(descriptor),
        Arc::new(Chatty {
            label: descriptor.to_string(),
        }),
    )));
}

fn main() {
    let registry = Arc::new(InMemoryRegistry::new());
    chatty(&registry, "native:app");
    chatty(&registry, "native:app:plugin");
    let bridge = Bridge::new(registry);

    let plugin = bridge
        .registry()
        .resolve(&EnvironmentId::parse("native:app:plugin"))
        .unwrap();

    println!("entering {}", plugin.id());
    bridge.enter(&plugin).unwrap();

    let current = bridge.current_environment(&PurposePath::root()).unwrap();
    println!("current environment: {}", current.id());

    let root = bridge
        .registry()
        .resolve(&EnvironmentId::parse("native"))
        .unwrap();

    println!("invoking one call in {}", root.id());
    let answer = bridge.invoke(&root, || 6 * 7).unwrap();
    println!("the call returned {}", answer);

    let current = bridge.current_environment(&PurposePath::root()).unwrap();
    println!("still inside: {}", current.id());

    println!("entering {}", root.id());
    bridge.enter(&root).unwrap();
    println!("done");
}
