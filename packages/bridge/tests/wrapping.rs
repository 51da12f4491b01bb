//! Call-wrapping behavior: hook nesting, value passing, and failure
//! handling through `invoke`.

mod common;

use std::sync::Arc;

use gangway_bridge::{
    Bridge, Continuation, Enterable, Environment, EnvironmentId, Error, InMemoryRegistry,
    PurposePath, Registry, Result,
};

use common::{record, EventLog};

fn resolve(bridge: &Bridge, descriptor: &str) -> Arc<Environment> {
    bridge
        .registry()
        .resolve(&EnvironmentId::parse(descriptor))
        .unwrap()
}

#[test]
fn inward_hooks_nest_around_the_callee() {
    let registry = Arc::new(InMemoryRegistry::new());
    let log = EventLog::new();
    record(&registry, "native:a", &log);
    record(&registry, "native:a:b", &log);
    let bridge = Bridge::new(registry);

    let target = resolve(&bridge, "native:a:b");
    bridge
        .invoke(&target, || log.push("callee"))
        .unwrap();

    assert_eq!(
        log.take(),
        vec![
            "into> native:a",
            "into> native:a:b",
            "callee",
            "<into native:a:b",
            "<into native:a",
        ]
    );
}

#[test]
fn outward_hooks_are_owned_by_the_environment_being_left() {
    let registry = Arc::new(InMemoryRegistry::new());
    let log = EventLog::new();
    record(&registry, "native:a", &log);
    record(&registry, "native:a:b", &log);
    let bridge = Bridge::new(registry);

    bridge.enter(&resolve(&bridge, "native:a:b")).unwrap();
    log.take();

    let root = resolve(&bridge, "native");
    bridge.invoke(&root, || log.push("callee")).unwrap();

    assert_eq!(
        log.take(),
        vec![
            "out> native:a:b",
            "out> native:a",
            "callee",
            "<out native:a",
            "<out native:a:b",
        ]
    );

    // The lasting state is untouched.
    let current = bridge.current_environment(&PurposePath::root()).unwrap();
    assert_eq!(current.id().to_string(), "native:a:b");
}

#[test]
fn mixed_walk_unwinds_then_descends() {
    let registry = Arc::new(InMemoryRegistry::new());
    let log = EventLog::new();
    record(&registry, "native:a", &log);
    record(&registry, "native:a:b", &log);
    record(&registry, "native:x", &log);
    let bridge = Bridge::new(registry);

    bridge.enter(&resolve(&bridge, "native:a:b")).unwrap();
    log.take();

    let target = resolve(&bridge, "native:x");
    bridge.invoke(&target, || log.push("callee")).unwrap();

    assert_eq!(
        log.take(),
        vec![
            "out> native:a:b",
            "out> native:a",
            "into> native:x",
            "callee",
            "<into native:x",
            "<out native:a",
            "<out native:a:b",
        ]
    );
}

#[test]
fn the_callee_value_passes_back_through_the_wrapping() {
    let registry = Arc::new(InMemoryRegistry::new());
    let log = EventLog::new();
    record(&registry, "native:a", &log);
    record(&registry, "native:a:b", &log);
    let bridge = Bridge::new(registry);

    let target = resolve(&bridge, "native:a:b");
    let value = bridge.invoke(&target, || "computed inside".to_string()).unwrap();
    assert_eq!(value, "computed inside");
}

#[test]
fn nested_invokes_see_consistent_current_environments() {
    let bridge = Bridge::with_default_registry();
    let outer = resolve(&bridge, "native:outer");
    let inner = resolve(&bridge, "native:outer:inner");

    let seen = bridge
        .invoke(&outer, || {
            let mid = bridge
                .current_environment(&PurposePath::root())
                .unwrap()
                .id()
                .to_string();
            let deep = bridge
                .invoke(&inner, || {
                    bridge
                        .current_environment(&PurposePath::root())
                        .unwrap()
                        .id()
                        .to_string()
                })
                .unwrap();
            let back = bridge
                .current_environment(&PurposePath::root())
                .unwrap()
                .id()
                .to_string();
            (mid, deep, back)
        })
        .unwrap();

    assert_eq!(seen.0, "native:outer");
    assert_eq!(seen.1, "native:outer:inner");
    assert_eq!(seen.2, "native:outer");
}

#[test]
fn a_swallowed_continuation_is_reported() {
    struct Swallower;
    impl Enterable for Swallower {
        fn call_into(&self, _f: Continuation<'_>) -> Result<()> {
            // Accept the call but never run it.
            Ok(())
        }
    }

    let registry = Arc::new(InMemoryRegistry::new());
    registry.register(Arc::new(Environment::new(
        EnvironmentId::parse("native:sink"),
        Arc::new(Swallower),
    )));
    let bridge = Bridge::new(registry);

    let target = resolve(&bridge, "native:sink");
    let err = bridge.invoke(&target, || 1).unwrap_err();
    assert!(matches!(err, Error::CalleeSkipped { .. }));

    // Ambient state is restored even though the callee never ran.
    assert_eq!(bridge.tracker().tracked_threads(), 0);
}

#[test]
fn a_failing_hook_propagates_and_restores() {
    struct Refusing;
    impl Enterable for Refusing {
        fn call_into(&self, _f: Continuation<'_>) -> Result<()> {
            Err(Error::Hook {
                operation: "call_into",
                descriptor: "native:closed".to_string(),
                message: "shutting down".to_string(),
            })
        }
    }

    let bridge = {
        let registry = Arc::new(InMemoryRegistry::new());
        registry.register(Arc::new(Environment::new(
            EnvironmentId::parse("native:closed"),
            Arc::new(Refusing),
        )));
        Bridge::new(registry)
    };

    let home = resolve(&bridge, "native:home");
    bridge.enter(&home).unwrap();

    let target = resolve(&bridge, "native:closed");
    let err = bridge.invoke(&target, || 1).unwrap_err();
    assert!(matches!(err, Error::Hook { .. }));

    let current = bridge.current_environment(&PurposePath::root()).unwrap();
    assert!(Arc::ptr_eq(&current, &home));
}
