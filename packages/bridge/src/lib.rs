//! The execution-environment transition bridge.
//!
//! A call originating in one execution environment reaches a target
//! environment by hopping through the purpose scopes between them, one
//! segment at a time. This crate implements that walk:
//!
//! - `CurrentMap`: which environment each thread is currently inside
//! - `next_hop`: the single next transition toward a target purpose
//! - `Bridge`: the public surface - `current_environment`, `enter`,
//!   `invoke`, and `is_valid`
//!
//! `enter` has a lasting effect on the calling thread's current
//! environment; `invoke` wraps a single call and restores the ambient
//! state afterward, whatever happens inside.
//!
//! # Example
//!
//! ```rust
//! use gangway_bridge::{Bridge, EnvironmentId, PurposePath, Registry};
//!
//! let bridge = Bridge::with_default_registry();
//! let target = bridge
//!     .registry()
//!     .resolve(&EnvironmentId::parse("native:app:plugin"))
//!     .unwrap();
//!
//! bridge.enter(&target).unwrap();
//! let current = bridge.current_environment(&PurposePath::root()).unwrap();
//! assert_eq!(current.id().to_string(), "native:app:plugin");
//! ```

mod bridge;
mod current;
mod hop;

pub use bridge::Bridge;
pub use current::CurrentMap;
pub use hop::{next_hop, Hop};

// Re-export the lower layers for convenience.
pub use gangway_core::{
    Continuation, Enterable, Environment, EnvironmentFactory, Error, InMemoryRegistry,
    Passthrough, PassthroughFactory, Registry, Result, Validity,
};
pub use gangway_id::{EnvironmentId, PurposePath, NATIVE_KIND, NATIVE_ROOT};
