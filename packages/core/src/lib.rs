//! Core Gangway types: environments and how to obtain them.
//!
//! This layer defines what an environment *is* without saying anything
//! about transitions between environments:
//!
//! - `Environment`: a ref-counted handle pairing an id with its capability
//! - `Enterable`: the capability an environment may provide to hook entry,
//!   exit, validity, and call wrapping; `Passthrough` is the identity
//! - `Registry`: how environment names become live handles, with
//!   `InMemoryRegistry` as a concrete descriptor-keyed pool
//!
//! Transition logic (current-environment tracking, hop resolution, call
//! wrapping) lives in `gangway-bridge`.

mod enterable;
mod environment;
mod error;
mod registry;

pub use enterable::{Continuation, Enterable, Passthrough, Validity};
pub use environment::Environment;
pub use error::{Error, Result};
pub use registry::{EnvironmentFactory, InMemoryRegistry, PassthroughFactory, Registry};

// Re-export the naming types for convenience.
pub use gangway_id::{EnvironmentId, PurposePath, NATIVE_KIND, NATIVE_ROOT};
