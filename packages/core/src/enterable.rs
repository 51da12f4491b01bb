//! The Enterable capability: hooks around environment transitions.

use crate::error::Result;

/// A single-shot wrapped call carried across environment boundaries.
///
/// Whatever arguments and return path the original call had are captured
/// inside the closure; the capability only ever sees "run this".
pub type Continuation<'a> = Box<dyn FnOnce() + 'a>;

/// Whether an environment is still usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// The environment can be entered and called into.
    Valid,
    /// The environment is no longer usable.
    Invalid {
        /// Human-readable reason.
        reason: String,
    },
}

impl Validity {
    /// Build an invalid result with a reason.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Validity::Invalid {
            reason: reason.into(),
        }
    }

    /// Whether the environment is usable.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// The failure reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Validity::Valid => None,
            Validity::Invalid { reason } => Some(reason),
        }
    }
}

/// Hooks an environment may provide around entry, exit, and wrapped calls.
///
/// Every method has an identity default, so an implementation overrides
/// only the transitions it actually needs to intercept. An environment
/// with nothing to intercept uses [`Passthrough`].
///
/// `call_into` and `call_out` wrap a call crossing the environment's
/// boundary: the hook runs whatever context switching it needs, invokes
/// the continuation exactly once in the middle, and unwinds afterward. A
/// hook that fails without invoking the continuation returns an error
/// instead.
pub trait Enterable: Send + Sync {
    /// The calling thread is entering this environment.
    fn enter(&self) -> Result<()> {
        Ok(())
    }

    /// The calling thread is leaving this environment.
    fn leave(&self) -> Result<()> {
        Ok(())
    }

    /// Whether this environment is still usable.
    fn is_valid(&self) -> Validity {
        Validity::Valid
    }

    /// Wrap a call entering this environment from outside.
    fn call_into(&self, f: Continuation<'_>) -> Result<()> {
        f();
        Ok(())
    }

    /// Wrap a call leaving this environment toward the outside.
    fn call_out(&self, f: Continuation<'_>) -> Result<()> {
        f();
        Ok(())
    }
}

/// The identity capability for environments without transition machinery.
///
/// Enter and leave do nothing, validity always holds, and wrapped calls
/// run directly.
pub struct Passthrough;

impl Enterable for Passthrough {}
