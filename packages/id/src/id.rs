//! Environment ids: a kind plus a purpose path.

use std::fmt;

use crate::purpose::{PurposePath, PURPOSE_DELIMITER};

/// Kind of the canonical native environment. Transition hops are always
/// expressed under this kind, whatever kind the endpoints carry.
pub const NATIVE_KIND: &str = "native";

lazy_static::lazy_static! {
    /// Id of the canonical native root environment: native kind, no purpose.
    pub static ref NATIVE_ROOT: EnvironmentId = EnvironmentId::native(PurposePath::root());
}

/// A structured environment name.
///
/// The kind names which execution machinery backs the environment (the
/// native runtime, a scripting bridge, a foreign module). The purpose path
/// names the nested scope within that kind.
///
/// The external descriptor format is the kind alone when the purpose is
/// root, otherwise the kind and the purpose joined by the delimiter:
/// `"native"`, `"native:outer:inner"`, `"script:ui"`.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct EnvironmentId {
    kind: String,
    purpose: PurposePath,
}

impl EnvironmentId {
    /// Create an id from a kind and a purpose path.
    pub fn new(kind: impl Into<String>, purpose: PurposePath) -> Self {
        Self {
            kind: kind.into(),
            purpose,
        }
    }

    /// An id under the canonical native kind.
    pub fn native(purpose: PurposePath) -> Self {
        Self::new(NATIVE_KIND, purpose)
    }

    /// Parse a descriptor string. The first segment is the kind, the rest
    /// is the purpose. Never fails; the empty string yields an empty kind
    /// with the root purpose.
    pub fn parse(descriptor: &str) -> Self {
        match descriptor.split_once(PURPOSE_DELIMITER) {
            Some((kind, rest)) => Self {
                kind: kind.to_string(),
                purpose: PurposePath::parse(rest),
            },
            None => Self {
                kind: descriptor.to_string(),
                purpose: PurposePath::root(),
            },
        }
    }

    /// The environment kind.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The purpose path.
    pub fn purpose(&self) -> &PurposePath {
        &self.purpose
    }

    /// Whether this id is under the canonical native kind.
    pub fn is_native(&self) -> bool {
        self.kind == NATIVE_KIND
    }

    /// The id with the same purpose under the canonical native kind.
    #[must_use]
    pub fn native_counterpart(&self) -> EnvironmentId {
        EnvironmentId::native(self.purpose.clone())
    }
}

impl fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.purpose.is_root() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}{}{}", self.kind, PURPOSE_DELIMITER, self.purpose)
        }
    }
}
