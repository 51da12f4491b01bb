//! Hop resolution: the single next transition toward a target.

use std::sync::Arc;

use gangway_core::{Environment, EnvironmentId, Registry, Result};
use gangway_id::PurposePath;

/// One step of the walk from a current environment toward a target.
#[derive(Debug)]
pub enum Hop {
    /// Already at the target purpose; nothing to do.
    Same,
    /// Step one scope outward. `None` means the step leaves the last
    /// purpose segment behind: the thread ends up outside every purpose
    /// scope, with no environment entered at all.
    Outward(Option<Arc<Environment>>),
    /// Step one scope inward, into the carried environment.
    Inward(Arc<Environment>),
}

/// Compute the single next hop from `current` toward `target`.
///
/// Only purposes matter here: a missing id stands for the root purpose,
/// and kinds are ignored. Whichever kind the endpoints carry, every
/// intermediate hop is resolved under the canonical native kind.
///
/// The walk first unwinds purpose segments the current environment does
/// not share with the target (outward, innermost first), then descends
/// one segment at a time along the target's purpose (inward). Each call
/// consumes exactly one segment of distance, so repeatedly applying the
/// result reaches `Same` in a bounded number of steps and callers can
/// act at every intermediate scope.
pub fn next_hop(
    current: Option<&EnvironmentId>,
    target: Option<&EnvironmentId>,
    registry: &dyn Registry,
) -> Result<Hop> {
    let root = PurposePath::root();
    let current_purpose = current.map_or(&root, |id| id.purpose());
    let target_purpose = target.map_or(&root, |id| id.purpose());

    let common = current_purpose.common_prefix(target_purpose);

    if current_purpose.depth() > common.depth() {
        let next = current_purpose.parent();
        if next.is_root() {
            Ok(Hop::Outward(None))
        } else {
            let env = registry.resolve(&EnvironmentId::native(next))?;
            Ok(Hop::Outward(Some(env)))
        }
    } else if common.depth() < target_purpose.depth() {
        let next = target_purpose.truncated(common.depth() + 1);
        let env = registry.resolve(&EnvironmentId::native(next))?;
        Ok(Hop::Inward(env))
    } else {
        Ok(Hop::Same)
    }
}
