//! Environment naming: purpose paths and environment ids.
//!
//! An environment is named by a kind (which execution machinery backs it)
//! and a purpose path (which nested scope within that machinery). This
//! crate defines both halves plus the external descriptor string format:
//!
//! - `PurposePath`: colon-separated scope segments, outermost first
//! - `EnvironmentId`: a kind paired with a purpose path
//!
//! Naming carries no behavior. Resolution, tracking, and transitions live
//! in the higher layers.

mod id;
mod purpose;

pub use id::{EnvironmentId, NATIVE_KIND, NATIVE_ROOT};
pub use purpose::{PurposePath, PURPOSE_DELIMITER};
