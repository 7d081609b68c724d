//! The process-wide entropy handle used by [`Ksuid::new`](crate::Ksuid::new)
//! and [`Ksuid::try_new`](crate::Ksuid::try_new).
//!
//! The handle is a single shared reference that is replaced wholesale.
//! Generation calls that race with [`set_rand`] observe either the old or the
//! new source, never a partially installed one; no other ordering is
//! promised. Callers needing a strict cutover must synchronize the swap
//! against their own generation calls.

use crate::{OsRandom, RandSource};
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A shareable, thread-safe entropy source.
pub type SharedRandSource = Arc<dyn RandSource + Send + Sync>;

static GLOBAL_RAND: LazyLock<RwLock<SharedRandSource>> =
    LazyLock::new(|| RwLock::new(Arc::new(OsRandom)));

/// Returns the current process-wide entropy source.
///
/// The returned handle stays valid after a concurrent [`set_rand`]; it simply
/// keeps pointing at the source that was current when it was taken.
#[must_use]
pub fn rand_source() -> SharedRandSource {
    GLOBAL_RAND.read().clone()
}

/// Installs `source` as the process-wide entropy source and returns the
/// previous one.
///
/// This should usually happen once, at startup.
///
/// # Example
///
/// ```
/// use ksuid::{Ksuid, ThreadRandom, set_rand};
/// use std::sync::Arc;
///
/// let previous = set_rand(Arc::new(ThreadRandom));
/// assert!(!Ksuid::new().is_nil());
/// set_rand(previous);
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
pub fn set_rand(source: SharedRandSource) -> SharedRandSource {
    let previous = core::mem::replace(&mut *GLOBAL_RAND.write(), source);
    #[cfg(feature = "tracing")]
    tracing::debug!("replaced process-wide entropy source");
    previous
}

/// Restores the default process-wide entropy source, [`OsRandom`].
pub fn reset_rand() -> SharedRandSource {
    set_rand(Arc::new(OsRandom))
}
