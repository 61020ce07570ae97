//! Remote sync adapter: best-effort mirroring of local collections to a
//! per-user remote key/value store.
//!
//! Failure is always advisory. A save that cannot reach the remote still
//! succeeds locally; the outcome type tells the caller which of the two
//! happened. There is no retry queue: a deferred push is retried by the
//! next save of the same collection or an explicit `sync --push`.

pub mod http;
pub mod session;

pub use http::HttpRemote;
pub use session::Session;

use crate::errors::AppResult;
use crate::store::Store;
use crate::store::keys::Category;

/// What happened to the remote side of a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Pushed to the remote store.
    Applied,
    /// Stayed local: no remote configured, no session, or the push failed.
    DeferredLocalOnly,
}

impl SyncOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SyncOutcome::Applied)
    }
}

/// Remote upsert/select primitive scoped by user + category.
pub trait Remote {
    /// Upsert one `(user_id, category)` row with the given payload.
    fn push(&self, session: &Session, category: Category, payload: &str) -> AppResult<()>;

    /// Fetch every category row belonging to the session user.
    fn pull_all(&self, session: &Session) -> AppResult<Vec<(Category, String)>>;
}

/// Advisory push of one collection. Unauthenticated or unconfigured is a
/// no-op, a transport failure is recorded in the oplog; neither surfaces
/// as an error to the caller.
pub fn push_collection(
    remote: Option<&dyn Remote>,
    session: Option<&Session>,
    store: &Store,
    category: Category,
    payload: &str,
) -> SyncOutcome {
    let (Some(remote), Some(session)) = (remote, session) else {
        return SyncOutcome::DeferredLocalOnly;
    };

    match remote.push(session, category, payload) {
        Ok(()) => SyncOutcome::Applied,
        Err(e) => {
            store.log_op("sync", category.key(), &format!("push deferred: {}", e));
            SyncOutcome::DeferredLocalOnly
        }
    }
}
