pub mod add;
pub mod advance;
pub mod auth;
pub mod backup;
pub mod config;
pub mod cycle;
pub mod db;
pub mod del;
pub mod expense;
pub mod export;
pub mod extra;
pub mod init;
pub mod list;
pub mod log;
pub mod remind;
pub mod report;
pub mod restore;
pub mod settings;
pub mod sync;

use crate::config::Config;
use crate::core::DataService;
use crate::errors::AppResult;
use crate::store::Store;
use crate::sync::{HttpRemote, Remote, Session};

/// Open the store and build a `DataService` with whatever remote context
/// exists (configured endpoint + stored session, both optional).
pub(crate) fn with_service<T>(
    cfg: &Config,
    f: impl FnOnce(&DataService) -> AppResult<T>,
) -> AppResult<T> {
    let store = Store::open(&cfg.database)?;
    let remote = HttpRemote::from_config(cfg);
    let session = Session::load();

    let service = DataService::new(
        &store,
        remote.as_ref().map(|r| r as &dyn Remote),
        session,
    );
    f(&service)
}
