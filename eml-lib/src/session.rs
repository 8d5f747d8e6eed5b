//! Local session bootstrap.
//!
//! Every install gets a locally generated id the first time the app starts.
//! Learning progress is reset to empty on each start.

use chrono::Utc;

use crate::error::StoreError;
use crate::model::LearningProgress;
use crate::store::JsonStore;

pub const LOCAL_ID_KEY: &str = "@local_id";
pub const PROGRESS_KEY: &str = "@storage_progress";

/// Result of [`LocalSession::ensure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStart {
    /// A local id was already stored.
    Existing(String),
    /// A new local id was generated and stored.
    Created(String),
}

impl SessionStart {
    pub fn local_id(&self) -> &str {
        match self {
            SessionStart::Existing(id) | SessionStart::Created(id) => id,
        }
    }
}

pub struct LocalSession;

impl LocalSession {
    /// Loads or creates the local id and seeds empty learning progress.
    pub async fn ensure(store: &JsonStore) -> Result<SessionStart, StoreError> {
        let start = match store.get_raw(LOCAL_ID_KEY).await? {
            Some(id) => {
                log::debug!("Local session {} already set", id);
                SessionStart::Existing(id)
            }
            None => {
                let id = Utc::now().timestamp_millis().to_string();
                store.set_raw(LOCAL_ID_KEY, &id).await?;
                log::info!("Created local session {}", id);
                SessionStart::Created(id)
            }
        };

        store.set(PROGRESS_KEY, &LearningProgress::default()).await?;

        Ok(start)
    }
}
