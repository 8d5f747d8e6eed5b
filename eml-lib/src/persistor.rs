//! Submit sequencing: remote registration, then local identity persistence.

use std::sync::Arc;

use crate::alert::AlertSurface;
use crate::api::RegistrationApi;
use crate::error::StoreError;
use crate::model::LocalIdentity;
use crate::store::JsonStore;
use crate::validation::FormValidationState;

/// Storage key of the cached [`LocalIdentity`].
pub const USER_INFO_KEY: &str = "@userInfo";

/// Alert shown when the server rejects the registration payload.
pub const INVALID_USER_DATA: &str = "Dados de usuário inválidos!";

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was not ready; nothing was sent.
    NotReady,
    /// The server accepted the registration.
    ///
    /// `persisted` is `false` if caching the identity locally failed. The
    /// remote registration stands either way.
    Registered {
        identity: LocalIdentity,
        persisted: bool,
    },
    /// The server rejected the payload; the user was alerted.
    Rejected,
    /// Any other failure; logged, the form stays usable for a retry.
    Failed,
}

impl SubmitOutcome {
    /// Returns `true` if the flow may move on to the signed-in screens.
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Registered { .. })
    }
}

/// Registers users and caches their identity locally.
///
/// Both I/O steps are awaited in order: the identity is only written after
/// the server confirms the registration, and [`submit`](Self::submit) only
/// returns once that write has finished.
#[derive(Clone)]
pub struct IdentityPersistor {
    api: Arc<dyn RegistrationApi>,
    store: JsonStore,
    alerts: Arc<dyn AlertSurface>,
}

impl IdentityPersistor {
    pub fn new(
        api: Arc<dyn RegistrationApi>,
        store: JsonStore,
        alerts: Arc<dyn AlertSurface>,
    ) -> Self {
        Self { api, store, alerts }
    }

    /// Submits the form.
    ///
    /// Does nothing and returns [`SubmitOutcome::NotReady`] unless the form
    /// is ready. Never returns an error: failures are classified into the
    /// outcome.
    pub async fn submit(&self, form: &FormValidationState) -> SubmitOutcome {
        if !form.is_ready() {
            log::debug!("Submit ignored, form is not ready");
            return SubmitOutcome::NotReady;
        }

        let record = form.record();
        match self.api.register_user(&record).await {
            Ok(id) => {
                log::info!("Registered user {}", id);
                let identity = LocalIdentity::new(id, record.name, record.email);
                let persisted = match self
                    .persist_local_identity(&identity.id, &identity.real_name, &identity.email)
                    .await
                {
                    Ok(()) => true,
                    Err(e) => {
                        log::error!("Failed to store local identity: {}", e);
                        false
                    }
                };
                SubmitOutcome::Registered {
                    identity,
                    persisted,
                }
            }
            Err(e) if e.is_bad_request() => {
                log::warn!("Registration rejected: {}", e);
                self.alerts.show_alert(INVALID_USER_DATA);
                SubmitOutcome::Rejected
            }
            Err(e) => {
                log::error!("Registration failed: {}", e);
                SubmitOutcome::Failed
            }
        }
    }

    /// Writes the identity under [`USER_INFO_KEY`], replacing any previous one.
    pub async fn persist_local_identity(
        &self,
        id: &str,
        real_name: &str,
        email: &str,
    ) -> Result<(), StoreError> {
        let identity = LocalIdentity::new(id, real_name, email);
        self.store.set(USER_INFO_KEY, &identity).await?;
        log::info!("Stored local identity {}", id);
        Ok(())
    }

    /// Reads the cached identity, if any.
    pub async fn load_local_identity(&self) -> Result<Option<LocalIdentity>, StoreError> {
        self.store.get(USER_INFO_KEY).await
    }
}
