//! Application state and dependency injection.

use carvoy_opendal::StorageBackend;
use carvoy_postgres::PgClient;

use crate::service::{AuthHasher, AuthKeys, Result, ServiceConfig};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pg_client: PgClient,
    storage: StorageBackend,

    auth_hasher: AuthHasher,
    auth_keys: AuthKeys,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Connects to all external services and loads required resources.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            pg_client: config.connect_postgres().await?,
            storage: config.connect_storage()?,

            auth_hasher: config.create_password_hasher()?,
            auth_keys: config.load_auth_keys()?,
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);
impl_di!(storage: StorageBackend);

impl_di!(auth_hasher: AuthHasher);
impl_di!(auth_keys: AuthKeys);
