//! Application state shared across handlers.

use std::sync::Arc;

use si_acil_core::{FormatConfig, StoreProfile};

use crate::acil::AcilClient;
use crate::config::KasirConfig;

/// Application state shared across all handlers.
///
/// Cheap to clone; everything lives behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: KasirConfig,
    acil: AcilClient,
    store: StoreProfile,
    fmt: FormatConfig,
}

impl AppState {
    /// Build the state from loaded configuration.
    #[must_use]
    pub fn new(config: KasirConfig) -> Self {
        let acil = AcilClient::new(&config.acil);
        let store = config.store_profile();
        Self {
            inner: Arc::new(AppStateInner {
                config,
                acil,
                store,
                fmt: FormatConfig::default(),
            }),
        }
    }

    /// Panel configuration.
    #[must_use]
    pub fn config(&self) -> &KasirConfig {
        &self.inner.config
    }

    /// Backend invoice API client.
    #[must_use]
    pub fn acil(&self) -> &AcilClient {
        &self.inner.acil
    }

    /// Store profile printed in receipt headers.
    #[must_use]
    pub fn store(&self) -> &StoreProfile {
        &self.inner.store
    }

    /// Locale/currency formatting profile.
    #[must_use]
    pub fn fmt(&self) -> &FormatConfig {
        &self.inner.fmt
    }
}
