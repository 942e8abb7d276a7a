use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::infra::app_state::AppState;

/// Work performed after the state is wired and before the listener binds.
#[async_trait]
pub trait StartupHooks: Send + Sync {
    async fn run(&self, state: &AppState) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct ProdStartupHooks;

#[async_trait]
impl StartupHooks for ProdStartupHooks {
    async fn run(&self, state: &AppState) -> Result<()> {
        match state.catalog().list_products().await {
            Ok(products) if products.is_empty() => {
                warn!(
                    hint = "run `kaizen-server seed` to load the demo catalog",
                    "catalog has no active products"
                );
            }
            Ok(products) => {
                info!(active_products = products.len(), "catalog ready");
            }
            Err(err) => {
                warn!(error = %err, "failed to inspect catalog at startup");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct NoopStartupHooks;

#[async_trait]
impl StartupHooks for NoopStartupHooks {
    async fn run(&self, _state: &AppState) -> Result<()> {
        Ok(())
    }
}
