use std::{fmt, sync::Arc};

use kaizen_core::{
    catalog::CatalogService, database::ports::products::ProductRepository,
};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            catalog: CatalogService::new(products),
            config,
        }
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
