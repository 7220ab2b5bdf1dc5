//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! stockveil operations. It dispatches, normalizes inputs (raw CLI strings
//! into [`ProductId`]s, page names into [`PageType`]) and returns
//! structured `Result<CmdResult>` values. No business logic, no I/O
//! formatting, no assumptions about a terminal.
//!
//! `StockveilApi<C: Catalog>` is generic over the catalog backend:
//! production wires `FileCatalog`, tests wire `InMemoryCatalog`.

use crate::commands;
use crate::error::{Result, StockveilError};
use crate::model::{PageType, ProductId, Scope};
use crate::store::Catalog;
use std::str::FromStr;

pub struct StockveilApi<C: Catalog> {
    catalog: C,
    paths: commands::StorePaths,
}

impl<C: Catalog> StockveilApi<C> {
    pub fn new(catalog: C, paths: commands::StorePaths) -> Self {
        Self { catalog, paths }
    }

    pub fn preview(&self, scope: Scope, page: &str) -> Result<commands::CmdResult> {
        let page = PageType::from_str(page).map_err(StockveilError::Api)?;
        commands::preview::run(&self.catalog, &self.paths, scope, page)
    }

    pub fn availability<I: AsRef<str>>(
        &self,
        scope: Scope,
        ids: &[I],
    ) -> Result<commands::CmdResult> {
        let ids: Vec<ProductId> = ids.iter().map(|s| ProductId::new(s.as_ref())).collect();
        commands::availability::run(&self.catalog, &self.paths, scope, &ids)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn paths(&self) -> &commands::StorePaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListedProduct, MessageLevel, StorePaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StockState;
    use crate::store::memory::fixtures::CatalogFixture;
    use tempfile::tempdir;

    #[test]
    fn preview_rejects_unknown_page_names() {
        let dir = tempdir().unwrap();
        let api = StockveilApi::new(
            CatalogFixture::new().catalog,
            StorePaths {
                site: Some(dir.path().to_path_buf()),
                global: dir.path().to_path_buf(),
            },
        );

        let err = api.preview(Scope::Site, "checkout").unwrap_err();
        assert!(matches!(err, StockveilError::Api(_)));
    }

    #[test]
    fn availability_passes_raw_strings_through() {
        let dir = tempdir().unwrap();
        let fixture = CatalogFixture::new().with_product("7", StockState::InStock, Scope::Site);
        let api = StockveilApi::new(
            fixture.catalog,
            StorePaths {
                site: Some(dir.path().to_path_buf()),
                global: dir.path().to_path_buf(),
            },
        );

        let result = api.availability(Scope::Site, &["7"]).unwrap();
        assert_eq!(result.listed_products.len(), 1);
    }
}
