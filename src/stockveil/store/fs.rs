use super::Catalog;
use crate::error::{Result, StockveilError};
use crate::model::{Product, ProductId, Scope};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const CATALOG_FILENAME: &str = "products.json";

/// File-backed catalog reading the host-exported `products.json`.
pub struct FileCatalog {
    site_root: Option<PathBuf>,
    global_root: PathBuf,
}

impl FileCatalog {
    pub fn new(site_root: Option<PathBuf>, global_root: PathBuf) -> Self {
        Self {
            site_root,
            global_root,
        }
    }

    fn catalog_root(&self, scope: Scope) -> Result<&Path> {
        match scope {
            Scope::Site => self
                .site_root
                .as_deref()
                .ok_or_else(|| StockveilError::Store("No site scope available".to_string())),
            Scope::Global => Ok(&self.global_root),
        }
    }

    fn load_catalog(&self, root: &Path) -> Result<HashMap<ProductId, Product>> {
        let catalog_file = root.join(CATALOG_FILENAME);
        if !catalog_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(catalog_file).map_err(StockveilError::Io)?;
        let products: HashMap<ProductId, Product> =
            serde_json::from_str(&content).map_err(StockveilError::Serialization)?;
        Ok(products)
    }
}

impl Catalog for FileCatalog {
    fn list_products(&self, scope: Scope) -> Result<Vec<Product>> {
        let root = self.catalog_root(scope)?;
        if !root.exists() {
            return Ok(Vec::new());
        }

        let products = self.load_catalog(root)?;
        Ok(products.into_values().collect())
    }

    fn get_product(&self, id: &ProductId, scope: Scope) -> Result<Product> {
        let root = self.catalog_root(scope)?;
        let mut products = self.load_catalog(root)?;
        products
            .remove(id)
            .ok_or_else(|| StockveilError::ProductNotFound(id.clone()))
    }
}
