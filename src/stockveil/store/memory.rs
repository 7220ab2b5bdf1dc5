use super::Catalog;
use crate::error::{Result, StockveilError};
use crate::model::{Product, ProductId, Scope};
use std::collections::HashMap;

/// In-memory catalog for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryCatalog {
    products: HashMap<(Scope, ProductId), Product>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: Product, scope: Scope) {
        self.products.insert((scope, product.id.clone()), product);
    }
}

impl Catalog for InMemoryCatalog {
    fn list_products(&self, scope: Scope) -> Result<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|((s, _), _)| *s == scope)
            .map(|(_, p)| p.clone())
            .collect())
    }

    fn get_product(&self, id: &ProductId, scope: Scope) -> Result<Product> {
        self.products
            .get(&(scope, id.clone()))
            .cloned()
            .ok_or_else(|| StockveilError::ProductNotFound(id.clone()))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{CategoryId, StockState};
    use chrono::{Duration, Utc};

    pub struct CatalogFixture {
        pub catalog: InMemoryCatalog,
        count: i64,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                catalog: InMemoryCatalog::new(),
                count: 0,
            }
        }

        // Each product is created one minute older than the previous so
        // listing order (newest first) is deterministic in tests.
        fn push(&mut self, mut product: Product, scope: Scope) {
            product.created_at = Utc::now() - Duration::minutes(self.count);
            self.count += 1;
            self.catalog.insert(product, scope);
        }

        pub fn with_product(mut self, id: &str, stock: StockState, scope: Scope) -> Self {
            let product = Product::new(id, format!("Product {}", id), stock);
            self.push(product, scope);
            self
        }

        pub fn with_categorized_product(
            mut self,
            id: &str,
            stock: StockState,
            categories: &[&str],
            scope: Scope,
        ) -> Self {
            let product = Product::new(id, format!("Product {}", id), stock)
                .with_categories(categories.iter().map(|c| CategoryId::new(*c)).collect());
            self.push(product, scope);
            self
        }
    }
}
