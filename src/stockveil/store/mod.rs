//! # Catalog Layer
//!
//! The product catalog is owned by the host storefront; stockveil only
//! reads it. The [`Catalog`] trait keeps the rule evaluation decoupled from
//! where products actually live.
//!
//! ## Implementations
//!
//! - [`fs::FileCatalog`]: reads the host-exported `products.json` from the
//!   scope directory
//! - [`memory::InMemoryCatalog`]: in-memory catalog for testing
//!
//! ## Scope Pattern
//!
//! All operations take a [`Scope`] parameter:
//! - `Scope::Site`: the `.stockveil/` directory of the current site
//! - `Scope::Global`: user-wide data dir (`~/.local/share/stockveil/...`)
//!
//! The settings record lives next to the catalog file in the same scope
//! directory, so one site's rules never leak into another's.

use crate::error::Result;
use crate::model::{Product, ProductId, Scope};

pub mod fs;
pub mod memory;

/// Read access to the host's product catalog.
///
/// Implementations resolve products within a given scope. Listing order is
/// unspecified; callers that care about order sort themselves.
pub trait Catalog {
    /// List every product in a given scope
    fn list_products(&self, scope: Scope) -> Result<Vec<Product>>;

    /// Get a product by ID
    fn get_product(&self, id: &ProductId, scope: Scope) -> Result<Product>;
}
