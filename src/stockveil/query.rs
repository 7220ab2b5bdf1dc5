use crate::error::Result;
use crate::model::{PageType, Product, ProductId, Scope, StockState};
use crate::store::Catalog;
use std::collections::BTreeSet;

/// Where a listing query originates from. The visibility rules only touch
/// the main storefront query; admin screens and secondary queries (widgets,
/// related-product blocks) see the unfiltered catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryContext {
    pub page: PageType,
    pub main_query: bool,
    pub admin: bool,
}

impl QueryContext {
    /// The main storefront query for a page, as built per request.
    pub fn storefront(page: PageType) -> Self {
        Self {
            page,
            main_query: true,
            admin: false,
        }
    }
}

/// A product listing query before execution.
///
/// This is the mutable query object the visibility rules attach conditions
/// to: a stock-status condition, an explicit include list and an explicit
/// exclude list. The host side executes it with [`ListingQuery::run`];
/// rule code only gets and sets conditions.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    context: QueryContext,
    stock_filter: Option<StockState>,
    include_ids: Option<BTreeSet<ProductId>>,
    exclude_ids: BTreeSet<ProductId>,
}

impl ListingQuery {
    pub fn new(context: QueryContext) -> Self {
        Self {
            context,
            stock_filter: None,
            include_ids: None,
            exclude_ids: BTreeSet::new(),
        }
    }

    pub fn context(&self) -> QueryContext {
        self.context
    }

    /// Restrict results to products in the given stock state.
    pub fn set_stock_filter(&mut self, state: StockState) {
        self.stock_filter = Some(state);
    }

    pub fn stock_filter(&self) -> Option<StockState> {
        self.stock_filter
    }

    /// Restrict results to the given IDs. Replaces any previous include
    /// list; IDs unknown to the catalog are inert.
    pub fn set_include_ids(&mut self, ids: BTreeSet<ProductId>) {
        self.include_ids = Some(ids);
    }

    pub fn include_ids(&self) -> Option<&BTreeSet<ProductId>> {
        self.include_ids.as_ref()
    }

    /// Drop the given IDs from the results.
    pub fn set_exclude_ids(&mut self, ids: BTreeSet<ProductId>) {
        self.exclude_ids = ids;
    }

    pub fn exclude_ids(&self) -> &BTreeSet<ProductId> {
        &self.exclude_ids
    }

    /// Whether any filtering condition has been attached.
    pub fn is_filtered(&self) -> bool {
        self.stock_filter.is_some() || self.include_ids.is_some() || !self.exclude_ids.is_empty()
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(include) = &self.include_ids {
            if !include.contains(&product.id) {
                return false;
            }
        }
        if let Some(state) = self.stock_filter {
            if product.stock != state {
                return false;
            }
        }
        !self.exclude_ids.contains(&product.id)
    }

    /// Execute the query against a catalog, newest first. This is the host
    /// side of the extension point; rule code never calls it.
    pub fn run<C: Catalog>(&self, catalog: &C, scope: Scope) -> Result<Vec<Product>> {
        let mut products = catalog.list_products(scope)?;
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        products.retain(|p| self.matches(p));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.0.as_str()).collect()
    }

    #[test]
    fn unfiltered_query_lists_everything_newest_first() {
        let fixture = CatalogFixture::new()
            .with_product("1", StockState::InStock, Scope::Site)
            .with_product("2", StockState::OutOfStock, Scope::Site);

        let query = ListingQuery::new(QueryContext::storefront(PageType::Shop));
        assert!(!query.is_filtered());

        let listed = query.run(&fixture.catalog, Scope::Site).unwrap();
        assert_eq!(ids(&listed), vec!["1", "2"]);
    }

    #[test]
    fn stock_filter_keeps_matching_state_only() {
        let fixture = CatalogFixture::new()
            .with_product("1", StockState::InStock, Scope::Site)
            .with_product("2", StockState::OutOfStock, Scope::Site)
            .with_product("3", StockState::OnBackorder, Scope::Site);

        let mut query = ListingQuery::new(QueryContext::storefront(PageType::Shop));
        query.set_stock_filter(StockState::InStock);

        let listed = query.run(&fixture.catalog, Scope::Site).unwrap();
        assert_eq!(ids(&listed), vec!["1"]);
    }

    #[test]
    fn include_list_restricts_and_ignores_unknown_ids() {
        let fixture = CatalogFixture::new()
            .with_product("1", StockState::InStock, Scope::Site)
            .with_product("2", StockState::OutOfStock, Scope::Site);

        let mut query = ListingQuery::new(QueryContext::storefront(PageType::Shop));
        query.set_include_ids(["2", "missing"].iter().map(|s| ProductId::new(*s)).collect());

        let listed = query.run(&fixture.catalog, Scope::Site).unwrap();
        assert_eq!(ids(&listed), vec!["2"]);
    }

    #[test]
    fn exclude_list_drops_ids() {
        let fixture = CatalogFixture::new()
            .with_product("1", StockState::InStock, Scope::Site)
            .with_product("2", StockState::InStock, Scope::Site);

        let mut query = ListingQuery::new(QueryContext::storefront(PageType::Shop));
        query.set_exclude_ids(["1"].iter().map(|s| ProductId::new(*s)).collect());

        let listed = query.run(&fixture.catalog, Scope::Site).unwrap();
        assert_eq!(ids(&listed), vec!["2"]);
    }
}
