//! Listing visibility rules.
//!
//! Decides, per storefront listing query, whether out-of-stock products are
//! filtered out, and applies the configured exceptions. Precedence, highest
//! first: explicit product-ID inclusion, category-based exclusion,
//! page-type-based hiding, pass-through.

use crate::error::Result;
use crate::model::{CategoryId, ProductId, Scope, StockState};
use crate::query::ListingQuery;
use crate::settings::{DisplayMode, VisibilitySettings};
use crate::store::Catalog;
use std::collections::BTreeSet;

/// Attach the visibility conditions to a listing query before the host
/// executes it. Admin screens, secondary queries and non-hide display modes
/// leave the query untouched.
pub fn apply<C: Catalog>(
    query: &mut ListingQuery,
    settings: &VisibilitySettings,
    catalog: &C,
    scope: Scope,
) -> Result<()> {
    let context = query.context();
    if context.admin || !context.main_query {
        return Ok(());
    }
    if settings.display_mode != DisplayMode::Hide {
        return Ok(());
    }

    let excluded = settings.excluded_product_ids();

    // With no page flag set at all, fall back to hiding everywhere. This
    // keeps sites configured before per-page flags existed behaving as a
    // single global switch.
    let page_hidden = if settings.page_flags.any_set() {
        settings.is_hidden_from_page(context.page)
    } else {
        true
    };

    if page_hidden {
        if excluded.is_empty() {
            query.set_stock_filter(StockState::InStock);
        } else {
            // Exempted products must survive the hide policy, so the stock
            // condition becomes an explicit include list: in-stock IDs
            // unioned with the exemptions.
            let mut allowed = in_stock_ids(catalog, scope)?;
            allowed.extend(excluded.iter().cloned());
            if !allowed.is_empty() {
                query.set_include_ids(allowed);
            }
        }
    }

    let hidden_categories = settings.hidden_category_ids();
    if !hidden_categories.is_empty() {
        let mut shut_out = out_of_stock_members(catalog, scope, &hidden_categories)?;
        for id in &excluded {
            shut_out.remove(id);
        }
        if !shut_out.is_empty() {
            query.set_exclude_ids(shut_out);
        }
    }

    Ok(())
}

fn in_stock_ids<C: Catalog>(catalog: &C, scope: Scope) -> Result<BTreeSet<ProductId>> {
    Ok(catalog
        .list_products(scope)?
        .into_iter()
        .filter(|p| p.stock == StockState::InStock)
        .map(|p| p.id)
        .collect())
}

fn out_of_stock_members<C: Catalog>(
    catalog: &C,
    scope: Scope,
    categories: &BTreeSet<CategoryId>,
) -> Result<BTreeSet<ProductId>> {
    Ok(catalog
        .list_products(scope)?
        .into_iter()
        .filter(|p| p.stock != StockState::InStock)
        .filter(|p| categories.iter().any(|c| p.in_category(c)))
        .map(|p| p.id)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageType, Product};
    use crate::query::QueryContext;
    use crate::store::memory::fixtures::CatalogFixture;

    fn shop_catalog() -> CatalogFixture {
        CatalogFixture::new()
            .with_product("1", StockState::InStock, Scope::Site)
            .with_product("2", StockState::InStock, Scope::Site)
            .with_product("3", StockState::OutOfStock, Scope::Site)
            .with_product("4", StockState::OutOfStock, Scope::Site)
            .with_product("5", StockState::OutOfStock, Scope::Site)
    }

    fn run_on(
        fixture: &CatalogFixture,
        settings: &VisibilitySettings,
        context: QueryContext,
    ) -> (ListingQuery, Vec<String>) {
        let mut query = ListingQuery::new(context);
        apply(&mut query, settings, &fixture.catalog, Scope::Site).unwrap();
        let listed = query
            .run(&fixture.catalog, Scope::Site)
            .unwrap()
            .into_iter()
            .map(|p: Product| p.id.0)
            .collect();
        (query, listed)
    }

    #[test]
    fn non_hide_modes_leave_the_query_untouched() {
        let fixture = shop_catalog();
        for mode in ["label", "backorder"] {
            let mut settings = VisibilitySettings::default();
            settings.set("display-mode", mode).unwrap();
            settings.excluded_product_ids = "1".to_string();
            settings.hidden_category_ids = "sale".to_string();

            let (query, listed) = run_on(
                &fixture,
                &settings,
                QueryContext::storefront(PageType::Shop),
            );
            assert!(!query.is_filtered());
            assert_eq!(listed.len(), 5);
        }
    }

    #[test]
    fn admin_and_secondary_queries_pass_through() {
        let fixture = shop_catalog();
        let settings = VisibilitySettings::default();

        let admin = QueryContext {
            page: PageType::Shop,
            main_query: true,
            admin: true,
        };
        let (query, _) = run_on(&fixture, &settings, admin);
        assert!(!query.is_filtered());

        let secondary = QueryContext {
            page: PageType::Shop,
            main_query: false,
            admin: false,
        };
        let (query, _) = run_on(&fixture, &settings, secondary);
        assert!(!query.is_filtered());
    }

    #[test]
    fn no_flags_set_hides_everywhere() {
        let fixture = shop_catalog();
        let settings = VisibilitySettings::default();
        assert!(!settings.is_hidden_from_page(PageType::Shop));

        for page in [
            PageType::Shop,
            PageType::Search,
            PageType::Category,
            PageType::Other,
        ] {
            let (_, listed) = run_on(&fixture, &settings, QueryContext::storefront(page));
            assert_eq!(listed, vec!["1", "2"], "page {}", page);
        }
    }

    #[test]
    fn explicit_flags_hide_only_opted_in_pages() {
        let fixture = shop_catalog();
        let mut settings = VisibilitySettings::default();
        settings.page_flags.search = true;

        // shop flag absent (equivalent to false): not hidden
        let (query, listed) = run_on(
            &fixture,
            &settings,
            QueryContext::storefront(PageType::Shop),
        );
        assert!(!query.is_filtered());
        assert_eq!(listed.len(), 5);

        let (_, listed) = run_on(
            &fixture,
            &settings,
            QueryContext::storefront(PageType::Search),
        );
        assert_eq!(listed, vec!["1", "2"]);
    }

    #[test]
    fn excluded_products_survive_page_hiding() {
        // The end-to-end case: in-stock {1,2}, out-of-stock {3,4,5},
        // product 5 exempt, shop opted in.
        let fixture = shop_catalog();
        let mut settings = VisibilitySettings::default();
        settings.excluded_product_ids = "5".to_string();
        settings.page_flags.shop = true;

        let (_, listed) = run_on(
            &fixture,
            &settings,
            QueryContext::storefront(PageType::Shop),
        );
        assert_eq!(listed, vec!["1", "2", "5"]);
    }

    #[test]
    fn hidden_categories_drop_their_out_of_stock_members() {
        let fixture = CatalogFixture::new()
            .with_categorized_product("1", StockState::InStock, &["sale"], Scope::Site)
            .with_categorized_product("2", StockState::OutOfStock, &["sale"], Scope::Site)
            .with_categorized_product("3", StockState::OutOfStock, &["new"], Scope::Site);
        let mut settings = VisibilitySettings::default();
        settings.hidden_category_ids = "sale".to_string();
        // search opted in, so the shop page itself applies no stock filter
        settings.page_flags.search = true;

        let (_, listed) = run_on(
            &fixture,
            &settings,
            QueryContext::storefront(PageType::Shop),
        );
        // 2 is out of stock in a hidden category; 1 is in stock, 3 is in
        // another category. Category exclusion applies despite the shop
        // flag being off.
        assert_eq!(listed, vec!["1", "3"]);
    }

    #[test]
    fn exclusion_by_id_beats_hidden_categories() {
        let fixture = CatalogFixture::new()
            .with_categorized_product("1", StockState::OutOfStock, &["sale"], Scope::Site)
            .with_categorized_product("2", StockState::OutOfStock, &["sale"], Scope::Site);
        let mut settings = VisibilitySettings::default();
        settings.excluded_product_ids = "1".to_string();
        settings.hidden_category_ids = "sale".to_string();
        settings.page_flags.shop = true;

        let (_, listed) = run_on(
            &fixture,
            &settings,
            QueryContext::storefront(PageType::Shop),
        );
        // 1 is exempt by ID even though out of stock and in a hidden
        // category; 2 falls to both the page and the category rule.
        assert_eq!(listed, vec!["1"]);
    }

    #[test]
    fn backorder_products_are_hidden_by_the_stock_filter() {
        let fixture = CatalogFixture::new()
            .with_product("1", StockState::InStock, Scope::Site)
            .with_product("2", StockState::OnBackorder, Scope::Site);
        let settings = VisibilitySettings::default();

        let (_, listed) = run_on(
            &fixture,
            &settings,
            QueryContext::storefront(PageType::Shop),
        );
        assert_eq!(listed, vec!["1"]);
    }

    #[test]
    fn unknown_excluded_ids_are_inert() {
        let fixture = shop_catalog();
        let mut settings = VisibilitySettings::default();
        settings.excluded_product_ids = "999, bogus".to_string();
        settings.page_flags.shop = true;

        let (_, listed) = run_on(
            &fixture,
            &settings,
            QueryContext::storefront(PageType::Shop),
        );
        assert_eq!(listed, vec!["1", "2"]);
    }

    #[test]
    fn empty_catalog_resolution_attaches_nothing_extra() {
        let fixture = CatalogFixture::new()
            .with_product("1", StockState::InStock, Scope::Site)
            .with_product("2", StockState::OutOfStock, Scope::Site);
        let mut settings = VisibilitySettings::default();
        // hidden category with no members resolves empty, so no exclude
        // condition is attached
        settings.hidden_category_ids = "ghost".to_string();

        let (query, listed) = run_on(
            &fixture,
            &settings,
            QueryContext::storefront(PageType::Shop),
        );
        assert!(query.exclude_ids().is_empty());
        assert_eq!(listed, vec!["1"]);
    }
}
