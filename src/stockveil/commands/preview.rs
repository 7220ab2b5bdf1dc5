use crate::commands::{CmdMessage, CmdResult, ListedProduct, StorePaths};
use crate::error::Result;
use crate::label;
use crate::model::{PageType, Scope};
use crate::query::{ListingQuery, QueryContext};
use crate::settings::VisibilitySettings;
use crate::store::Catalog;
use crate::visibility;

/// Build and execute the main storefront listing for a page type, exactly
/// as the storefront would: settings loaded fresh, visibility conditions
/// attached before execution, availability text decorated per product.
pub fn run<C: Catalog>(
    catalog: &C,
    paths: &StorePaths,
    scope: Scope,
    page: PageType,
) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let settings = VisibilitySettings::load(&dir)?;

    let mut query = ListingQuery::new(QueryContext::storefront(page));
    visibility::apply(&mut query, &settings, catalog, scope)?;
    let products = query.run(catalog, scope)?;

    let listed: Vec<ListedProduct> = products
        .into_iter()
        .map(|product| {
            let availability =
                label::decorate(&settings, product.stock.default_text(), product.stock);
            ListedProduct {
                product,
                availability,
            }
        })
        .collect();

    let mut result = CmdResult::default().with_listed_products(listed);
    if result.listed_products.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No products visible on the {} page.",
            page
        )));
    }
    Ok(result)
}
