use crate::commands::{CmdMessage, CmdResult, ListedProduct, StorePaths};
use crate::error::{Result, StockveilError};
use crate::label;
use crate::model::{ProductId, Scope};
use crate::settings::VisibilitySettings;
use crate::store::Catalog;

/// Availability text for specific products, as the storefront would render
/// it on a product page.
pub fn run<C: Catalog>(
    catalog: &C,
    paths: &StorePaths,
    scope: Scope,
    ids: &[ProductId],
) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let settings = VisibilitySettings::load(&dir)?;

    let mut listed = Vec::with_capacity(ids.len());
    let mut result = CmdResult::default();

    for id in ids {
        match catalog.get_product(id, scope) {
            Ok(product) => {
                let availability =
                    label::decorate(&settings, product.stock.default_text(), product.stock);
                listed.push(ListedProduct {
                    product,
                    availability,
                });
            }
            Err(StockveilError::ProductNotFound(id)) => {
                result.add_message(CmdMessage::warning(format!("No such product: {}", id)));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(result.with_listed_products(listed))
}
