use crate::model::StockState;
use crate::settings::{
    DisplayMode, VisibilitySettings, DEFAULT_BACKORDER_LABEL, DEFAULT_OUT_OF_STOCK_LABEL,
};

/// Availability text for a product, given the host's default text and the
/// product's stock state. In-stock products keep the host text; anything
/// else gets the configured label, falling back to a fixed default that
/// depends on the display mode.
pub fn decorate(settings: &VisibilitySettings, default_text: &str, stock: StockState) -> String {
    if stock == StockState::InStock {
        return default_text.to_string();
    }
    if !settings.out_of_stock_label.is_empty() {
        return settings.out_of_stock_label.clone();
    }
    match settings.display_mode {
        DisplayMode::Backorder => DEFAULT_BACKORDER_LABEL.to_string(),
        _ => DEFAULT_OUT_OF_STOCK_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_stock_keeps_the_default_text() {
        let settings = VisibilitySettings::default();
        assert_eq!(
            decorate(&settings, "In stock", StockState::InStock),
            "In stock"
        );
    }

    #[test]
    fn empty_label_falls_back_to_fixed_text() {
        let settings = VisibilitySettings::default();
        assert_eq!(
            decorate(&settings, "In stock", StockState::OutOfStock),
            "Out of Stock"
        );
    }

    #[test]
    fn custom_label_wins() {
        let mut settings = VisibilitySettings::default();
        settings.out_of_stock_label = "Sold out".to_string();
        assert_eq!(
            decorate(&settings, "In stock", StockState::OutOfStock),
            "Sold out"
        );
        assert_eq!(
            decorate(&settings, "In stock", StockState::OnBackorder),
            "Sold out"
        );
    }

    #[test]
    fn backorder_mode_changes_the_fallback_only() {
        let mut settings = VisibilitySettings::default();
        settings.set("display-mode", "backorder").unwrap();
        assert_eq!(
            decorate(&settings, "In stock", StockState::OutOfStock),
            "Available on backorder"
        );

        settings.out_of_stock_label = "Back soon".to_string();
        assert_eq!(
            decorate(&settings, "In stock", StockState::OutOfStock),
            "Back soon"
        );
    }
}
