use crate::error::{Result, StockveilError};
use crate::model::{CategoryId, PageType, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const SETTINGS_FILENAME: &str = "settings.json";

/// Fixed fallback shown for out-of-stock items when no custom label is set.
pub const DEFAULT_OUT_OF_STOCK_LABEL: &str = "Out of Stock";

/// Fixed fallback under backorder mode.
pub const DEFAULT_BACKORDER_LABEL: &str = "Available on backorder";

/// Global policy for out-of-stock products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Filter out-of-stock products from storefront listings.
    #[default]
    Hide,
    /// Keep them listed, show a label instead.
    Label,
    /// Keep them listed, present them as available on backorder.
    Backorder,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Hide => "hide",
            DisplayMode::Label => "label",
            DisplayMode::Backorder => "backorder",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "hide" => Some(DisplayMode::Hide),
            "label" => Some(DisplayMode::Label),
            "backorder" => Some(DisplayMode::Backorder),
            _ => None,
        }
    }
}

/// Per page-type opt-in to hiding. An absent flag deserializes to false,
/// which is equivalent to an explicit false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFlags {
    #[serde(default)]
    pub shop: bool,
    #[serde(default)]
    pub search: bool,
    #[serde(default)]
    pub category: bool,
}

impl PageFlags {
    /// True when at least one page type is explicitly opted in. When none
    /// is, the listing rules fall back to hiding everywhere.
    pub fn any_set(&self) -> bool {
        self.shop || self.search || self.category
    }
}

/// The settings record, stored in .stockveil/settings.json.
///
/// ID lists are stored verbatim as the comma-separated strings the settings
/// form writes; the resolver methods below derive typed sets from them.
/// Commands load the record fresh on every invocation, it is never cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisibilitySettings {
    #[serde(default)]
    pub display_mode: DisplayMode,

    /// Override text for out-of-stock items when they are not hidden.
    #[serde(default)]
    pub out_of_stock_label: String,

    /// Comma-separated product IDs exempt from hiding.
    #[serde(default)]
    pub excluded_product_ids: String,

    /// Comma-separated category IDs whose out-of-stock members are always
    /// excluded from listings.
    #[serde(default)]
    pub hidden_category_ids: String,

    #[serde(default)]
    pub page_flags: PageFlags,
}

fn parse_id_list(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

impl VisibilitySettings {
    /// Load settings from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(settings_dir: P) -> Result<Self> {
        let path = settings_dir.as_ref().join(SETTINGS_FILENAME);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(StockveilError::Io)?;
        let settings: VisibilitySettings =
            serde_json::from_str(&content).map_err(StockveilError::Serialization)?;
        Ok(settings)
    }

    /// Save settings to the given directory
    pub fn save<P: AsRef<Path>>(&self, settings_dir: P) -> Result<()> {
        let settings_dir = settings_dir.as_ref();

        if !settings_dir.exists() {
            fs::create_dir_all(settings_dir).map_err(StockveilError::Io)?;
        }

        let path = settings_dir.join(SETTINGS_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockveilError::Serialization)?;
        fs::write(path, content).map_err(StockveilError::Io)?;
        Ok(())
    }

    /// Product IDs exempt from hiding. Tokens are trimmed, empty tokens
    /// dropped, and nothing is checked against the catalog.
    pub fn excluded_product_ids(&self) -> BTreeSet<ProductId> {
        parse_id_list(&self.excluded_product_ids)
            .into_iter()
            .map(ProductId)
            .collect()
    }

    /// Categories whose out-of-stock members are excluded from listings.
    pub fn hidden_category_ids(&self) -> BTreeSet<CategoryId> {
        parse_id_list(&self.hidden_category_ids)
            .into_iter()
            .map(CategoryId)
            .collect()
    }

    /// Whether out-of-stock products are hidden from the given page type.
    /// No flag exists for `Other`, so it is never explicitly hidden.
    pub fn is_hidden_from_page(&self, page: PageType) -> bool {
        match page {
            PageType::Shop => self.page_flags.shop,
            PageType::Search => self.page_flags.search,
            PageType::Category => self.page_flags.category,
            PageType::Other => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "display-mode" => Some(self.display_mode.as_str().to_string()),
            "out-of-stock-label" => Some(self.out_of_stock_label.clone()),
            "excluded-products" => Some(self.excluded_product_ids.clone()),
            "hidden-categories" => Some(self.hidden_category_ids.clone()),
            "hide-on-shop" => Some(self.page_flags.shop.to_string()),
            "hide-on-search" => Some(self.page_flags.search.to_string()),
            "hide-on-category" => Some(self.page_flags.category.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "display-mode" => {
                self.display_mode = DisplayMode::parse(value)
                    .ok_or_else(|| format!("Invalid display mode: {} (expected hide, label or backorder)", value))?;
            }
            "out-of-stock-label" => self.out_of_stock_label = value.to_string(),
            "excluded-products" => self.excluded_product_ids = value.to_string(),
            "hidden-categories" => self.hidden_category_ids = value.to_string(),
            "hide-on-shop" | "hide-on-search" | "hide-on-category" => {
                let flag: bool = value
                    .parse()
                    .map_err(|_| format!("Invalid flag value: {} (expected true or false)", value))?;
                match key {
                    "hide-on-shop" => self.page_flags.shop = flag,
                    "hide-on-search" => self.page_flags.search = flag,
                    _ => self.page_flags.category = flag,
                }
            }
            other => return Err(format!("Unknown setting: {}", other)),
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[
            "display-mode",
            "out-of-stock-label",
            "excluded-products",
            "hidden-categories",
            "hide-on-shop",
            "hide-on-search",
            "hide-on-category",
        ]
    }
}
