use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Site,
    Global,
}

/// Opaque product identifier. Tokens from the settings record are carried
/// verbatim; an ID that matches nothing in the catalog simply never matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockState {
    InStock,
    OutOfStock,
    OnBackorder,
}

impl StockState {
    /// The availability text the host renders before any decoration.
    pub fn default_text(&self) -> &'static str {
        match self {
            StockState::InStock => "In stock",
            StockState::OutOfStock => "Out of stock",
            StockState::OnBackorder => "Available on backorder",
        }
    }
}

/// The kind of storefront listing a query is being built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    Shop,
    Search,
    Category,
    Other,
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PageType::Shop => "shop",
            PageType::Search => "search",
            PageType::Category => "category",
            PageType::Other => "other",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for PageType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "shop" => Ok(PageType::Shop),
            "search" => Ok(PageType::Search),
            "category" => Ok(PageType::Category),
            "other" => Ok(PageType::Other),
            other => Err(format!("Unknown page type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub stock: StockState,
    #[serde(default)]
    pub categories: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, stock: StockState) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            stock,
            categories: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_categories(mut self, categories: Vec<CategoryId>) -> Self {
        self.categories = categories;
        self
    }

    pub fn in_category(&self, category: &CategoryId) -> bool {
        self.categories.contains(category)
    }
}
