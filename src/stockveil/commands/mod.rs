use crate::error::{Result, StockveilError};
use crate::model::{Product, Scope};
use crate::settings::VisibilitySettings;
use std::path::PathBuf;

pub mod availability;
pub mod config;
pub mod init;
pub mod preview;

#[derive(Debug, Clone)]
pub struct StorePaths {
    pub site: Option<PathBuf>,
    pub global: PathBuf,
}

impl StorePaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Site => self
                .site
                .clone()
                .ok_or_else(|| StockveilError::Store("Site scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A product as it would appear in a storefront listing, with its
/// availability text already decorated.
#[derive(Debug, Clone)]
pub struct ListedProduct {
    pub product: Product,
    pub availability: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_products: Vec<ListedProduct>,
    pub settings: Option<VisibilitySettings>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<ListedProduct>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_settings(mut self, settings: VisibilitySettings) -> Self {
        self.settings = Some(settings);
        self
    }
}
