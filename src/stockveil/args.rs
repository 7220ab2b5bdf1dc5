use clap::{Parser, Subcommand};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "stockveil")]
#[command(version = VERSION)]
#[command(about = "Out-of-stock visibility rules for storefront listings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global settings instead of the current site
    #[arg(short, long, global = true)]
    pub global: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preview a storefront listing with the current rules applied
    #[command(alias = "pv")]
    Preview {
        /// Page type to preview (shop, search, category, other)
        #[arg(default_value = "shop")]
        page: String,
    },

    /// Show the availability text for one or more products
    #[command(alias = "l")]
    Label {
        /// Product IDs
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Get or set visibility settings
    Config {
        /// Setting key (e.g., display-mode, hide-on-shop)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the settings record for this scope
    Init,
}
