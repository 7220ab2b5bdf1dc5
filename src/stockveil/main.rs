use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use stockveil::api::{CmdMessage, ConfigAction, ListedProduct, MessageLevel, StockveilApi, StorePaths};
use stockveil::error::Result;
use stockveil::model::{Scope, StockState};
use stockveil::settings::VisibilitySettings;
use stockveil::store::fs::FileCatalog;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StockveilApi<FileCatalog>,
    scope: Scope,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli);

    match cli.command {
        Some(Commands::Preview { page }) => handle_preview(&ctx, &page),
        Some(Commands::Label { ids }) => handle_label(&ctx, &ids),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_preview(&ctx, "shop"),
    }
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let site_dir = cwd.join(".stockveil");

    let proj_dirs = ProjectDirs::from("com", "stockveil", "stockveil")
        .expect("Could not determine config dir");
    let global_data_dir = proj_dirs.data_dir().to_path_buf();

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Site
    };

    let catalog = FileCatalog::new(Some(site_dir.clone()), global_data_dir.clone());
    let paths = StorePaths {
        site: Some(site_dir),
        global: global_data_dir,
    };
    let api = StockveilApi::new(catalog, paths);

    AppContext { api, scope }
}

fn handle_preview(ctx: &AppContext, page: &str) -> Result<()> {
    let result = ctx.api.preview(ctx.scope, page)?;
    print_listing(&result.listed_products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_label(ctx: &AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.availability(ctx.scope, ids)?;
    for lp in &result.listed_products {
        println!(
            "{} {}: {}",
            lp.product.id.to_string().yellow(),
            lp.product.name.bold(),
            colorize_availability(&lp.availability, lp.product.stock)
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if let Some(settings) = &result.settings {
        print_settings(settings);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_settings(settings: &VisibilitySettings) {
    for key in VisibilitySettings::keys() {
        let value = settings.get(key).unwrap_or_default();
        if value.is_empty() {
            println!("{} = {}", key, "(unset)".dimmed());
        } else {
            println!("{} = {}", key, value);
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_listing(products: &[ListedProduct]) {
    if products.is_empty() {
        return;
    }

    for lp in products {
        let id_str = format!("{}. ", lp.product.id);
        let id_width = id_str.width();

        let availability = colorize_availability(&lp.availability, lp.product.stock);
        let availability_width = lp.availability.width() + 2;

        let time_ago = format_time_ago(lp.product.created_at);

        let fixed_width = 4 + id_width + availability_width + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let name_display = truncate_to_width(&lp.product.name, available);
        let padding = available.saturating_sub(name_display.width());

        println!(
            "    {}{}{}  {}{}",
            id_str.yellow(),
            name_display,
            " ".repeat(padding),
            availability,
            time_ago.dimmed()
        );
    }
}

fn colorize_availability(text: &str, stock: StockState) -> ColoredString {
    match stock {
        StockState::InStock => text.green(),
        StockState::OnBackorder => text.yellow(),
        StockState::OutOfStock => text.red(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
