//! # Stockveil Architecture
//!
//! Stockveil is a **UI-agnostic rule library** for out-of-stock product
//! visibility, with a CLI client on top. The CLI is one consumer of the
//! library, not the other way around, and that distinction drives the
//! layering:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (strings → ProductId / PageType)       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - init / config / preview / availability                   │
//! │  - Loads the settings record fresh per invocation           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Rule Core (settings.rs, visibility.rs, label.rs, query.rs) │
//! │  - Pure evaluation over explicit inputs, no ambient state   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Layer (store/)                                     │
//! │  - Abstract Catalog trait                                   │
//! │  - FileCatalog (host-exported data), InMemoryCatalog (test) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The rule pipeline
//!
//! A storefront builds a [`query::ListingQuery`] for the page being served.
//! Before execution, [`visibility::apply`] consults the settings record and
//! attaches filter conditions (a stock-status condition, explicit include /
//! exclude ID lists). The host then executes the modified query.
//! Independently, [`label::decorate`] rewrites availability text whenever a
//! product is rendered. Both take their configuration as explicit
//! arguments; nothing reads globals.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr and never exits the
//! process. The same core could back a web admin panel unchanged.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: The operations (init, config, preview, availability)
//! - [`settings`]: The persisted settings record and exclusion resolver
//! - [`visibility`]: Listing predicate builder (the rule core)
//! - [`query`]: The listing query object and its execution
//! - [`label`]: Availability-text decoration
//! - [`store`]: Catalog abstraction and implementations
//! - [`model`]: Core data types (`Product`, `StockState`, `PageType`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod label;
pub mod model;
pub mod query;
pub mod settings;
pub mod store;
pub mod visibility;
