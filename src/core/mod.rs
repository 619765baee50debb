//! # Core Application Logic
//!
//! This module contains the concert viewer's business logic.
//! It knows nothing about any specific UI technology or about HTTP.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (data)       │
//!                    │  • Navigation (state)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │  scrape    │            │    TUI     │
//!            │ (fetch +   │            │  Adapter   │
//!            │  extract)  │            │ (ratatui)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Concert` and `Catalog`, the scraped data
//! - [`navigation`]: `Navigation`, the selected artist
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`state`]: `App`, the catalog plus navigation
//! - [`config`]: settings resolved once at startup

pub mod action;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod state;
