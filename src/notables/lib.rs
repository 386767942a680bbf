//! # Notables Architecture
//!
//! Notables is a **UI-agnostic directory of biographical profiles**: browse a
//! collection of notable people by domain, era, status and gender, page
//! through it, open a detail view with resolved relations, rate entries and
//! ask an AI collaborator for a short summary. Content is trilingual
//! (English, French, Arabic).
//!
//! The terminal client in `main.rs` is one front-end. Nothing from `api.rs`
//! inward assumes it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints, runs the interactive shell     │
//! │  - Owns BrowseState, the Session and the summary tasks      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Carries the label catalog and credential check           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list, view, rate, admin create/update/delete/search      │
//! │  - Built on the pure core: filter, paginate, resolve, i18n  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore, JSON seed loading        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Everything Is Passed In
//!
//! The core never reads ambient state. The display language, the filter, the
//! page number, the session and the current year are all arguments. Filtering
//! and pagination borrow the collection and never reorder it.
//!
//! ## Testing Strategy
//!
//! 1. **Core and commands**: unit tests next to the code, using the store
//!    fixtures in [`store::memory::fixtures`].
//! 2. **API**: dispatch tests in `api.rs`.
//! 3. **CLI**: `tests/cli.rs` drives the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`browse`]: Caller-side UI state (filter, page cursor, selection)
//! - [`commands`]: Operations and their results
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - [`filter`]: Filter predicates and the collection filter
//! - [`i18n`]: Localized field resolution and UI labels
//! - [`model`]: Core data types (`Personality`, `LocalizedText`, ...)
//! - [`paginate`]: Page slicing and the page cursor
//! - [`resolve`]: Id lookup, relation resolution, detail views, rating
//! - [`session`]: Admin session and credential check
//! - [`store`]: Storage abstraction and implementations
//! - [`summary`]: AI summary generation and its presentation cache

pub mod api;
pub mod browse;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod model;
pub mod paginate;
pub mod resolve;
pub mod session;
pub mod store;
pub mod summary;
