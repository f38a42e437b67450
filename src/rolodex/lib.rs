//! # Rolodex Architecture
//!
//! Rolodex is a **UI-agnostic address-book library**. The interactive
//! assistant shipped as the `rolodex` binary is one client of it; the core
//! never assumes a terminal.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses process options, runs the read-eval-print loop    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the session's AddressBook: loads it at construction,│
//! │    saves it on persist()                                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, one module per verb                 │
//! │  - Operates on the AddressBook, returns CmdResult           │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model + Storage (model.rs, store/)                         │
//! │  - Validated field newtypes, Record, AddressBook            │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Policy
//!
//! Three kinds of failure, handled three ways:
//!
//! 1. **Usage errors** (wrong argument count): surfaced as
//!    [`error::RolodexError::Usage`] and rendered by the CLI as one fixed
//!    line. Produced only at the dispatch boundary, never inside commands.
//! 2. **Validation errors** (malformed phone or date): distinct
//!    [`model::ValidationError`] values that keep their own message end to
//!    end — they are never collapsed into the usage line.
//! 3. **Not-found outcomes** (unknown record, absent phone): not errors at
//!    all. Commands report them as ordinary [`commands::CmdMessage`]s.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of business logic
//!    against plain in-memory books. This is where the lion's share of
//!    testing lives.
//! 2. **Model** (`model.rs`): field validation and serde round-trips.
//! 3. **CLI** (thin `main.rs` + `tests/`): `assert_cmd` runs of the binary
//!    over temp data dirs, feeding the loop through stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each verb
//! - [`model`]: Core data types (`Record`, `AddressBook`, field newtypes)
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
