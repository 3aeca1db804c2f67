//! Settings management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags (cli.rs) ──────────────┐
//!                                  ├→ Settings (validated, immutable)
//! settings file (YAML, optional) ──┘      → shared by reference with
//!     → loader.rs (parse & deserialize)     both resolvers and the store
//!     → validation.rs (semantic checks)
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once validated; the tool is one-shot
//! - When a settings file is given it replaces the flag values wholesale
//! - Validation collects every error, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_settings, SettingsError};
pub use schema::{EtcdSettings, Settings};
pub use validation::{validate_settings, ValidationError};
