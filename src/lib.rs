//! confsync: flatten a nested YAML configuration into etcd.
//!
//! # Architecture Overview
//!
//! ```text
//! YAML document
//!     → document.rs (parse, top-level shape check)
//!     → resolver::full   (full mode: every leaf, one write each, manifest)
//!       resolver::update (update mode: one write per dotted spec)
//!         → resolver::path   (key/payload derivation)
//!         → resolver::encode (base64 file inlining, full mode only)
//!         → store (etcd put with per-call timeout)
//!     → manifest.rs (logical name → key map, emitted in full mode)
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod manifest;
pub mod resolver;
pub mod store;

pub use config::Settings;
pub use manifest::Manifest;
pub use resolver::{FullResolver, UpdateResolver};
pub use store::{EtcdStore, MemoryStore, Store};
