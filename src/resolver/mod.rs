//! Path-resolution engine.
//!
//! # Data Flow
//! ```text
//! Full mode:
//!     document top-level entry
//!         → classify (generic | grouped root | credential root)
//!         → path.rs (derive store key, serialize {name: value} payload)
//!         → encode.rs (credential leaves only: file path → base64)
//!         → Store::put, one write per leaf
//!         → record logical name → key for the manifest
//!
//! Update mode:
//!     dotted spec ("a" or "a.b")
//!         → resolve against the document (no mutation, no encoding)
//!         → path.rs → Store::put, exactly one write per spec
//! ```
//!
//! # Design Decisions
//! - Key derivation is pure and shared by both modes; there is exactly
//!   one place each key shape is spelled out
//! - Both modes fail fast: the first error ends the pass, writes already
//!   performed stay in the store, nothing is retried
//! - The store is an explicit dependency passed in by the caller

pub mod encode;
pub mod error;
pub mod full;
pub mod path;
pub mod update;

pub use error::{ResolveError, ResolveResult};
pub use full::FullResolver;
pub use update::{UpdateResolver, UpdateSpec};
