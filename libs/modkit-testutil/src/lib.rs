//! # ModKit Test Utilities
//!
//! Canonical names of the modules maintained alongside the framework.
//!
//! Test helpers refer to modules by name (config sections, registry lookups,
//! store-key prefixes). Depending on the module crates just to read their
//! names would create cycles, so the names live here as plain constants.
//!
//! ```rust
//! use modkit_testutil::{KnownModule, STAKING_MODULE_NAME};
//!
//! assert_eq!(STAKING_MODULE_NAME, "staking");
//! assert_eq!(KnownModule::Staking.name(), STAKING_MODULE_NAME);
//! ```

pub mod known;
pub mod names;

pub use known::KnownModule;
pub use names::*;
