//! # Design Patterns: Creational and Structural
//!
//! Classic object-oriented patterns expressed with Rust traits. Every example
//! follows the same contract: a caller holds a capability trait object, and the
//! concrete variant behind it is picked once, by key, from a [`variant::Resolver`].
//!
//! ## Patterns Covered
//!
//! 1. **Abstract Factory** - furniture, GUI and shape kits ([`abstract_factory`])
//! 2. **Factory Method** - dialogs and an enum shape factory ([`factory_method`])
//! 3. **Builder** - car/manual builders with a director, meals ([`builder`])
//! 4. **Adapter** - square pegs in round holes ([`adapter`])
//! 5. **Bridge** - remotes over devices, circles over draw APIs ([`bridge`])
//! 6. **Composite** - graphics scenes and forms on an arena tree ([`composite`])
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --bin patterns -- all
//! cargo run --bin patterns -- --config selection.toml -vv bridge
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enums ([`PatternError`], [`config::ConfigError`])
//! - `serde`, `toml`, `serde_json` - the selection file and form data
//! - `tracing` - narrative events; `tracing-subscriber` in the binary only

pub mod abstract_factory;
pub mod adapter;
pub mod bridge;
pub mod builder;
pub mod catalog;
pub mod composite;
pub mod config;
pub mod error;
pub mod factory_method;
pub mod logging;
pub mod shapes;
pub mod variant;

pub use catalog::Catalog;
pub use config::{ConfigError, Selection};
pub use error::{PatternError, Result};
pub use variant::{Family, Resolver, Variant, VariantSet};
