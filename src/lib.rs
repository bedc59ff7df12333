//! # Regman
//!
//! Thread-safe, in-process registries of named objects.
//!
//! ## Components
//!
//! - [`Registry`] - Named key/value store with insert-once semantics
//! - [`RegistryManager`] - Named collection of registries
//! - [`register`] / [`register_with`] - Register an object and hand it back unchanged
//! - [`Symbol`] - Declared names, derivable with `#[derive(Symbol)]`
//! - [`config`] - TOML configuration for logging and startup registries
//! - [`logging`] - Subscriber setup driven by [`config::LoggingConfig`]
//! - [`bootstrap`] - Build a manager from configuration
//!
//! ## Example
//!
//! ```
//! use regman::{RegistryManager, Symbol};
//!
//! #[derive(Clone, Symbol)]
//! struct Csv;
//!
//! let manager: RegistryManager<Csv> = RegistryManager::new();
//! let exporters = manager.create_registry("exporters").unwrap();
//! let csv = exporters.register(None)(Csv).unwrap();
//!
//! assert_eq!(csv.symbol_name(), "Csv");
//! assert!(exporters.contains("Csv").unwrap());
//! ```

// Lets `#[derive(Symbol)]` resolve `::regman` inside this crate's own tests.
extern crate self as regman;

pub mod bootstrap;
pub mod logging;

pub use regman_config as config;
pub use regman_core::{
    Key, KeyLike, Named, Registry, RegistryError, RegistryKey, RegistryManager, Symbol, named,
    register, register_with,
};
pub use regman_macros::Symbol;
