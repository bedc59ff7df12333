//! # Regman Core
//!
//! Thread-safe, in-process registries.
//!
//! ## Components
//!
//! - [`Registry`] - Named key/value store with insert-once semantics
//! - [`RegistryManager`] - Named collection of registries
//! - [`register`] / [`register_with`] - Register an object and hand it back unchanged
//! - [`Symbol`] / [`Named`] - Declared names used when no key is given
//! - [`Key`] - Dynamic key type for registries that mix key shapes
//!
//! Every public operation on a registry or a manager runs as one critical
//! section under that instance's own lock. A manager never holds its lock
//! while calling into one of its registries.

pub mod error;
pub mod key;
pub mod manager;
pub mod register;
pub mod registry;
pub mod symbol;

pub use error::RegistryError;
pub use key::{Key, KeyLike, RegistryKey};
pub use manager::RegistryManager;
pub use register::{register, register_with};
pub use registry::Registry;
pub use symbol::{Named, Symbol};
