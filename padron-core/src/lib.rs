//! Domain model and persistence layer for the padron registry.
//!
//! The registry is a set of flat relational tables (clients, provinces,
//! cities, departments) plus a read-only credential table backing the login
//! flow. Every table follows the same access pattern, so a single generic
//! repository drives all of them, keyed by the [`registry::RegistryEntity`]
//! descriptor each entity implements.

pub mod credentials;
pub mod error;
pub mod registry;
pub mod repository;

pub use credentials::{Claims, Credential};
pub use error::{RegistryError, Result};
pub use registry::{City, Client, Department, Province, RegistryEntity};
pub use repository::{CredentialsRepository, RegistryRepository};
