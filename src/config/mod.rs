//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → ServiceConfig (validated, immutable)
//!     → handed to HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the service runs with no config file at all
//! - Config controls only where and how the service listens; it never alters
//!   the CRUD contract

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, ServiceConfig, TimeoutConfig};
