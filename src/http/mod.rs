//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, shared store state)
//!     → handlers.rs (route handlers; each resolves its errors locally)
//!     → friends::store / friends::filter (domain operations)
//!     → JSON response to client
//! ```

pub mod handlers;
pub mod headers;
pub mod request;
pub mod server;

pub use headers::HeaderInfo;
pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
