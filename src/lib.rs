//! Friends CRUD Service Library
//!
//! An in-memory HTTP service exposing list, filter, header-inspection,
//! lookup, create and update operations over a small friend list.

pub mod config;
pub mod friends;
pub mod http;

pub use config::ServiceConfig;
pub use friends::{FilterCriteria, Friend, FriendCandidate, FriendError, FriendId, FriendStore};
pub use http::HttpServer;
