//! High Score Server Library
//!
//! This module exports the core types and functions for testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod identity;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::ScoreStore;
pub use error::{AppError, Result};
pub use identity::{FixedIdentity, HostnameIdentity, IdentityResolver};

use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: ScoreStore,
    pub identity: Arc<dyn IdentityResolver>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store, identity resolver and configuration
    pub fn new(store: ScoreStore, identity: Arc<dyn IdentityResolver>, config: Config) -> Self {
        Self {
            store,
            identity,
            config,
        }
    }
}
