//! Shared types for the store admin platform
//!
//! Domain models and ID/time utilities used across the workspace.
//! DB row derives are feature-gated so API consumers don't pull sqlx.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
