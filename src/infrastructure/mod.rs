//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: Key-value persistence

pub mod config;
pub mod storage;
