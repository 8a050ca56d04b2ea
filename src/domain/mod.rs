//! Domain layer - Core business objects with no infrastructure dependencies
//!
//! This layer contains:
//! - Entities: Upload metadata, commands, HTTP request/response
//! - Traits: Abstractions for host services (KV store)

pub mod entities;
pub mod traits;
