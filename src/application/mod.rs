//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Upload gatekeeper, slash commands, KV wrapper
//! - Errors: Domain-specific errors
//! - Http: Middleware and routing for plugin HTTP requests

pub mod errors;
pub mod services;
pub mod http;
