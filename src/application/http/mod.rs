//! HTTP handling for requests the host forwards to the plugin

pub mod middleware;
pub mod router;

pub use middleware::{LoggingMiddleware, Middleware, MiddlewareChain, Next, RequireUserMiddleware};
pub use router::{Router, HELLO_PATH};
