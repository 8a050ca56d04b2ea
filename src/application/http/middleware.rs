//! Middleware chain for plugin HTTP requests

use std::sync::Arc;
use crate::domain::entities::{HttpRequest, HttpResponse, USER_ID_HEADER};

/// Terminal request handler
pub type Endpoint = Arc<dyn Fn(&HttpRequest) -> HttpResponse + Send + Sync>;

/// Middleware trait - processors that can short-circuit or pass a request on
pub trait Middleware: Send + Sync {
    fn process(&self, req: &HttpRequest, next: Next) -> HttpResponse;
}

/// Next middleware in chain
#[derive(Clone)]
pub struct Next {
    remaining: Arc<[Arc<dyn Middleware>]>,
    endpoint: Endpoint,
}

impl Next {
    pub fn new(middlewares: Vec<Arc<dyn Middleware>>, endpoint: Endpoint) -> Self {
        Self {
            remaining: middlewares.into(),
            endpoint,
        }
    }

    /// Process remaining middleware, then the endpoint
    pub fn run(self, req: &HttpRequest) -> HttpResponse {
        match self.remaining.split_first() {
            Some((first, rest)) => {
                let next = Next::new(rest.to_vec(), self.endpoint.clone());
                first.process(req, next)
            }
            None => (self.endpoint)(req),
        }
    }
}

/// Middleware chain builder
pub struct MiddlewareChain {
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new() -> Self {
        Self {
            middlewares: Vec::new(),
        }
    }

    pub fn add<M: Middleware + 'static>(mut self, middleware: M) -> Self {
        self.middlewares.push(Arc::new(middleware));
        self
    }

    pub fn build(self) -> Vec<Arc<dyn Middleware>> {
        self.middlewares
    }
}

impl Default for MiddlewareChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects requests the host did not authenticate
pub struct RequireUserMiddleware;

impl Middleware for RequireUserMiddleware {
    fn process(&self, req: &HttpRequest, next: Next) -> HttpResponse {
        match req.header(USER_ID_HEADER) {
            Some(user_id) if !user_id.is_empty() => next.run(req),
            _ => {
                tracing::debug!("[{} {}] Missing user id header", req.method, req.path);
                HttpResponse::unauthorized()
            }
        }
    }
}

/// Logging middleware for debugging
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn process(&self, req: &HttpRequest, next: Next) -> HttpResponse {
        tracing::debug!("[{} {}] Request", req.method, req.path);

        let resp = next.run(req);

        if resp.status >= 400 {
            tracing::warn!("[{} {}] Responded {}", req.method, req.path, resp.status);
        } else {
            tracing::debug!("[{} {}] Responded {}", req.method, req.path, resp.status);
        }

        resp
    }
}
