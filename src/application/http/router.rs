use std::sync::Arc;

use crate::domain::entities::{HttpRequest, HttpResponse};
use super::middleware::{Endpoint, LoggingMiddleware, Middleware, MiddlewareChain, Next, RequireUserMiddleware};

pub const HELLO_PATH: &str = "/api/v1/hello";

/// Routes plugin HTTP requests behind the auth middleware
#[derive(Clone)]
pub struct Router {
    middlewares: Vec<Arc<dyn Middleware>>,
    endpoint: Endpoint,
}

impl Router {
    pub fn new() -> Self {
        let middlewares = MiddlewareChain::new()
            .add(LoggingMiddleware)
            .add(RequireUserMiddleware)
            .build();

        Self {
            middlewares,
            endpoint: Arc::new(route),
        }
    }

    pub fn serve(&self, req: &HttpRequest) -> HttpResponse {
        Next::new(self.middlewares.clone(), self.endpoint.clone()).run(req)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

fn route(req: &HttpRequest) -> HttpResponse {
    match (req.method.as_str(), req.path.as_str()) {
        ("GET", HELLO_PATH) => hello_world(),
        (_, HELLO_PATH) => HttpResponse::method_not_allowed(),
        _ => HttpResponse::not_found(),
    }
}

fn hello_world() -> HttpResponse {
    HttpResponse::ok("Hello, world!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::USER_ID_HEADER;

    #[test]
    fn hello_requires_user() {
        let router = Router::new();
        assert_eq!(router.serve(&HttpRequest::get(HELLO_PATH)), HttpResponse::unauthorized());
    }

    #[test]
    fn hello_world_for_authenticated_user() {
        let router = Router::new();
        let req = HttpRequest::get(HELLO_PATH).with_header(USER_ID_HEADER, "test-user-id");
        assert_eq!(router.serve(&req), HttpResponse::ok("Hello, world!"));
    }

    #[test]
    fn unknown_path_is_not_found() {
        let router = Router::new();
        let req = HttpRequest::get("/api/v1/nope").with_header(USER_ID_HEADER, "u");
        assert_eq!(router.serve(&req).status, 404);
    }

    #[test]
    fn wrong_method_is_rejected() {
        let router = Router::new();
        let req = HttpRequest::new("POST", HELLO_PATH).with_header(USER_ID_HEADER, "u");
        assert_eq!(router.serve(&req).status, 405);
    }
}
