//! API Routes
//!
//! The route table is [`Operation::ALL`] applied to each [`Resource`]; the
//! API description in [`crate::openapi`] walks the same table.

use axum::{
    http::{Method, StatusCode},
    routing::{delete, get, post, put, MethodRouter},
    Router,
};
use crud_core::{Item, User};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::resource::Resource;
use crate::state::AppState;

/// Common prefix for every entity route
pub const API_PREFIX: &str = "/api/v1";

/// Where the API description is served
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// The five CRUD verbs every resource exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    pub fn method(self) -> Method {
        match self {
            Operation::List | Operation::Get => Method::GET,
            Operation::Create => Method::POST,
            Operation::Update => Method::PUT,
            Operation::Delete => Method::DELETE,
        }
    }

    /// Whether the path carries an `{id}` segment
    pub fn targets_member(self) -> bool {
        matches!(self, Operation::Get | Operation::Update | Operation::Delete)
    }

    pub fn success_status(self) -> StatusCode {
        match self {
            Operation::Create => StatusCode::CREATED,
            _ => StatusCode::OK,
        }
    }

    /// Path in router syntax (`/api/v1/users/:id`)
    pub fn route_path<R: Resource>(self) -> String {
        let base = collection_path::<R>();
        if self.targets_member() {
            format!("{base}/:id")
        } else {
            base
        }
    }

    fn method_router<R: Resource>(self) -> MethodRouter<AppState> {
        match self {
            Operation::List => get(handlers::list::<R>),
            Operation::Get => get(handlers::get::<R>),
            Operation::Create => post(handlers::create::<R>),
            Operation::Update => put(handlers::update::<R>),
            Operation::Delete => delete(handlers::delete::<R>),
        }
    }
}

pub fn collection_path<R: Resource>() -> String {
    format!("{API_PREFIX}/{}", R::COLLECTION)
}

fn resource_routes<R: Resource>(router: Router<AppState>) -> Router<AppState> {
    Operation::ALL
        .into_iter()
        .fold(router, |router, op| {
            router.route(&op.route_path::<R>(), op.method_router::<R>())
        })
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // API description
        .route(OPENAPI_PATH, get(handlers::openapi_json));

    // Entity routes
    let router = resource_routes::<User>(router);
    let router = resource_routes::<Item>(router);

    router
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
