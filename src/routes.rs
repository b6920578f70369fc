use crate::{
    auth::auth_handlers,
    auth::{LoginRequest, LoginResponse},
    middleware::auth_middleware,
    state::AppState,
    todo::todo_handlers,
    todo::{Todo, TodoResponse},
};
use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth_handlers::login,
        todo_handlers::list_todos,
        todo_handlers::create_todo,
        todo_handlers::update_todo,
        todo_handlers::delete_todo,
    ),
    components(
        schemas(
            LoginRequest,
            LoginResponse,
            Todo,
            TodoResponse,
        )
    ),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "todos", description = "Todo management endpoints")
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::Http::new(
                        utoipa::openapi::security::HttpAuthScheme::Bearer,
                    ),
                ),
            )
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    // Credentialed CORS forbids wildcards, so methods and headers are
    // mirrored back instead of set to Any.
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://localhost:3000"),
        ])
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    // Protected routes (auth required)
    let todo_routes = Router::new()
        .route(
            "/",
            get(todo_handlers::list_todos).post(todo_handlers::create_todo),
        )
        .route(
            "/:id",
            put(todo_handlers::update_todo).delete(todo_handlers::delete_todo),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/login", post(auth_handlers::login))
        .nest("/todos", todo_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
