//! # REST API HTTP Server
//!
//! Axum-based HTTP server for the room endpoints.
//!
//! Each handler builds an explicit auth context from the request
//! headers and passes it down; there is no ambient request state.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::auth::{AuthContext, JwtConfig, JwtManager};
use crate::config::ServerConfig;
use crate::observability::Logger;

use super::errors::{ApiError, ApiResult};
use super::handler::RoomService;
use super::pagination::{self, Page};
use super::search::SearchFilters;
use super::serializer;

/// REST API server state
pub struct RestServer<S: RoomService> {
    service: Arc<S>,
    jwt_manager: JwtManager,
}

impl<S: RoomService + 'static> RestServer<S> {
    pub fn new(service: S, jwt_config: JwtConfig) -> Self {
        Self {
            service: Arc::new(service),
            jwt_manager: JwtManager::new(jwt_config),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/rooms", get(list_handler::<S>).post(create_handler::<S>))
            .route("/rooms/search", get(search_handler::<S>))
            .route(
                "/rooms/:id",
                get(get_handler::<S>)
                    .put(update_handler::<S>)
                    .delete(delete_handler::<S>),
            )
            .with_state(state)
    }

    /// Bind and serve until shutdown
    pub async fn serve(self, config: &ServerConfig) -> std::io::Result<()> {
        let addr = config.socket_addr();
        let cors = build_cors(config);
        let router = self.router().layer(cors);

        let listener = TcpListener::bind(&addr).await?;
        Logger::info("SERVER_STARTED", &[("addr", &addr)]);
        axum::serve(listener, router).await
    }
}

/// Configure CORS from config; no configured origins means permissive
/// (development mode)
fn build_cors(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Shared state type
type ServerState<S> = Arc<RestServer<S>>;

/// Extract the caller's auth context from request headers
///
/// A valid bearer token yields an authenticated context; no
/// Authorization header yields an anonymous one. An invalid token is
/// an error, never a silent downgrade to anonymous.
fn extract_context<S: RoomService>(
    server: &RestServer<S>,
    headers: &HeaderMap,
) -> ApiResult<AuthContext> {
    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        if let Some(token) = auth.strip_prefix("Bearer ") {
            let claims = server.jwt_manager.validate_token(token)?;
            let user_id = JwtManager::get_user_id(&claims)?;
            return Ok(AuthContext::authenticated(user_id));
        }
    }

    Ok(AuthContext::anonymous())
}

/// Parse a room ID from the request path; anything unparseable is a
/// missing resource
fn parse_room_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound)
}

/// `GET /rooms` - paginated room list
async fn list_handler<S: RoomService + 'static>(
    State(server): State<ServerState<S>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Page<Value>>, ApiError> {
    let rooms = server.service.list()?;
    let page = pagination::parse_page(&query);

    let items: Vec<Value> = rooms.iter().map(serializer::summary).collect();
    Ok(Json(pagination::paginate(items, page, "/rooms")))
}

/// `GET /rooms/search` - paginated filtered room list
async fn search_handler<S: RoomService + 'static>(
    State(server): State<ServerState<S>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Page<Value>>, ApiError> {
    // A malformed filter discards the whole filter set rather than
    // failing the request
    let filters = SearchFilters::parse(&query).unwrap_or_else(|bad| {
        Logger::warn(
            "FILTERS_DISCARDED",
            &[("param", &bad.param), ("value", &bad.value)],
        );
        SearchFilters::default()
    });

    let rooms = server.service.search(&filters)?;
    let page = pagination::parse_page(&query);
    let base = filters.as_base_link("/rooms/search");

    let items: Vec<Value> = rooms.iter().map(serializer::summary).collect();
    Ok(Json(pagination::paginate(items, page, &base)))
}

/// `POST /rooms` - create a room owned by the caller
async fn create_handler<S: RoomService + 'static>(
    State(server): State<ServerState<S>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let ctx = extract_context(&server, &headers)?;

    let room = server.service.create(body, &ctx)?;
    Ok(Json(serializer::detail(&room)))
}

/// `GET /rooms/:id` - single room
async fn get_handler<S: RoomService + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let room = server.service.get(parse_room_id(&id)?)?;
    Ok(Json(serializer::detail(&room)))
}

/// `PUT /rooms/:id` - partial update by the owner
async fn update_handler<S: RoomService + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let ctx = extract_context(&server, &headers)?;

    let room = server.service.update(parse_room_id(&id)?, body, &ctx)?;
    Ok(Json(serializer::detail(&room)))
}

/// `DELETE /rooms/:id` - removal by the owner; success carries no body
async fn delete_handler<S: RoomService + 'static>(
    State(server): State<ServerState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let ctx = extract_context(&server, &headers)?;

    server.service.delete(parse_room_id(&id)?, &ctx)?;
    Ok(StatusCode::OK)
}
