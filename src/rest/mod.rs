//! # REST API Module
//!
//! The request-handling core: HTTP endpoints for room CRUD and
//! search, with pagination and ownership enforcement.

pub mod errors;
pub mod handler;
pub mod pagination;
pub mod search;
pub mod serializer;
pub mod server;

pub use errors::{ApiError, ApiResult, FieldErrors};
pub use handler::{MemoryRoomService, RoomService};
pub use pagination::{Page, PAGE_SIZE};
pub use search::SearchFilters;
pub use server::RestServer;
