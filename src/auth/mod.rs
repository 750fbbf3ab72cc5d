//! # Authentication Module
//!
//! Caller identity and token handling:
//! - Bearer JWT validation (stateless)
//! - Per-request auth context
//! - Authentication/authorization errors

pub mod context;
pub mod errors;
pub mod jwt;

pub use context::AuthContext;
pub use errors::{AuthError, AuthResult};
pub use jwt::{JwtClaims, JwtConfig, JwtManager};
