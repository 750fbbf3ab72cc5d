//! # Room Service
//!
//! Translates REST operations into data-access calls and enforces
//! ownership-based authorization on mutations.
//!
//! ## Invariants
//! - Every create assigns the caller as owner
//! - Only the owner may update or delete a room
//! - Validation failure leaves the stored record unchanged

use std::sync::RwLock;

use serde_json::Value;
use uuid::Uuid;

use crate::auth::{AuthContext, AuthError};
use crate::model::Room;
use crate::observability::Logger;

use super::errors::{ApiError, ApiResult};
use super::search::SearchFilters;
use super::serializer;

/// Service trait for room operations
///
/// The seam for the data-access collaborator: handlers talk to this
/// trait, never to a concrete store.
pub trait RoomService: Send + Sync {
    /// All rooms in insertion order
    fn list(&self) -> ApiResult<Vec<Room>>;

    /// Rooms matching the given filters, in insertion order
    fn search(&self, filters: &SearchFilters) -> ApiResult<Vec<Room>>;

    /// Get a single room by ID
    fn get(&self, id: Uuid) -> ApiResult<Room>;

    /// Validate and persist a new room owned by the caller
    fn create(&self, data: Value, ctx: &AuthContext) -> ApiResult<Room>;

    /// Validate and apply a partial update; caller must be the owner
    fn update(&self, id: Uuid, data: Value, ctx: &AuthContext) -> ApiResult<Room>;

    /// Remove a room; caller must be the owner
    fn delete(&self, id: Uuid, ctx: &AuthContext) -> ApiResult<()>;
}

/// In-memory room service
///
/// In production this would delegate to the actual database; the
/// in-memory store keeps the same trait surface.
pub struct MemoryRoomService {
    rooms: RwLock<Vec<Room>>,
}

impl MemoryRoomService {
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> ApiResult<std::sync::RwLockReadGuard<'_, Vec<Room>>> {
        self.rooms
            .read()
            .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))
    }

    fn write(&self) -> ApiResult<std::sync::RwLockWriteGuard<'_, Vec<Room>>> {
        self.rooms
            .write()
            .map_err(|_| ApiError::Internal("Lock poisoned".to_string()))
    }

    /// Owner identity must match the authenticated caller's identity
    fn check_owner(room: &Room, ctx: &AuthContext) -> ApiResult<()> {
        let caller = ctx.require_user_id()?;
        if room.owner_id != caller {
            Logger::warn(
                "WRITE_DENIED",
                &[
                    ("room_id", &room.id.to_string()),
                    ("caller", &caller.to_string()),
                ],
            );
            return Err(AuthError::NotOwner.into());
        }
        Ok(())
    }
}

impl Default for MemoryRoomService {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomService for MemoryRoomService {
    fn list(&self) -> ApiResult<Vec<Room>> {
        Ok(self.read()?.clone())
    }

    fn search(&self, filters: &SearchFilters) -> ApiResult<Vec<Room>> {
        Ok(self
            .read()?
            .iter()
            .filter(|r| filters.matches(r))
            .cloned()
            .collect())
    }

    fn get(&self, id: Uuid) -> ApiResult<Room> {
        self.read()?
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    fn create(&self, data: Value, ctx: &AuthContext) -> ApiResult<Room> {
        // Authentication is checked before validation
        let owner_id = ctx.require_user_id()?;

        let draft = serializer::parse_create(&data).map_err(ApiError::Validation)?;
        let room = Room::create(draft, owner_id);

        self.write()?.push(room.clone());

        Logger::info(
            "ROOM_CREATED",
            &[
                ("room_id", &room.id.to_string()),
                ("owner", &owner_id.to_string()),
            ],
        );
        Ok(room)
    }

    fn update(&self, id: Uuid, data: Value, ctx: &AuthContext) -> ApiResult<Room> {
        let mut rooms = self.write()?;

        let room = rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ApiError::NotFound)?;

        // Ownership is checked before validation
        Self::check_owner(room, ctx)?;

        let patch = serializer::parse_update(&data).map_err(ApiError::Validation)?;
        room.apply(patch);

        Logger::info("ROOM_UPDATED", &[("room_id", &id.to_string())]);
        Ok(room.clone())
    }

    fn delete(&self, id: Uuid, ctx: &AuthContext) -> ApiResult<()> {
        let mut rooms = self.write()?;

        let idx = rooms
            .iter()
            .position(|r| r.id == id)
            .ok_or(ApiError::NotFound)?;

        Self::check_owner(&rooms[idx], ctx)?;

        rooms.remove(idx);

        Logger::info("ROOM_DELETED", &[("room_id", &id.to_string())]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_service() -> MemoryRoomService {
        MemoryRoomService::new()
    }

    fn valid_room_body() -> Value {
        json!({"name": "Test Room", "price": 50, "beds": 1})
    }

    #[test]
    fn test_create_and_list() {
        let service = create_test_service();
        let ctx = AuthContext::authenticated(Uuid::new_v4());

        let room = service.create(valid_room_body(), &ctx).unwrap();
        assert_eq!(room.name, "Test Room");

        let rooms = service.list().unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, room.id);
    }

    #[test]
    fn test_create_sets_caller_as_owner() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();
        let ctx = AuthContext::authenticated(user_id);

        let room = service.create(valid_room_body(), &ctx).unwrap();
        assert_eq!(room.owner_id, user_id);
    }

    #[test]
    fn test_anonymous_create_rejected_and_nothing_persisted() {
        let service = create_test_service();

        let result = service.create(valid_room_body(), &AuthContext::anonymous());

        assert!(matches!(
            result,
            Err(ApiError::Auth(AuthError::AuthenticationRequired))
        ));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_invalid_body_not_persisted() {
        let service = create_test_service();
        let ctx = AuthContext::authenticated(Uuid::new_v4());

        let result = service.create(json!({"price": "abc"}), &ctx);

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let service = create_test_service();
        let ctx = AuthContext::authenticated(Uuid::new_v4());
        let room = service.create(valid_room_body(), &ctx).unwrap();

        let found = service.get(room.id).unwrap();
        assert_eq!(found, room);

        let missing = service.get(Uuid::new_v4());
        assert!(matches!(missing, Err(ApiError::NotFound)));
    }

    #[test]
    fn test_owner_can_update() {
        let service = create_test_service();
        let ctx = AuthContext::authenticated(Uuid::new_v4());
        let room = service.create(valid_room_body(), &ctx).unwrap();

        let updated = service
            .update(room.id, json!({"price": 75}), &ctx)
            .unwrap();

        assert_eq!(updated.price, 75.0);
        assert_eq!(updated.owner_id, room.owner_id);
    }

    #[test]
    fn test_non_owner_update_forbidden() {
        let service = create_test_service();
        let owner = AuthContext::authenticated(Uuid::new_v4());
        let intruder = AuthContext::authenticated(Uuid::new_v4());
        let room = service.create(valid_room_body(), &owner).unwrap();

        let result = service.update(room.id, json!({"price": 1}), &intruder);

        assert!(matches!(result, Err(ApiError::Auth(AuthError::NotOwner))));
        assert_eq!(service.get(room.id).unwrap().price, 50.0);
    }

    #[test]
    fn test_anonymous_update_requires_authentication() {
        let service = create_test_service();
        let owner = AuthContext::authenticated(Uuid::new_v4());
        let room = service.create(valid_room_body(), &owner).unwrap();

        let result = service.update(room.id, json!({"price": 1}), &AuthContext::anonymous());

        assert!(matches!(
            result,
            Err(ApiError::Auth(AuthError::AuthenticationRequired))
        ));
    }

    #[test]
    fn test_invalid_update_leaves_record_unchanged() {
        let service = create_test_service();
        let ctx = AuthContext::authenticated(Uuid::new_v4());
        let room = service.create(valid_room_body(), &ctx).unwrap();

        let result = service.update(room.id, json!({"price": "abc"}), &ctx);

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert_eq!(service.get(room.id).unwrap(), room);
    }

    #[test]
    fn test_owner_never_changes_across_updates() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();
        let ctx = AuthContext::authenticated(user_id);
        let room = service.create(valid_room_body(), &ctx).unwrap();

        for price in [10, 20, 30] {
            let updated = service
                .update(room.id, json!({"price": price}), &ctx)
                .unwrap();
            assert_eq!(updated.owner_id, user_id);
        }
    }

    #[test]
    fn test_owner_can_delete() {
        let service = create_test_service();
        let ctx = AuthContext::authenticated(Uuid::new_v4());
        let room = service.create(valid_room_body(), &ctx).unwrap();

        service.delete(room.id, &ctx).unwrap();

        assert!(matches!(service.get(room.id), Err(ApiError::NotFound)));
    }

    #[test]
    fn test_non_owner_delete_forbidden() {
        let service = create_test_service();
        let owner = AuthContext::authenticated(Uuid::new_v4());
        let intruder = AuthContext::authenticated(Uuid::new_v4());
        let room = service.create(valid_room_body(), &owner).unwrap();

        let result = service.delete(room.id, &intruder);

        assert!(matches!(result, Err(ApiError::Auth(AuthError::NotOwner))));
        assert!(service.get(room.id).is_ok());
    }

    #[test]
    fn test_delete_missing_room_is_not_found() {
        let service = create_test_service();
        let ctx = AuthContext::authenticated(Uuid::new_v4());

        let result = service.delete(Uuid::new_v4(), &ctx);
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let service = create_test_service();
        let ctx = AuthContext::authenticated(Uuid::new_v4());

        let mut ids = Vec::new();
        for i in 0..5 {
            let body = json!({"name": format!("Room {}", i), "price": i});
            ids.push(service.create(body, &ctx).unwrap().id);
        }

        let listed: Vec<Uuid> = service.list().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn test_search_applies_filters() {
        let service = create_test_service();
        let ctx = AuthContext::authenticated(Uuid::new_v4());

        for price in [50, 150, 250] {
            let body = json!({"name": "r", "price": price});
            service.create(body, &ctx).unwrap();
        }

        let filters = SearchFilters {
            min_price: Some(100.0),
            max_price: Some(200.0),
            ..Default::default()
        };

        let results = service.search(&filters).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].price, 150.0);
    }
}
