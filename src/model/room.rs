//! # Room Entity
//!
//! The persisted room-listing record.
//!
//! ## Invariants
//! - Every room has exactly one owner
//! - `id` and `owner_id` are server-assigned and never change

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A room listing
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Server-assigned unique ID
    pub id: Uuid,

    /// Listing name
    pub name: String,

    /// Price per night
    pub price: f64,

    /// Number of beds
    pub beds: u32,

    /// Number of bedrooms
    pub bedrooms: u32,

    /// Number of bathrooms
    pub bathrooms: u32,

    /// Owning user, set at creation time, immutable afterward
    pub owner_id: Uuid,

    /// Creation timestamp, server-assigned
    pub created_at: DateTime<Utc>,
}

/// Validated field set for creating a room
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDraft {
    pub name: String,
    pub price: f64,
    pub beds: u32,
    pub bedrooms: u32,
    pub bathrooms: u32,
}

/// Validated partial field set for updating a room
///
/// Absent fields leave the stored value untouched. Owner and id are
/// not representable here: they cannot be changed through an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub beds: Option<u32>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
}

impl Room {
    /// Create a new room from a validated draft, owned by `owner_id`
    pub fn create(draft: RoomDraft, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            price: draft.price,
            beds: draft.beds,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            owner_id,
            created_at: Utc::now(),
        }
    }

    /// Apply a validated partial update
    pub fn apply(&mut self, patch: RoomPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(beds) = patch.beds {
            self.beds = beds;
        }
        if let Some(bedrooms) = patch.bedrooms {
            self.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = patch.bathrooms {
            self.bathrooms = bathrooms;
        }
    }
}
