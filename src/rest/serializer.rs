//! # Room Serializer
//!
//! Maps rooms to and from their JSON representations.
//!
//! Rendering has two shapes: a summary (list/search results) and a
//! full rendering (detail, create, update responses). Parsing
//! validates incoming field values and reports failures as a
//! per-field error map. Owner and id are server-assigned: a client
//! submitting them gets a field error, never a silent overwrite.

use serde_json::{json, Map, Value};

use crate::model::{Room, RoomDraft, RoomPatch};

use super::errors::FieldErrors;

/// Fields a client is allowed to submit
const WRITABLE_FIELDS: &[&str] = &["name", "price", "beds", "bedrooms", "bathrooms"];

/// Server-assigned fields a client must not submit
const READ_ONLY_FIELDS: &[&str] = &["id", "pk", "owner", "owner_id", "user", "created_at"];

/// Render the summary representation: `{id, name, price, owner}`
pub fn summary(room: &Room) -> Value {
    json!({
        "id": room.id,
        "name": room.name,
        "price": room.price,
        "owner": owner_summary(room),
    })
}

/// Render the full representation with all stored fields
pub fn detail(room: &Room) -> Value {
    json!({
        "id": room.id,
        "name": room.name,
        "price": room.price,
        "beds": room.beds,
        "bedrooms": room.bedrooms,
        "bathrooms": room.bathrooms,
        "owner": owner_summary(room),
        "created_at": room.created_at,
    })
}

fn owner_summary(room: &Room) -> Value {
    json!({ "id": room.owner_id })
}

/// Validate a full field set for room creation
///
/// Missing required fields are errors; count fields default to zero.
pub fn parse_create(body: &Value) -> Result<RoomDraft, FieldErrors> {
    let obj = as_object(body)?;
    let mut errors = FieldErrors::new();
    check_field_names(obj, &mut errors);

    let name = match obj.get("name") {
        Some(v) => parse_name(v).unwrap_or_else(|msg| {
            errors.insert("name", msg);
            String::new()
        }),
        None => {
            errors.insert("name", "This field is required.");
            String::new()
        }
    };

    let price = match obj.get("price") {
        Some(v) => parse_price(v).unwrap_or_else(|msg| {
            errors.insert("price", msg);
            0.0
        }),
        None => {
            errors.insert("price", "This field is required.");
            0.0
        }
    };

    let mut counts = [0u32; 3];
    for (i, field) in ["beds", "bedrooms", "bathrooms"].iter().enumerate() {
        if let Some(v) = obj.get(*field) {
            match parse_count(v) {
                Ok(n) => counts[i] = n,
                Err(msg) => errors.insert(*field, msg),
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(RoomDraft {
        name,
        price,
        beds: counts[0],
        bedrooms: counts[1],
        bathrooms: counts[2],
    })
}

/// Validate a partial field set for room update
///
/// Only the fields present are validated; absent fields are left
/// untouched by the resulting patch.
pub fn parse_update(body: &Value) -> Result<RoomPatch, FieldErrors> {
    let obj = as_object(body)?;
    let mut errors = FieldErrors::new();
    check_field_names(obj, &mut errors);

    let mut patch = RoomPatch::default();

    if let Some(v) = obj.get("name") {
        match parse_name(v) {
            Ok(name) => patch.name = Some(name),
            Err(msg) => errors.insert("name", msg),
        }
    }

    if let Some(v) = obj.get("price") {
        match parse_price(v) {
            Ok(price) => patch.price = Some(price),
            Err(msg) => errors.insert("price", msg),
        }
    }

    for (field, slot) in [
        ("beds", &mut patch.beds),
        ("bedrooms", &mut patch.bedrooms),
        ("bathrooms", &mut patch.bathrooms),
    ] {
        if let Some(v) = obj.get(field) {
            match parse_count(v) {
                Ok(n) => *slot = Some(n),
                Err(msg) => errors.insert(field, msg),
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(patch)
}

/// The request body must be a JSON object
fn as_object(body: &Value) -> Result<&Map<String, Value>, FieldErrors> {
    body.as_object().ok_or_else(|| {
        let mut errors = FieldErrors::new();
        errors.insert("$root", "Expected a JSON object.");
        errors
    })
}

/// Reject server-assigned and undeclared fields
fn check_field_names(obj: &Map<String, Value>, errors: &mut FieldErrors) {
    for key in obj.keys() {
        if READ_ONLY_FIELDS.contains(&key.as_str()) {
            errors.insert(key.clone(), "This field is read-only.");
        } else if !WRITABLE_FIELDS.contains(&key.as_str()) {
            errors.insert(key.clone(), "Unknown field.");
        }
    }
}

fn parse_name(value: &Value) -> Result<String, &'static str> {
    match value.as_str() {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        Some(_) => Err("This field may not be blank."),
        None => Err("Not a valid string."),
    }
}

fn parse_price(value: &Value) -> Result<f64, &'static str> {
    match value.as_f64() {
        Some(n) if n >= 0.0 => Ok(n),
        Some(_) => Err("Ensure this value is not negative."),
        None => Err("A valid number is required."),
    }
}

fn parse_count(value: &Value) -> Result<u32, &'static str> {
    match value.as_u64() {
        Some(n) if n <= u32::MAX as u64 => Ok(n as u32),
        Some(_) => Err("Ensure this value is not too large."),
        None => Err("A valid non-negative integer is required."),
    }
}
