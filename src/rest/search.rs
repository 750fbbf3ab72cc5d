//! # Search Filters
//!
//! Price and bed/bath filters for the room search endpoint. Filters
//! are combined with AND; a malformed value discards the whole filter
//! set so the caller gets the unfiltered room list rather than an
//! error.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::model::Room;

/// Filter parameters accepted by `GET /rooms/search`
const FILTER_PARAMS: [&str; 5] = ["max_price", "min_price", "beds", "bedrooms", "bathrooms"];

/// Parsed search filters; absent fields impose no constraint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// price <= max_price
    pub max_price: Option<f64>,

    /// price >= min_price
    pub min_price: Option<f64>,

    /// beds >= value
    pub beds: Option<u32>,

    /// bedrooms >= value
    pub bedrooms: Option<u32>,

    /// bathrooms >= value
    pub bathrooms: Option<u32>,
}

/// A filter value that could not be parsed
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedFilter {
    pub param: String,
    pub value: String,
}

impl SearchFilters {
    /// Parse filters from the query string
    ///
    /// Non-filter parameters (like `page`) are ignored. The first
    /// malformed value aborts the parse; the caller is expected to
    /// recover by using the empty filter set.
    pub fn parse(params: &HashMap<String, String>) -> Result<Self, MalformedFilter> {
        let mut filters = SearchFilters::default();

        for param in FILTER_PARAMS {
            let Some(raw) = params.get(param) else {
                continue;
            };

            let malformed = || MalformedFilter {
                param: param.to_string(),
                value: raw.clone(),
            };

            match param {
                "max_price" => filters.max_price = Some(raw.parse().map_err(|_| malformed())?),
                "min_price" => filters.min_price = Some(raw.parse().map_err(|_| malformed())?),
                "beds" => filters.beds = Some(raw.parse().map_err(|_| malformed())?),
                "bedrooms" => filters.bedrooms = Some(raw.parse().map_err(|_| malformed())?),
                "bathrooms" => filters.bathrooms = Some(raw.parse().map_err(|_| malformed())?),
                _ => unreachable!(),
            }
        }

        Ok(filters)
    }

    /// Check whether a room satisfies every present filter
    pub fn matches(&self, room: &Room) -> bool {
        if let Some(max) = self.max_price {
            if room.price > max {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if room.price < min {
                return false;
            }
        }
        if let Some(beds) = self.beds {
            if room.beds < beds {
                return false;
            }
        }
        if let Some(bedrooms) = self.bedrooms {
            if room.bedrooms < bedrooms {
                return false;
            }
        }
        if let Some(bathrooms) = self.bathrooms {
            if room.bathrooms < bathrooms {
                return false;
            }
        }
        true
    }

    /// Rebuild the query string for pagination links
    ///
    /// Returns the search path with the active filters, ready for a
    /// `page` parameter to be appended.
    pub fn as_base_link(&self, path: &str) -> String {
        let mut link = path.to_string();
        let mut separator = '?';

        let mut push = |link: &mut String, key: &str, value: String| {
            let _ = write!(link, "{}{}={}", separator, key, value);
            separator = '&';
        };

        if let Some(v) = self.max_price {
            push(&mut link, "max_price", v.to_string());
        }
        if let Some(v) = self.min_price {
            push(&mut link, "min_price", v.to_string());
        }
        if let Some(v) = self.beds {
            push(&mut link, "beds", v.to_string());
        }
        if let Some(v) = self.bedrooms {
            push(&mut link, "bedrooms", v.to_string());
        }
        if let Some(v) = self.bathrooms {
            push(&mut link, "bathrooms", v.to_string());
        }

        link
    }
}
