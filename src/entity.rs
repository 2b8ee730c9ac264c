//! Metadata entities carried alongside an activity
//!
//! Entities are an open set: the wire shape is a `type` tag plus arbitrary
//! properties. [`Entity`] keeps the properties as raw JSON so unknown entity
//! kinds survive a round trip, while [`Entity::get_as`] and [`Entity::set_as`]
//! convert to and from concrete types such as [`Mention`](crate::mention::Mention)
//! or [`GeoCoordinates`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A single entity: a type tag plus an open property bag
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Entity {
    /// Entity type tag (e.g. `"mention"`, `"GeoCoordinates"`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// All remaining wire properties, preserved verbatim
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl Entity {
    /// Create an entity with the given type tag and no properties
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            properties: Map::new(),
        }
    }

    /// Reinterpret this entity as a concrete type
    ///
    /// The entity is serialized back to JSON and deserialized as `T`, so the
    /// target type sees the `type` tag and every property.
    pub fn get_as<T: DeserializeOwned>(&self) -> Result<T> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Overwrite this entity with the wire shape of a concrete value
    pub fn set_as<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let entity: Entity = serde_json::from_value(serde_json::to_value(value)?)?;
        self.kind = entity.kind;
        self.properties = entity.properties;
        Ok(())
    }
}

/// A latitude/longitude pair, after the schema.org GeoCoordinates shape
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoCoordinates {
    /// Elevation in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,

    /// Latitude in decimal degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Entity type tag, always [`GeoCoordinates::KIND`]
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Display name of the location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GeoCoordinates {
    pub const KIND: &'static str = "GeoCoordinates";

    /// Create coordinates with the type tag pre-filled
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            kind: Some(Self::KIND.to_string()),
            ..Default::default()
        }
    }
}

/// A place, after the schema.org Place shape
///
/// The `address`, `geo`, and `has_map` fields are deliberately untyped:
/// channels send either a string or a nested object for each.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Address of the place, as a string or PostalAddress object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Value>,

    /// Coordinates of the place, as a GeoCoordinates object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<Value>,

    /// Map link for the place, as a URL string or Map object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_map: Option<Value>,

    /// Entity type tag, always [`Place::KIND`]
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Display name of the place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Place {
    pub const KIND: &'static str = "Place";

    /// Create a named place with the type tag pre-filled
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: Some(Self::KIND.to_string()),
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// A bare named thing, after the schema.org Thing shape
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Thing {
    /// Entity type tag, always [`Thing::KIND`]
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Display name of the thing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Thing {
    pub const KIND: &'static str = "Thing";

    /// Create a named thing with the type tag pre-filled
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: Some(Self::KIND.to_string()),
            name: Some(name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_entity_type_tag_naming() {
        let entity = Entity::new("GeoCoordinates");
        let json = serde_json::to_value(&entity).unwrap();

        assert_eq!(json, json!({ "type": "GeoCoordinates" }));
    }

    #[test]
    fn test_entity_preserves_unknown_properties() {
        let wire = json!({
            "type": "clockwise",
            "foo": "bar",
            "nested": { "a": 1 }
        });

        let entity: Entity = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(entity.kind.as_deref(), Some("clockwise"));
        assert_eq!(entity.properties["foo"], "bar");

        let out = serde_json::to_value(&entity).unwrap();
        assert_eq!(out, wire);
    }

    #[test]
    fn test_entity_round_trips_concrete_type() {
        let geo = GeoCoordinates::new(47.6, -122.3);

        let mut entity = Entity::default();
        entity.set_as(&geo).unwrap();
        assert_eq!(entity.kind.as_deref(), Some(GeoCoordinates::KIND));
        assert_eq!(entity.properties["latitude"], 47.6);

        let back: GeoCoordinates = entity.get_as().unwrap();
        assert_eq!(back, geo);
    }

    #[test]
    fn test_place_accepts_string_or_object_address() {
        let as_string: Place =
            serde_json::from_value(json!({ "type": "Place", "address": "1 Main St" })).unwrap();
        assert_eq!(as_string.address, Some(json!("1 Main St")));

        let as_object: Place = serde_json::from_value(json!({
            "type": "Place",
            "address": { "streetAddress": "1 Main St" }
        }))
        .unwrap();
        assert_eq!(
            as_object.address,
            Some(json!({ "streetAddress": "1 Main St" }))
        );
    }
}
