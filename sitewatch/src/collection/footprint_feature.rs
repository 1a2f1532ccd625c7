use super::BuildingRecord;
use geo::Geometry;
use geojson::JsonObject;
use serde_json::Value;
use sitewatch_core::util::site_key;

/// property name carrying the content-derived site key on exported features
pub const SITE_KEY_PROPERTY: &str = "site_key";

/// a validated, simplified building footprint with the attributes of the row it
/// came from.
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintFeature {
    pub geometry: Geometry<f64>,
    pub properties: JsonObject,
}

impl FootprintFeature {
    /// builds a feature from a filtered record and its simplified geometry. the
    /// record's attributes become the feature properties, and the site key of
    /// the geometry is added to them.
    pub fn new(record: &BuildingRecord, geometry: Geometry<f64>) -> Result<FootprintFeature, String> {
        let mut properties = JsonObject::new();
        for (column, value) in record.attributes.iter() {
            properties.insert(column.clone(), attribute_value(value));
        }
        let key = site_key::footprint_site_key(&geometry)?;
        properties.insert(String::from(SITE_KEY_PROPERTY), Value::String(key));
        Ok(FootprintFeature {
            geometry,
            properties,
        })
    }

    pub fn get_site_key(&self) -> Option<&str> {
        self.properties
            .get(SITE_KEY_PROPERTY)
            .and_then(|v| v.as_str())
    }

    pub fn to_geojson(&self) -> geojson::Feature {
        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&self.geometry)),
            id: None,
            properties: Some(self.properties.clone()),
            foreign_members: None,
        }
    }
}

/// reads a CSV cell into a JSON value. integers and finite floats become numbers,
/// empty cells become null, and everything else stays a string.
pub fn attribute_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Value::Null
    } else if let Ok(i) = trimmed.parse::<i64>() {
        Value::from(i)
    } else if let Some(n) = trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
    {
        Value::Number(n)
    } else {
        Value::String(raw.to_string())
    }
}
