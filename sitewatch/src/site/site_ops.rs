use super::footprint_source::get_string_property;
use super::site_record::{location_name, SiteRecord, SITE_ID_OFFSET};
use super::{ComplianceReport, DetectionIndex, JoinKey};
use crate::collection::SITE_KEY_PROPERTY;
use geo::Coord;
use geojson::{FeatureCollection, Value};
use sitewatch_core::util::{geo_utils, site_key};

/// derives the dashboard's site records from the exported footprints.
///
/// for the feature at position `i`:
///   1. the first ring of the feature is found (the first ring of the first
///      polygon, for a MultiPolygon)
///   2. the site location is the unweighted mean of that ring's coordinates
///   3. the site id is `properties.id`, or `i + 1000` when there is none
///   4. the compliance result is looked up by `join_key`, falling back to
///      authorized with 0% exceedance
///
/// features with a missing, malformed, or non-polygonal geometry are skipped.
/// the output preserves feature order.
///
/// # Arguments
/// * `footprints` - the exported footprint collection
/// * `detections` - ids of detected construction boundaries
/// * `compliance` - the compliance report
/// * `join_key` - how features are matched to compliance rows
///
/// # Result
///
/// one site per usable feature, in feature order
pub fn derive_sites(
    footprints: &FeatureCollection,
    detections: &DetectionIndex,
    compliance: &ComplianceReport,
    join_key: JoinKey,
) -> Vec<SiteRecord> {
    let mut sites = Vec::with_capacity(footprints.features.len());
    let mut skipped = 0;
    for (index, feature) in footprints.features.iter().enumerate() {
        match derive_site(index, feature, detections, compliance, join_key) {
            Ok(site) => sites.push(site),
            Err(e) => {
                skipped += 1;
                log::debug!("skipping footprint feature {index}: {e}");
            }
        }
    }
    if skipped > 0 {
        log::info!("skipped {skipped} footprint features that could not be located");
    }
    sites
}

fn derive_site(
    index: usize,
    feature: &geojson::Feature,
    detections: &DetectionIndex,
    compliance: &ComplianceReport,
    join_key: JoinKey,
) -> Result<SiteRecord, String> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or_else(|| String::from("feature has no geometry"))?;
    let ring = first_ring_coords(&geometry.value)?;
    let centroid = geo_utils::vertex_mean_centroid(ring)
        .ok_or_else(|| String::from("first ring has no usable coordinates"))?;
    let site_key = match get_string_property(feature, SITE_KEY_PROPERTY) {
        Some(key) => key,
        None => site_key::site_key(&centroid)?,
    };
    let id = get_string_property(feature, "id").unwrap_or_else(|| (index + SITE_ID_OFFSET).to_string());
    let entry = compliance.resolve(join_key, index, &site_key);
    Ok(SiteRecord {
        location_name: location_name(&id),
        detected: detections.contains(&id),
        id,
        index: index.to_string(),
        site_key,
        lat: centroid.y,
        lon: centroid.x,
        is_authorized: entry.is_authorized,
        expansion_pct: entry.expansion_pct,
    })
}

/// coordinates of the first ring of a GeoJSON Polygon (`coordinates[0]`) or
/// MultiPolygon (`coordinates[0][0]`).
pub fn first_ring_coords(value: &Value) -> Result<Vec<Coord<f64>>, String> {
    let ring = match value {
        Value::Polygon(rings) => rings.first(),
        Value::MultiPolygon(polygons) => polygons.first().and_then(|rings| rings.first()),
        other => return Err(format!("unsupported geometry type {}", value_type_name(other))),
    }
    .ok_or_else(|| String::from("geometry has no rings"))?;
    ring.iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            _ => Err(format!("position {position:?} has fewer than two values")),
        })
        .collect()
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
