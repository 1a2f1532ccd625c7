use super::ring_validity::{multipolygon_is_valid, polygon_is_valid, ring_is_valid};
use geo::{Geometry, LineString, MultiPolygon, Polygon, Simplify};

/// simplifies a closed ring with Ramer-Douglas-Peucker at the given tolerance,
/// repeating until no further vertices are removed.
///
/// each pass is only accepted if the ring it produces is still valid (closed, at
/// least three distinct vertices, no self-intersections). when a pass would
/// break the ring, the last valid ring is returned. this makes the operation
/// idempotent: simplifying the result again at the same tolerance returns it
/// unchanged.
///
/// # Arguments
///
/// * `ring` - closed ring to simplify
/// * `tolerance` - maximum perpendicular distance, in the units of the coordinates
///
/// # Returns
///
/// * the simplified ring
pub fn simplify_ring(ring: &LineString<f64>, tolerance: f64) -> LineString<f64> {
    let mut current = ring.clone();
    if tolerance <= 0.0 {
        return current;
    }
    loop {
        let next = current.simplify(&tolerance);
        if next.0.len() >= current.0.len() || !ring_is_valid(&next) {
            return current;
        }
        current = next;
    }
}

/// simplifies every ring of a polygon. if the simplified rings no longer form a
/// valid polygon (a hole crossing or escaping the exterior, two holes touching),
/// the polygon is returned unchanged.
pub fn simplify_polygon(polygon: &Polygon<f64>, tolerance: f64) -> Polygon<f64> {
    let exterior = simplify_ring(polygon.exterior(), tolerance);
    let interiors = polygon
        .interiors()
        .iter()
        .map(|ring| simplify_ring(ring, tolerance))
        .collect::<Vec<_>>();
    let simplified = Polygon::new(exterior, interiors);
    if polygon_is_valid(&simplified) {
        simplified
    } else {
        polygon.clone()
    }
}

/// simplifies each polygon of a multipolygon. if two simplified polygons come to
/// touch, the multipolygon is returned unchanged.
pub fn simplify_multipolygon(multipolygon: &MultiPolygon<f64>, tolerance: f64) -> MultiPolygon<f64> {
    let simplified = MultiPolygon(
        multipolygon
            .0
            .iter()
            .map(|p| simplify_polygon(p, tolerance))
            .collect(),
    );
    if multipolygon_is_valid(&simplified) {
        simplified
    } else {
        multipolygon.clone()
    }
}

/// topology-preserving simplification of a footprint geometry. polygonal
/// geometries are simplified, anything else is returned as-is.
pub fn simplify_footprint(geometry: &Geometry<f64>, tolerance: f64) -> Geometry<f64> {
    match geometry {
        Geometry::Polygon(p) => Geometry::Polygon(simplify_polygon(p, tolerance)),
        Geometry::MultiPolygon(mp) => Geometry::MultiPolygon(simplify_multipolygon(mp, tolerance)),
        other => other.clone(),
    }
}

/// total number of coordinates across every ring of a polygonal geometry
pub fn vertex_count(geometry: &Geometry<f64>) -> usize {
    fn polygon_vertices(p: &Polygon<f64>) -> usize {
        p.exterior().0.len() + p.interiors().iter().map(|r| r.0.len()).sum::<usize>()
    }
    match geometry {
        Geometry::Polygon(p) => polygon_vertices(p),
        Geometry::MultiPolygon(mp) => mp.0.iter().map(polygon_vertices).sum(),
        _ => 0,
    }
}
