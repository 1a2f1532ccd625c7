use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Contains, Geometry, Intersects, Line, LineString, MultiPolygon, Polygon};
use itertools::Itertools;
use std::collections::HashSet;

/// smallest number of distinct vertices a ring can have without collapsing
pub const MIN_DISTINCT_RING_VERTICES: usize = 3;

/// counts the distinct vertices of a ring. the closing coordinate repeats the
/// first and so does not count twice.
pub fn distinct_vertex_count(ring: &LineString<f64>) -> usize {
    ring.coords()
        .map(|c| (c.x.to_bits(), c.y.to_bits()))
        .collect::<HashSet<_>>()
        .len()
}

/// tests whether a closed ring has no self-intersections. consecutive segments
/// may only meet at their shared vertex, and non-consecutive segments may not
/// meet at all.
///
/// repeated consecutive coordinates are ignored, since they form zero-length
/// segments that touch both of their neighbors.
pub fn ring_is_simple(ring: &LineString<f64>) -> bool {
    let deduped: LineString<f64> = ring.coords().copied().dedup().collect();
    let segments: Vec<Line<f64>> = deduped.lines().collect();
    let n = segments.len();
    if n < MIN_DISTINCT_RING_VERTICES {
        return false;
    }
    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            match line_intersection(segments[i], segments[j]) {
                None => {}
                Some(LineIntersection::SinglePoint { .. }) if adjacent => {}
                Some(_) => return false,
            }
        }
    }
    true
}

/// true if every coordinate of the ring is a finite number
pub fn ring_is_finite(ring: &LineString<f64>) -> bool {
    ring.coords().all(|c| c.x.is_finite() && c.y.is_finite())
}

/// a ring is valid when its coordinates are finite, it is closed, keeps at least
/// three distinct vertices, and does not cross itself.
pub fn ring_is_valid(ring: &LineString<f64>) -> bool {
    ring_is_finite(ring)
        && ring.is_closed()
        && distinct_vertex_count(ring) >= MIN_DISTINCT_RING_VERTICES
        && ring_is_simple(ring)
}

/// tests polygon validity: every ring valid, holes strictly inside the exterior,
/// and no ring touching another.
pub fn polygon_is_valid(polygon: &Polygon<f64>) -> bool {
    let exterior = polygon.exterior();
    if !ring_is_valid(exterior) {
        return false;
    }
    let shell = Polygon::new(exterior.clone(), vec![]);
    for (idx, interior) in polygon.interiors().iter().enumerate() {
        if !ring_is_valid(interior)
            || interior.intersects(exterior)
            || !shell.contains(interior)
        {
            return false;
        }
        let crosses_sibling = polygon.interiors()[idx + 1..]
            .iter()
            .any(|other| interior.intersects(other));
        if crosses_sibling {
            return false;
        }
    }
    true
}

/// tests multipolygon validity: every polygon valid and no two polygon
/// exteriors touching.
pub fn multipolygon_is_valid(multipolygon: &MultiPolygon<f64>) -> bool {
    if multipolygon.0.is_empty() || !multipolygon.0.iter().all(polygon_is_valid) {
        return false;
    }
    multipolygon
        .0
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !a.exterior().intersects(b.exterior()))
}

/// validity of a footprint geometry. only polygons and multipolygons can be valid
/// footprints.
pub fn footprint_is_valid(geometry: &Geometry<f64>) -> bool {
    match geometry {
        Geometry::Polygon(p) => polygon_is_valid(p),
        Geometry::MultiPolygon(mp) => multipolygon_is_valid(mp),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, polygon, LineString};

    #[test]
    fn test_square_is_valid() {
        let ring = line_string![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ];
        assert_eq!(distinct_vertex_count(&ring), 4);
        assert!(ring_is_valid(&ring));
    }

    #[test]
    fn test_bowtie_is_not_simple() {
        let ring = line_string![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 1.0, y: 0.0),
            (x: 0.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ];
        assert!(!ring_is_simple(&ring));
        assert!(!ring_is_valid(&ring));
    }

    #[test]
    fn test_collapsed_ring_is_invalid() {
        let ring = line_string![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 0.0, y: 0.0),
        ];
        assert_eq!(distinct_vertex_count(&ring), 2);
        assert!(!ring_is_valid(&ring));
    }

    #[test]
    fn test_repeated_vertex_is_tolerated() {
        let ring = line_string![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ];
        assert!(ring_is_valid(&ring));
    }

    #[test]
    fn test_non_finite_ring_is_invalid() {
        let ring = line_string![
            (x: f64::INFINITY, y: 28.58),
            (x: 77.2201, y: 28.58),
            (x: 77.2201, y: 28.5801),
            (x: f64::INFINITY, y: 28.58),
        ];
        assert!(!ring_is_finite(&ring));
        assert!(!ring_is_valid(&ring));
        let ring = line_string![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: f64::NAN),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 0.0),
        ];
        assert!(!ring_is_valid(&ring));
    }

    #[test]
    fn test_open_ring_is_invalid() {
        let ring: LineString<f64> = vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)].into();
        assert!(!ring_is_valid(&ring));
    }

    #[test]
    fn test_hole_crossing_exterior_is_invalid() {
        let p = polygon!(
            exterior: [
                (x: 0.0, y: 0.0),
                (x: 4.0, y: 0.0),
                (x: 4.0, y: 4.0),
                (x: 0.0, y: 4.0),
            ],
            interiors: [
                [
                    (x: 3.0, y: 1.0),
                    (x: 5.0, y: 1.0),
                    (x: 5.0, y: 2.0),
                    (x: 3.0, y: 2.0),
                ],
            ],
        );
        assert!(!polygon_is_valid(&p));
    }

    #[test]
    fn test_hole_inside_exterior_is_valid() {
        let p = polygon!(
            exterior: [
                (x: 0.0, y: 0.0),
                (x: 4.0, y: 0.0),
                (x: 4.0, y: 4.0),
                (x: 0.0, y: 4.0),
            ],
            interiors: [
                [
                    (x: 1.0, y: 1.0),
                    (x: 2.0, y: 1.0),
                    (x: 2.0, y: 2.0),
                    (x: 1.0, y: 2.0),
                ],
            ],
        );
        assert!(polygon_is_valid(&p));
    }

    #[test]
    fn test_overlapping_multipolygon_is_invalid() {
        let a = polygon![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0), (x: 0.0, y: 2.0)];
        let b = polygon![(x: 1.0, y: 1.0), (x: 3.0, y: 1.0), (x: 3.0, y: 3.0), (x: 1.0, y: 3.0)];
        let c = polygon![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0), (x: 6.0, y: 6.0)];
        assert!(!multipolygon_is_valid(&MultiPolygon(vec![a.clone(), b])));
        assert!(multipolygon_is_valid(&MultiPolygon(vec![a, c])));
    }
}
