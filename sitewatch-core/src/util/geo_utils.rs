use geo::{Coord, Geometry, LineString};

/// finds the ring used to locate a footprint on the map. for a polygon this is
/// the exterior ring, for a multipolygon it is the exterior ring of the first
/// polygon only. any remaining polygons of a multipolygon are not considered.
///
/// # Arguments
///
/// * `geometry` - footprint geometry
///
/// # Returns
///
/// * the locating ring, or None if the geometry is not polygonal or has no polygons
pub fn first_ring(geometry: &Geometry<f64>) -> Option<&LineString<f64>> {
    match geometry {
        Geometry::Polygon(p) => Some(p.exterior()),
        Geometry::MultiPolygon(mp) => mp.0.first().map(|p| p.exterior()),
        _ => None,
    }
}

/// computes the unweighted arithmetic mean of a sequence of coordinates.
///
/// this is not an area-weighted centroid. for small, near-convex building footprints
/// the two are close, but the result is biased toward densely-sampled edges of
/// concave shapes. every listed coordinate counts, including a ring's closing
/// coordinate.
///
/// # Arguments
///
/// * `coords` - coordinates to average
///
/// # Returns
///
/// * the mean coordinate, or None if there are no coordinates or any is not finite
pub fn vertex_mean_centroid<I>(coords: I) -> Option<Coord<f64>>
where
    I: IntoIterator<Item = Coord<f64>>,
{
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut n: usize = 0;
    for c in coords.into_iter() {
        if !c.x.is_finite() || !c.y.is_finite() {
            return None;
        }
        sum_x += c.x;
        sum_y += c.y;
        n += 1;
    }
    if n == 0 {
        None
    } else {
        Some(Coord {
            x: sum_x / n as f64,
            y: sum_y / n as f64,
        })
    }
}

/// vertex-mean centroid of the first ring of a polygonal geometry.
pub fn footprint_centroid(geometry: &Geometry<f64>) -> Option<Coord<f64>> {
    first_ring(geometry).and_then(|ring| vertex_mean_centroid(ring.coords().copied()))
}
