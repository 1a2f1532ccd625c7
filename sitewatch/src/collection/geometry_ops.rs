use super::{DropReason, FootprintError};
use geo::Geometry;
use sitewatch_core::util::ring_validity;
use wkt::TryFromWkt;

/// name of a geometry variant, as used in log messages
pub fn geometry_type_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

/// parses a footprint from WKT. only POLYGON and MULTIPOLYGON footprints with
/// valid rings are accepted.
///
/// # Arguments
///
/// * `wkt` - WKT-encoded footprint
///
/// # Returns
///
/// * the footprint geometry, or the drop reason paired with a [`FootprintError::GeometryError`]
pub fn parse_footprint_wkt(wkt: &str) -> Result<Geometry<f64>, (DropReason, FootprintError)> {
    let geometry: Geometry<f64> = Geometry::try_from_wkt_str(wkt).map_err(|e| {
        (
            DropReason::InvalidWkt,
            FootprintError::GeometryError(format!("unable to deserialize WKT into geometry: {e}")),
        )
    })?;
    match geometry {
        Geometry::Polygon(_) | Geometry::MultiPolygon(_) => {}
        ref other => {
            return Err((
                DropReason::UnsupportedGeometry,
                FootprintError::GeometryError(format!(
                    "unexpected {} geometry type, must be Polygon or MultiPolygon",
                    geometry_type_name(other)
                )),
            ))
        }
    }
    if !ring_validity::footprint_is_valid(&geometry) {
        return Err((
            DropReason::InvalidGeometry,
            FootprintError::GeometryError(String::from(
                "footprint has a non-finite coordinate or a collapsed or self-intersecting ring",
            )),
        ));
    }
    Ok(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_is_accepted() {
        let result =
            parse_footprint_wkt("POLYGON((77.22 28.58, 77.2201 28.58, 77.2201 28.5801, 77.22 28.58))");
        match result {
            Ok(Geometry::Polygon(p)) => assert_eq!(p.exterior().0.len(), 4),
            other => panic!("expected polygon, found {other:?}"),
        }
    }

    #[test]
    fn test_multipolygon_is_accepted() {
        let wkt = "MULTIPOLYGON(((0 0, 1 0, 1 1, 0 0)), ((5 5, 6 5, 6 6, 5 5)))";
        assert!(matches!(
            parse_footprint_wkt(wkt),
            Ok(Geometry::MultiPolygon(_))
        ));
    }

    #[test]
    fn test_point_is_unsupported() {
        match parse_footprint_wkt("POINT(0 0)") {
            Err((DropReason::UnsupportedGeometry, FootprintError::GeometryError(msg))) => {
                assert!(msg.contains("Point"))
            }
            other => panic!("expected unsupported geometry, found {other:?}"),
        }
    }

    #[test]
    fn test_garbage_is_invalid_wkt() {
        assert!(matches!(
            parse_footprint_wkt("POLYGON((1 2, 3"),
            Err((DropReason::InvalidWkt, _))
        ));
    }

    #[test]
    fn test_bowtie_is_invalid_geometry() {
        assert!(matches!(
            parse_footprint_wkt("POLYGON((0 0, 1 1, 1 0, 0 1, 0 0))"),
            Err((DropReason::InvalidGeometry, _))
        ));
    }

    #[test]
    fn test_overflowing_coordinate_is_invalid_geometry() {
        assert!(matches!(
            parse_footprint_wkt("POLYGON((1e400 28.58, 77.2201 28.58, 77.2201 28.5801, 1e400 28.58))"),
            Err((DropReason::InvalidGeometry, _))
        ));
    }
}
