use crate::collection::filter::Bbox;

/// parses a `--bbox` argument of the form `lon_min,lon_max,lat_min,lat_max`.
pub fn parse_bbox(s: &str) -> Result<Bbox, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err(format!(
            "expected format: lon_min,lon_max,lat_min,lat_max, got: {s}"
        ));
    }

    let lon_min = parse_lon(parts[0])?;
    let lon_max = parse_lon(parts[1])?;
    let lat_min = parse_lat(parts[2])?;
    let lat_max = parse_lat(parts[3])?;

    let bbox = Bbox::new(lat_min, lat_max, lon_min, lon_max);
    bbox.validate()?;
    Ok(bbox)
}

fn parse_lat(lat: &str) -> Result<f64, String> {
    parse_num(lat, -90.0, 90.0).map_err(|e| format!("invalid latitude: {e}"))
}

fn parse_lon(lon: &str) -> Result<f64, String> {
    parse_num(lon, -180.0, 180.0).map_err(|e| format!("invalid longitude: {e}"))
}

fn parse_num(s: &str, min: f64, max: f64) -> Result<f64, String> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("not a number: {s}"))?;
    if !(min..=max).contains(&v) {
        Err(format!(
            "number '{v}' is not valid, must be in range [{min},{max}]"
        ))
    } else {
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bbox() {
        let bbox = parse_bbox("77.20, 77.25, 28.55, 28.60").expect("valid bbox");
        assert_eq!(bbox, Bbox::new(28.55, 28.60, 77.20, 77.25));
    }

    #[test]
    fn test_parse_bbox_errors() {
        assert!(parse_bbox("77.20,77.25,28.55").is_err());
        assert!(parse_bbox("77.25,77.20,28.55,28.60").is_err());
        assert!(parse_bbox("77.20,77.25,95.0,96.0").is_err());
        assert!(parse_bbox("east,77.25,28.55,28.60").is_err());
    }
}
