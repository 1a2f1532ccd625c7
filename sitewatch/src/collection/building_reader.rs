use super::{BuildingRecord, FootprintError};
use crate::util::fs;
use csv::{ReaderBuilder, StringRecord};
use flate2::read::MultiGzDecoder;
use itertools::Itertools;
use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

pub const CONFIDENCE_COLUMN: &str = "confidence";
pub const LATITUDE_COLUMN: &str = "latitude";
pub const LONGITUDE_COLUMN: &str = "longitude";
pub const GEOMETRY_COLUMN: &str = "geometry";

/// columns a building data source must provide
pub const REQUIRED_COLUMNS: [&str; 4] = [
    CONFIDENCE_COLUMN,
    LATITUDE_COLUMN,
    LONGITUDE_COLUMN,
    GEOMETRY_COLUMN,
];

/// reads every row of a building-footprint CSV, which is expected to be gzip
/// compressed when the file name ends in `.gz`. every gzip member of the file is
/// read, so concatenated or block-compressed archives are read in full.
///
/// failures to open the file or read its header are fatal, as is a header that
/// lacks any of the [`REQUIRED_COLUMNS`]. a row whose cells cannot be read is
/// returned as an error message in place of its record so that the caller can
/// count it and move on.
///
/// # Arguments
/// * `filepath` - building data source
///
/// # Result
///
/// one entry per data row, in file order
pub fn read_building_records(
    filepath: &Path,
) -> Result<Vec<Result<BuildingRecord, String>>, FootprintError> {
    let source = filepath.to_string_lossy().to_string();
    let f = File::open(filepath)
        .map_err(|e| FootprintError::DataSourceError(source.clone(), e.to_string()))?;
    let r: Box<dyn std::io::Read> = if fs::is_gzip(filepath) {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(r);

    let header_record = reader
        .headers()
        .map_err(|e| {
            FootprintError::DataSourceError(source.clone(), format!("failure reading headers: {e}"))
        })?
        .clone();
    let header_lookup = header_record
        .iter()
        .enumerate()
        .map(|(i, s)| (s.trim().to_string(), i))
        .collect::<HashMap<_, _>>();
    let missing = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !header_lookup.contains_key(**col))
        .join(", ");
    if !missing.is_empty() {
        return Err(FootprintError::SchemaError(source, missing));
    }
    let columns = ColumnIndices::new(&header_lookup, &source)?;

    let mut rows = vec![];
    for (row_idx, row_result) in reader.records().enumerate() {
        match row_result {
            Ok(row) => rows.push(columns.to_record(row_idx, &row, &header_record)),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                return Err(FootprintError::DataSourceError(
                    source,
                    format!("failure reading row {row_idx}: {e}"),
                ));
            }
            Err(e) => rows.push(Err(format!("row {row_idx} could not be read: {e}"))),
        }
    }
    log::info!("read {} building rows from {source}", rows.len());
    Ok(rows)
}

/// positions of the required columns within a row
struct ColumnIndices {
    confidence: usize,
    latitude: usize,
    longitude: usize,
    geometry: usize,
}

impl ColumnIndices {
    fn new(lookup: &HashMap<String, usize>, source: &str) -> Result<ColumnIndices, FootprintError> {
        let get = |col: &str| {
            lookup
                .get(col)
                .copied()
                .ok_or_else(|| FootprintError::SchemaError(source.to_string(), col.to_string()))
        };
        Ok(ColumnIndices {
            confidence: get(CONFIDENCE_COLUMN)?,
            latitude: get(LATITUDE_COLUMN)?,
            longitude: get(LONGITUDE_COLUMN)?,
            geometry: get(GEOMETRY_COLUMN)?,
        })
    }

    fn to_record(
        &self,
        row_idx: usize,
        row: &StringRecord,
        headers: &StringRecord,
    ) -> Result<BuildingRecord, String> {
        let confidence = get_f64(row, self.confidence, CONFIDENCE_COLUMN, row_idx)?;
        let latitude = get_f64(row, self.latitude, LATITUDE_COLUMN, row_idx)?;
        let longitude = get_f64(row, self.longitude, LONGITUDE_COLUMN, row_idx)?;
        let geometry_wkt = row
            .get(self.geometry)
            .ok_or_else(|| format!("row {row_idx} missing geometry index"))?
            .to_string();
        let attributes = headers
            .iter()
            .zip(row.iter())
            .enumerate()
            .filter(|(i, _)| *i != self.geometry)
            .map(|(_, (k, v))| (k.trim().to_string(), v.to_string()))
            .collect_vec();
        Ok(BuildingRecord {
            row: row_idx,
            confidence,
            latitude,
            longitude,
            geometry_wkt,
            attributes,
        })
    }
}

fn get_f64(row: &StringRecord, index: usize, col: &str, row_idx: usize) -> Result<f64, String> {
    let value = row
        .get(index)
        .ok_or_else(|| format!("row {row_idx} missing {col} index"))?;
    value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("row {row_idx} could not read {col} value '{value}' as a number: {e}"))
}
