use super::{
    parse_footprint_wkt, read_building_records, DropReason, DropReport, FootprintError,
    FootprintFeature,
};
use crate::config::PreprocessConfiguration;
use crate::export;
use kdam::tqdm;
use serde::{Deserialize, Serialize};
use sitewatch_core::util::simplify_ops;
use std::path::Path;

/// outcome of a preprocessing run
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PreprocessSummary {
    /// rows read from the building data source
    pub rows: usize,
    /// footprints written to the output file
    pub retained: usize,
    pub dropped: DropReport,
    pub vertices_before: usize,
    pub vertices_after: usize,
}

/// reads, filters, validates, and simplifies building footprints without
/// writing anything. the returned features keep the input row order.
///
/// # Arguments
///
/// * `input_file` - building data source, gzip-compressed CSV
/// * `conf` - filter and simplification settings
///
/// # Returns
///
/// * the retained footprints along with a summary of the run
pub fn collect_footprints(
    input_file: &Path,
    conf: &PreprocessConfiguration,
) -> Result<(Vec<FootprintFeature>, PreprocessSummary), FootprintError> {
    conf.validate()?;
    let filter = conf.region_filter();
    let rows = read_building_records(input_file)?;
    let n_rows = rows.len();

    let mut dropped = DropReport::default();
    let mut features = vec![];
    let mut vertices_before = 0;
    let mut vertices_after = 0;
    let row_iter = tqdm!(rows.into_iter(), total = n_rows, desc = "simplify footprints");
    for row in row_iter {
        let record = match row {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}");
                dropped.add(DropReason::InvalidRow);
                continue;
            }
        };
        if let Err(reason) = filter.evaluate(&record) {
            dropped.add(reason);
            continue;
        }
        let geometry = match parse_footprint_wkt(&record.geometry_wkt) {
            Ok(geometry) => geometry,
            Err((reason, e)) => {
                log::warn!("skipping row {}: {e}", record.row);
                dropped.add(reason);
                continue;
            }
        };
        let simplified = simplify_ops::simplify_footprint(&geometry, conf.simplify_tolerance);
        let (before, after) = (
            simplify_ops::vertex_count(&geometry),
            simplify_ops::vertex_count(&simplified),
        );
        match FootprintFeature::new(&record, simplified) {
            Ok(feature) => {
                vertices_before += before;
                vertices_after += after;
                features.push(feature);
            }
            Err(e) => {
                log::warn!("skipping row {}: {e}", record.row);
                dropped.add(DropReason::InvalidGeometry);
            }
        }
    }
    eprintln!();

    let summary = PreprocessSummary {
        rows: n_rows,
        retained: features.len(),
        dropped,
        vertices_before,
        vertices_after,
    };
    log::info!(
        "retained {} of {} rows; dropped {}",
        summary.retained,
        summary.rows,
        summary.dropped
    );
    log::info!(
        "simplification reduced {} vertices to {}",
        summary.vertices_before,
        summary.vertices_after
    );
    Ok((features, summary))
}

/// runs the full preprocessing step: collects footprints from `input_file` and
/// writes them to the configured output file. nothing is written when any
/// fatal error occurs.
pub fn run_preprocess(
    input_file: &Path,
    conf: &PreprocessConfiguration,
) -> Result<PreprocessSummary, FootprintError> {
    let (features, summary) = collect_footprints(input_file, conf)?;
    export::write_footprints(Path::new(&conf.output_file), &features)?;
    Ok(summary)
}
