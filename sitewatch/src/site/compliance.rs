use super::{JoinKey, SiteError};
use itertools::Itertools;
use serde::Deserialize;
use std::{collections::HashMap, path::Path};

pub const SITE_INDEX_COLUMN: &str = "Site_Index";
pub const SITE_KEY_COLUMN: &str = "Site_Key";
pub const COMPLIANCE_STATUS_COLUMN: &str = "Compliance_Status";
pub const EXCEEDANCE_PERCENT_COLUMN: &str = "Exceedance_Percent";
/// the only status value that marks a site as authorized
pub const AUTHORIZED_STATUS: &str = "AUTHORIZED";

/// a row of the AI compliance report
#[derive(Deserialize, Debug, Clone)]
pub struct ComplianceRow {
    #[serde(rename = "Site_Index", default)]
    pub site_index: Option<usize>,
    #[serde(rename = "Site_Key", default)]
    pub site_key: Option<String>,
    #[serde(rename = "Compliance_Status")]
    pub compliance_status: String,
    #[serde(rename = "Exceedance_Percent", default)]
    pub exceedance_percent: Option<f64>,
}

/// compliance result attached to a site
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplianceEntry {
    pub is_authorized: bool,
    pub expansion_pct: f64,
}

impl ComplianceEntry {
    /// result used for sites missing from the report: authorized, no exceedance
    pub const DEFAULT: ComplianceEntry = ComplianceEntry {
        is_authorized: true,
        expansion_pct: 0.0,
    };
}

impl From<&ComplianceRow> for ComplianceEntry {
    fn from(row: &ComplianceRow) -> Self {
        ComplianceEntry {
            is_authorized: row.compliance_status.trim() == AUTHORIZED_STATUS,
            expansion_pct: row.exceedance_percent.unwrap_or(0.0),
        }
    }
}

/// compliance results indexed by feature position and by site key. when a key
/// appears on more than one row, the first row wins.
#[derive(Debug, Clone, Default)]
pub struct ComplianceReport {
    by_index: HashMap<usize, ComplianceEntry>,
    by_site_key: HashMap<String, ComplianceEntry>,
}

impl ComplianceReport {
    pub fn empty() -> ComplianceReport {
        ComplianceReport::default()
    }

    pub fn new<'a, I>(rows: I) -> ComplianceReport
    where
        I: IntoIterator<Item = &'a ComplianceRow>,
    {
        let mut report = ComplianceReport::default();
        for row in rows.into_iter() {
            let entry = ComplianceEntry::from(row);
            if let Some(idx) = row.site_index {
                report.by_index.entry(idx).or_insert(entry);
            }
            if let Some(key) = row.site_key.as_ref().filter(|k| !k.trim().is_empty()) {
                report
                    .by_site_key
                    .entry(key.trim().to_string())
                    .or_insert(entry);
            }
        }
        report
    }

    pub fn len(&self) -> usize {
        self.by_index.len().max(self.by_site_key.len())
    }

    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty() && self.by_site_key.is_empty()
    }

    /// finds the compliance result for a feature, if the report has one
    pub fn lookup(&self, join_key: JoinKey, index: usize, site_key: &str) -> Option<&ComplianceEntry> {
        match join_key {
            JoinKey::Position => self.by_index.get(&index),
            JoinKey::SiteKey => self.by_site_key.get(site_key),
        }
    }

    /// compliance result for a feature, falling back to [`ComplianceEntry::DEFAULT`]
    pub fn resolve(&self, join_key: JoinKey, index: usize, site_key: &str) -> ComplianceEntry {
        self.lookup(join_key, index, site_key)
            .copied()
            .unwrap_or(ComplianceEntry::DEFAULT)
    }
}

/// reads a compliance report CSV. the report must have `Compliance_Status` and
/// `Exceedance_Percent` columns, plus the column for the chosen join key.
/// header names and cells are trimmed. rows that cannot be read are logged and
/// skipped.
pub fn read_compliance_report(filepath: &Path, join_key: JoinKey) -> Result<ComplianceReport, SiteError> {
    let source = filepath.to_string_lossy().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(filepath)
        .map_err(|e| SiteError::ComplianceError(source.clone(), e.to_string()))?;
    let headers = reader
        .headers()
        .map_err(|e| SiteError::ComplianceError(source.clone(), e.to_string()))?
        .clone();
    let key_column = match join_key {
        JoinKey::Position => SITE_INDEX_COLUMN,
        JoinKey::SiteKey => SITE_KEY_COLUMN,
    };
    let missing = [key_column, COMPLIANCE_STATUS_COLUMN, EXCEEDANCE_PERCENT_COLUMN]
        .into_iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .join(", ");
    if !missing.is_empty() {
        return Err(SiteError::SchemaError(source, missing));
    }

    let mut rows = vec![];
    for (row_idx, row_result) in reader.deserialize::<ComplianceRow>().enumerate() {
        match row_result {
            Ok(row) => rows.push(row),
            Err(e) => log::warn!("skipping compliance report row {row_idx} in {source}: {e}"),
        }
    }
    let report = ComplianceReport::new(rows.iter());
    log::info!(
        "read {} compliance rows from {source} ({} usable entries)",
        rows.len(),
        report.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(idx: usize, status: &str, pct: f64) -> ComplianceRow {
        ComplianceRow {
            site_index: Some(idx),
            site_key: Some(format!("key{idx}")),
            compliance_status: String::from(status),
            exceedance_percent: Some(pct),
        }
    }

    #[test]
    fn test_lookup_by_position_and_key() {
        let rows = vec![row(1, "UNAUTHORIZED", 37.5), row(2, "AUTHORIZED", 4.0)];
        let report = ComplianceReport::new(rows.iter());
        let entry = report.resolve(JoinKey::Position, 1, "ignored");
        assert!(!entry.is_authorized);
        assert_eq!(entry.expansion_pct, 37.5);
        let entry = report.resolve(JoinKey::SiteKey, 99, "key2");
        assert!(entry.is_authorized);
        assert_eq!(entry.expansion_pct, 4.0);
    }

    #[test]
    fn test_miss_resolves_to_default() {
        let report = ComplianceReport::empty();
        assert_eq!(report.resolve(JoinKey::Position, 0, "k"), ComplianceEntry::DEFAULT);
        assert!(report.lookup(JoinKey::SiteKey, 0, "k").is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let rows = vec![row(1, "UNAUTHORIZED", 10.0), row(1, "AUTHORIZED", 0.0)];
        let report = ComplianceReport::new(rows.iter());
        assert!(!report.resolve(JoinKey::Position, 1, "").is_authorized);
    }

    #[test]
    fn test_status_is_exact() {
        let rows = vec![row(0, "authorized", 0.0), row(1, " AUTHORIZED ", 0.0)];
        let report = ComplianceReport::new(rows.iter());
        assert!(!report.resolve(JoinKey::Position, 0, "").is_authorized);
        assert!(report.resolve(JoinKey::Position, 1, "").is_authorized);
    }

    #[test]
    fn test_read_report_file() {
        let path = std::env::temp_dir().join("sitewatch_compliance_read.csv");
        std::fs::write(
            &path,
            "Site_Index,Compliance_Status,Exceedance_Percent\n\
             1,UNAUTHORIZED,22.5\n\
             not_a_number,AUTHORIZED,1.0\n\
             3,AUTHORIZED,\n",
        )
        .unwrap();
        let report = read_compliance_report(&path, JoinKey::Position).expect("should read");
        assert_eq!(report.len(), 2);
        assert_eq!(report.resolve(JoinKey::Position, 1, "").expansion_pct, 22.5);
        assert_eq!(report.resolve(JoinKey::Position, 3, "").expansion_pct, 0.0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_padded_headers_still_join() {
        let path = std::env::temp_dir().join("sitewatch_compliance_padded.csv");
        std::fs::write(
            &path,
            " Site_Index , Compliance_Status ,Exceedance_Percent \n 0 ,UNAUTHORIZED, 12.5\n",
        )
        .unwrap();
        let report = read_compliance_report(&path, JoinKey::Position).expect("should read");
        let entry = report.resolve(JoinKey::Position, 0, "");
        assert!(!entry.is_authorized);
        assert_eq!(entry.expansion_pct, 12.5);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_key_column_is_schema_error() {
        let path = std::env::temp_dir().join("sitewatch_compliance_schema.csv");
        std::fs::write(&path, "Site_Index,Compliance_Status,Exceedance_Percent\n0,AUTHORIZED,0\n").unwrap();
        match read_compliance_report(&path, JoinKey::SiteKey) {
            Err(SiteError::SchemaError(_, missing)) => assert_eq!(missing, "Site_Key"),
            other => panic!("expected SchemaError, found {other:?}"),
        }
        std::fs::remove_file(path).ok();
    }
}
