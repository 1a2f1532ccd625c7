use super::{
    derive_sites, read_compliance_report, read_detections, read_feature_collection,
    ComplianceReport, DetectionIndex, SiteError, SiteRecord,
};
use crate::config::SiteConfiguration;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// counts shown on the dashboard header
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteSummary {
    pub total: usize,
    pub authorized: usize,
    pub unauthorized: usize,
}

impl std::fmt::Display for SiteSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} sites: {} authorized, {} unauthorized",
            self.total, self.authorized, self.unauthorized
        )
    }
}

/// the derived sites, loaded once at startup and shared read-only with whatever
/// presents them. updates produce a new context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteContext {
    sites: Vec<SiteRecord>,
}

impl SiteContext {
    pub fn new(sites: Vec<SiteRecord>) -> SiteContext {
        SiteContext { sites }
    }

    /// reads the footprints, detections, and compliance report named in the
    /// configuration and derives the sites from them.
    pub fn load(conf: &SiteConfiguration) -> Result<SiteContext, SiteError> {
        let footprints_path = Path::new(&conf.footprints_file);
        let footprints = read_feature_collection(footprints_path)
            .map_err(|e| SiteError::FootprintsError(conf.footprints_file.clone(), e))?;
        log::info!(
            "read {} footprints from {}",
            footprints.features.len(),
            conf.footprints_file
        );

        let detections = match optional_input(conf.detections_file.as_deref(), "detections") {
            Some(path) => read_detections(path)?,
            None => DetectionIndex::empty(),
        };
        let compliance = match optional_input(conf.compliance_file.as_deref(), "compliance report") {
            Some(path) => read_compliance_report(path, conf.join_key)?,
            None => ComplianceReport::empty(),
        };

        let sites = derive_sites(&footprints, &detections, &compliance, conf.join_key);
        let context = SiteContext::new(sites);
        log::info!("{}", context.summary());
        Ok(context)
    }

    pub fn sites(&self) -> &[SiteRecord] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SiteRecord> {
        self.sites.iter().find(|s| s.id == id)
    }

    pub fn authorized(&self) -> impl Iterator<Item = &SiteRecord> {
        self.sites.iter().filter(|s| s.is_authorized)
    }

    pub fn unauthorized(&self) -> impl Iterator<Item = &SiteRecord> {
        self.sites.iter().filter(|s| !s.is_authorized)
    }

    pub fn summary(&self) -> SiteSummary {
        let authorized = self.authorized().count();
        SiteSummary {
            total: self.sites.len(),
            authorized,
            unauthorized: self.sites.len() - authorized,
        }
    }

    /// sets the authorization of every site with the given id, as when a
    /// reviewer approves a site or flags it as unauthorized.
    ///
    /// # Returns
    ///
    /// * a new context with the change applied, or [`SiteError::SiteNotFound`]
    pub fn with_authorization(&self, id: &str, is_authorized: bool) -> Result<SiteContext, SiteError> {
        if self.get(id).is_none() {
            return Err(SiteError::SiteNotFound(id.to_string()));
        }
        let sites = self
            .sites
            .iter()
            .map(|s| {
                if s.id == id {
                    SiteRecord {
                        is_authorized,
                        ..s.clone()
                    }
                } else {
                    s.clone()
                }
            })
            .collect();
        Ok(SiteContext { sites })
    }
}

fn optional_input<'a>(file: Option<&'a str>, name: &str) -> Option<&'a Path> {
    let path = Path::new(file?);
    if path.exists() {
        Some(path)
    } else {
        log::warn!("{name} file {} not found, continuing without it", path.display());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::JoinKey;

    fn site(id: &str, is_authorized: bool) -> SiteRecord {
        SiteRecord {
            id: id.to_string(),
            index: String::from("0"),
            site_key: String::new(),
            location_name: format!("Site {id}"),
            lat: 28.58,
            lon: 77.22,
            is_authorized,
            expansion_pct: 0.0,
            detected: false,
        }
    }

    #[test]
    fn test_summary_and_views() {
        let ctx = SiteContext::new(vec![site("a", true), site("b", false), site("c", true)]);
        assert_eq!(
            ctx.summary(),
            SiteSummary {
                total: 3,
                authorized: 2,
                unauthorized: 1
            }
        );
        let unauth = ctx.unauthorized().map(|s| s.id.as_str()).collect::<Vec<_>>();
        assert_eq!(unauth, vec!["b"]);
    }

    #[test]
    fn test_with_authorization_returns_updated_copy() {
        let ctx = SiteContext::new(vec![site("a", true), site("b", false)]);
        let revoked = ctx.with_authorization("a", false).expect("site exists");
        assert!(ctx.get("a").unwrap().is_authorized);
        assert!(!revoked.get("a").unwrap().is_authorized);
        assert_eq!(revoked.summary().unauthorized, 2);
        let approved = revoked.with_authorization("b", true).unwrap();
        assert!(approved.get("b").unwrap().is_authorized);
        assert!(matches!(
            ctx.with_authorization("zzz", true),
            Err(SiteError::SiteNotFound(_))
        ));
    }

    #[test]
    fn test_load_without_optional_inputs() {
        let dir = std::env::temp_dir().join("sitewatch_context_load");
        std::fs::create_dir_all(&dir).unwrap();
        let footprints = dir.join("authorized_footprints.json");
        std::fs::write(
            &footprints,
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","properties":{"id":7},"geometry":{"type":"Polygon","coordinates":[[[77.22,28.58],[77.2201,28.58],[77.2201,28.5801],[77.22,28.58]]]}}
            ]}"#,
        )
        .unwrap();
        let conf = SiteConfiguration {
            footprints_file: footprints.to_string_lossy().to_string(),
            detections_file: Some(dir.join("missing.json").to_string_lossy().to_string()),
            compliance_file: None,
            join_key: JoinKey::Position,
        };
        let ctx = SiteContext::load(&conf).expect("should load");
        assert_eq!(ctx.len(), 1);
        assert!(ctx.get("7").unwrap().is_authorized);
        assert!(!ctx.get("7").unwrap().detected);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_footprints_fails() {
        let conf = SiteConfiguration {
            footprints_file: String::from("/nonexistent/sitewatch/footprints.json"),
            ..Default::default()
        };
        assert!(matches!(
            SiteContext::load(&conf),
            Err(SiteError::FootprintsError(_, _))
        ));
    }
}
