use super::{SiteError, SiteRecord};
use crate::util::fs::create_dirs;
use std::{io::Write, path::Path};

/// writes sites as CSV rows with a header, to `output` when given, otherwise to stdout.
pub fn write_sites(output: Option<&Path>, sites: &[SiteRecord]) -> Result<(), SiteError> {
    match output {
        Some(path) => {
            let name = path.to_string_lossy().to_string();
            if let Some(parent) = path.parent() {
                create_dirs(parent).map_err(|e| SiteError::OutputError(name.clone(), e))?;
            }
            let file = std::fs::File::create(path)
                .map_err(|e| SiteError::OutputError(name.clone(), e.to_string()))?;
            write_csv(file, sites).map_err(|e| SiteError::OutputError(name.clone(), e))?;
            log::info!("wrote {} sites to {name}", sites.len());
            Ok(())
        }
        None => write_csv(std::io::stdout().lock(), sites)
            .map_err(|e| SiteError::OutputError(String::from("stdout"), e)),
    }
}

fn write_csv<W: Write>(writer: W, sites: &[SiteRecord]) -> Result<(), String> {
    let mut writer = csv::Writer::from_writer(writer);
    for site in sites.iter() {
        writer.serialize(site).map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_sites_csv() {
        let sites = vec![SiteRecord {
            id: String::from("1001"),
            index: String::from("1"),
            site_key: String::from("8f3da1000000000"),
            location_name: String::from("Site 1001"),
            lat: 28.575,
            lon: 77.225,
            is_authorized: false,
            expansion_pct: 42.0,
            detected: true,
        }];
        let mut buffer = vec![];
        write_csv(&mut buffer, &sites).expect("should write");
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,index,site_key,location_name,lat,lon,is_authorized,expansion_pct,detected")
        );
        assert_eq!(
            lines.next(),
            Some("1001,1,8f3da1000000000,Site 1001,28.575,77.225,false,42.0,true")
        );
    }

    #[test]
    fn test_write_sites_file() {
        let path = std::env::temp_dir()
            .join("sitewatch_site_writer")
            .join("sites.csv");
        write_sites(Some(&path), &[]).expect("should write");
        assert!(path.exists());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
