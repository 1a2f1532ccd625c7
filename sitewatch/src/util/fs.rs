use std::{io::Write, path::Path};

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), String>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if dirspath.as_os_str().is_empty() || dirspath.is_dir() {
        Ok(())
    } else {
        std::fs::create_dir_all(dirspath).map_err(|e| {
            format!(
                "error building output directory '{}': {e}",
                dirspath.to_str().unwrap_or_default()
            )
        })
    }
}

/// true if the file name marks it as gzip compressed
pub fn is_gzip<P>(path: P) -> bool
where
    P: AsRef<Path>,
{
    path.as_ref()
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// replaces the file at `path` with `contents`. the contents are written to a
/// sibling temporary file which is then renamed over the target, so readers see
/// either the old file or the new one. the parent directory is created if needed.
pub fn write_atomic<P>(path: P, contents: &[u8]) -> Result<(), String>
where
    P: AsRef<Path>,
{
    let target = path.as_ref();
    if let Some(parent) = target.parent() {
        create_dirs(parent)?;
    }
    let file_name = target
        .file_name()
        .ok_or_else(|| format!("output path '{}' has no file name", target.display()))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = target.with_file_name(tmp_name);

    let write_result = std::fs::File::create(&tmp_path).and_then(|mut f| {
        f.write_all(contents)?;
        f.sync_all()
    });
    if let Err(e) = write_result {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(format!("failure writing '{}': {e}", tmp_path.display()));
    }
    std::fs::rename(&tmp_path, target).map_err(|e| {
        let _ = std::fs::remove_file(&tmp_path);
        format!(
            "failure moving '{}' to '{}': {e}",
            tmp_path.display(),
            target.display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_gzip() {
        assert!(is_gzip("buildings.csv.gz"));
        assert!(is_gzip("BUILDINGS.CSV.GZ"));
        assert!(!is_gzip("buildings.csv"));
        assert!(!is_gzip("gz"));
    }

    #[test]
    fn test_write_atomic_creates_directory_and_overwrites() {
        let dir = std::env::temp_dir().join("sitewatch_fs_write_atomic").join("assets");
        let _ = std::fs::remove_dir_all(&dir);
        let target = dir.join("out.json");
        write_atomic(&target, b"first").expect("first write");
        write_atomic(&target, b"second").expect("second write");
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");
        assert!(!dir.join("out.json.tmp").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
