use serde::de::DeserializeOwned;

/// reads a configuration object from a `.toml` or `.json` file.
pub fn read_config_file<T>(f: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    if f.ends_with(".toml") {
        let s = std::fs::read_to_string(f).map_err(|e| format!("failure reading {f}: {e}"))?;
        toml::from_str(&s).map_err(|e| format!("failure decoding {f}: {e}"))
    } else if f.ends_with(".json") {
        let s = std::fs::read_to_string(f).map_err(|e| format!("failure reading {f}: {e}"))?;
        serde_json::from_str(&s).map_err(|e| format!("failure decoding {f}: {e}"))
    } else {
        Err(format!("unsupported file type: {f}"))
    }
}
