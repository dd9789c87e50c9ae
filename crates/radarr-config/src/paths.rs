use anyhow::Result;
use std::path::PathBuf;

/// Get the config file location, honoring `RADARR_SDK_CONFIG` before the platform config dir
/// (e.g. ~/.config/radarr-sdk/config.toml on Linux)
pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("RADARR_SDK_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let base_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(base_dir.join("radarr-sdk").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path() {
        std::env::remove_var("RADARR_SDK_CONFIG");
        if let Ok(path) = default_config_path() {
            assert!(path.ends_with("radarr-sdk/config.toml"));
        }

        std::env::set_var("RADARR_SDK_CONFIG", "/tmp/radarr/custom.toml");
        assert_eq!(default_config_path().unwrap(), PathBuf::from("/tmp/radarr/custom.toml"));
        std::env::remove_var("RADARR_SDK_CONFIG");
    }
}
