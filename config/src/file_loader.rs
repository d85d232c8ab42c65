//! # Configuration File Loading
//!
//! Loads configuration from TOML or YAML files, with format detection from
//! the file extension.

use crate::config::Config;
use std::path::Path;

/// Configuration file loading error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParse(String),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(String),

    #[error("Config file has no extension")]
    NoExtension,

    #[error("Unsupported config file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Load configuration from a TOML file.
pub fn load_from_toml(path: &Path) -> Result<Config, ConfigFileError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|_e| ConfigFileError::FileNotFound(path.display().to_string()))?;

    let config: Config =
        toml::from_str(&contents).map_err(|e| ConfigFileError::TomlParse(e.to_string()))?;

    Ok(config)
}

/// Load configuration from a YAML file.
pub fn load_from_yaml(path: &Path) -> Result<Config, ConfigFileError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|_e| ConfigFileError::FileNotFound(path.display().to_string()))?;

    let config: Config =
        serde_yaml::from_str(&contents).map_err(|e| ConfigFileError::YamlParse(e.to_string()))?;

    Ok(config)
}

/// Load configuration from a file, detecting the format from the extension.
///
/// Supported extensions: `.toml`, `.yaml`, `.yml`.
pub fn load_from_file(path: &Path) -> Result<Config, ConfigFileError> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or(ConfigFileError::NoExtension)?;

    match extension.to_lowercase().as_str() {
        "toml" => load_from_toml(path),
        "yaml" | "yml" => load_from_yaml(path),
        other => Err(ConfigFileError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_from_toml() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().with_extension("toml");

        let toml_content = r#"
[vault]
dir = "/home/alex/Notes"
workouts_subdir = "fitness"

[connect]
base_url = "https://connect.example.com"
page_size = 50
timeout_seconds = 10

[state]
file = "/home/alex/.fitsync/state.json"
"#;
        fs::write(&path, toml_content).unwrap();

        let config = load_from_toml(&path).unwrap();
        assert_eq!(config.vault.dir.to_str(), Some("/home/alex/Notes"));
        assert_eq!(config.vault.workouts_subdir, "fitness");
        assert_eq!(config.connect.base_url, "https://connect.example.com");
        assert_eq!(config.connect.page_size, 50);
        assert_eq!(config.connect.timeout_seconds, 10);
        assert_eq!(
            config.state.file.to_str(),
            Some("/home/alex/.fitsync/state.json")
        );
    }

    #[test]
    fn test_load_from_yaml() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().with_extension("yaml");

        let yaml_content = r#"
vault:
  dir: /home/alex/Notes
connect:
  page_size: 50
"#;
        fs::write(&path, yaml_content).unwrap();

        let config = load_from_yaml(&path).unwrap();
        assert_eq!(config.vault.dir.to_str(), Some("/home/alex/Notes"));
        assert_eq!(config.vault.workouts_subdir, "workouts");
        assert_eq!(config.connect.page_size, 50);
    }

    #[test]
    fn test_load_from_file_auto_detects() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().with_extension("yml");
        fs::write(&path, "connect:\n  page_size: 10\n").unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.connect.page_size, 10);
    }

    #[test]
    fn test_load_from_file_unsupported() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().with_extension("ini");
        fs::write(&path, "").unwrap();

        let result = load_from_file(&path);
        assert!(matches!(result, Err(ConfigFileError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_from_file_no_extension() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().with_extension("");
        fs::write(&path, "").unwrap();

        let result = load_from_file(&path);
        assert!(matches!(result, Err(ConfigFileError::NoExtension)));
    }

    #[test]
    fn test_load_from_toml_invalid() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().with_extension("toml");
        fs::write(&path, "[vault\n").unwrap();

        let result = load_from_toml(&path);
        assert!(matches!(result, Err(ConfigFileError::TomlParse(_))));
    }

    #[test]
    fn test_load_from_toml_not_found() {
        let path = Path::new("/nonexistent/path/fitsync.toml");
        let result = load_from_toml(path);
        assert!(matches!(result, Err(ConfigFileError::FileNotFound(_))));
    }
}
