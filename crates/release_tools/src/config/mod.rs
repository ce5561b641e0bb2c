//! Configuration system
//!
//! Every field defaults to the values the hot_chickens release process has
//! always used, so a missing or partial file behaves like the built-in setup.

use std::path::{Path, PathBuf};

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from a `.toml` or `.ron` file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;

        match format {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

#[derive(Debug, Clone, Copy)]
enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// One row of the texture pattern table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Regular expression matched case-insensitively against file names
    pub pattern: String,

    /// Canonical file stem the matching texture is renamed to
    pub name: String,
}

impl PatternSpec {
    /// Create a pattern row
    pub fn new(pattern: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            name: name.into(),
        }
    }
}

/// Material renamer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamerConfig {
    /// Directory whose immediate subdirectories hold material textures
    pub root: PathBuf,

    /// Ordered pattern table, first match wins
    pub patterns: Vec<PatternSpec>,
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            patterns: vec![
                PatternSpec::new("albedo|Base_Color", "albedo"),
                PatternSpec::new("normal", "normal"),
                PatternSpec::new("roughness", "roughness"),
            ],
        }
    }
}

impl Config for RenamerConfig {}

/// Build stager configuration
///
/// Relative paths are resolved against `root`, which is also the working
/// directory of the build command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagerConfig {
    /// Project directory the stager operates in
    pub root: PathBuf,

    /// Program and arguments of the release build
    pub build_command: Vec<String>,

    /// Transient directory the build is assembled in
    pub staging_dir: PathBuf,

    /// Asset directories copied into the staging directory under the same name
    pub asset_dirs: Vec<PathBuf>,

    /// Built executable copied into the staging root
    pub executable: PathBuf,

    /// Archive written from the staging directory
    pub archive: PathBuf,
}

impl Default for StagerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            build_command: vec!["cargo".into(), "build".into(), "--release".into()],
            staging_dir: PathBuf::from("dist"),
            asset_dirs: ["materials", "models", "shaders", "skyboxes"]
                .into_iter()
                .map(PathBuf::from)
                .collect(),
            executable: PathBuf::from(format!(
                "target/release/hot_chickens{}",
                std::env::consts::EXE_SUFFIX
            )),
            archive: PathBuf::from("hot_chickens.7z"),
        }
    }
}

impl Config for StagerConfig {}

impl StagerConfig {
    /// Resolve a configured path against the project root
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_renamer_defaults() {
        let config = RenamerConfig::default();
        assert_eq!(config.root, PathBuf::from("."));

        let names: Vec<&str> = config.patterns.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["albedo", "normal", "roughness"]);
        assert_eq!(config.patterns[0].pattern, "albedo|Base_Color");
    }

    #[test]
    fn test_stager_defaults() {
        let config = StagerConfig::default();
        assert_eq!(config.build_command, ["cargo", "build", "--release"]);
        assert_eq!(config.staging_dir, PathBuf::from("dist"));
        assert_eq!(config.archive, PathBuf::from("hot_chickens.7z"));
        assert_eq!(config.asset_dirs.len(), 4);
        assert!(config.executable.starts_with("target/release"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_against_root() {
        let config = StagerConfig {
            root: PathBuf::from("/projects/hot_chickens"),
            ..Default::default()
        };
        assert_eq!(
            config.resolve(&config.staging_dir),
            PathBuf::from("/projects/hot_chickens/dist")
        );

        // Absolute paths are kept as-is
        assert_eq!(config.resolve("/tmp/out.7z"), PathBuf::from("/tmp/out.7z"));
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stager.toml");

        let config = StagerConfig {
            archive: PathBuf::from("nightly.7z"),
            asset_dirs: vec![PathBuf::from("materials")],
            ..Default::default()
        };
        config.save_to_file(&path).unwrap();

        let loaded = StagerConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("renamer.ron");

        let mut config = RenamerConfig::default();
        config.patterns.push(PatternSpec::new("metal(lic|ness)", "metallic"));
        config.save_to_file(&path).unwrap();

        let loaded = RenamerConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stager.toml");
        std::fs::write(&path, "archive = \"custom.7z\"\n").unwrap();

        let loaded = StagerConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.archive, PathBuf::from("custom.7z"));
        assert_eq!(loaded.staging_dir, PathBuf::from("dist"));
        assert_eq!(loaded.build_command, StagerConfig::default().build_command);
    }

    #[test]
    fn test_unsupported_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stager.json");
        std::fs::write(&path, "{}").unwrap();

        let result = StagerConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));

        let result = StagerConfig::default().save_to_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("renamer.toml");
        std::fs::write(&path, "patterns = 12\n").unwrap();

        let result = RenamerConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = RenamerConfig::load_from_file("does/not/exist.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
