use crate::error::CompileResult;
use crate::theme::ThemeNaming;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "themes.toml";
pub const DEFAULT_INPUT_DIR: &str = "res/themes";
pub const DEFAULT_OUTPUT_PATH: &str = "src/themes.rs";
pub const ENV_PREFIX: &str = "THEMES";

/// Compiler settings.
///
/// Every field is optional; the accessors supply the defaults, which match
/// running the compiler from the project root with no configuration at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompilerConfig {
    input_dir: Option<PathBuf>,
    output_path: Option<PathBuf>,
    sort_themes: Option<bool>,
    theme_naming: Option<ThemeNaming>,
    #[serde(default)]
    logging: LoggingConfig,
}

impl CompilerConfig {
    /// Load settings from a TOML file and `THEMES__*` environment variables.
    ///
    /// Without an explicit `path` the file is `themes.toml` in the working
    /// directory and may be absent. An explicit path must exist.
    /// Environment entries override file values.
    pub fn load(path: Option<&Path>) -> CompileResult<Self> {
        let file_source = match path {
            Some(path) => File::from(path).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        let config = Config::builder()
            .add_source(file_source)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let loaded: CompilerConfig = config.try_deserialize()?;
        log::debug!("Loaded compiler configuration: {loaded:?}");
        Ok(loaded)
    }

    pub fn input_dir(&self) -> &Path {
        self.input_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_INPUT_DIR))
    }

    pub fn output_path(&self) -> &Path {
        self.output_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_PATH))
    }

    pub fn sort_themes(&self) -> bool {
        self.sort_themes.unwrap_or(true)
    }

    pub fn theme_naming(&self) -> ThemeNaming {
        self.theme_naming.unwrap_or_default()
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(dir.into());
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn with_sort_themes(mut self, sort: bool) -> Self {
        self.sort_themes = Some(sort);
        self
    }

    pub fn with_theme_naming(mut self, naming: ThemeNaming) -> Self {
        self.theme_naming = Some(naming);
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = Some(level.into());
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("warn")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CompilerConfig::default();

        assert_eq!(config.input_dir(), Path::new("res/themes"));
        assert_eq!(config.output_path(), Path::new("src/themes.rs"));
        assert!(config.sort_themes());
        assert_eq!(config.theme_naming(), ThemeNaming::FileName);
        assert_eq!(config.logging().level(), "warn");
        assert_eq!(config.logging().file(), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("themes.toml");
        fs::write(
            &path,
            r#"
input_dir = "assets/themes"
output_path = "generated/themes.rs"
sort_themes = false
theme_naming = "file_stem"

[logging]
level = "debug"
file = "themes.log"
"#,
        )
        .unwrap();

        let config = assert_ok!(CompilerConfig::load(Some(path.as_path())));

        assert_eq!(config.input_dir(), Path::new("assets/themes"));
        assert_eq!(config.output_path(), Path::new("generated/themes.rs"));
        assert!(!config.sort_themes());
        assert_eq!(config.theme_naming(), ThemeNaming::FileStem);
        assert_eq!(config.logging().level(), "debug");
        assert_eq!(config.logging().file(), Some("themes.log"));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        assert_err!(CompilerConfig::load(Some(dir.path().join("missing.toml").as_path())));
    }

    #[test]
    fn test_overrides_replace_loaded_values() {
        let config = CompilerConfig::default()
            .with_input_dir("a")
            .with_output_path("b.rs")
            .with_sort_themes(false)
            .with_theme_naming(ThemeNaming::FileStem)
            .with_log_level("trace");

        assert_eq!(config.input_dir(), Path::new("a"));
        assert_eq!(config.output_path(), Path::new("b.rs"));
        assert!(!config.sort_themes());
        assert_eq!(config.theme_naming(), ThemeNaming::FileStem);
        assert_eq!(config.logging().level(), "trace");
    }
}
