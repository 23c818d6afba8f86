//! Configuration management for Portal.
//!
//! Parses `portal.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `site.base_url`

mod expand;

use portal_landing::LandingSection;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "portal.toml";

/// Upper bound for `navigation.max_depth`.
const MAX_DEPTH_LIMIT: usize = 64;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override sidebars file.
    pub sidebars: Option<PathBuf>,
    /// Override maximum category nesting depth.
    pub max_depth: Option<usize>,
    /// Override broken link policy.
    pub on_broken_links: Option<BrokenLinks>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata.
    pub site: SiteConfig,
    /// Docs configuration (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Navigation configuration.
    pub navigation: NavigationConfig,
    /// Landing page configuration.
    pub landing: LandingConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site metadata.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Short tagline.
    pub tagline: Option<String>,
    /// Public URL of the site (scheme and host).
    pub url: String,
    /// Path the site is served under.
    pub base_url: String,
    /// Default locale.
    pub locale: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            tagline: None,
            url: "http://localhost".to_owned(),
            base_url: "/".to_owned(),
            locale: "en".to_owned(),
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    sidebars: Option<String>,
    route_base_path: Option<String>,
}

/// Resolved docs configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for documents.
    pub source_dir: PathBuf,
    /// Sidebars specification file.
    pub sidebars_path: PathBuf,
    /// Route the docs are mounted at, relative to `site.base_url`.
    pub route_base_path: String,
}

/// What to do with references to documents that don't exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinks {
    /// Fail the check.
    #[default]
    Error,
    /// Report and continue.
    Warn,
    /// Skip reference validation.
    Ignore,
}

/// Navigation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Maximum category nesting depth.
    pub max_depth: usize,
    /// Broken link policy.
    pub on_broken_links: BrokenLinks,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            on_broken_links: BrokenLinks::Error,
        }
    }
}

/// Landing page configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Sidebar the landing page links into.
    pub sidebar: String,
    /// Curated sections in display order.
    pub sections: Vec<LandingSection>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            sidebar: "docsSidebar".to_owned(),
            sections: Vec::new(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.url`").
        field: String,
        /// Error message (e.g., "${`DOCS_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a path field to be absolute (start with `/`).
fn require_absolute_path(path: &str, field: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "{field} must start with /"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `portal.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(sidebars) = &settings.sidebars {
            self.docs_resolved.sidebars_path.clone_from(sidebars);
        }
        if let Some(max_depth) = settings.max_depth {
            self.navigation.max_depth = max_depth;
        }
        if let Some(on_broken_links) = settings.on_broken_links {
            self.navigation.on_broken_links = on_broken_links;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            navigation: NavigationConfig::default(),
            landing: LandingConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                sidebars_path: base.join("sidebars.yaml"),
                route_base_path: "/".to_owned(),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after applying CLI
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_docs()?;
        self.validate_navigation()?;
        require_non_empty(&self.landing.sidebar, "landing.sidebar")?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_http_url(&self.site.url, "site.url")?;
        require_absolute_path(&self.site.base_url, "site.base_url")?;
        require_non_empty(&self.site.locale, "site.locale")?;
        Ok(())
    }

    fn validate_docs(&self) -> Result<(), ConfigError> {
        require_absolute_path(&self.docs_resolved.route_base_path, "docs.route_base_path")
    }

    fn validate_navigation(&self) -> Result<(), ConfigError> {
        let depth = self.navigation.max_depth;
        if depth == 0 {
            return Err(ConfigError::Validation(
                "navigation.max_depth must be greater than 0".to_owned(),
            ));
        }
        if depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::Validation(format!(
                "navigation.max_depth cannot exceed {MAX_DEPTH_LIMIT}"
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.url = expand::expand_env(&self.site.url, "site.url")?;
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            sidebars_path: resolve(self.docs.sidebars.as_deref(), "sidebars.yaml"),
            route_base_path: self
                .docs
                .route_base_path
                .clone()
                .unwrap_or_else(|| "/".to_owned()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use portal_landing::SectionStyle;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.site.url, "http://localhost");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.site.locale, "en");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(
            config.docs_resolved.sidebars_path,
            PathBuf::from("/test/sidebars.yaml")
        );
        assert_eq!(config.docs_resolved.route_base_path, "/");
        assert_eq!(config.navigation.max_depth, 8);
        assert_eq!(config.navigation.on_broken_links, BrokenLinks::Error);
        assert_eq!(config.landing.sidebar, "docsSidebar");
        assert!(config.landing.sections.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.navigation.max_depth, 8);
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
title = "Rakam Systems"
tagline = "Core Modules, SDKs, Developer Console"
url = "https://docs.example.com"
base_url = "/portal/"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "Rakam Systems");
        assert_eq!(
            config.site.tagline.as_deref(),
            Some("Core Modules, SDKs, Developer Console")
        );
        assert_eq!(config.site.url, "https://docs.example.com");
        assert_eq!(config.site.base_url, "/portal/");
        assert_eq!(config.site.locale, "en");
    }

    #[test]
    fn test_parse_navigation_config() {
        let toml = r#"
[navigation]
max_depth = 3
on_broken_links = "warn"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.navigation.max_depth, 3);
        assert_eq!(config.navigation.on_broken_links, BrokenLinks::Warn);
    }

    #[test]
    fn test_parse_invalid_broken_links_policy() {
        let toml = "[navigation]\non_broken_links = \"throw\"\n";
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_parse_landing_config() {
        let toml = r#"
[landing]
sidebar = "sdkSidebar"

[[landing.sections]]
title = "Operational readiness"
style = "pills"
items = [{ id = "operations/deployment", label = "Deployment" }]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.landing.sidebar, "sdkSidebar");
        assert_eq!(config.landing.sections.len(), 1);
        assert_eq!(config.landing.sections[0].style, SectionStyle::Pills);
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[docs]
source_dir = "content"
sidebars = "nav/sidebars.json"
route_base_path = "/docs"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/content")
        );
        assert_eq!(
            config.docs_resolved.sidebars_path,
            PathBuf::from("/project/nav/sidebars.json")
        );
        assert_eq!(config.docs_resolved.route_base_path, "/docs");
    }

    #[test]
    fn test_resolve_paths_defaults() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/project/docs"));
        assert_eq!(
            config.docs_resolved.sidebars_path,
            PathBuf::from("/project/sidebars.yaml")
        );
        assert_eq!(config.docs_resolved.route_base_path, "/");
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));

        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            sidebars: Some(PathBuf::from("/custom/sidebars.yaml")),
            max_depth: Some(4),
            on_broken_links: Some(BrokenLinks::Ignore),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/custom/docs")
        );
        assert_eq!(
            config.docs_resolved.sidebars_path,
            PathBuf::from("/custom/sidebars.yaml")
        );
        assert_eq!(config.navigation.max_depth, 4);
        assert_eq!(config.navigation.on_broken_links, BrokenLinks::Ignore);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(config.navigation.max_depth, 8);
        assert_eq!(config.navigation.on_broken_links, BrokenLinks::Error);
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default_with_base(Path::new("/test")).validate().is_ok());
    }

    #[test]
    fn test_validate_site_title_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.title = "  ".to_owned();
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: site.title cannot be empty");
    }

    #[test]
    fn test_validate_site_url_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.url = "docs.example.com".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.url must start with http:// or https://"));
    }

    #[test]
    fn test_validate_base_url_relative() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.base_url = "portal/".to_owned();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.base_url must start with /"));
    }

    #[test]
    fn test_validate_route_base_path_relative() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.docs_resolved.route_base_path = "docs".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_max_depth_bounds() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.navigation.max_depth = 0;
        assert!(config.validate().is_err());

        config.navigation.max_depth = MAX_DEPTH_LIMIT + 1;
        assert!(config.validate().is_err());

        config.navigation.max_depth = MAX_DEPTH_LIMIT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_landing_sidebar_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.landing.sidebar = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(
            temp_dir.path(),
            "[site]\ntitle = \"Portal\"\n\n[docs]\nsource_dir = \"content\"\n",
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.title, "Portal");
        assert_eq!(config.docs_resolved.source_dir, temp_dir.path().join("content"));
        assert_eq!(
            config.docs_resolved.sidebars_path,
            temp_dir.path().join("sidebars.yaml")
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("PORTAL_TEST_LOAD_URL", "https://docs.example.com");
        }
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(
            temp_dir.path(),
            "[site]\nurl = \"${PORTAL_TEST_LOAD_URL}\"\nbase_url = \"${PORTAL_TEST_LOAD_BASE:-/}\"\n",
        );

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.url, "https://docs.example.com");
        assert_eq!(config.site.base_url, "/");
        unsafe {
            std::env::remove_var("PORTAL_TEST_LOAD_URL");
        }
    }

    #[test]
    fn test_load_missing_env_var_fails() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("PORTAL_TEST_LOAD_MISSING");
        }
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "[site]\nurl = \"${PORTAL_TEST_LOAD_MISSING}\"\n");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "site.url"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/portal.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "[site\ntitle = ");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_validates_cli_overrides() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "");
        let overrides = CliSettings {
            max_depth: Some(0),
            ..CliSettings::default()
        };

        assert!(Config::load(Some(&path), Some(&overrides)).is_err());
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_config(temp_dir.path(), "");
        let nested = temp_dir.path().join("docs/console");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Config::discover_from(&nested), Some(path));
    }

    #[test]
    fn test_discover_ignores_directory_named_like_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp_dir.path().join(CONFIG_FILENAME)).unwrap();

        let found = Config::discover_from(temp_dir.path());

        assert_ne!(found, Some(temp_dir.path().join(CONFIG_FILENAME)));
    }
}
