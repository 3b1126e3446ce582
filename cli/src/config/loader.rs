//! Simple CLI configuration loader for Ipsum Store
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./ipsum.json or ./.ipsum/config.json
//! 3. Git repository root: <repo_root>/.ipsum/config.json
//! 4. XDG config: $XDG_CONFIG_HOME/ipsum/config.json or ~/.config/ipsum/config.json
//! 5. Built-in defaults (no files)

use anyhow::{anyhow, Context, Result};
use ipsum_core::StorefrontConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "ipsum.json";
const CONFIG_DIR_NAME: &str = ".ipsum";

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Directory searched first when no override is given
    search_dir: Option<PathBuf>,
    /// Flag overrides
    route_override: Option<String>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            search_dir: None,
            route_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Search `dir` instead of the current working directory
    pub fn with_search_dir(mut self, dir: PathBuf) -> Self {
        self.search_dir = Some(dir);
        self
    }

    /// Set startup route override
    pub fn with_route_override(mut self, route: String) -> Self {
        self.route_override = Some(route);
        self
    }

    /// Load and validate configuration
    pub async fn load(&self) -> Result<StorefrontConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(route) = &self.route_override {
            config = config.with_initial_route(route.as_str());
        }

        config
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<StorefrontConfig> {
        let search_dir = match &self.search_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        // 1. Search directory
        for candidate in [
            search_dir.join(CONFIG_FILE_NAME),
            search_dir.join(CONFIG_DIR_NAME).join("config.json"),
        ] {
            if candidate.is_file() {
                return self.load_file(&candidate).await;
            }
        }

        // 2. Git repository root
        if let Some(git_root) = find_git_root(&search_dir) {
            let config_path = git_root.join(CONFIG_DIR_NAME).join("config.json");
            if config_path.is_file() {
                return self.load_file(&config_path).await;
            }
        }

        // 3. XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("ipsum").join("config.json");
            if config_path.is_file() {
                return self.load_file(&config_path).await;
            }
        }

        // 4. Defaults
        debug!("No configuration file found, using defaults");
        Ok(StorefrontConfig::default())
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<StorefrontConfig> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);

        if path.is_file() {
            self.load_file(&path).await
        } else if path.is_dir() {
            let config_file = path.join(CONFIG_FILE_NAME);
            if config_file.is_file() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No {} found in directory: {}",
                    CONFIG_FILE_NAME,
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<StorefrontConfig> {
        debug!("Loading configuration from {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        StorefrontConfig::from_json_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the git repository root at or above `start`
fn find_git_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_override_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("custom.json");
        std::fs::write(&file, r#"{ "store_name": "Lorem Outlet" }"#).unwrap();

        let config = CliConfigLoader::new()
            .with_config_override(file)
            .load()
            .await
            .unwrap();
        assert_eq!(config.store_name, "Lorem Outlet");
    }

    #[tokio::test]
    async fn test_override_directory_uses_ipsum_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("ipsum.json"),
            r#"{ "initial_route": "women" }"#,
        )
        .unwrap();

        let config = CliConfigLoader::new()
            .with_config_override(dir.path().to_path_buf())
            .load()
            .await
            .unwrap();
        assert_eq!(config.initial_route.as_str(), "/women");
    }

    #[tokio::test]
    async fn test_missing_override_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = CliConfigLoader::new()
            .with_config_override(dir.path().join("nope.json"))
            .load()
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_search_dir_prefers_ipsum_json() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".ipsum")).unwrap();
        std::fs::write(
            dir.path().join(".ipsum").join("config.json"),
            r#"{ "store_name": "Hidden" }"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("ipsum.json"), r#"{ "store_name": "Visible" }"#).unwrap();

        let config = CliConfigLoader::new()
            .with_search_dir(dir.path().to_path_buf())
            .load()
            .await
            .unwrap();
        assert_eq!(config.store_name, "Visible");
    }

    #[tokio::test]
    async fn test_search_dir_falls_back_to_dot_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".ipsum")).unwrap();
        std::fs::write(
            dir.path().join(".ipsum").join("config.json"),
            r#"{ "nav_labels": ["Home"] }"#,
        )
        .unwrap();

        let config = CliConfigLoader::new()
            .with_search_dir(dir.path().to_path_buf())
            .load()
            .await
            .unwrap();
        assert_eq!(config.nav_labels, vec!["Home"]);
    }

    #[tokio::test]
    async fn test_route_flag_overrides_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("ipsum.json"),
            r#"{ "initial_route": "women" }"#,
        )
        .unwrap();

        let config = CliConfigLoader::new()
            .with_search_dir(dir.path().to_path_buf())
            .with_route_override("men".to_string())
            .load()
            .await
            .unwrap();
        assert_eq!(config.initial_route.as_str(), "/men");
    }

    #[tokio::test]
    async fn test_route_flag_is_normalized_without_config_file() {
        let dir = TempDir::new().unwrap();

        let config = CliConfigLoader::new()
            .with_search_dir(dir.path().to_path_buf())
            .with_route_override(" women/ ".to_string())
            .load()
            .await
            .unwrap();
        assert_eq!(
            config,
            StorefrontConfig::default().with_initial_route("/women")
        );
    }

    #[tokio::test]
    async fn test_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("ipsum.json");
        std::fs::write(&file, r#"{ "history": { "max_entries": 0 } }"#).unwrap();

        let err = CliConfigLoader::new()
            .with_config_override(file)
            .load()
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_find_git_root() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_git_root(&nested), Some(dir.path().to_path_buf()));
    }
}
