use std::path::{Path, PathBuf};

use adcraft_bridge::config::Config;
use directories::{ProjectDirs, UserDirs};
use tokio::{
    fs::{OpenOptions, create_dir_all, read_to_string},
    io::AsyncWriteExt,
};

/// Environment variable overriding the configured API base URL.
const API_URL_ENV: &str = "ADCRAFT_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No home directory could be resolved for this user.
    #[error("no config directory available for this user")]
    DirectoriesNotFound,
    #[error("config file I/O failed: {0}")]
    IoError(#[from] std::io::Error),
    #[error("config file is not valid TOML for this version: {0}")]
    DeserializeError(#[from] toml::de::Error),
    #[error("default config could not be encoded: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

fn build_project_dirs() -> Result<(PathBuf, PathBuf), ConfigError> {
    match ProjectDirs::from("dev", "adcraft", "adcraft") {
        Some(path) => Ok((
            path.config_dir().to_path_buf(),
            path.cache_dir().to_path_buf(),
        )),
        None => Err(ConfigError::DirectoriesNotFound),
    }
}

/// Loads the application configuration from disk, writing the defaults on the
/// first run. Returns the loaded config, as well as path to the cache
/// directory.
pub async fn load_config() -> Result<(Config, PathBuf), ConfigError> {
    let (config_dir, cache_dir) = build_project_dirs()?;
    let config_path = config_dir.join("config.toml");
    let config = read_or_create(&config_path).await?;
    Ok((apply_env_overrides(config), cache_dir))
}

async fn read_or_create(config_path: &Path) -> Result<Config, ConfigError> {
    if config_path.exists() {
        log::info!("Reading config from {}", config_path.display());
        let contents = read_to_string(config_path).await?;
        return Ok(toml::from_str(&contents)?);
    }

    log::info!("Writing default config to {}", config_path.display());

    let config = Config::default();
    if let Some(parent) = config_path.parent() {
        create_dir_all(parent).await?;
    }

    let contents = toml::to_string_pretty(&config)?;
    // create_new: never clobber a file written by a concurrent first start
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(config_path)
        .await?;
    file.write_all(contents.as_bytes()).await?;
    file.flush().await?;

    Ok(config)
}

fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            log::info!("Using API base URL from {API_URL_ENV}: {url}");
            config.api_base_url = url.trim().to_owned();
        }
    }
    config
}

/// Directory downloaded creatives are saved to: the configured one, else the
/// user's download directory, else the cache directory.
pub fn download_directory(config: &Config, cache_path: &Path) -> PathBuf {
    if let Some(directory) = &config.download_directory {
        return directory.clone();
    }
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| cache_path.join("downloads"))
}
