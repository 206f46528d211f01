use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
pub use duration::Duration;
use enquiry_models::{contact::ContactFieldMapping, notification::ToastPosition};
use serde::Deserialize;
use url::Url;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the configuration from the given TOML files. Files listed later
/// override values of files listed earlier.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_override(paths, &[])
}

/// Like [`load`], but additionally applies the given TOML snippets on top of
/// the configuration files.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, &snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub form_sink: FormSinkConfig,
    pub contact: ContactConfig,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Deserialize)]
pub struct FormSinkConfig {
    pub endpoint: Url,
    pub timeout: Option<Duration>,
    #[serde(default)]
    pub fields: ContactFieldMapping,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub query: String,
    pub page_title: String,
    pub close_delay: Duration,
}

#[derive(Debug, Deserialize)]
pub struct NotificationsConfig {
    pub auto_close: Duration,
    #[serde(default)]
    pub position: ToastPosition,
}
