use log::info;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::errors::MagazineError;
use crate::models::category::CategoryTable;

pub struct MagazineConfig {
    pub name: String,
    pub cover_slug: String,
    pub pdf_file_name: String,
    pub download_prefix: String,
}

impl Default for MagazineConfig {
    fn default() -> Self {
        Self {
            name: String::from("ShyvnTech Magazine"),
            cover_slug: String::from("shyvntech"),
            pdf_file_name: String::from("Shyvntech_Magazine.pdf"),
            download_prefix: String::from("Shyvntech_Magazine"),
        }
    }
}

impl MagazineConfig {
    /// Synthesized name offered to clients that save a download.
    pub fn download_file_name(&self, year: i32, month: &str) -> String {
        format!("{}_{}_{}.pdf", self.download_prefix, month, year)
    }
}

/// Where `GET /magazines/latest` takes its answer from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatestSource {
    Catalog,
    Archive,
}

impl std::str::FromStr for LatestSource {
    type Err = MagazineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "catalog" => Ok(LatestSource::Catalog),
            "archive" => Ok(LatestSource::Archive),
            other => Err(MagazineError::ConfigError(format!(
                "MAGAZINE_LATEST_SOURCE must be 'catalog' or 'archive', got '{}'",
                other
            ))),
        }
    }
}

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage_root: PathBuf,
    pub route_prefix: String,
    pub latest_source: LatestSource,
    pub magazine: MagazineConfig,
    pub categories: CategoryTable,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            storage_root: PathBuf::from("./wwwroot"),
            route_prefix: String::from("/api"),
            latest_source: LatestSource::Catalog,
            magazine: MagazineConfig::default(),
            categories: CategoryTable::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, MagazineError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset keys keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MagazineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.parse::<u16>().map_err(|_| {
                MagazineError::ConfigError(format!("PORT must be a valid number, got '{}'", port))
            })?;
        }
        if let Some(root) = lookup("MAGAZINE_STORAGE_ROOT") {
            config.storage_root = PathBuf::from(root);
        }
        if let Some(prefix) = lookup("MAGAZINE_ROUTE_PREFIX") {
            config.route_prefix = normalize_prefix(&prefix);
        }
        if let Some(source) = lookup("MAGAZINE_LATEST_SOURCE") {
            config.latest_source = source.parse()?;
        }
        if let Some(name) = lookup("MAGAZINE_PDF_FILE_NAME") {
            config.magazine.pdf_file_name = name;
        }
        if let Some(prefix) = lookup("MAGAZINE_DOWNLOAD_PREFIX") {
            config.magazine.download_prefix = prefix;
        }
        if let Some(path) = lookup("MAGAZINE_CATEGORIES_FILE") {
            config.categories = load_categories(&path)?;
        }

        Ok(config)
    }
}

fn load_categories(path: &str) -> Result<CategoryTable, MagazineError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        MagazineError::ConfigError(format!("Cannot read categories file {}: {}", path, e))
    })?;
    let table = CategoryTable::from_json(&raw).map_err(|e| {
        MagazineError::ConfigError(format!("Invalid categories file {}: {}", path, e))
    })?;
    info!(
        "Loaded {} month mappings from {}",
        table.months.len(),
        path
    );
    Ok(table)
}

/// `"api/"` -> `"/api"`, `"/"` -> `""`.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
