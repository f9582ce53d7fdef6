//! Page files and config, embedded in the binary and overridable on disk.
//!
//! `WEB_DIR` and `CONFIG_FILE` each switch one category to the filesystem.
//! Unset means embedded only. A configured path that is missing or empty is
//! seeded from the embedded copies at startup; files absent from a
//! configured directory still resolve to the embedded version.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded page assets (HTML, JavaScript, CSS)
#[derive(RustEmbed)]
#[folder = "web/"]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.css"]
struct EmbeddedWeb;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Web,
    Config,
}

/// Report of seeding operations
#[derive(Debug, Default)]
pub struct SeedReport {
    pub web_seeded: Vec<String>,
    pub config_seeded: bool,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.web_seeded.is_empty() && !self.config_seeded
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External page directory (from WEB_DIR env var)
    web_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// `None` for a path means that category is served from the binary only.
    pub fn new(web_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            web_dir,
            config_file,
        }
    }

    /// Create a loader from `WEB_DIR` and `CONFIG_FILE`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("WEB_DIR").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    pub fn web_dir(&self) -> Option<&Path> {
        self.web_dir.as_deref()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Read a page asset (index.html, app.js, app.css), preferring `WEB_DIR`.
    pub fn read_web(&self, name: &str) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref dir) = self.web_dir {
            let full_path = dir.join(name);
            if full_path.is_file() {
                tracing::trace!(path = %full_path.display(), "Loading page asset from filesystem");
                return Ok(Cow::Owned(fs::read(&full_path)?));
            }
        }

        EmbeddedWeb::get(name)
            .map(|f| {
                tracing::trace!(name, "Loading page asset from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Page asset not found: {name}"),
                )
            })
    }

    pub fn read_web_string(&self, name: &str) -> io::Result<String> {
        into_utf8(self.read_web(name)?)
    }

    /// Page asset names from the binary and `WEB_DIR` combined
    pub fn list_web(&self) -> Vec<String> {
        let mut files: HashSet<String> = EmbeddedWeb::iter().map(|s| s.to_string()).collect();

        if let Some(ref dir) = self.web_dir {
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.flatten() {
                    if let Some(name) = entry.file_name().to_str() {
                        if name.ends_with(".html") || name.ends_with(".js") || name.ends_with(".css")
                        {
                            files.insert(name.to_string());
                        }
                    }
                }
            }
        }

        let mut result: Vec<_> = files.into_iter().collect();
        result.sort();
        result
    }

    /// Read `config.yaml`, preferring `CONFIG_FILE` when it exists.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    pub fn read_config_string(&self) -> io::Result<String> {
        into_utf8(self.read_config()?)
    }

    /// True for an existing directory holding nothing but `.gitkeep`
    fn is_empty_dir(path: &Path) -> bool {
        if !path.exists() || !path.is_dir() {
            return false;
        }
        path.read_dir()
            .map(|mut entries| {
                entries.all(|e| {
                    e.map(|entry| entry.file_name() == ".gitkeep")
                        .unwrap_or(false)
                })
            })
            .unwrap_or(false)
    }

    /// Populate configured paths that are missing or empty.
    pub fn seed_if_configured(&self) -> io::Result<SeedReport> {
        let mut report = SeedReport::default();

        if let Some(ref dir) = self.web_dir {
            if !dir.exists() || Self::is_empty_dir(dir) {
                fs::create_dir_all(dir)?;
                for file in EmbeddedWeb::iter() {
                    if write_embedded_web(&file, &dir.join(file.as_ref()))? {
                        report.web_seeded.push(file.to_string());
                    }
                }
                if !report.web_seeded.is_empty() {
                    tracing::info!(
                        dir = %dir.display(),
                        count = report.web_seeded.len(),
                        "Seeded page directory with embedded assets"
                    );
                }
            }
        }

        if let Some(ref path) = self.config_file {
            if !path.exists() && write_embedded_config(path)? {
                report.config_seeded = true;
                tracing::info!(path = %path.display(), "Seeded config file with embedded default");
            }
        }

        Ok(report)
    }

    /// Copy embedded assets to disk for `filterbooth init`.
    ///
    /// Targets `WEB_DIR` and `CONFIG_FILE`, or `./web` and `./config.yaml`.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Web => {
                    let dir = self
                        .web_dir
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./web"));
                    fs::create_dir_all(&dir)?;

                    for file in EmbeddedWeb::iter() {
                        let path = dir.join(file.as_ref());
                        if !force && path.exists() {
                            report.skipped.push(path.display().to_string());
                            continue;
                        }
                        if write_embedded_web(&file, &path)? {
                            report.written.push(path.display().to_string());
                        }
                    }
                }
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| PathBuf::from("./config.yaml"));

                    if !force && path.exists() {
                        report.skipped.push(path.display().to_string());
                        continue;
                    }
                    if write_embedded_config(&path)? {
                        report.written.push(path.display().to_string());
                    }
                }
            }
        }

        Ok(report)
    }

    /// Names of the assets compiled into the binary
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Web => EmbeddedWeb::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Config => vec!["config.yaml".to_string()],
        }
    }
}

fn into_utf8(bytes: Cow<'static, [u8]>) -> io::Result<String> {
    String::from_utf8(bytes.into_owned()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Returns `false` if `name` is not embedded.
fn write_embedded_web(name: &str, path: &Path) -> io::Result<bool> {
    match EmbeddedWeb::get(name) {
        Some(file) => fs::write(path, &*file.data).map(|_| true),
        None => Ok(false),
    }
}

fn write_embedded_config(path: &Path) -> io::Result<bool> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    match EmbeddedConfig::get("config.yaml") {
        Some(file) => fs::write(path, &*file.data).map(|_| true),
        None => Ok(false),
    }
}
