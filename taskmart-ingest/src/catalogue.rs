//! One-shot catalogue load and the process-wide cache.
//!
//! The catalogue is fetched and parsed once per process; every ranking
//! call afterwards works off the cached in-memory snapshot. Load failure
//! is non-fatal: it logs and yields an empty catalogue, and is never
//! retried automatically.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use taskmart_core::Task;

use crate::loader::parse_catalogue;

/// Where the catalogue document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueSource {
    Path(PathBuf),
    Url(String),
}

impl CatalogueSource {
    /// `http(s)://...` is a URL, anything else a local path.
    pub fn parse(raw: &str) -> CatalogueSource {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            CatalogueSource::Url(raw.to_string())
        } else {
            CatalogueSource::Path(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for CatalogueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogueSource::Path(path) => write!(f, "{}", path.display()),
            CatalogueSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// The loaded task set plus its load timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalogue {
    pub tasks: Vec<Task>,
    pub loaded_at: DateTime<Utc>,
}

impl Catalogue {
    pub fn empty() -> Catalogue {
        Catalogue {
            tasks: Vec::new(),
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Load and parse the catalogue from its source.
///
/// The failure path is "fetch/parse failed" -> warn + empty catalogue;
/// downstream ranking degrades to empty output instead of erroring.
pub async fn load_catalogue(source: &CatalogueSource) -> Catalogue {
    let text = match fetch_text(source).await {
        Ok(text) => text,
        Err(err) => {
            warn!("catalogue load failed ({source}): {err:#}");
            return Catalogue::empty();
        }
    };

    let tasks = parse_catalogue(&text);
    info!("loaded {} tasks from {source}", tasks.len());
    Catalogue {
        tasks,
        loaded_at: Utc::now(),
    }
}

async fn fetch_text(source: &CatalogueSource) -> Result<String> {
    match source {
        CatalogueSource::Path(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display())),
        CatalogueSource::Url(url) => {
            let response = reqwest::get(url)
                .await
                .with_context(|| format!("fetching {url}"))?
                .error_for_status()
                .context("catalogue fetch returned error status")?;
            response.text().await.context("reading catalogue body")
        }
    }
}

/// Process-wide catalogue cache with a single-flight load.
///
/// The first `get_or_load` triggers the load; concurrent callers await
/// the same in-flight future and all observe the same snapshot.
#[derive(Debug, Default)]
pub struct CatalogueCache {
    cell: OnceCell<Catalogue>,
}

impl CatalogueCache {
    pub const fn new() -> CatalogueCache {
        CatalogueCache {
            cell: OnceCell::const_new(),
        }
    }

    pub async fn get_or_load(&self, source: &CatalogueSource) -> &Catalogue {
        self.cell
            .get_or_init(|| load_catalogue(source))
            .await
    }

    /// The cached snapshot, if the load already happened.
    pub fn get(&self) -> Option<&Catalogue> {
        self.cell.get()
    }
}
