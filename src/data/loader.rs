use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::model::{AlgorithmRecord, Catalog, PackageRecord};

/// File name of the algorithm document, relative to the data source root.
pub const ALGORITHMS_FILE: &str = "algorithms.json";
/// File name of the package document, relative to the data source root.
pub const PACKAGES_FILE: &str = "packages.json";

/// Per-request network timeout.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where the two catalog documents come from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Fetch both documents over HTTP from a base URL.
    Remote { base_url: String },
    /// Read both documents from a local directory.
    Local { dir: PathBuf },
}

impl DataSource {
    /// Origin string for log lines and the status footer.
    pub fn describe(&self) -> String {
        match self {
            DataSource::Remote { base_url } => base_url.clone(),
            DataSource::Local { dir } => dir.display().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the full catalog from `source`.
///
/// Both documents must load: the browser cannot render a partial catalog, so
/// a failure in either one fails the whole call.
pub fn load_catalog(source: &DataSource) -> Result<Catalog> {
    match source {
        DataSource::Remote { base_url } => load_remote(base_url),
        DataSource::Local { dir } => load_dir(dir),
    }
}

/// Load the catalog on a background thread.
///
/// Returns a channel carrying exactly one message. The UI polls the receiver
/// each frame, so startup never blocks a paint.
pub fn spawn_load(source: DataSource) -> Receiver<Result<Catalog>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        log::info!("loading catalog from {}", source.describe());
        let result = load_catalog(&source);
        if let Err(err) = &result {
            log::error!("catalog load failed: {err:#}");
        }
        // The receiver is gone if the app shut down mid-load.
        let _ = tx.send(result);
    });
    rx
}

// ---------------------------------------------------------------------------
// Remote loader
// ---------------------------------------------------------------------------

/// Fetch both documents in parallel, then parse.
fn load_remote(base_url: &str) -> Result<Catalog> {
    let base = base_url.trim_end_matches('/');
    let algorithms_url = format!("{base}/{ALGORITHMS_FILE}");
    let packages_url = format!("{base}/{PACKAGES_FILE}");

    let (algorithms_text, packages_text) = thread::scope(|s| -> Result<(String, String)> {
        let algorithms = s.spawn(|| fetch_text(&algorithms_url));
        let packages = s.spawn(|| fetch_text(&packages_url));
        let algorithms = algorithms
            .join()
            .map_err(|_| anyhow::anyhow!("algorithm fetch thread panicked"))??;
        let packages = packages
            .join()
            .map_err(|_| anyhow::anyhow!("package fetch thread panicked"))??;
        Ok((algorithms, packages))
    })?;

    let algorithms =
        parse_algorithms(&algorithms_text).with_context(|| format!("parsing {algorithms_url}"))?;
    let packages =
        parse_packages(&packages_text).with_context(|| format!("parsing {packages_url}"))?;

    Ok(Catalog::from_records(algorithms, packages))
}

/// GET a document as text. Any non-success status is an error.
fn fetch_text(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("mcmc-atlas/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("building HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("requesting {url}"))?;

    let status = response.status();
    if !status.is_success() {
        bail!("GET {url} returned {status}");
    }

    response
        .text()
        .with_context(|| format!("reading body of {url}"))
}

// ---------------------------------------------------------------------------
// Local loader
// ---------------------------------------------------------------------------

/// Read both documents from a directory, e.g. one written by the
/// `generate_sample` binary. File names match the remote layout.
fn load_dir(dir: &Path) -> Result<Catalog> {
    let algorithms_path = dir.join(ALGORITHMS_FILE);
    let packages_path = dir.join(PACKAGES_FILE);

    let algorithms_text = std::fs::read_to_string(&algorithms_path)
        .with_context(|| format!("reading {}", algorithms_path.display()))?;
    let packages_text = std::fs::read_to_string(&packages_path)
        .with_context(|| format!("reading {}", packages_path.display()))?;

    let algorithms = parse_algorithms(&algorithms_text)
        .with_context(|| format!("parsing {}", algorithms_path.display()))?;
    let packages = parse_packages(&packages_text)
        .with_context(|| format!("parsing {}", packages_path.display()))?;

    Ok(Catalog::from_records(algorithms, packages))
}

// ---------------------------------------------------------------------------
// Document parsers
// ---------------------------------------------------------------------------

/// Expected `algorithms.json` schema (a top-level array of records):
///
/// ```json
/// [
///   {
///     "id": "metropolis-hastings",
///     "name": "Metropolis-Hastings",
///     "category": "non-adaptive-metropolis-hastings",
///     "description": "...",
///     "tags": ["foundational"],
///     "packages": [{ "name": "MCMCpack", "function": "MCMCmetrop1R" }]
///   }
/// ]
/// ```
///
/// A `{ "algorithms": [...] }` wrapper object is accepted too. Records may
/// omit any field; absent fields fall back to empty defaults.
pub fn parse_algorithms(text: &str) -> Result<Vec<AlgorithmRecord>> {
    let doc: AlgorithmsDoc =
        serde_json::from_str(text).context("parsing algorithms document")?;
    Ok(match doc {
        AlgorithmsDoc::Bare(list) => list,
        AlgorithmsDoc::Wrapped { algorithms } => algorithms,
    })
}

/// Expected `packages.json` schema: a top-level array of package records,
/// or a `{ "packages": [...] }` wrapper. Same field tolerance as the
/// algorithm document.
pub fn parse_packages(text: &str) -> Result<Vec<PackageRecord>> {
    let doc: PackagesDoc = serde_json::from_str(text).context("parsing packages document")?;
    Ok(match doc {
        PackagesDoc::Bare(list) => list,
        PackagesDoc::Wrapped { packages } => packages,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AlgorithmsDoc {
    Bare(Vec<AlgorithmRecord>),
    Wrapped {
        #[serde(default)]
        algorithms: Vec<AlgorithmRecord>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PackagesDoc {
    Bare(Vec<PackageRecord>),
    Wrapped {
        #[serde(default)]
        packages: Vec<PackageRecord>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_an_array_document() {
        let text = r#"[
            { "id": "mh", "name": "Metropolis-Hastings", "category": "non-adaptive-metropolis-hastings" },
            { "id": "gibbs", "name": "Gibbs Sampler", "category": "gibbs-sampler" }
        ]"#;
        let records = parse_algorithms(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Gibbs Sampler");
    }

    #[test]
    fn parses_a_wrapped_document() {
        let text = r#"{ "algorithms": [{ "id": "mh", "name": "MH" }] }"#;
        let records = parse_algorithms(text).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_collection_key_is_an_empty_catalog() {
        let records = parse_algorithms("{}").unwrap();
        assert!(records.is_empty());
        let packages = parse_packages(r#"{ "generated": "2024-01-01" }"#).unwrap();
        assert!(packages.is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_algorithms("not json").is_err());
        assert!(parse_packages("[{").is_err());
    }

    #[test]
    fn load_dir_reads_both_documents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(ALGORITHMS_FILE),
            r#"[{ "id": "mh", "name": "MH", "category": "non-adaptive-metropolis-hastings" }]"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(PACKAGES_FILE),
            r#"[{ "name": "MCMCpack" }, { "name": "coda" }]"#,
        )
        .unwrap();

        let catalog = load_dir(dir.path()).unwrap();
        assert_eq!(catalog.algorithms.len(), 1);
        assert_eq!(catalog.packages.len(), 2);
    }

    #[test]
    fn load_dir_fails_when_a_document_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ALGORITHMS_FILE), "[]").unwrap();
        // No packages.json: the whole load must fail.
        assert!(load_dir(dir.path()).is_err());
    }
}
