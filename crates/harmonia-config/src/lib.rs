//! TOML loading for aspect catalogs.
//!
//! The file shape is a list of `[[aspect]]` tables plus an optional
//! top-level `axis_orb`:
//!
//! ```toml
//! axis_orb = 1.0
//!
//! [[aspect]]
//! name = "conjunction"
//! angle = 0.0
//! orb = 10.0
//! ```
//!
//! Declared file order becomes catalog order, which drives tie-breaking.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use harmonia_core::{AspectCatalog, AspectDefinition};

#[derive(Debug, Clone, Deserialize)]
struct AspectToml {
    name: String,
    angle: f64,
    orb: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogToml {
    #[serde(default)]
    axis_orb: Option<f64>,
    #[serde(default, rename = "aspect")]
    aspects: Vec<AspectToml>,
}

/// Parse a TOML catalog document.
///
/// Everything funnels through the catalog constructors, so a file can never
/// produce a catalog that hand-written code could not.
pub fn parse_catalog(text: &str) -> anyhow::Result<AspectCatalog> {
    let root: CatalogToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse aspect catalog TOML: {e}"))?;
    if root.aspects.is_empty() {
        anyhow::bail!("Aspect catalog has no [[aspect]] entries");
    }
    let definitions: Vec<AspectDefinition> = root
        .aspects
        .into_iter()
        .map(|a| AspectDefinition::new(a.name, a.angle, a.orb))
        .collect();
    let catalog = match root.axis_orb {
        Some(axis_orb) => AspectCatalog::with_axis_orb(definitions, axis_orb),
        None => AspectCatalog::new(definitions),
    }
    .map_err(|e| anyhow::anyhow!("Invalid aspect catalog: {e}"))?;
    Ok(catalog)
}

/// Read a catalog from a TOML file.
pub fn load_catalog(path: impl AsRef<Path>) -> anyhow::Result<AspectCatalog> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read aspect catalog {}: {e}", path.display()))?;
    parse_catalog(&text)
        .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
}

/// Matches the daemon behavior: try common relative paths for
/// `configs/aspects.toml`.
pub fn load_default_catalog() -> anyhow::Result<AspectCatalog> {
    let paths = ["configs/aspects.toml", "../../configs/aspects.toml"];
    for p in &paths {
        if Path::new(p).exists() {
            return load_catalog(p);
        }
    }
    anyhow::bail!("Could not load aspects.toml from {:?}", paths);
}
