use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    layouts: HashMap<String, LayoutEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LayoutEntry {
    Path(String),
    Detailed {
        layout: String,
        #[serde(default)]
        config: Option<String>,
    },
}

impl LayoutEntry {
    fn layout_path(&self) -> &str {
        match self {
            LayoutEntry::Path(path) => path,
            LayoutEntry::Detailed { layout, .. } => layout,
        }
    }

    fn config_path(&self) -> Option<&str> {
        match self {
            LayoutEntry::Path(_) => None,
            LayoutEntry::Detailed { config, .. } => config.as_deref(),
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

pub mod layouts {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.layouts.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.layouts, "layout", name)?;
        read_to_string(entry.layout_path())
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.layouts, "layout", name)?;
        super::load_json(entry.layout_path())
    }

    /// Config paired with the layout, if the manifest names one.
    pub fn config_json(name: &str) -> Result<Option<String>> {
        let entry = lookup(&MANIFEST.layouts, "layout", name)?;
        match entry.config_path() {
            Some(config) => read_to_string(config).map(Some),
            None => Ok(None),
        }
    }
}
