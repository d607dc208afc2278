use std::{collections::BTreeMap, fs, path::{Path, PathBuf}};

use serde::Deserialize;
use thiserror::Error;

/// Error raised while loading the compose manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("reading compose file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing compose file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// The subset of the compose file this tool reads: service container names,
/// needed to force-remove stale containers during start recovery.
#[derive(Debug, Deserialize)]
pub struct ComposeManifest {
    #[serde(default)]
    services: BTreeMap<String, ServiceEntry>,
}

#[derive(Debug, Deserialize)]
struct ServiceEntry {
    container_name: Option<String>,
}

impl ComposeManifest {
    /// Load and parse the compose file at `path`.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let raw = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }

    /// Container names of all services; services without an explicit
    /// `container_name` fall back to the service key.
    #[must_use]
    pub fn container_names(&self) -> Vec<String> {
        self.services
            .iter()
            .map(|(service, entry)| {
                entry
                    .container_name
                    .clone()
                    .unwrap_or_else(|| service.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ComposeManifest;

    const MANIFEST: &str = r"
services:
  network-node:
    image: consensus-node:latest
    container_name: network-node
  mirror-node-rest:
    image: mirror-node:latest
    container_name: mirror-node-rest
  haveged:
    image: haveged:latest
";

    #[test]
    fn container_names_prefer_explicit_names() {
        let manifest = ComposeManifest::parse(MANIFEST).expect("valid manifest");
        let names = manifest.container_names();
        assert_eq!(names, ["haveged", "mirror-node-rest", "network-node"]);
    }

    #[test]
    fn empty_manifest_yields_no_names() {
        let manifest = ComposeManifest::parse("services: {}").expect("valid manifest");
        assert!(manifest.container_names().is_empty());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(ComposeManifest::parse("services: [not-a-map").is_err());
    }
}
