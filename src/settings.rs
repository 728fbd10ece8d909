//! Runtime configuration
//!
//! A small JSON file (or command-line flags in the demo binary) selects the
//! topology and the starting world. Missing or corrupt settings fall back
//! to defaults with a logged warning; they are never fatal.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sim::{Topology, Universe};

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena boundary topology
    pub topology: Topology,
    /// Seed for a scattered random world; `None` keeps the fixed starting
    /// world (one ball, player at the center)
    pub seed: Option<u64>,
    /// Ball count for the scattered world
    pub balls: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            topology: Topology::default(),
            seed: None,
            balls: 6,
        }
    }
}

impl Settings {
    /// Load from a JSON file; `None` (with a warning) on any failure
    pub fn load(path: &Path) -> Option<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("Could not read settings {}: {err}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(settings) => Some(settings),
            Err(err) => {
                log::warn!("Could not parse settings {}: {err}", path.display());
                None
            }
        }
    }

    /// Write as pretty-printed JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)
    }

    /// Build the starting universe these settings describe
    pub fn universe(&self) -> Universe {
        match self.seed {
            Some(seed) => Universe::scatter(self.topology, seed, self.balls),
            None => Universe::new(self.topology),
        }
    }
}
