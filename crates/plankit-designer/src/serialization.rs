//! Serialization and deserialization for plan documents.
//!
//! Implements save/load for .plk plan files using JSON with complete
//! plan and viewport state preservation.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use plankit_core::error::DocumentError;

use crate::model::Plan;
use crate::viewport::Viewport;

/// Plan file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete plan file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFile {
    pub version: String,
    pub metadata: PlanMetadata,
    pub viewport: ViewportState,
    pub plan: Plan,
}

/// Plan metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMetadata {
    pub id: Uuid,
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Viewport state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl ViewportState {
    /// Captures the persistable part of a viewport.
    pub fn capture(viewport: &Viewport) -> Self {
        Self {
            zoom: viewport.zoom(),
            pan_x: viewport.pan_x(),
            pan_y: viewport.pan_y(),
        }
    }

    /// Applies this state to a viewport.
    pub fn apply(&self, viewport: &mut Viewport) {
        viewport.set_zoom(self.zoom);
        viewport.set_pan(self.pan_x, self.pan_y);
    }
}

impl PlanFile {
    /// Wraps a plan into a fresh document.
    pub fn new(name: impl Into<String>, plan: Plan, viewport: &Viewport) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: PlanMetadata {
                id: Uuid::new_v4(),
                name: name.into(),
                created: now,
                modified: now,
                author: String::new(),
                description: String::new(),
            },
            viewport: ViewportState::capture(viewport),
            plan,
        }
    }

    /// Bumps the modification timestamp.
    pub fn touch(&mut self) {
        self.metadata.modified = Utc::now();
    }
}

/// Saves a plan document as pretty-printed JSON.
pub fn save_plan(path: &Path, file: &PlanFile) -> Result<()> {
    let json = serde_json::to_string_pretty(file)
        .with_context(|| format!("Failed to serialize plan '{}'", file.metadata.name))?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write plan file {}", path.display()))?;
    tracing::debug!("Saved plan '{}' to {}", file.metadata.name, path.display());
    Ok(())
}

/// Loads a plan document, rejecting unknown format versions.
pub fn load_plan(path: &Path) -> Result<PlanFile> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    let file: PlanFile = serde_json::from_str(&json).map_err(|e| DocumentError::Malformed {
        reason: e.to_string(),
    })?;
    if file.version != FILE_FORMAT_VERSION {
        return Err(DocumentError::UnsupportedVersion {
            found: file.version,
            expected: FILE_FORMAT_VERSION.to_string(),
        }
        .into());
    }
    tracing::debug!("Loaded plan '{}' from {}", file.metadata.name, path.display());
    Ok(file)
}
