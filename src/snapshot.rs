//! Serde boundary types: captured scene snapshots in, scout reports out.
//!
//! A snapshot is a sparse list of observed cells; the loader inflates it
//! into a dense [`Scene`]. Reports carry everything a consumer needs to
//! display the solved raid without touching solver internals.

use crate::scene::Scene;
use crate::session::RaidState;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Input records
// ---------------------------------------------------------------------------

/// One observed cell. `template` is the packed chunk code of the 8×8 chunk
/// containing the cell; `wall_object` is set when a wall object (such as
/// the lobby-exit marker) stands on the tile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CellRecord {
    pub plane: i32,
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_object: Option<i32>,
}

/// A captured scene: observer origin plus every observed cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// World coordinate of the scene's south-west corner.
    pub base_x: i32,
    pub base_y: i32,
    pub cells: Vec<CellRecord>,
}

impl SceneSnapshot {
    /// Inflate into a dense scene. Out-of-range records are dropped by the
    /// scene's bounds-safe setters.
    pub fn to_scene(&self) -> Scene {
        let mut scene = Scene::new(self.base_x, self.base_y);
        for cell in &self.cells {
            scene.set_tile(cell.plane, cell.x, cell.y);
            if let Some(code) = cell.template {
                scene.set_template(cell.plane, cell.x, cell.y, code);
            }
            if let Some(id) = cell.wall_object {
                scene.set_wall(cell.plane, cell.x, cell.y, id);
            }
        }
        scene
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Load a JSON snapshot from disk.
pub fn load_snapshot(path: &Path) -> Result<SceneSnapshot, SnapshotError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

// ---------------------------------------------------------------------------
// Output report
// ---------------------------------------------------------------------------

/// The solver's consumer-facing output for one raid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutReport {
    pub state: RaidState,
    /// 16-character slot encoding of the reconstructed floor.
    pub layout_code: String,
    /// Canonical form of the matched catalog layout, when matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    pub layout_whitelisted: bool,
    /// Comma-joined room names in slot order.
    pub rooms: String,
    /// Comma-joined known bosses in encounter order.
    pub rotation: String,
    /// Best whitelist score for the rotation.
    pub rotation_matches: usize,
}
