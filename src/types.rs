//! Core scouting types shared across all modules.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Grid constants
// ---------------------------------------------------------------------------

/// Width/height of a loaded scene, in tiles.
pub const SCENE_SIZE: i32 = 104;

/// Distance between candidate room origins, in tiles (one template chunk).
pub const ROOM_SPAN: i32 = 8;

/// Number of scene planes a client can load.
pub const MAX_PLANES: usize = 4;

/// Plane holding the lobby and the upper floor (slots 0–7).
pub const LOBBY_PLANE: i32 = 3;

/// Plane holding the lower floor (slots 8–15).
pub const LOWER_PLANE: i32 = 2;

/// Logical grid capacity: 4 columns × 2 rows × 2 planes.
pub const FLOOR_SLOTS: usize = 16;

/// Wall object id of the lobby-exit marker used for anchor discovery.
pub const LOBBY_EXIT_MARKER: i32 = 12231;

// ---------------------------------------------------------------------------
// Points
// ---------------------------------------------------------------------------

/// Absolute world-space coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl WorldPoint {
    pub fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }
}

impl std::fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.plane)
    }
}

/// Scene-local coordinate (0..SCENE_SIZE on both axes when in range).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenePoint {
    pub x: i32,
    pub y: i32,
}

impl ScenePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for ScenePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// User-facing configuration consumed by a [`crate::session::ScoutSession`].
///
/// List fields are opaque strings in the host's preference format; the
/// session parses them (comma lists lower-cased, rotations as
/// bracket-delimited groups) and skips malformed entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    /// Comma-separated room names to favor, e.g. `"tekton, crabs"`.
    pub whitelisted_rooms: String,
    /// Comma-separated room names to avoid.
    pub blacklisted_rooms: String,
    /// Bracket-delimited boss orders, e.g. `"[tekton, vasa], [vespula]"`.
    pub whitelisted_rotations: String,
    /// Comma-separated layout codes.
    pub whitelisted_layouts: String,
    /// Whether consumers should announce the matched layout.
    pub layout_message: bool,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            whitelisted_rooms: String::new(),
            blacklisted_rooms: String::new(),
            whitelisted_rotations: String::new(),
            whitelisted_layouts: String::new(),
            layout_message: true,
        }
    }
}
