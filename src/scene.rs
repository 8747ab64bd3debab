//! Scene snapshot: the observation boundary the reconstructor reads from.
//!
//! A `Scene` is a dense per-plane view of what the observer can currently
//! see: which tiles are loaded, the packed template code of each 8×8 chunk,
//! and any wall objects (the lobby-exit marker is one). All accessors are
//! bounds-safe; out-of-range queries simply report absence.

use crate::types::{ScenePoint, WorldPoint, MAX_PLANES, SCENE_SIZE};
use std::collections::HashMap;

const CHUNKS_PER_AXIS: usize = (SCENE_SIZE as usize).div_ceil(8);

// ---------------------------------------------------------------------------
// Per-plane grid
// ---------------------------------------------------------------------------

struct PlaneGrid {
    tiles: Vec<bool>,
    templates: Vec<Option<i32>>,
    walls: HashMap<(i32, i32), i32>,
}

impl PlaneGrid {
    fn new() -> Self {
        Self {
            tiles: vec![false; (SCENE_SIZE * SCENE_SIZE) as usize],
            templates: vec![None; CHUNKS_PER_AXIS * CHUNKS_PER_AXIS],
            walls: HashMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

pub struct Scene {
    /// World coordinate of the scene's south-west corner.
    base_x: i32,
    base_y: i32,
    planes: Vec<PlaneGrid>,
}

impl Scene {
    pub fn new(base_x: i32, base_y: i32) -> Self {
        Self {
            base_x,
            base_y,
            planes: (0..MAX_PLANES).map(|_| PlaneGrid::new()).collect(),
        }
    }

    pub fn base_x(&self) -> i32 {
        self.base_x
    }

    pub fn base_y(&self) -> i32 {
        self.base_y
    }

    /// World coordinate of a scene-local tile.
    pub fn to_world(&self, local: ScenePoint, plane: i32) -> WorldPoint {
        WorldPoint::new(self.base_x + local.x, self.base_y + local.y, plane)
    }

    // -----------------------------------------------------------------------
    // Builders
    // -----------------------------------------------------------------------

    /// Mark a tile as loaded.
    pub fn set_tile(&mut self, plane: i32, x: i32, y: i32) {
        if let Some(i) = tile_index(plane, x, y) {
            self.planes[plane as usize].tiles[i] = true;
        }
    }

    /// Record the packed template code of the chunk containing `(x, y)`.
    /// Also marks the tile itself as loaded.
    pub fn set_template(&mut self, plane: i32, x: i32, y: i32, code: i32) {
        self.set_tile(plane, x, y);
        if let Some(i) = chunk_index(plane, x, y) {
            self.planes[plane as usize].templates[i] = Some(code);
        }
    }

    /// Record a wall object on a tile (and mark the tile as loaded).
    pub fn set_wall(&mut self, plane: i32, x: i32, y: i32, object_id: i32) {
        if tile_index(plane, x, y).is_some() {
            self.set_tile(plane, x, y);
            self.planes[plane as usize].walls.insert((x, y), object_id);
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Whether the tile is loaded. Out-of-range coordinates are absent.
    pub fn tile_present(&self, plane: i32, x: i32, y: i32) -> bool {
        tile_index(plane, x, y)
            .map(|i| self.planes[plane as usize].tiles[i])
            .unwrap_or(false)
    }

    /// Packed template code of the chunk containing `(x, y)`, if any.
    pub fn template_at(&self, plane: i32, x: i32, y: i32) -> Option<i32> {
        chunk_index(plane, x, y).and_then(|i| self.planes[plane as usize].templates[i])
    }

    /// Wall object id on a tile, if any.
    pub fn wall_at(&self, plane: i32, x: i32, y: i32) -> Option<i32> {
        if tile_index(plane, x, y).is_some() {
            self.planes[plane as usize].walls.get(&(x, y)).copied()
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Index helpers
// ---------------------------------------------------------------------------

fn in_range(plane: i32, x: i32, y: i32) -> bool {
    (0..MAX_PLANES as i32).contains(&plane) && (0..SCENE_SIZE).contains(&x) && (0..SCENE_SIZE).contains(&y)
}

fn tile_index(plane: i32, x: i32, y: i32) -> Option<usize> {
    in_range(plane, x, y).then(|| (x * SCENE_SIZE + y) as usize)
}

fn chunk_index(plane: i32, x: i32, y: i32) -> Option<usize> {
    in_range(plane, x, y).then(|| (x / 8) as usize * CHUNKS_PER_AXIS + (y / 8) as usize)
}
