//! Grid reconstruction: anchor discovery, the first-pass grid walk, and the
//! incremental refresh of pending rooms.
//!
//! The walk visits candidate room origins one span apart, starting two
//! columns west of the anchor because instances whose westmost column is
//! truncated by the scene boundary still have rooms there. `position`
//! advances once per surviving candidate in traversal order (north row
//! west→east, then south row), so the resulting slot assignment reproduces
//! the layout catalog's codes exactly. Do not "fix" the traversal without
//! regenerating the catalog.

use crate::floor::{FloorMap, RoomSlot};
use crate::room::{self, Room, RoomKind};
use crate::scene::Scene;
use crate::types::{
    ScenePoint, FLOOR_SLOTS, LOBBY_EXIT_MARKER, LOBBY_PLANE, LOWER_PLANE, ROOM_SPAN, SCENE_SIZE,
};
use log::debug;

// ---------------------------------------------------------------------------
// Anchor discovery
// ---------------------------------------------------------------------------

/// Scan the lobby plane for the lobby-exit marker wall object.
///
/// `None` means no raid is present in the loaded scene.
pub fn find_lobby_base(scene: &Scene) -> Option<ScenePoint> {
    for x in 0..SCENE_SIZE {
        for y in 0..SCENE_SIZE {
            if scene.wall_at(LOBBY_PLANE, x, y) == Some(LOBBY_EXIT_MARKER) {
                return Some(ScenePoint::new(x, y));
            }
        }
    }
    None
}

// ---------------------------------------------------------------------------
// First pass
// ---------------------------------------------------------------------------

/// Build a fresh floor map from the current scene.
///
/// Returns `None` when anchor discovery fails; after that the walk never
/// errors, unobservable candidates simply leave their slots unresolved.
pub fn build(scene: &Scene) -> Option<FloorMap> {
    let grid_base = find_lobby_base(scene)?;
    let mut floor = FloorMap::new(scene.to_world(grid_base, LOBBY_PLANE));

    let mut start_x: i32 = -2;

    for plane in (LOWER_PLANE..=LOBBY_PLANE).rev() {
        // An absent cell one span east of the anchor means this floor's
        // first column starts one position late.
        let mut position: i32 = if scene.tile_present(plane, grid_base.x + ROOM_SPAN, grid_base.y)
        {
            0
        } else {
            1
        };

        for row in (-1..=1).rev() {
            let y = grid_base.y + row * ROOM_SPAN;

            let mut column = start_x;
            while column < 4 {
                let x = grid_base.x + column * ROOM_SPAN;
                let mut offset_x = 0;

                if x > SCENE_SIZE && position > 1 && position < 4 {
                    position += 1;
                }

                if x < 0 {
                    // The tile at x = 0 is always absent at the west edge,
                    // so the fallback probes x = 1.
                    offset_x = x.abs() + 1;
                }

                if x < SCENE_SIZE && y >= 0 && y < SCENE_SIZE {
                    if !scene.tile_present(plane, x + offset_x, y) {
                        if position == 4 {
                            position += 1;
                            break;
                        }
                        column += 1;
                        continue;
                    }

                    if position == 0 && start_x != column {
                        start_x = column;
                    }

                    let base_x = if offset_x > 0 { 1 } else { x };
                    let room = classify_at(scene, plane, base_x, y);
                    let slot = (position + (plane - LOBBY_PLANE).abs() * 8) as usize;

                    if slot < FLOOR_SLOTS {
                        if room.kind == RoomKind::Start && slot < 8 {
                            floor.set_base_position(slot);
                        }
                        floor.set_room(room, slot);
                    }
                    position += 1;
                }

                column += 1;
            }
        }
    }

    debug!(
        "reconstructed floor at {}: {}",
        floor.grid_base(),
        floor.to_code()
    );
    Some(floor)
}

// ---------------------------------------------------------------------------
// Incremental refresh
// ---------------------------------------------------------------------------

/// Re-probe unresolved and pending slots against the current scene.
///
/// Resolved rooms are skipped. A slot without an observed anchor gets one
/// derived from its offset to the starting room; a candidate outside the
/// visible scene window, or whose chunk classifies as empty, is left for a
/// later pass.
pub fn refresh(scene: &Scene, floor: &mut FloorMap) {
    for slot in 0..FLOOR_SLOTS {
        let pending = match floor.slot(slot) {
            RoomSlot::Resolved(_) => continue,
            RoomSlot::Pending(room) => Some(*room),
            RoomSlot::Unresolved => None,
        };

        let base = match pending.and_then(|room| room.base) {
            Some(base) => base,
            None => {
                let base = floor.room_base(slot);
                if let Some(room) = pending {
                    floor.set_room(Room::new(room.kind, Some(base)), slot);
                }
                base
            }
        };

        let mut x = base.x - scene.base_x();
        let mut y = base.y - scene.base_y();

        if x < 1 - ROOM_SPAN || x >= SCENE_SIZE {
            continue;
        }
        if x < 1 {
            x = 1;
        }
        if y < 1 {
            y = 1;
        }

        if !scene.tile_present(base.plane, x, y) {
            continue;
        }

        let probed = classify_at(scene, base.plane, x, y);
        if probed.kind == RoomKind::Empty {
            continue;
        }

        floor.set_room(probed, slot);
    }
}

// ---------------------------------------------------------------------------
// Classification helper
// ---------------------------------------------------------------------------

fn classify_at(scene: &Scene, plane: i32, x: i32, y: i32) -> Room {
    let base = scene.to_world(ScenePoint::new(x, y), plane);
    room::classify(scene.template_at(plane, x, y), base)
}
