//! The reconstructed floor map: a fixed 16-slot arena of room states.
//!
//! Slot index encodes position: `slot = column + 4*row + 8*plane_offset`,
//! columns west→east, row 0 north of row 1, plane offset 0 for the upper
//! floor (plane 3) and 1 for the lower floor (plane 2).

use crate::layout::Layout;
use crate::room::{Boss, Room, RoomKind};
use crate::types::{WorldPoint, FLOOR_SLOTS, LOBBY_PLANE, LOWER_PLANE, ROOM_SPAN};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Slot addressing
// ---------------------------------------------------------------------------

pub fn slot_column(slot: usize) -> i32 {
    (slot % 4) as i32
}

pub fn slot_row(slot: usize) -> i32 {
    if slot % 8 > 3 {
        1
    } else {
        0
    }
}

pub fn slot_plane(slot: usize) -> i32 {
    if slot > 7 {
        LOWER_PLANE
    } else {
        LOBBY_PLANE
    }
}

// ---------------------------------------------------------------------------
// Slot state
// ---------------------------------------------------------------------------

/// Per-slot reconstruction state.
///
/// `Pending` rooms are re-probed on every reconstruction pass; `Resolved`
/// rooms are skipped, which makes the "don't re-derive settled rooms"
/// optimization a plain tag check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomSlot {
    /// Nothing observed and no layout prediction for this slot.
    Unresolved,
    /// Room placed (observed or layout-predicted) but its boss/puzzle is
    /// still unknown.
    Pending(Room),
    /// Fully known; nothing left to learn.
    Resolved(Room),
}

impl RoomSlot {
    pub fn room(&self) -> Option<&Room> {
        match self {
            RoomSlot::Unresolved => None,
            RoomSlot::Pending(room) | RoomSlot::Resolved(room) => Some(room),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, RoomSlot::Resolved(_))
    }
}

// ---------------------------------------------------------------------------
// Floor map
// ---------------------------------------------------------------------------

/// Reconstructed 16-slot floor plan of one raid instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorMap {
    slots: [RoomSlot; FLOOR_SLOTS],
    /// Slot of the starting room on the upper floor.
    base_position: usize,
    /// World coordinate of the lobby anchor cell.
    grid_base: WorldPoint,
}

impl FloorMap {
    pub fn new(grid_base: WorldPoint) -> Self {
        Self {
            slots: [RoomSlot::Unresolved; FLOOR_SLOTS],
            base_position: 0,
            grid_base,
        }
    }

    pub fn grid_base(&self) -> WorldPoint {
        self.grid_base
    }

    pub fn base_position(&self) -> usize {
        self.base_position
    }

    pub fn set_base_position(&mut self, slot: usize) {
        if slot < FLOOR_SLOTS {
            self.base_position = slot;
        }
    }

    pub fn slot(&self, slot: usize) -> &RoomSlot {
        &self.slots[slot]
    }

    pub fn slots(&self) -> &[RoomSlot; FLOOR_SLOTS] {
        &self.slots
    }

    /// Place a room, tagging the slot `Pending` or `Resolved` from the
    /// room's own state.
    pub fn set_room(&mut self, room: Room, slot: usize) {
        if slot >= FLOOR_SLOTS {
            return;
        }
        self.slots[slot] = if room.kind.is_resolved() {
            RoomSlot::Resolved(room)
        } else {
            RoomSlot::Pending(room)
        };
    }

    /// Derived world anchor of a slot, from its offset to the starting room.
    pub fn room_base(&self, slot: usize) -> WorldPoint {
        let dx = slot_column(slot) - slot_column(self.base_position);
        let dy = slot_row(slot) - slot_row(self.base_position);
        WorldPoint::new(
            self.grid_base.x + dx * ROOM_SPAN,
            self.grid_base.y - dy * ROOM_SPAN,
            slot_plane(slot),
        )
    }

    // -----------------------------------------------------------------------
    // Layout back-fill
    // -----------------------------------------------------------------------

    /// Fill unresolved slots from a matched layout.
    ///
    /// Combat and puzzle slots become `Pending` rooms with an unknown
    /// boss/puzzle; every other named type is final on its own. Slots that
    /// already hold a room are left untouched.
    pub fn apply_layout(&mut self, layout: &Layout) {
        for slot in 0..FLOOR_SLOTS {
            if !matches!(self.slots[slot], RoomSlot::Unresolved) {
                continue;
            }
            if let Some(kind) = layout.room_kind_at(slot) {
                self.set_room(Room::new(kind, None), slot);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Combat rooms / rotation
    // -----------------------------------------------------------------------

    /// Bosses of all combat rooms, in slot-traversal order. `Unknown` for
    /// combat rooms not yet resolved.
    pub fn combat_bosses(&self) -> Vec<Boss> {
        self.slots
            .iter()
            .filter_map(|slot| match slot.room() {
                Some(Room {
                    kind: RoomKind::Combat(boss),
                    ..
                }) => Some(*boss),
                _ => None,
            })
            .collect()
    }

    /// Write solved bosses back into the combat rooms, in the same order
    /// [`combat_bosses`](Self::combat_bosses) produced them.
    pub fn set_combat_bosses(&mut self, bosses: &[Boss]) {
        let mut next = 0;
        for slot in 0..FLOOR_SLOTS {
            let room = match self.slots[slot].room() {
                Some(room) => *room,
                None => continue,
            };
            if let RoomKind::Combat(current) = room.kind {
                let Some(&solved) = bosses.get(next) else {
                    break;
                };
                next += 1;
                if solved != current && solved != Boss::Unknown {
                    self.set_room(Room::new(RoomKind::Combat(solved), room.base), slot);
                }
            }
        }
    }

    /// Comma-joined names of the known bosses, in encounter order.
    pub fn rotation_string(&self) -> String {
        self.combat_bosses()
            .iter()
            .filter(|boss| **boss != Boss::Unknown)
            .map(Boss::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    // -----------------------------------------------------------------------
    // Encoding
    // -----------------------------------------------------------------------

    /// Compact layout code: one symbol per slot, `-` for unresolved slots.
    pub fn to_code(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.room().map(|room| room.kind.code()).unwrap_or('-'))
            .collect()
    }

    /// Comma-joined human-readable room names in slot order, skipping
    /// unresolved and empty slots.
    pub fn rooms_string(&self) -> String {
        self.slots
            .iter()
            .filter_map(RoomSlot::room)
            .filter(|room| room.kind != RoomKind::Empty)
            .map(|room| room.kind.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
