//! Static catalog of known raid layouts and the exact-code matcher.
//!
//! A layout code is the 16-character slot encoding produced by
//! [`crate::floor::FloorMap::to_code`]: one symbol per slot ('S' start,
//! 'E' end, 'C' combat, 'P' puzzle, 'V' scavengers, 'F' farming, '-'
//! vacant). Matching is exact string equality; a miss is a normal outcome
//! meaning the layout is new or the reconstruction is still incomplete.

use crate::room::{Boss, Puzzle, RoomKind};
use crate::types::FLOOR_SLOTS;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// One immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    code: &'static str,
}

impl Layout {
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Room type the layout places at a slot, if any.
    ///
    /// Combat and puzzle slots come back with an `Unknown` variant: the
    /// layout knows the room type, never the specific encounter.
    pub fn room_kind_at(&self, slot: usize) -> Option<RoomKind> {
        match self.code.as_bytes().get(slot)? {
            b'S' => Some(RoomKind::Start),
            b'E' => Some(RoomKind::End),
            b'V' => Some(RoomKind::Scavengers),
            b'F' => Some(RoomKind::Farming),
            b'C' => Some(RoomKind::Combat(Boss::Unknown)),
            b'P' => Some(RoomKind::Puzzle(Puzzle::Unknown)),
            _ => None,
        }
    }

    /// Canonical human-readable form: comma-joined room type names.
    pub fn display_string(&self) -> String {
        (0..FLOOR_SLOTS)
            .filter_map(|slot| self.room_kind_at(slot))
            .map(|kind| kind.type_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Known layouts. Start is always an upper-floor slot; codes are exactly
/// what the grid walk produces for the corresponding full room set.
pub const CATALOG: &[Layout] = &[
    Layout { code: "SCCPFCV-CPCE----" },
    Layout { code: "SCPCCVF-CCPE----" },
    Layout { code: "SPCCVCFCPCCE----" },
    Layout { code: "SCCVPCF-CPCCE---" },
    Layout { code: "SCPFCCV-PCCE----" },
    Layout { code: "SVCCPFC-CCPE----" },
];

/// Exact catalog lookup.
pub fn find_layout(code: &str) -> Option<&'static Layout> {
    CATALOG.iter().find(|layout| layout.code == code)
}
