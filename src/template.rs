//! Instance template classification table.
//!
//! Every 8×8 chunk of an instanced scene carries an opaque packed code
//! describing where the chunk was copied from in the static map. Raid rooms
//! are stamped from a fixed set of template regions, so decoding the code and
//! testing it against the region table identifies the room that chunk belongs
//! to. The table is pure data; classification is a bounds scan.

// ---------------------------------------------------------------------------
// Packed chunk codes
// ---------------------------------------------------------------------------

/// Width/height of one template chunk, in tiles.
pub const CHUNK_SIZE: i32 = 8;

/// Pack a template-space chunk reference into the client's wire format.
///
/// Layout (low to high): bit 0 unused, bits 1–2 rotation, bits 3–13 chunk y,
/// bits 14–23 chunk x, bits 24–25 plane.
pub fn pack_chunk(x: i32, y: i32, plane: i32, rotation: i32) -> i32 {
    ((plane & 0x3) << 24)
        | (((x / CHUNK_SIZE) & 0x3FF) << 14)
        | (((y / CHUNK_SIZE) & 0x7FF) << 3)
        | ((rotation & 0x3) << 1)
}

fn unpack_chunk(code: i32) -> (i32, i32, i32) {
    let x = (code >> 14 & 0x3FF) * CHUNK_SIZE;
    let y = (code >> 3 & 0x7FF) * CHUNK_SIZE;
    let plane = code >> 24 & 0x3;
    (x, y, plane)
}

// ---------------------------------------------------------------------------
// Template regions
// ---------------------------------------------------------------------------

/// One raid room template in the static map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceTemplate {
    RaidsLobby,
    RaidsStart,
    RaidsEnd,
    RaidsScavengers,
    RaidsScavengers2,
    RaidsFarming,
    RaidsFarming2,
    RaidsShamans,
    RaidsVasa,
    RaidsVanguards,
    RaidsIceDemon,
    RaidsThieving,
    RaidsMuttadiles,
    RaidsMystics,
    RaidsTekton,
    RaidsTightrope,
    RaidsGuardians,
    RaidsCrabs,
    RaidsVespula,
}

struct Bounds {
    plane: i32,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

const fn bounds(plane: i32, min_x: i32, min_y: i32) -> Bounds {
    Bounds {
        plane,
        min_x,
        min_y,
        max_x: min_x + 31,
        max_y: min_y + 31,
    }
}

/// Template-space regions, one 32×32 block per room template.
const TEMPLATES: &[(InstanceTemplate, Bounds)] = &[
    (InstanceTemplate::RaidsLobby, bounds(3, 3264, 5152)),
    (InstanceTemplate::RaidsStart, bounds(3, 3296, 5152)),
    (InstanceTemplate::RaidsScavengers, bounds(3, 3328, 5152)),
    (InstanceTemplate::RaidsFarming, bounds(3, 3360, 5152)),
    (InstanceTemplate::RaidsShamans, bounds(3, 3392, 5152)),
    (InstanceTemplate::RaidsVasa, bounds(3, 3424, 5152)),
    (InstanceTemplate::RaidsVanguards, bounds(3, 3456, 5152)),
    (InstanceTemplate::RaidsIceDemon, bounds(3, 3488, 5152)),
    (InstanceTemplate::RaidsThieving, bounds(3, 3264, 5184)),
    (InstanceTemplate::RaidsMuttadiles, bounds(3, 3296, 5184)),
    (InstanceTemplate::RaidsMystics, bounds(3, 3328, 5184)),
    (InstanceTemplate::RaidsTekton, bounds(3, 3360, 5184)),
    (InstanceTemplate::RaidsTightrope, bounds(3, 3392, 5184)),
    (InstanceTemplate::RaidsGuardians, bounds(3, 3424, 5184)),
    (InstanceTemplate::RaidsCrabs, bounds(3, 3456, 5184)),
    (InstanceTemplate::RaidsVespula, bounds(3, 3488, 5184)),
    (InstanceTemplate::RaidsEnd, bounds(2, 3264, 5152)),
    (InstanceTemplate::RaidsScavengers2, bounds(2, 3296, 5152)),
    (InstanceTemplate::RaidsFarming2, bounds(2, 3328, 5152)),
];

impl InstanceTemplate {
    /// Identify the template a packed chunk code was stamped from.
    ///
    /// Returns `None` for chunks outside every raid template region; callers
    /// treat that as an empty/unknown room.
    pub fn find_match(code: i32) -> Option<InstanceTemplate> {
        let (x, y, plane) = unpack_chunk(code);
        TEMPLATES
            .iter()
            .find(|(_, b)| {
                plane == b.plane && x >= b.min_x && x <= b.max_x && y >= b.min_y && y <= b.max_y
            })
            .map(|(t, _)| *t)
    }

    /// Packed chunk code for this template's origin chunk.
    ///
    /// Used when synthesizing scenes (snapshot capture tooling, tests).
    pub fn chunk_code(&self) -> i32 {
        let b = TEMPLATES
            .iter()
            .find(|(t, _)| t == self)
            .map(|(_, b)| b)
            .unwrap_or(&TEMPLATES[0].1);
        pack_chunk(b.min_x, b.min_y, b.plane, 0)
    }
}
