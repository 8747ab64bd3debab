//! Shared scene-synthesis helpers for integration tests.
#![allow(dead_code)]

use xeric_scout::template::InstanceTemplate;
use xeric_scout::types::LOBBY_EXIT_MARKER;
use xeric_scout::Scene;

/// World coordinate of the synthetic scene's south-west corner.
pub const BASE_X: i32 = 3200;
pub const BASE_Y: i32 = 3200;

/// Scene-local coordinate of the lobby anchor (origin of slot 0).
pub const ANCHOR_X: i32 = 16;
pub const ANCHOR_Y: i32 = 80;

/// Boss room templates in the order the first known rotation visits them,
/// so fully-observed synthetic raids solve to rotation 0.
pub const BOSS_ROOMS: [InstanceTemplate; 8] = [
    InstanceTemplate::RaidsTekton,
    InstanceTemplate::RaidsVasa,
    InstanceTemplate::RaidsGuardians,
    InstanceTemplate::RaidsMystics,
    InstanceTemplate::RaidsShamans,
    InstanceTemplate::RaidsMuttadiles,
    InstanceTemplate::RaidsVanguards,
    InstanceTemplate::RaidsVespula,
];

pub const PUZZLE_ROOMS: [InstanceTemplate; 4] = [
    InstanceTemplate::RaidsCrabs,
    InstanceTemplate::RaidsIceDemon,
    InstanceTemplate::RaidsTightrope,
    InstanceTemplate::RaidsThieving,
];

/// Scene-local origin of a slot in scenes built by [`scene_from_code`].
pub fn slot_origin(slot: usize) -> (i32, i32, i32) {
    let plane = if slot > 7 { 2 } else { 3 };
    let x = ANCHOR_X + (slot % 4) as i32 * 8;
    let y = ANCHOR_Y - if slot % 8 > 3 { 8 } else { 0 };
    (plane, x, y)
}

/// Build a scene whose grid walk reconstructs exactly `code`.
///
/// The anchor marker sits at slot 0's origin; each non-`-` symbol stamps
/// the matching template into the slot's origin chunk. Combat and puzzle
/// slots cycle through [`BOSS_ROOMS`] / [`PUZZLE_ROOMS`] in slot order.
pub fn scene_from_code(code: &str) -> Scene {
    let mut scene = Scene::new(BASE_X, BASE_Y);
    scene.set_wall(3, ANCHOR_X, ANCHOR_Y, LOBBY_EXIT_MARKER);

    let mut combats = 0;
    let mut puzzles = 0;

    for (slot, symbol) in code.chars().enumerate() {
        let template = match symbol {
            'S' => InstanceTemplate::RaidsStart,
            'E' => InstanceTemplate::RaidsEnd,
            'V' => InstanceTemplate::RaidsScavengers,
            'F' => InstanceTemplate::RaidsFarming,
            'C' => {
                combats += 1;
                BOSS_ROOMS[(combats - 1) % BOSS_ROOMS.len()]
            }
            'P' => {
                puzzles += 1;
                PUZZLE_ROOMS[(puzzles - 1) % PUZZLE_ROOMS.len()]
            }
            _ => continue,
        };
        let (plane, x, y) = slot_origin(slot);
        scene.set_template(plane, x, y, template.chunk_code());
    }

    scene
}
