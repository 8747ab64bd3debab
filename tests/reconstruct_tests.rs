//! Grid reconstruction tests

mod common;

#[cfg(test)]
mod tests {
    use crate::common::{scene_from_code, slot_origin, ANCHOR_Y, BASE_X, BASE_Y};
    use xeric_scout::layout::CATALOG;
    use xeric_scout::reconstruct::{build, find_lobby_base, refresh};
    use xeric_scout::template::InstanceTemplate;
    use xeric_scout::types::{WorldPoint, LOBBY_EXIT_MARKER};
    use xeric_scout::{Boss, Puzzle, RoomKind, RoomSlot, Scene};

    const FULL_GRID: &str = "SCCPFCVCCPCEFCVC";

    fn room_kind(scene_floor: &xeric_scout::FloorMap, slot: usize) -> Option<RoomKind> {
        scene_floor.slot(slot).room().map(|room| room.kind)
    }

    // -----------------------------------------------------------------------
    // Anchor discovery
    // -----------------------------------------------------------------------

    #[test]
    fn anchor_found_at_marker() {
        let scene = scene_from_code(FULL_GRID);
        let anchor = find_lobby_base(&scene).unwrap();
        assert_eq!((anchor.x, anchor.y), (16, ANCHOR_Y));
    }

    #[test]
    fn no_marker_means_no_raid() {
        let mut scene = Scene::new(BASE_X, BASE_Y);
        // A populated scene without the marker is still "no raid".
        scene.set_template(3, 16, 80, InstanceTemplate::RaidsStart.chunk_code());
        assert!(find_lobby_base(&scene).is_none());
        assert!(build(&scene).is_none());
    }

    // -----------------------------------------------------------------------
    // Slot addressing
    // -----------------------------------------------------------------------

    #[test]
    fn full_grid_fills_all_sixteen_slots() {
        let floor = build(&scene_from_code(FULL_GRID)).unwrap();
        assert_eq!(floor.to_code(), FULL_GRID);
        assert_eq!(floor.base_position(), 0);
    }

    #[test]
    fn slot_zero_is_north_west_upper() {
        let floor = build(&scene_from_code(FULL_GRID)).unwrap();
        assert_eq!(room_kind(&floor, 0), Some(RoomKind::Start));
        let base = floor.slot(0).room().and_then(|room| room.base).unwrap();
        assert_eq!(base, WorldPoint::new(BASE_X + 16, BASE_Y + 80, 3));
    }

    #[test]
    fn slot_fifteen_is_south_east_lower() {
        let floor = build(&scene_from_code(FULL_GRID)).unwrap();
        // Eighth combat room in slot order.
        assert_eq!(room_kind(&floor, 15), Some(RoomKind::Combat(Boss::Vespula)));
        let base = floor.slot(15).room().and_then(|room| room.base).unwrap();
        assert_eq!(base, WorldPoint::new(BASE_X + 40, BASE_Y + 72, 2));
    }

    // -----------------------------------------------------------------------
    // Idempotence
    // -----------------------------------------------------------------------

    #[test]
    fn rebuilding_from_identical_observations_is_identical() {
        let scene = scene_from_code(CATALOG[0].code());
        let first = build(&scene).unwrap();
        let second = build(&scene).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn refresh_with_unchanged_scene_changes_nothing() {
        let scene = scene_from_code(CATALOG[0].code());
        let mut floor = build(&scene).unwrap();
        let before = floor.clone();
        refresh(&scene, &mut floor);
        assert_eq!(floor, before);
    }

    // -----------------------------------------------------------------------
    // West truncation fallback
    // -----------------------------------------------------------------------

    #[test]
    fn truncated_west_column_is_probed_through_fallback_tile() {
        // Anchor close to the west edge: the column two spans west of it
        // falls outside the scene, so the walk probes local x = 1 instead.
        let mut scene = Scene::new(BASE_X, BASE_Y);
        scene.set_wall(3, 8, 80, LOBBY_EXIT_MARKER);
        scene.set_template(3, 1, 80, InstanceTemplate::RaidsTekton.chunk_code());
        scene.set_template(3, 8, 80, InstanceTemplate::RaidsLobby.chunk_code());
        scene.set_template(3, 16, 80, InstanceTemplate::RaidsFarming.chunk_code());

        let floor = build(&scene).unwrap();
        assert_eq!(room_kind(&floor, 0), Some(RoomKind::Combat(Boss::Tekton)));
        let base = floor.slot(0).room().and_then(|room| room.base).unwrap();
        assert_eq!(base, WorldPoint::new(BASE_X + 1, BASE_Y + 80, 3));

        // The start room landed one position later and became the base.
        assert_eq!(room_kind(&floor, 1), Some(RoomKind::Start));
        assert_eq!(floor.base_position(), 1);
        assert_eq!(room_kind(&floor, 2), Some(RoomKind::Farming));
    }

    // -----------------------------------------------------------------------
    // Incremental refresh
    // -----------------------------------------------------------------------

    fn upper_floor_only(code: &str) -> String {
        let mut partial: String = code.chars().take(8).collect();
        partial.push_str("--------");
        partial
    }

    #[test]
    fn lower_floor_resolves_once_visible() {
        let code = CATALOG[0].code();
        let partial_scene = scene_from_code(&upper_floor_only(code));
        let mut floor = build(&partial_scene).unwrap();
        assert_eq!(floor.to_code(), upper_floor_only(code));

        // More of the instance becomes observable; pending slots resolve.
        let full_scene = scene_from_code(code);
        refresh(&full_scene, &mut floor);
        assert_eq!(floor.to_code(), code);
        assert_eq!(room_kind(&floor, 9), Some(RoomKind::Puzzle(Puzzle::IceDemon)));
        assert_eq!(room_kind(&floor, 11), Some(RoomKind::End));
    }

    #[test]
    fn resolved_rooms_never_revert() {
        let code = CATALOG[0].code();
        let mut floor = build(&scene_from_code(code)).unwrap();
        let before = floor.clone();

        // An empty scene carries no information; nothing may regress.
        let dark_scene = Scene::new(BASE_X, BASE_Y);
        refresh(&dark_scene, &mut floor);
        assert_eq!(floor, before);
    }

    #[test]
    fn vacant_slots_stay_unresolved() {
        let floor = build(&scene_from_code(CATALOG[0].code())).unwrap();
        assert_eq!(*floor.slot(7), RoomSlot::Unresolved);
        assert_eq!(*floor.slot(15), RoomSlot::Unresolved);
    }

    // -----------------------------------------------------------------------
    // Round trip through the catalog
    // -----------------------------------------------------------------------

    #[test]
    fn full_room_set_round_trips_to_its_layout() {
        for layout in CATALOG {
            let floor = build(&scene_from_code(layout.code())).unwrap();
            let matched = xeric_scout::find_layout(&floor.to_code());
            assert_eq!(matched, Some(layout), "layout {}", layout.code());
        }
    }

    // -----------------------------------------------------------------------
    // Sanity on the synthetic scenes
    // -----------------------------------------------------------------------

    #[test]
    fn slot_origin_matches_room_bases() {
        let floor = build(&scene_from_code(FULL_GRID)).unwrap();
        for slot in 0..16 {
            let (plane, x, y) = slot_origin(slot);
            let base = floor.slot(slot).room().and_then(|room| room.base).unwrap();
            assert_eq!(base, WorldPoint::new(BASE_X + x, BASE_Y + y, plane));
        }
    }
}
