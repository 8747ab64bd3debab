//! Session lifecycle and preference list tests

mod common;

#[cfg(test)]
mod tests {
    use crate::common::{scene_from_code, BASE_X, BASE_Y};
    use xeric_scout::layout::CATALOG;
    use xeric_scout::session::{
        parse_list, parse_rotation_list, RAID_COMPLETE_MESSAGE, RAID_START_MESSAGE,
    };
    use xeric_scout::{RaidState, Scene, ScoutConfig, ScoutSession};

    fn full_raid_config() -> ScoutConfig {
        ScoutConfig {
            whitelisted_rooms: "Tekton, Crabs".into(),
            blacklisted_rooms: "Thieving".into(),
            whitelisted_rotations: "[Tekton, Vasa, Guardians, Mystics, Shamans], [Vespula, Vanguards]".into(),
            whitelisted_layouts: CATALOG[0].code().to_lowercase(),
            ..Default::default()
        }
    }

    // -----------------------------------------------------------------------
    // List parsing
    // -----------------------------------------------------------------------

    #[test]
    fn comma_lists_are_trimmed_and_lowercased() {
        assert_eq!(
            parse_list(" Tekton , CRABS ,, ice demon "),
            vec!["tekton", "crabs", "ice demon"]
        );
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn rotation_lists_come_from_bracket_groups() {
        assert_eq!(
            parse_rotation_list("[Tekton, Vasa], noise, [vespula]"),
            vec!["tekton, vasa", "vespula"]
        );
    }

    #[test]
    fn malformed_rotation_entries_are_skipped() {
        // Unclosed group, empty group, duplicate group.
        assert_eq!(
            parse_rotation_list("[a, b], [], [A, B], [unclosed"),
            vec!["a, b"]
        );
        assert!(parse_rotation_list("no brackets at all").is_empty());
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    #[test]
    fn starts_with_no_raid() {
        let session = ScoutSession::new(ScoutConfig::default());
        assert_eq!(session.state(), RaidState::NoRaid);
        assert!(session.report().is_none());
    }

    #[test]
    fn markerless_scene_stays_no_raid() {
        let mut session = ScoutSession::new(ScoutConfig::default());
        session.observe(&Scene::new(BASE_X, BASE_Y), true);
        assert_eq!(session.state(), RaidState::NoRaid);
        assert!(session.floor_map().is_none());
    }

    #[test]
    fn cataloged_raid_reaches_layout_known() {
        let mut session = ScoutSession::new(full_raid_config());
        session.observe(&scene_from_code(CATALOG[0].code()), true);

        assert_eq!(session.state(), RaidState::LayoutKnown);
        let report = session.report().unwrap();
        assert_eq!(report.layout_code, CATALOG[0].code());
        assert_eq!(report.layout.as_deref(), Some(CATALOG[0].display_string().as_str()));
        assert!(report.layout_whitelisted);
        assert_eq!(
            report.rotation,
            "Tekton, Vasa, Guardians, Mystics, Shamans"
        );
        assert_eq!(report.rotation_matches, 5);
    }

    #[test]
    fn uncataloged_raid_stays_reconstructing() {
        // Upper floor of a known layout alone matches nothing.
        let mut partial: String = CATALOG[0].code().chars().take(8).collect();
        partial.push_str("--------");

        let mut session = ScoutSession::new(ScoutConfig::default());
        session.observe(&scene_from_code(&partial), true);
        assert_eq!(session.state(), RaidState::Reconstructing);
        assert!(session.layout().is_none());

        // Once the lower floor is observable the layout resolves.
        session.observe(&scene_from_code(CATALOG[0].code()), true);
        assert_eq!(session.state(), RaidState::LayoutKnown);
        assert_eq!(session.layout().map(|l| l.code()), Some(CATALOG[0].code()));
    }

    #[test]
    fn completion_message_ends_the_raid() {
        let mut session = ScoutSession::new(ScoutConfig::default());
        session.observe(&scene_from_code(CATALOG[0].code()), true);

        session.on_message("Some unrelated message");
        assert_eq!(session.state(), RaidState::LayoutKnown);

        session.on_message(RAID_COMPLETE_MESSAGE);
        assert_eq!(session.state(), RaidState::Completed);

        session.reset();
        assert_eq!(session.state(), RaidState::NoRaid);
        assert!(session.floor_map().is_none());
        assert!(session.report().is_none());
    }

    #[test]
    fn completion_without_a_raid_is_ignored() {
        let mut session = ScoutSession::new(ScoutConfig::default());
        session.on_message(RAID_COMPLETE_MESSAGE);
        assert_eq!(session.state(), RaidState::NoRaid);
    }

    #[test]
    fn start_message_discards_a_completed_raid() {
        let mut session = ScoutSession::new(ScoutConfig::default());
        session.observe(&scene_from_code(CATALOG[0].code()), true);
        session.on_message(RAID_COMPLETE_MESSAGE);
        assert_eq!(session.state(), RaidState::Completed);

        session.on_message(RAID_START_MESSAGE);
        assert_eq!(session.state(), RaidState::NoRaid);
        assert!(session.floor_map().is_none());

        // A start message mid-raid must not throw away the floor map.
        session.observe(&scene_from_code(CATALOG[0].code()), true);
        session.on_message(RAID_START_MESSAGE);
        assert_eq!(session.state(), RaidState::LayoutKnown);
        assert!(session.floor_map().is_some());
    }

    // -----------------------------------------------------------------------
    // Preference queries
    // -----------------------------------------------------------------------

    #[test]
    fn room_lists_answer_case_insensitively() {
        let session = ScoutSession::new(full_raid_config());
        assert!(session.room_whitelisted("tekton"));
        assert!(session.room_whitelisted("Crabs"));
        assert!(!session.room_whitelisted("vasa"));
        assert!(session.room_blacklisted("Thieving"));
    }

    #[test]
    fn layout_whitelist_requires_a_match() {
        let mut session = ScoutSession::new(full_raid_config());
        assert!(!session.layout_whitelisted());
        session.observe(&scene_from_code(CATALOG[0].code()), true);
        assert!(session.layout_whitelisted());
    }

    #[test]
    fn layout_announcement_honors_the_toggle() {
        let mut session = ScoutSession::new(full_raid_config());
        assert!(session.layout_announcement().is_none());

        session.observe(&scene_from_code(CATALOG[0].code()), true);
        assert_eq!(
            session.layout_announcement(),
            Some(CATALOG[0].display_string())
        );

        let muted = ScoutConfig {
            layout_message: false,
            ..full_raid_config()
        };
        session.set_config(muted);
        assert!(session.layout_announcement().is_none());
    }

    #[test]
    fn config_swap_reparses_lists() {
        let mut session = ScoutSession::new(ScoutConfig::default());
        assert!(!session.room_whitelisted("tekton"));
        session.set_config(full_raid_config());
        assert!(session.room_whitelisted("tekton"));
    }
}
