//! Raid lifecycle session: owns the floor map and drives the classifier,
//! reconstructor, encoder, matcher and rotation solver from external
//! observations.
//!
//! The session is single-threaded and call-driven; the host invokes
//! [`ScoutSession::observe`] once per tick or state-change notification and
//! [`ScoutSession::on_message`] for game messages. Nothing here is fatal:
//! missing information degrades to "unresolved" and is retried on the next
//! observation.

use crate::floor::FloorMap;
use crate::layout::{self, Layout};
use crate::reconstruct;
use crate::rotation;
use crate::scene::Scene;
use crate::snapshot::ScoutReport;
use crate::types::ScoutConfig;
use log::debug;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const RAID_START_MESSAGE: &str = "The raid has begun!";
pub const RAID_COMPLETE_MESSAGE: &str = "Congratulations - your raid is complete!";

// ---------------------------------------------------------------------------
// Lifecycle state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaidState {
    NoRaid,
    /// Anchor found, floor map building, layout not yet matched.
    Reconstructing,
    LayoutKnown,
    Completed,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub struct ScoutSession {
    state: RaidState,
    config: ScoutConfig,
    room_whitelist: Vec<String>,
    room_blacklist: Vec<String>,
    rotation_whitelist: Vec<String>,
    layout_whitelist: Vec<String>,
    floor: Option<FloorMap>,
    layout: Option<&'static Layout>,
}

impl ScoutSession {
    pub fn new(config: ScoutConfig) -> Self {
        let mut session = Self {
            state: RaidState::NoRaid,
            config,
            room_whitelist: Vec::new(),
            room_blacklist: Vec::new(),
            rotation_whitelist: Vec::new(),
            layout_whitelist: Vec::new(),
            floor: None,
            layout: None,
        };
        session.update_lists();
        session
    }

    /// Swap in a new configuration and re-parse the preference lists.
    pub fn set_config(&mut self, config: ScoutConfig) {
        self.config = config;
        self.update_lists();
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Observations
    // -----------------------------------------------------------------------

    /// Process one observation event: the current scene plus the host's
    /// "in raid" signal.
    pub fn observe(&mut self, scene: &Scene, in_raid: bool) {
        if let Some(mut floor) = self.floor.take() {
            reconstruct::refresh(scene, &mut floor);
            self.try_match(&mut floor);
            Self::solve_rotation(&mut floor);
            self.floor = Some(floor);
            return;
        }

        if !in_raid {
            self.state = RaidState::NoRaid;
            return;
        }

        match reconstruct::build(scene) {
            None => {
                debug!("no lobby marker found; treating scene as no raid");
                self.state = RaidState::NoRaid;
            }
            Some(mut floor) => {
                self.state = RaidState::Reconstructing;
                self.try_match(&mut floor);
                Self::solve_rotation(&mut floor);
                self.floor = Some(floor);
            }
        }
    }

    /// Process a game message.
    ///
    /// The raid-start message discards a completed raid's leftover state so
    /// the next observation rebuilds from scratch; the raid-completion
    /// message ends the tracked raid. Everything else is ignored.
    pub fn on_message(&mut self, message: &str) {
        if message.starts_with(RAID_START_MESSAGE) && self.state == RaidState::Completed {
            self.reset();
        }
        if message.starts_with(RAID_COMPLETE_MESSAGE) && self.floor.is_some() {
            self.state = RaidState::Completed;
        }
    }

    /// Discard the current raid and return to `NoRaid`.
    pub fn reset(&mut self) {
        self.floor = None;
        self.layout = None;
        self.state = RaidState::NoRaid;
    }

    fn try_match(&mut self, floor: &mut FloorMap) {
        if self.layout.is_some() || self.state == RaidState::Completed {
            return;
        }
        let code = floor.to_code();
        match layout::find_layout(&code) {
            Some(matched) => {
                floor.apply_layout(matched);
                self.layout = Some(matched);
                self.state = RaidState::LayoutKnown;
            }
            None => debug!("no layout match for code {code}"),
        }
    }

    fn solve_rotation(floor: &mut FloorMap) {
        let mut bosses = floor.combat_bosses();
        rotation::solve(&mut bosses);
        floor.set_combat_bosses(&bosses);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn state(&self) -> RaidState {
        self.state
    }

    pub fn floor_map(&self) -> Option<&FloorMap> {
        self.floor.as_ref()
    }

    pub fn layout(&self) -> Option<&'static Layout> {
        self.layout
    }

    /// Best whitelist score for the current rotation (0 when no raid or no
    /// qualifying entry).
    pub fn rotation_matches(&self) -> usize {
        match &self.floor {
            Some(floor) => {
                rotation::rotation_matches(&floor.rotation_string(), &self.rotation_whitelist)
            }
            None => 0,
        }
    }

    pub fn room_whitelisted(&self, name: &str) -> bool {
        self.room_whitelist.contains(&name.to_lowercase())
    }

    pub fn room_blacklisted(&self, name: &str) -> bool {
        self.room_blacklist.contains(&name.to_lowercase())
    }

    /// Whether the matched layout's code is on the user's layout whitelist.
    pub fn layout_whitelisted(&self) -> bool {
        match self.layout {
            Some(layout) => self
                .layout_whitelist
                .contains(&layout.code().to_lowercase()),
            None => false,
        }
    }

    /// Announcement text for the matched layout, `None` when no layout is
    /// matched or the user turned layout messages off.
    pub fn layout_announcement(&self) -> Option<String> {
        if !self.config.layout_message {
            return None;
        }
        self.layout.map(|layout| layout.display_string())
    }

    /// Bundle the solver's current output for consumers (overlay, panel,
    /// CLI). `None` while no raid is being tracked.
    pub fn report(&self) -> Option<ScoutReport> {
        let floor = self.floor.as_ref()?;
        Some(ScoutReport {
            state: self.state,
            layout_code: floor.to_code(),
            layout: self.layout.map(|layout| layout.display_string()),
            layout_whitelisted: self.layout_whitelisted(),
            rooms: floor.rooms_string(),
            rotation: floor.rotation_string(),
            rotation_matches: self.rotation_matches(),
        })
    }

    // -----------------------------------------------------------------------
    // Preference lists
    // -----------------------------------------------------------------------

    fn update_lists(&mut self) {
        self.room_whitelist = parse_list(&self.config.whitelisted_rooms);
        self.room_blacklist = parse_list(&self.config.blacklisted_rooms);
        self.rotation_whitelist = parse_rotation_list(&self.config.whitelisted_rotations);
        self.layout_whitelist = parse_list(&self.config.whitelisted_layouts);
    }
}

// ---------------------------------------------------------------------------
// List parsing
// ---------------------------------------------------------------------------

/// Comma-split, trimmed, lower-cased; empty entries dropped.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Extract bracket-delimited rotation entries: `[tekton, vasa], [vespula]`
/// yields two lower-cased entries. Unclosed brackets and empty groups are
/// skipped; duplicates collapse.
pub fn parse_rotation_list(input: &str) -> Vec<String> {
    let mut entries = Vec::new();
    let mut rest = input;

    while let Some(open) = rest.find('[') {
        let after = &rest[open + 1..];
        let Some(close) = after.find(']') else {
            break;
        };
        let entry = after[..close].trim().to_lowercase();
        if !entry.is_empty() && !entries.contains(&entry) {
            entries.push(entry);
        }
        rest = &after[close + 1..];
    }

    entries
}
