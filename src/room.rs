//! Room descriptors and the template → room classifier.
//!
//! A room's kind is a single tagged union: boss and puzzle variants only
//! exist inside the `Combat`/`Puzzle` arms, so "boss set on a farming room"
//! is unrepresentable.

use crate::template::InstanceTemplate;
use crate::types::WorldPoint;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Bosses and puzzles
// ---------------------------------------------------------------------------

/// Combat-room boss. `Unknown` marks a combat room placed from a layout
/// match but not yet observed or inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Boss {
    Tekton,
    Muttadiles,
    Guardians,
    Vespula,
    Shamans,
    Vasa,
    Vanguards,
    Mystics,
    Unknown,
}

impl Boss {
    pub fn name(&self) -> &'static str {
        match self {
            Boss::Tekton => "Tekton",
            Boss::Muttadiles => "Muttadiles",
            Boss::Guardians => "Guardians",
            Boss::Vespula => "Vespula",
            Boss::Shamans => "Shamans",
            Boss::Vasa => "Vasa",
            Boss::Vanguards => "Vanguards",
            Boss::Mystics => "Mystics",
            Boss::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Boss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Puzzle-room variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Puzzle {
    Crabs,
    IceDemon,
    Tightrope,
    Thieving,
    Unknown,
}

impl Puzzle {
    pub fn name(&self) -> &'static str {
        match self {
            Puzzle::Crabs => "Crabs",
            Puzzle::IceDemon => "Ice Demon",
            Puzzle::Tightrope => "Tightrope",
            Puzzle::Thieving => "Thieving",
            Puzzle::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Room kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    /// Tile observed but its template matched no raid room.
    Empty,
    Start,
    End,
    Scavengers,
    Farming,
    Combat(Boss),
    Puzzle(Puzzle),
}

impl RoomKind {
    /// Symbol used in layout codes.
    pub fn code(&self) -> char {
        match self {
            RoomKind::Empty => '?',
            RoomKind::Start => 'S',
            RoomKind::End => 'E',
            RoomKind::Scavengers => 'V',
            RoomKind::Farming => 'F',
            RoomKind::Combat(_) => 'C',
            RoomKind::Puzzle(_) => 'P',
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            RoomKind::Empty => "Empty",
            RoomKind::Start => "Start",
            RoomKind::End => "End",
            RoomKind::Scavengers => "Scavengers",
            RoomKind::Farming => "Farming",
            RoomKind::Combat(_) => "Combat",
            RoomKind::Puzzle(_) => "Puzzle",
        }
    }

    /// Human-readable name: the boss/puzzle name when known, the room type
    /// otherwise.
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomKind::Combat(boss) if *boss != Boss::Unknown => boss.name(),
            RoomKind::Puzzle(puzzle) if *puzzle != Puzzle::Unknown => puzzle.name(),
            other => other.type_name(),
        }
    }

    /// A room is resolved once nothing about it can change: its type is
    /// known and, for combat/puzzle rooms, so is the variant.
    pub fn is_resolved(&self) -> bool {
        !matches!(
            self,
            RoomKind::Combat(Boss::Unknown) | RoomKind::Puzzle(Puzzle::Unknown)
        )
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A single discovered (or layout-predicted) room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub kind: RoomKind,
    /// World-space anchor used to re-locate the room on later passes.
    /// `None` until the room has been tied to an observed tile or derived
    /// from the grid base.
    pub base: Option<WorldPoint>,
}

impl Room {
    pub fn new(kind: RoomKind, base: Option<WorldPoint>) -> Self {
        Self { kind, base }
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Classify a single observed cell from its chunk template code.
///
/// Total function: unknown or absent templates yield an `Empty` room. The
/// returned room is anchored at `base`.
pub fn classify(template_code: Option<i32>, base: WorldPoint) -> Room {
    let kind = template_code
        .and_then(InstanceTemplate::find_match)
        .map(|template| match template {
            InstanceTemplate::RaidsLobby | InstanceTemplate::RaidsStart => RoomKind::Start,
            InstanceTemplate::RaidsEnd => RoomKind::End,
            InstanceTemplate::RaidsScavengers | InstanceTemplate::RaidsScavengers2 => {
                RoomKind::Scavengers
            }
            InstanceTemplate::RaidsFarming | InstanceTemplate::RaidsFarming2 => RoomKind::Farming,
            InstanceTemplate::RaidsShamans => RoomKind::Combat(Boss::Shamans),
            InstanceTemplate::RaidsVasa => RoomKind::Combat(Boss::Vasa),
            InstanceTemplate::RaidsVanguards => RoomKind::Combat(Boss::Vanguards),
            InstanceTemplate::RaidsMuttadiles => RoomKind::Combat(Boss::Muttadiles),
            InstanceTemplate::RaidsMystics => RoomKind::Combat(Boss::Mystics),
            InstanceTemplate::RaidsTekton => RoomKind::Combat(Boss::Tekton),
            InstanceTemplate::RaidsGuardians => RoomKind::Combat(Boss::Guardians),
            InstanceTemplate::RaidsVespula => RoomKind::Combat(Boss::Vespula),
            InstanceTemplate::RaidsIceDemon => RoomKind::Puzzle(Puzzle::IceDemon),
            InstanceTemplate::RaidsThieving => RoomKind::Puzzle(Puzzle::Thieving),
            InstanceTemplate::RaidsTightrope => RoomKind::Puzzle(Puzzle::Tightrope),
            InstanceTemplate::RaidsCrabs => RoomKind::Puzzle(Puzzle::Crabs),
        })
        .unwrap_or(RoomKind::Empty);

    Room::new(kind, Some(base))
}
