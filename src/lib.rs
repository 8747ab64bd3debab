//! Xeric Scout
//!
//! Reconstructs the floor plan of a Chambers-style raid instance from
//! sparse scene observations, matches it against a catalog of known
//! layouts, and solves the boss-encounter rotation.
//!
//! ## Architecture
//!
//! ```text
//! ScoutSession  (session.rs)   ← raid lifecycle, preference lists
//!   ├── reconstruct  (reconstruct.rs) ← anchor scan + grid walk + refresh
//!   │     ├── Scene     (scene.rs)    ← observation boundary
//!   │     └── classify  (room.rs)     ← template table (template.rs)
//!   ├── FloorMap  (floor.rs)          ← 16-slot arena, layout encoder
//!   ├── layout    (layout.rs)         ← static catalog, exact matcher
//!   └── rotation  (rotation.rs)       ← boss inference + whitelist scoring
//! ```
//!
//! The core is synchronous and call-driven: the host feeds
//! [`ScoutSession::observe`] one scene per tick and reads the
//! [`ScoutReport`] back. Snapshot serde types in `snapshot.rs` stand in for
//! the live feed.

pub mod floor;
pub mod layout;
pub mod reconstruct;
pub mod room;
pub mod rotation;
pub mod scene;
pub mod session;
pub mod snapshot;
pub mod template;
pub mod types;

// Convenience re-exports
pub use floor::{FloorMap, RoomSlot};
pub use layout::{find_layout, Layout, CATALOG};
pub use room::{Boss, Puzzle, Room, RoomKind};
pub use scene::Scene;
pub use session::{RaidState, ScoutSession};
pub use snapshot::{CellRecord, SceneSnapshot, ScoutReport, SnapshotError};
pub use template::InstanceTemplate;
pub use types::{ScenePoint, ScoutConfig, WorldPoint};
