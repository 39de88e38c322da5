//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, movement counted in ticks
//! - Time only through an injected `Clock`
//! - Seeded RNG only
//! - Stable iteration order (layout order)
//! - No rendering or platform dependencies

pub mod agent;
pub mod clock;
pub mod collision;
pub mod entity;
pub mod grid;
pub mod layout;
pub mod pursuer;
pub mod state;
pub mod tick;

pub use agent::Agent;
pub use clock::{Clock, ManualClock, SystemClock};
pub use collision::{Rect, overlaps};
pub use entity::{Body, Heading, Mover, Sprite, random_heading, should_turn};
pub use grid::GridGeometry;
pub use layout::{Layout, LayoutError, PursuerIdentity, REFERENCE_LAYOUT, Tile};
pub use pursuer::{Pursuer, PursuerState};
pub use state::{GameEvent, GameState, Outcome, World};
pub use tick::{TickInput, tick};
