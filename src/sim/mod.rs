//! Fixed-step simulation module
//!
//! All gameplay physics lives here. Nothing in this module renders, reads the
//! clock or touches input devices:
//! - One call to `tick` is one 1/60 s step
//! - Entities iterate in level order (obstacle index is the tie-break)
//! - Arms refer to obstacles by index, never by reference

pub mod collision;
pub mod level;
pub mod polygon;
pub mod state;
pub mod tick;

pub use level::{LEVELS, LevelLayout, decode};
pub use polygon::Polygon;
pub use state::{Arm, ArmSide, Attachment, Level, Obstacle, Player};
pub use tick::{TickInput, TickOutcome, tick};
