//! Platform-independent core of the dot field: layout, spatial index,
//! interaction tracking and the per-frame update. Nothing in here touches
//! `web-sys`, so the host test suite can build it directly.

pub mod config;
pub mod constants;
pub mod controller;
pub mod dot;
pub mod falloff;
pub mod interaction;
pub mod layout;
pub mod spatial;

pub use config::*;
pub use controller::*;
pub use dot::Dot;
pub use interaction::{CanvasOrigin, InteractionTracker};
pub use layout::{compute_layout, Layout};
pub use spatial::{CellKey, SpatialIndex};
