//! World simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One update per displayed frame, no wall-clock time
//! - Stable iteration order (insertion order of pairs and enemies)
//! - No I/O

pub mod collision;
pub mod heightfield;
pub mod road;
pub mod spline;
pub mod state;
pub mod tick;

pub use collision::{portal_exit, within};
pub use heightfield::HeightField;
pub use road::{Road, RoadQuad, RoadSurface};
pub use spline::SplineCurve;
pub use state::{
    Avatar, Enemy, GameEvent, GamePhase, Movement, Mover, Portal, PortalPair, PortalRole, Tree,
    Turn, World,
};
pub use tick::{TickInput, tick};
