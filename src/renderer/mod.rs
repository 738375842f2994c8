//! Renderer-facing mesh data
//!
//! Builds GPU-ready vertex lists and model placements from simulation state.
//! Drawing itself is left to the host application.

pub mod mesh;
pub mod scene;
pub mod vertex;

pub use mesh::{road_mesh, terrain_mesh};
pub use scene::{ModelKind, ModelPlacement, clear_color, scene_models};
pub use vertex::Vertex;
