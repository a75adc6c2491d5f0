//! Renderable state export
//!
//! The simulation issues no draw calls; this module turns state into plain
//! instance data a GPU backend can upload as-is.

pub mod instance;
pub mod scene;

pub use instance::{DrawInstance, TracerSegment};
pub use scene::{SceneData, build_scene};
