//! Cube Arena - A first-person arena shooter simulation core
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (camera physics, enemy AI, combat, ammo)
//! - `renderer`: Renderable state export (instances and tracer segments)
//! - `hud`: HUD data export
//! - `tuning`: Data-driven game balance

pub mod hud;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use hud::Hud;
pub use tuning::Tuning;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Reference frame delta for headless runs (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Arena is a 40x40 square centered on the origin
    pub const ARENA_SIZE: f32 = 40.0;
    /// Horizontal clamp for the player (tighter than the world bound)
    pub const PLAYER_BOUND: f32 = 19.0;
    /// Horizontal clamp for enemies and patrol targets
    pub const WORLD_BOUND: f32 = 20.0;

    /// Player defaults
    pub const PLAYER_MAX_HEALTH: u32 = 100;
    pub const PLAYER_EYE_HEIGHT: f32 = 2.0;
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const LOOK_SENSITIVITY: f32 = 0.1;
    pub const GRAVITY: f32 = -9.8;
    pub const JUMP_FORCE: f32 = 5.0;
    /// Pitch limit in degrees (avoids flipping over the pole)
    pub const PITCH_LIMIT: f32 = 89.0;

    /// Enemy defaults
    pub const ENEMY_MAX_HEALTH: f32 = 100.0;
    pub const ENEMY_SPEED: f32 = 3.0;
    pub const ENEMY_HEIGHT: f32 = 1.8;
    /// Visual cube scale for enemies
    pub const ENEMY_SCALE: f32 = 1.5;
    /// Hit box half-extent, independent of the visual scale
    pub const ENEMY_HIT_HALF_EXTENT: f32 = 0.75;

    /// AI
    pub const CHASE_RADIUS: f32 = 18.0;
    pub const PATROL_CAPTURE_RADIUS: f32 = 0.5;
    pub const PATROL_TIMEOUT: f32 = 5.0;
    pub const PATROL_SPEED_FACTOR: f32 = 0.7;
    pub const MELEE_RANGE: f32 = 1.8;
    pub const MELEE_COOLDOWN: f32 = 1.0;
    pub const MELEE_DAMAGE: u32 = 15;

    /// Scoring
    pub const SCORE_PICKUP: u64 = 5;
    pub const SCORE_HIT: u64 = 10;
    pub const SCORE_KILL: u64 = 50;

    /// Shots that hit nothing end this far along the ray
    pub const MAX_SHOT_RANGE: f32 = 100.0;
    /// Tracer lifetime in seconds
    pub const TRACER_LIFETIME: f32 = 0.2;
}

/// Clamp the horizontal (x/z) components of a position to a square bound
/// (negative or NaN bounds collapse to zero)
#[inline]
pub fn clamp_horizontal(mut pos: Vec3, bound: f32) -> Vec3 {
    let bound = bound.max(0.0);
    pos.x = pos.x.clamp(-bound, bound);
    pos.z = pos.z.clamp(-bound, bound);
    pos
}

/// Distance between two points ignoring height
#[inline]
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    let d = a - b;
    (d.x * d.x + d.z * d.z).sqrt()
}
