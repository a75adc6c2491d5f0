//! Data-driven game balance
//!
//! Every design value the simulation reads lives here so a session can be
//! rebalanced from JSON without touching code. Missing keys keep defaults.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::weapon::Loadout;

/// Tunable parameters for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// RNG seed for patrol target selection
    pub seed: u64,

    // === Arena ===
    /// Horizontal clamp applied to the player on every move
    pub player_bound: f32,
    /// Horizontal clamp applied to enemies and patrol targets
    pub world_bound: f32,

    // === Player ===
    pub player_start: Vec3,
    pub player_max_health: u32,
    pub move_speed: f32,
    pub look_sensitivity: f32,
    pub gravity: f32,
    pub jump_force: f32,
    /// Eye height the physics integrator lands on
    pub ground_y: f32,

    // === Enemies ===
    pub enemy_max_health: f32,
    pub enemy_speed: f32,
    pub enemy_height: f32,
    pub enemy_hit_half_extent: f32,
    pub chase_radius: f32,
    pub patrol_capture_radius: f32,
    pub patrol_timeout: f32,
    pub patrol_speed_factor: f32,
    pub melee_range: f32,
    pub melee_cooldown: f32,
    pub melee_damage: u32,

    // === Combat ===
    pub score_pickup: u64,
    pub score_hit: u64,
    pub score_kill: u64,
    /// Whether shooting an item also hands out a reserve magazine
    pub pickup_grants_magazine: bool,
    pub max_shot_range: f32,
    pub tracer_lifetime: f32,
    pub loadout: Loadout,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            seed: 0x5EED,

            player_bound: PLAYER_BOUND,
            world_bound: WORLD_BOUND,

            player_start: Vec3::new(0.0, PLAYER_EYE_HEIGHT, 5.0),
            player_max_health: PLAYER_MAX_HEALTH,
            move_speed: PLAYER_SPEED,
            look_sensitivity: LOOK_SENSITIVITY,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            ground_y: PLAYER_EYE_HEIGHT,

            enemy_max_health: ENEMY_MAX_HEALTH,
            enemy_speed: ENEMY_SPEED,
            enemy_height: ENEMY_HEIGHT,
            enemy_hit_half_extent: ENEMY_HIT_HALF_EXTENT,
            chase_radius: CHASE_RADIUS,
            patrol_capture_radius: PATROL_CAPTURE_RADIUS,
            patrol_timeout: PATROL_TIMEOUT,
            patrol_speed_factor: PATROL_SPEED_FACTOR,
            melee_range: MELEE_RANGE,
            melee_cooldown: MELEE_COOLDOWN,
            melee_damage: MELEE_DAMAGE,

            score_pickup: SCORE_PICKUP,
            score_hit: SCORE_HIT,
            score_kill: SCORE_KILL,
            pickup_grants_magazine: true,
            max_shot_range: MAX_SHOT_RANGE,
            tracer_lifetime: TRACER_LIFETIME,
            loadout: Loadout::Classic,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, falling back to defaults for missing keys
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::validated)
    }

    /// Clamp values the simulation assumes are non-negative
    pub fn validated(mut self) -> Self {
        self.player_bound = self.player_bound.max(0.0);
        self.world_bound = self.world_bound.max(0.0);
        self.patrol_timeout = self.patrol_timeout.max(0.0);
        self.patrol_capture_radius = self.patrol_capture_radius.max(0.0);
        self.melee_cooldown = self.melee_cooldown.max(0.0);
        self.melee_range = self.melee_range.max(0.0);
        self.tracer_lifetime = self.tracer_lifetime.max(0.0);
        self.max_shot_range = self.max_shot_range.max(0.0);
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
