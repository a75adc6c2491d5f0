//! Game state and core simulation types
//!
//! One `GameState` owns everything the frame update touches; subsystems get
//! it (or disjoint parts of it) by reference.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::enemy::EnemyManager;
use super::tracer::Tracers;
use super::weapon::Armory;
use super::world::World;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start menu, nothing simulates
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen until resumed
    Paused,
    /// Player health reached zero
    Ended,
}

/// Things that happened during a frame, for presentation/audio collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted,
    Paused,
    Resumed,
    ReturnedToMenu,
    Jumped,
    WeaponSwitched { slot: usize },
    Reloaded { rounds: u32 },
    ItemPickedUp { id: u32 },
    EnemyHit { id: u32, damage: f32 },
    EnemyKilled { id: u32 },
    ShotMissed,
    /// Trigger pulled on an empty magazine
    DryFire,
    PlayerDamaged { amount: u32 },
    PlayerDied,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub camera: Camera,
    /// Player health, 0..=max
    pub health: u32,
    pub score: u64,
    pub armory: Armory,
    pub world: World,
    pub enemies: EnemyManager,
    pub tracers: Tracers,
    /// Frames simulated while playing
    pub frame: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// Fresh state sitting at the start menu
    pub fn new(tuning: Tuning) -> Self {
        let mut enemies = EnemyManager::new();
        enemies.spawn_squad(&tuning);

        Self {
            phase: GamePhase::Menu,
            camera: Camera::new(&tuning),
            health: tuning.player_max_health,
            score: 0,
            armory: Armory::new(tuning.loadout),
            world: World::new(),
            enemies,
            tracers: Tracers::default(),
            frame: 0,
            rng: Pcg32::seed_from_u64(tuning.seed),
            tuning,
        }
    }

    /// Reset the session for a new run and start playing
    pub fn restart(&mut self) {
        self.camera.reset(self.tuning.player_start);
        self.health = self.tuning.player_max_health;
        self.score = 0;
        self.armory = Armory::new(self.tuning.loadout);
        self.world.regenerate_items();
        self.enemies.clear();
        self.enemies.spawn_squad(&self.tuning);
        self.tracers.clear();
        self.frame = 0;
        self.rng = Pcg32::seed_from_u64(self.tuning.seed);
        self.phase = GamePhase::Playing;
        log::info!("Session started");
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rand::Rng;

    #[test]
    fn test_new_state_in_menu() {
        let state = GameState::new(Tuning::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.health, 100);
        assert_eq!(state.enemies.count(), 3);
        assert_eq!(state.world.items().count(), 4);
        assert_eq!(state.armory.current().current, 30);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = GameState::new(Tuning::default());
        state.health = 5;
        state.score = 120;
        state.armory.current_mut().current = 0;
        state.world.pick_up(3);
        state.enemies.clear();
        state.camera.position = Vec3::new(10.0, 4.0, 10.0);
        state.camera.velocity_y = 3.0;
        state.tracers.add(Vec3::ZERO, Vec3::X, Vec3::ONE, 0.2);

        state.restart();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.health, 100);
        assert_eq!(state.score, 0);
        assert_eq!(state.armory.current().current, 30);
        assert!(state.world.item(3).is_some());
        assert_eq!(state.enemies.count(), 3);
        assert_eq!(state.camera.position, Vec3::new(0.0, 2.0, 5.0));
        assert_eq!(state.camera.velocity_y, 0.0);
        assert!(state.tracers.is_empty());
    }

    #[test]
    fn test_restart_reseeds_rng() {
        let mut state = GameState::new(Tuning::default());
        let fresh: Vec<u32> = (0..4).map(|_| state.rng.random()).collect();

        state.restart();
        let replay: Vec<u32> = (0..4).map(|_| state.rng.random()).collect();
        assert_eq!(replay, fresh);
    }
}
