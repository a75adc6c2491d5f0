//! Per-frame simulation step
//!
//! Fixed order within a frame: look, move, jump, physics, weapon handling,
//! fire, enemy AI, melee, tracer aging, dead-enemy sweep, death check.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::MoveDir;
use super::combat::{ShotOutcome, fire};
use super::state::{GameEvent, GamePhase, GameState};

/// Debounced input intents for a single frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Look delta (horizontal, vertical; up positive)
    pub look: Vec2,
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// One shot per press
    pub fire: bool,
    pub reload: bool,
    pub switch_weapon: Option<usize>,
    /// Pause toggle
    pub pause: bool,
    /// Start a fresh session from the menu or end screen
    pub start: bool,
    /// Leave a paused session for the menu
    pub quit_to_menu: bool,
}

impl TickInput {
    fn moves(&self) -> impl Iterator<Item = MoveDir> + '_ {
        [
            (self.forward, MoveDir::Forward),
            (self.back, MoveDir::Back),
            (self.left, MoveDir::Left),
            (self.right, MoveDir::Right),
        ]
        .into_iter()
        .filter_map(|(held, dir)| held.then_some(dir))
    }
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::Menu | GamePhase::Ended => {
            if input.start {
                state.restart();
                events.push(GameEvent::SessionStarted);
            }
            return events;
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
                log::info!("Game resumed");
                events.push(GameEvent::Resumed);
            } else if input.quit_to_menu {
                state.phase = GamePhase::Menu;
                events.push(GameEvent::ReturnedToMenu);
            }
            return events;
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                log::info!("Game paused");
                events.push(GameEvent::Paused);
                return events;
            }
        }
    }

    state.frame += 1;

    // Player
    if input.look != Vec2::ZERO {
        state.camera.process_mouse(input.look.x, input.look.y);
    }
    for dir in input.moves() {
        state.camera.process_move(dir, dt);
    }
    if input.jump && state.camera.jump() {
        events.push(GameEvent::Jumped);
    }
    state.camera.physics(dt);

    // Weapons
    if let Some(slot) = input.switch_weapon {
        if state.armory.switch(slot) {
            events.push(GameEvent::WeaponSwitched { slot });
        }
    }
    if input.reload {
        let rounds = state.armory.reload_current();
        if rounds > 0 {
            events.push(GameEvent::Reloaded { rounds });
        }
    }
    if input.fire {
        match fire(state) {
            ShotOutcome::Pickup { item_id, .. } => {
                events.push(GameEvent::ItemPickedUp { id: item_id });
            }
            ShotOutcome::Hit {
                enemy_id,
                damage,
                killed,
                ..
            } => {
                events.push(GameEvent::EnemyHit { id: enemy_id, damage });
                if killed {
                    events.push(GameEvent::EnemyKilled { id: enemy_id });
                }
            }
            ShotOutcome::DryHit { .. } | ShotOutcome::Miss { spent: false } => {
                events.push(GameEvent::DryFire);
            }
            ShotOutcome::Miss { spent: true } => events.push(GameEvent::ShotMissed),
        }
    }

    // Enemies move first so one that just closed in can strike this frame
    let player_pos = state.camera.position;
    state
        .enemies
        .update(dt, player_pos, &state.tuning, &mut state.rng);
    let dealt = state
        .enemies
        .attack_player(player_pos, &mut state.health, dt, &state.tuning);
    if dealt > 0 {
        events.push(GameEvent::PlayerDamaged { amount: dealt });
    }

    state.tracers.update(dt);
    state.enemies.sweep_dead();

    if state.is_dead() {
        state.phase = GamePhase::Ended;
        log::info!("=== GAME OVER === (score {})", state.score);
        events.push(GameEvent::PlayerDied);
    }

    events
}
