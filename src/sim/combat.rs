//! Shot resolution
//!
//! One trigger pull casts one ray from the eye. Items are tested first and
//! swallow the shot for free; otherwise the nearest living enemy takes the
//! round; otherwise the round flies to maximum range.

use super::enemy::DamageOutcome;
use super::ray::{Ray, nearest_hit};
use super::state::GameState;

/// What a single shot did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotOutcome {
    /// An item was collected; no ammo spent
    Pickup { item_id: u32, distance: f32 },
    /// A round struck an enemy
    Hit {
        enemy_id: u32,
        distance: f32,
        damage: f32,
        killed: bool,
    },
    /// An enemy was in the sights but the magazine was empty
    DryHit { enemy_id: u32, distance: f32 },
    /// Nothing hit; `spent` is false for an empty magazine
    Miss { spent: bool },
}

/// Fire the selected weapon along the camera's aim ray
pub fn fire(state: &mut GameState) -> ShotOutcome {
    let ray = state.camera.aim_ray();
    fire_ray(state, &ray)
}

/// Resolve a shot along an arbitrary ray
pub fn fire_ray(state: &mut GameState, ray: &Ray) -> ShotOutcome {
    let tuning = &state.tuning;
    let weapon = state.armory.weapon();
    let color = weapon.tracer_color();

    // Items first
    let item_hit = nearest_hit(ray, state.world.items().map(|c| (c.id, c.aabb())));
    if let Some((item_id, distance)) = item_hit {
        state.world.pick_up(item_id);
        state.score += tuning.score_pickup;
        if tuning.pickup_grants_magazine {
            state.armory.current_mut().add_reserve_magazine();
        }
        state
            .tracers
            .add(ray.origin, ray.at(distance), color, tuning.tracer_lifetime);
        return ShotOutcome::Pickup { item_id, distance };
    }

    // Then enemies
    if let Some(hit) = state.enemies.hit_test(ray, tuning.enemy_hit_half_extent) {
        state
            .tracers
            .add(ray.origin, ray.at(hit.distance), color, tuning.tracer_lifetime);

        if !state.armory.current_mut().consume() {
            return ShotOutcome::DryHit {
                enemy_id: hit.id,
                distance: hit.distance,
            };
        }

        state.score += tuning.score_hit;
        let damage = weapon.damage();
        let killed = match state.enemies.damage(hit.id, damage) {
            DamageOutcome::Killed => {
                state.score += tuning.score_kill;
                log::info!("Enemy {} killed (score {})", hit.id, state.score);
                true
            }
            DamageOutcome::Wounded { remaining } => {
                log::debug!("Enemy {} hit for {} ({} left)", hit.id, damage, remaining);
                false
            }
            DamageOutcome::Missing => false,
        };
        return ShotOutcome::Hit {
            enemy_id: hit.id,
            distance: hit.distance,
            damage,
            killed,
        };
    }

    // Miss
    state.tracers.add(
        ray.origin,
        ray.at(tuning.max_shot_range),
        color,
        tuning.tracer_lifetime,
    );
    let spent = state.armory.current_mut().consume();
    ShotOutcome::Miss { spent }
}
