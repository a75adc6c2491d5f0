//! Scene export: everything visible this frame as plain data

use glam::Vec3;

use super::instance::{DrawInstance, TracerSegment, colors};
use crate::consts::ENEMY_SCALE;
use crate::sim::{Enemy, GameState, Tracer};

/// Health bar height above the enemy center
const HEALTH_BAR_OFFSET: f32 = 1.2 * ENEMY_SCALE;
const HEALTH_BAR_THICKNESS: f32 = 0.15 * ENEMY_SCALE;

/// Drawables for one frame
#[derive(Debug, Clone, Default)]
pub struct SceneData {
    /// Static geometry and items
    pub cubes: Vec<DrawInstance>,
    /// Living enemies followed by their health bars
    pub enemies: Vec<DrawInstance>,
    pub tracers: Vec<TracerSegment>,
}

/// Collect drawables from the current state
pub fn build_scene(state: &GameState) -> SceneData {
    let cubes = state
        .world
        .cubes
        .iter()
        .map(|c| DrawInstance::new(c.pos, c.size, c.color))
        .collect();

    let mut enemies = Vec::with_capacity(state.enemies.enemies.len() * 2);
    for enemy in state.enemies.living() {
        enemies.push(DrawInstance::new(
            enemy.position,
            Vec3::splat(ENEMY_SCALE),
            enemy.color,
        ));
        if let Some(bar) = health_bar(enemy) {
            enemies.push(bar);
        }
    }

    let tracers = state.tracers.iter().map(tracer_segment).collect();

    SceneData {
        cubes,
        enemies,
        tracers,
    }
}

/// Bar floating above an enemy, width proportional to remaining health
fn health_bar(enemy: &Enemy) -> Option<DrawInstance> {
    let ratio = enemy.health_ratio();
    if ratio <= 0.0 {
        return None;
    }
    Some(DrawInstance::new(
        enemy.position + Vec3::new(0.0, HEALTH_BAR_OFFSET, 0.0),
        Vec3::new(ratio * ENEMY_SCALE, HEALTH_BAR_THICKNESS, HEALTH_BAR_THICKNESS),
        colors::HEALTH_BAR,
    ))
}

fn tracer_segment(tracer: &Tracer) -> TracerSegment {
    TracerSegment {
        start: tracer.start.to_array(),
        end: tracer.end.to_array(),
        color: tracer.color.extend(tracer.alpha()).to_array(),
    }
}
