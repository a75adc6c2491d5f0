//! Short-lived shot tracers (presentation only)

use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tracer {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Vec3,
    /// Seconds remaining
    pub life: f32,
    /// Seconds at creation
    pub lifetime: f32,
}

impl Tracer {
    /// Remaining life as a 0-1 fade factor
    pub fn alpha(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        (self.life / self.lifetime).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tracers {
    active: Vec<Tracer>,
}

impl Tracers {
    pub fn add(&mut self, start: Vec3, end: Vec3, color: Vec3, lifetime: f32) {
        self.active.push(Tracer {
            start,
            end,
            color,
            life: lifetime,
            lifetime,
        });
    }

    /// Age all tracers, dropping the expired ones
    pub fn update(&mut self, dt: f32) {
        for tracer in &mut self.active {
            tracer.life -= dt;
        }
        self.active.retain(|t| t.life > 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tracer> {
        self.active.iter()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}
