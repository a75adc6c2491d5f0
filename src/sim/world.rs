//! Static arena geometry and collectible items
//!
//! Everything in the world is a box. Walls, floor and ceiling never change
//! after generation; items are removed when shot and come back at their
//! canonical positions on reset.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::ARENA_SIZE;

use super::ray::Aabb;

/// Canonical item slots: (id, position, color)
const ITEM_SLOTS: [(u32, Vec3, Vec3); 4] = [
    (1, Vec3::new(-10.0, 1.5, -10.0), Vec3::new(1.0, 0.3, 0.3)),
    (2, Vec3::new(10.0, 1.5, -10.0), Vec3::new(0.3, 1.0, 0.3)),
    (3, Vec3::new(10.0, 1.5, 10.0), Vec3::new(0.3, 0.3, 1.0)),
    (4, Vec3::new(-10.0, 1.5, 10.0), Vec3::new(1.0, 1.0, 0.3)),
];

/// Edge length of an item cube
pub const ITEM_SIZE: f32 = 0.8;

/// A box in the world (static geometry or a collectible item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub pos: Vec3,
    /// Width, height, depth
    pub size: Vec3,
    pub color: Vec3,
    pub is_item: bool,
    /// Item id (0 for static geometry)
    pub id: u32,
}

impl Cube {
    pub fn solid(pos: Vec3, size: Vec3, color: Vec3) -> Self {
        Self {
            pos,
            size,
            color,
            is_item: false,
            id: 0,
        }
    }

    pub fn item(id: u32, pos: Vec3, size: Vec3, color: Vec3) -> Self {
        Self {
            pos,
            size,
            color,
            is_item: true,
            id,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_size(self.pos, self.size)
    }
}

/// Color an item is drawn with, by id (white for unknown ids)
pub fn item_color(id: u32) -> Vec3 {
    ITEM_SLOTS
        .iter()
        .find(|(slot_id, _, _)| *slot_id == id)
        .map(|(_, _, color)| *color)
        .unwrap_or(Vec3::ONE)
}

/// Flat registry of every box in the arena
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    pub cubes: Vec<Cube>,
}

impl World {
    /// Build a freshly generated arena
    pub fn new() -> Self {
        let mut world = Self::default();
        world.generate();
        world
    }

    /// Append the arena layout: floor, ceiling, four walls and the items
    pub fn generate(&mut self) {
        let w = ARENA_SIZE;
        let h = ARENA_SIZE;

        // Floor and ceiling
        self.cubes.push(Cube::solid(
            Vec3::ZERO,
            Vec3::new(w, 1.0, h),
            Vec3::new(0.7, 0.7, 0.9),
        ));
        self.cubes.push(Cube::solid(
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(w, 1.0, h),
            Vec3::new(0.6, 0.9, 1.0),
        ));

        // Walls around the square
        let side = Vec3::new(1.0, 10.0, h);
        let end = Vec3::new(w, 10.0, 1.0);
        let end_color = Vec3::new(0.6, 0.6, 1.0);
        self.cubes.push(Cube::solid(Vec3::new(-w / 2.0, 5.0, 0.0), side, Vec3::splat(0.8)));
        self.cubes.push(Cube::solid(Vec3::new(w / 2.0, 5.0, 0.0), side, Vec3::splat(0.8)));
        self.cubes.push(Cube::solid(Vec3::new(0.0, 5.0, -h / 2.0), end, end_color));
        self.cubes.push(Cube::solid(Vec3::new(0.0, 5.0, h / 2.0), end, end_color));

        self.spawn_canonical_items();
    }

    /// Clear everything and regenerate
    pub fn reset(&mut self) {
        self.cubes.clear();
        self.generate();
    }

    /// Drop all items and restore the canonical set; static geometry is untouched
    pub fn regenerate_items(&mut self) {
        self.cubes.retain(|c| !c.is_item);
        self.spawn_canonical_items();
    }

    fn spawn_canonical_items(&mut self) {
        for (id, pos, color) in ITEM_SLOTS {
            self.cubes.push(Cube::item(id, pos, Vec3::splat(ITEM_SIZE), color));
        }
    }

    /// Remove the item with this id, returning it if present
    pub fn pick_up(&mut self, id: u32) -> Option<Cube> {
        let index = self.cubes.iter().position(|c| c.is_item && c.id == id)?;
        let cube = self.cubes.remove(index);
        log::info!(
            "Picked up item {} (color {:.1},{:.1},{:.1})",
            id,
            cube.color.x,
            cube.color.y,
            cube.color.z
        );
        Some(cube)
    }

    /// Put an item back at a position; ignored if that id is already present
    pub fn respawn(&mut self, id: u32, pos: Vec3) -> bool {
        if self.item(id).is_some() {
            return false;
        }
        self.cubes
            .push(Cube::item(id, pos, Vec3::splat(ITEM_SIZE), item_color(id)));
        true
    }

    pub fn item(&self, id: u32) -> Option<&Cube> {
        self.cubes.iter().find(|c| c.is_item && c.id == id)
    }

    pub fn items(&self) -> impl Iterator<Item = &Cube> {
        self.cubes.iter().filter(|c| c.is_item)
    }

    pub fn statics(&self) -> impl Iterator<Item = &Cube> {
        self.cubes.iter().filter(|c| !c.is_item)
    }

    /// Canonical position for an item id
    pub fn canonical_position(id: u32) -> Option<Vec3> {
        ITEM_SLOTS
            .iter()
            .find(|(slot_id, _, _)| *slot_id == id)
            .map(|(_, pos, _)| *pos)
    }
}
