//! Ray casting against axis-aligned boxes
//!
//! Shared by the combat resolver (items) and the enemy manager (hit boxes) so
//! both sides of a shot use one intersection routine.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Substituted for an exactly-zero direction component to keep the slab
/// division finite
pub const DIR_EPSILON: f32 = 1e-6;

/// A ray with an origin and a (not necessarily unit) direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    /// Point at parametric distance `t` along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Axis-aligned box described by its center and half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Box from a center and full size (width, height, depth)
    pub fn from_size(center: Vec3, size: Vec3) -> Self {
        Self::new(center, size * 0.5)
    }

    /// Cube with the same half extent on every axis
    pub fn cube(center: Vec3, half_extent: f32) -> Self {
        Self::new(center, Vec3::splat(half_extent))
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }
}

/// Entry/exit interval for one slab, ordered so the first value is smaller
#[inline]
fn slab(origin: f32, dir: f32, min: f32, max: f32) -> (f32, f32) {
    let d = if dir != 0.0 { dir } else { DIR_EPSILON };
    let t1 = (min - origin) / d;
    let t2 = (max - origin) / d;
    if t1 > t2 { (t2, t1) } else { (t1, t2) }
}

/// Ray vs. AABB using the slab method
///
/// Returns the parametric distance at which the ray enters the box. Boxes
/// behind the origin (or containing it) report no hit, since the entry
/// distance must be strictly positive.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    let min = aabb.min();
    let max = aabb.max();

    let (mut tmin, mut tmax) = slab(ray.origin.x, ray.dir.x, min.x, max.x);

    let (ty_min, ty_max) = slab(ray.origin.y, ray.dir.y, min.y, max.y);
    if tmin > ty_max || ty_min > tmax {
        return None;
    }
    tmin = tmin.max(ty_min);
    tmax = tmax.min(ty_max);

    let (tz_min, tz_max) = slab(ray.origin.z, ray.dir.z, min.z, max.z);
    if tmin > tz_max || tz_min > tmax {
        return None;
    }
    tmin = tmin.max(tz_min);

    (tmin > 0.0).then_some(tmin)
}

/// Nearest positive hit among a set of keyed boxes
///
/// Ties keep the earliest candidate in iteration order.
pub fn nearest_hit<K, I>(ray: &Ray, candidates: I) -> Option<(K, f32)>
where
    I: IntoIterator<Item = (K, Aabb)>,
{
    let mut best: Option<(K, f32)> = None;
    for (key, aabb) in candidates {
        if let Some(t) = ray_aabb(ray, &aabb) {
            if best.as_ref().is_none_or(|(_, best_t)| t < *best_t) {
                best = Some((key, t));
            }
        }
    }
    best
}
