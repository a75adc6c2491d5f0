//! Instance types handed to the renderer

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// One cube to draw: translation, non-uniform scale and a flat color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DrawInstance {
    pub position: [f32; 3],
    pub scale: [f32; 3],
    pub color: [f32; 4],
}

impl DrawInstance {
    pub fn new(position: Vec3, scale: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            scale: scale.to_array(),
            color: color.extend(1.0).to_array(),
        }
    }

    /// Model matrix (translate then scale) for a unit cube centered on the origin
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::from_array(self.position))
            * Mat4::from_scale(Vec3::from_array(self.scale))
    }
}

/// A tracer line with its fade already applied to the color alpha
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TracerSegment {
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub color: [f32; 4],
}

/// Colors for game elements
pub mod colors {
    use glam::Vec3;

    pub const HEALTH_BAR: Vec3 = Vec3::new(1.0, 0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_matrix_maps_unit_cube_corner() {
        let inst = DrawInstance::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0), Vec3::ONE);
        let corner = inst.model_matrix().transform_point3(Vec3::splat(0.5));
        assert!((corner - Vec3::new(2.0, 4.0, 6.0)).length() < 1e-5);
    }

    #[test]
    fn test_instances_cast_to_bytes() {
        let instances = [DrawInstance::new(Vec3::ZERO, Vec3::ONE, Vec3::X); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 2 * std::mem::size_of::<DrawInstance>());
        assert_eq!(std::mem::size_of::<DrawInstance>(), 40);
    }
}
