//! First-person camera and player kinematics
//!
//! The camera is the player: its position is the eye point, its front vector
//! is the aim direction. Horizontal movement never writes the vertical
//! coordinate; only `physics` does.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::clamp_horizontal;
use crate::consts::PITCH_LIMIT;
use crate::tuning::Tuning;

use super::ray::Ray;

/// Vertical field of view in degrees
pub const FOV_Y_DEGREES: f32 = 60.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Discrete movement intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDir {
    Forward,
    Back,
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    pub world_up: Vec3,
    /// Horizontal rotation (degrees)
    pub yaw: f32,
    /// Vertical rotation (degrees), kept within ±89
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    pub velocity_y: f32,
    pub on_ground: bool,
    pub gravity: f32,
    pub jump_force: f32,
    pub ground_y: f32,
    /// Horizontal clamp applied after every move
    pub bound: f32,
}

impl Camera {
    pub fn new(tuning: &Tuning) -> Self {
        let mut camera = Self {
            position: tuning.player_start,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            speed: tuning.move_speed,
            sensitivity: tuning.look_sensitivity,
            velocity_y: 0.0,
            on_ground: true,
            gravity: tuning.gravity,
            jump_force: tuning.jump_force,
            ground_y: tuning.ground_y,
            bound: tuning.player_bound,
        };
        camera.update_vectors();
        camera
    }

    /// Put the player back at the start point, facing down -Z, at rest
    pub fn reset(&mut self, start: Vec3) {
        self.position = start;
        self.velocity_y = 0.0;
        self.on_ground = true;
        self.yaw = -90.0;
        self.pitch = 0.0;
        self.update_vectors();
    }

    /// Ray from the eye along the facing direction
    pub fn aim_ray(&self) -> Ray {
        Ray::new(self.position, self.front)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection(aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), aspect, NEAR_PLANE, FAR_PLANE)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        Self::projection(aspect) * self.view_matrix()
    }

    /// Apply a look delta (mouse offsets, y up positive)
    pub fn process_mouse(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.sensitivity;
        self.pitch = (self.pitch + y_offset * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Move along the view basis, then clamp to the arena
    pub fn process_move(&mut self, dir: MoveDir, dt: f32) {
        let velocity = self.speed * dt;
        let y = self.position.y;
        match dir {
            MoveDir::Forward => self.position += self.front * velocity,
            MoveDir::Back => self.position -= self.front * velocity,
            MoveDir::Left => self.position -= self.right * velocity,
            MoveDir::Right => self.position += self.right * velocity,
        }
        self.position.y = y;
        self.position = clamp_horizontal(self.position, self.bound);
    }

    /// Start a jump if standing on the ground
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.velocity_y = self.jump_force;
        self.on_ground = false;
        true
    }

    /// Integrate gravity and land on the ground plane
    pub fn physics(&mut self, dt: f32) {
        self.velocity_y += self.gravity * dt;
        self.position.y += self.velocity_y * dt;

        if self.position.y <= self.ground_y {
            self.position.y = self.ground_y;
            self.velocity_y = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}
