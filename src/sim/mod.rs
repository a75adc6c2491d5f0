//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One tick per frame, driven by the caller's delta time
//! - Seeded RNG only
//! - Stable entity ids; removal happens at the end of the frame

pub mod camera;
pub mod combat;
pub mod enemy;
pub mod ray;
pub mod state;
pub mod tick;
pub mod tracer;
pub mod weapon;
pub mod world;

pub use camera::{Camera, MoveDir};
pub use combat::{ShotOutcome, fire, fire_ray};
pub use enemy::{DamageOutcome, Enemy, EnemyHit, EnemyManager};
pub use ray::{Aabb, Ray, nearest_hit, ray_aabb};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use tracer::{Tracer, Tracers};
pub use weapon::{AmmoReserve, Armory, Loadout, WeaponKind};
pub use world::{Cube, World};
