//! Cube Arena headless runner
//!
//! Plays a session with a simple autopilot at a fixed frame delta and logs
//! the HUD as it goes. Pass a tuning JSON file as the first argument to
//! override balance values.

use cube_arena::consts::FRAME_DT;
use cube_arena::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use cube_arena::{Hud, Tuning};
use glam::{Vec2, Vec3};

/// Frames to simulate (two minutes at 60 Hz)
const MAX_FRAMES: u32 = 60 * 120;
/// Frames between trigger pulls
const FIRE_INTERVAL: u32 = 12;
/// Aim error (degrees) under which the autopilot shoots
const AIM_TOLERANCE: f32 = 2.0;

fn load_tuning() -> Tuning {
    let Some(path) = std::env::args().nth(1) else {
        return Tuning::default();
    };
    match std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
    {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Failed to load tuning from {}: {} - using defaults", path, e);
            Tuning::default()
        }
    }
}

/// Wrap an angle in degrees to [-180, 180)
fn wrap_degrees(mut angle: f32) -> f32 {
    while angle >= 180.0 {
        angle -= 360.0;
    }
    while angle < -180.0 {
        angle += 360.0;
    }
    angle
}

/// Aim at the nearest enemy, back off when it gets close, shoot when lined up
fn autopilot(state: &GameState, frame: u32) -> TickInput {
    let mut input = TickInput::default();
    let cam = &state.camera;

    let target = state
        .enemies
        .living()
        .map(|e| e.position)
        .min_by(|a, b| {
            a.distance(cam.position)
                .partial_cmp(&b.distance(cam.position))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(target) = target else {
        return input;
    };

    let to_target = target - cam.position;
    let dist = to_target.length();
    let dir = to_target / dist.max(f32::EPSILON);
    let desired_yaw = dir.z.atan2(dir.x).to_degrees();
    let desired_pitch = dir.y.clamp(-1.0, 1.0).asin().to_degrees();

    let yaw_err = wrap_degrees(desired_yaw - cam.yaw);
    let pitch_err = desired_pitch - cam.pitch;
    input.look = Vec2::new(yaw_err, pitch_err) / cam.sensitivity;

    let aimed = yaw_err.abs() < AIM_TOLERANCE && pitch_err.abs() < AIM_TOLERANCE;
    input.fire = aimed && frame % FIRE_INTERVAL == 0;
    input.back = dist < 4.0;
    input.left = (frame / 90) % 2 == 0;
    input.right = !input.left;

    let ammo = state.armory.current();
    input.reload = ammo.current == 0 || (ammo.current < ammo.capacity() / 3 && !aimed);
    input
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Cube Arena starting...");

    let tuning = load_tuning();
    let mut state = GameState::new(tuning);
    log::info!("Session seed: {}", state.tuning.seed);

    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, FRAME_DT);

    for frame in 1..=MAX_FRAMES {
        let input = autopilot(&state, frame);
        for event in tick(&mut state, &input, FRAME_DT) {
            match event {
                GameEvent::EnemyKilled { id } => log::info!("Frame {}: enemy {} down", frame, id),
                GameEvent::PlayerDied => log::warn!("Frame {}: player died", frame),
                _ => {}
            }
        }

        if frame % 60 == 0 {
            log::info!("{}", Hud::from_state(&state).status_line());
        }
        if state.phase == GamePhase::Ended || state.enemies.count() == 0 {
            break;
        }
    }

    let camera_pos: Vec3 = state.camera.position;
    log::info!(
        "Finished after {} frames at {:.1},{:.1},{:.1}",
        state.frame,
        camera_pos.x,
        camera_pos.y,
        camera_pos.z
    );
    match serde_json::to_string_pretty(&Hud::from_state(&state)) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize HUD: {}", e),
    }
}
