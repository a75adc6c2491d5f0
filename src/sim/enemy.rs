//! Enemy state, AI and hit testing
//!
//! Enemies get stable ids at spawn. Death only flips `alive`; dead entries
//! stay in the roster until `sweep_dead` compacts it at the end of the frame,
//! so nothing iterating the roster mid-frame ever sees an index shift.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clamp_horizontal;
use crate::tuning::Tuning;

use super::ray::{Aabb, Ray, nearest_hit};

/// Initial squad: (position, color)
const SQUAD: [(Vec3, Vec3); 3] = [
    (Vec3::new(-3.0, 1.5, -1.0), Vec3::new(1.0, 0.2, 0.2)),
    (Vec3::new(3.0, 1.5, -1.0), Vec3::new(0.2, 1.0, 0.2)),
    (Vec3::new(0.0, 1.5, -2.0), Vec3::new(1.0, 0.2, 1.0)),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub position: Vec3,
    pub color: Vec3,
    pub health: f32,
    pub max_health: f32,
    pub alive: bool,
    pub patrol_target: Vec3,
    /// Seconds since the last patrol retarget
    pub patrol_timer: f32,
    pub speed: f32,
    pub chasing: bool,
    /// Seconds spent in melee range since the last strike
    pub attack_timer: f32,
}

impl Enemy {
    pub fn new(id: u32, position: Vec3, color: Vec3, tuning: &Tuning) -> Self {
        Self {
            id,
            position,
            color,
            health: tuning.enemy_max_health,
            max_health: tuning.enemy_max_health,
            alive: true,
            patrol_target: position,
            patrol_timer: 0.0,
            speed: tuning.enemy_speed,
            chasing: false,
            attack_timer: 0.0,
        }
    }

    /// Apply damage; true only on the hit that kills
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.alive {
            return false;
        }
        self.health = (self.health - amount).max(0.0);
        if self.health <= 0.0 {
            self.alive = false;
            return true;
        }
        false
    }

    pub fn health_ratio(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }

    pub fn hit_box(&self, half_extent: f32) -> Aabb {
        Aabb::cube(self.position, half_extent)
    }
}

/// Nearest enemy struck by a ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyHit {
    pub id: u32,
    pub distance: f32,
}

/// Result of damaging an enemy by id
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DamageOutcome {
    /// No living enemy with that id
    Missing,
    Wounded { remaining: f32 },
    Killed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyManager {
    pub enemies: Vec<Enemy>,
    next_id: u32,
}

impl Default for EnemyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyManager {
    pub fn new() -> Self {
        Self {
            enemies: Vec::new(),
            next_id: 1,
        }
    }

    pub fn spawn(&mut self, position: Vec3, color: Vec3, tuning: &Tuning) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.enemies.push(Enemy::new(id, position, color, tuning));
        id
    }

    /// Spawn the fixed starting squad
    pub fn spawn_squad(&mut self, tuning: &Tuning) {
        for (pos, color) in SQUAD {
            self.spawn(pos, color, tuning);
        }
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
        log::debug!("All enemies cleared");
    }

    pub fn living(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.alive)
    }

    /// Number of living enemies
    pub fn count(&self) -> usize {
        self.living().count()
    }

    pub fn get(&self, id: u32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id && e.alive)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id && e.alive)
    }

    /// Move every living enemy: chase the player when close, otherwise patrol
    pub fn update<R: Rng>(&mut self, dt: f32, player_pos: Vec3, tuning: &Tuning, rng: &mut R) {
        let limit = tuning.world_bound.max(0.0);

        for e in self.enemies.iter_mut().filter(|e| e.alive) {
            let dist_to_player = e.position.distance(player_pos);

            if dist_to_player < tuning.chase_radius {
                e.chasing = true;
                let dir = (player_pos - e.position).normalize_or_zero();
                e.position += dir * e.speed * dt;
            } else {
                e.chasing = false;
                e.patrol_timer += dt;

                if e.position.distance(e.patrol_target) < tuning.patrol_capture_radius
                    || e.patrol_timer > tuning.patrol_timeout
                {
                    e.patrol_target = Vec3::new(
                        rng.random_range(-limit..=limit),
                        tuning.enemy_height,
                        rng.random_range(-limit..=limit),
                    );
                    e.patrol_timer = 0.0;
                    log::debug!("Enemy {} patrolling to {:?}", e.id, e.patrol_target);
                }

                let dir = (e.patrol_target - e.position).normalize_or_zero();
                e.position += dir * e.speed * dt * tuning.patrol_speed_factor;
            }

            e.position = clamp_horizontal(e.position, limit);
            e.position.y = tuning.enemy_height;
        }
    }

    /// Melee pass: enemies in range strike once per cooldown.
    /// Returns the total damage dealt this frame.
    pub fn attack_player(
        &mut self,
        player_pos: Vec3,
        player_health: &mut u32,
        dt: f32,
        tuning: &Tuning,
    ) -> u32 {
        let mut dealt = 0;

        for e in self.enemies.iter_mut().filter(|e| e.alive) {
            if e.position.distance(player_pos) < tuning.melee_range {
                e.attack_timer += dt;
                if e.attack_timer >= tuning.melee_cooldown {
                    let before = *player_health;
                    *player_health = player_health.saturating_sub(tuning.melee_damage);
                    dealt += before - *player_health;
                    e.attack_timer = 0.0;
                    log::info!(
                        "Enemy {} hit you! -{} HP (now {})",
                        e.id,
                        tuning.melee_damage,
                        *player_health
                    );
                }
            } else {
                e.attack_timer = 0.0;
            }
        }

        dealt
    }

    /// Nearest living enemy whose hit box the ray enters
    pub fn hit_test(&self, ray: &Ray, half_extent: f32) -> Option<EnemyHit> {
        nearest_hit(ray, self.living().map(|e| (e.id, e.hit_box(half_extent))))
            .map(|(id, distance)| EnemyHit { id, distance })
    }

    pub fn damage(&mut self, id: u32, amount: f32) -> DamageOutcome {
        let Some(enemy) = self.get_mut(id) else {
            return DamageOutcome::Missing;
        };
        if enemy.take_damage(amount) {
            DamageOutcome::Killed
        } else {
            DamageOutcome::Wounded {
                remaining: enemy.health,
            }
        }
    }

    /// Drop dead enemies from the roster. Returns how many were removed.
    pub fn sweep_dead(&mut self) -> usize {
        let before = self.enemies.len();
        self.enemies.retain(|e| e.alive);
        before - self.enemies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (EnemyManager, Tuning, Pcg32) {
        (EnemyManager::new(), Tuning::default(), Pcg32::seed_from_u64(7))
    }

    #[test]
    fn test_spawn_assigns_stable_ids() {
        let (mut mgr, tuning, _) = setup();
        mgr.spawn_squad(&tuning);
        let ids: Vec<u32> = mgr.living().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        mgr.damage(2, 1000.0);
        mgr.sweep_dead();
        let id = mgr.spawn(Vec3::ZERO, Vec3::ONE, &tuning);
        assert_eq!(id, 4);
    }

    #[test]
    fn test_switches_to_chase_when_player_near() {
        let (mut mgr, tuning, mut rng) = setup();
        let id = mgr.spawn(Vec3::new(0.0, 1.8, 25.0), Vec3::ONE, &tuning);
        let player = Vec3::new(0.0, 1.8, 0.0);

        mgr.update(0.016, player, &tuning, &mut rng);
        assert!(!mgr.get(id).unwrap().chasing);

        mgr.get_mut(id).unwrap().position = Vec3::new(0.0, 1.8, 10.0);
        mgr.update(0.016, player, &tuning, &mut rng);
        let e = mgr.get(id).unwrap();
        assert!(e.chasing);
        assert!(e.position.z < 10.0, "moved toward player");
    }

    #[test]
    fn test_patrol_retargets_on_arrival_within_bounds() {
        let (mut mgr, tuning, mut rng) = setup();
        let id = mgr.spawn(Vec3::new(15.0, 1.8, 15.0), Vec3::ONE, &tuning);
        let player = Vec3::new(-15.0, 2.0, -15.0);

        // Spawn target equals spawn position, so the first update retargets
        mgr.update(0.016, player, &tuning, &mut rng);
        let e = mgr.get(id).unwrap();
        assert_eq!(e.patrol_timer, 0.0);
        assert_ne!(e.patrol_target, Vec3::new(15.0, 1.5, 15.0));
        assert!(e.patrol_target.x.abs() <= 20.0 && e.patrol_target.z.abs() <= 20.0);
        assert_eq!(e.patrol_target.y, 1.8);
    }

    #[test]
    fn test_patrol_retargets_after_timeout() {
        let (mut mgr, tuning, mut rng) = setup();
        let id = mgr.spawn(Vec3::new(19.0, 1.8, 19.0), Vec3::ONE, &tuning);
        {
            let e = mgr.get_mut(id).unwrap();
            e.patrol_target = Vec3::new(-19.0, 1.8, -19.0);
            e.patrol_timer = 4.99;
        }
        mgr.update(0.05, Vec3::new(-19.0, 2.0, 19.0), &tuning, &mut rng);
        assert_eq!(mgr.get(id).unwrap().patrol_timer, 0.0);
    }

    #[test]
    fn test_patrol_moves_at_reduced_speed() {
        let (mut mgr, tuning, mut rng) = setup();
        let id = mgr.spawn(Vec3::new(0.0, 1.8, 0.0), Vec3::ONE, &tuning);
        mgr.get_mut(id).unwrap().patrol_target = Vec3::new(10.0, 1.8, 0.0);
        mgr.update(1.0, Vec3::new(0.0, 2.0, 19.5), &tuning, &mut rng);
        let x = mgr.get(id).unwrap().position.x;
        assert!((x - 3.0 * 0.7).abs() < 1e-4);
    }

    #[test]
    fn test_positions_clamped_and_pinned() {
        let (mut mgr, tuning, mut rng) = setup();
        let id = mgr.spawn(Vec3::new(30.0, 5.0, -30.0), Vec3::ONE, &tuning);
        mgr.update(0.016, Vec3::new(0.0, 2.0, 0.0), &tuning, &mut rng);
        let e = mgr.get(id).unwrap();
        assert!(e.position.x <= 20.0 && e.position.z >= -20.0);
        assert_eq!(e.position.y, 1.8);
    }

    #[test]
    fn test_zero_world_bound_patrols_in_place() {
        let tuning = Tuning::from_json(r#"{ "world_bound": 0.0 }"#).unwrap();
        let mut mgr = EnemyManager::new();
        let mut rng = Pcg32::seed_from_u64(7);
        let id = mgr.spawn(Vec3::new(4.0, 1.8, -4.0), Vec3::ONE, &tuning);

        mgr.update(0.016, Vec3::new(100.0, 2.0, 100.0), &tuning, &mut rng);
        let e = mgr.get(id).unwrap();
        assert_eq!(e.patrol_target, Vec3::new(0.0, 1.8, 0.0));
        assert_eq!(e.position, Vec3::new(0.0, 1.8, 0.0));
    }

    #[test]
    fn test_negative_world_bound_does_not_panic() {
        let (mut mgr, mut tuning, mut rng) = setup();
        tuning.world_bound = -5.0;
        let id = mgr.spawn(Vec3::new(3.0, 1.8, 3.0), Vec3::ONE, &tuning);

        for _ in 0..10 {
            mgr.update(0.5, Vec3::new(100.0, 2.0, 100.0), &tuning, &mut rng);
        }
        let e = mgr.get(id).unwrap();
        assert_eq!((e.position.x, e.position.z), (0.0, 0.0));
    }

    #[test]
    fn test_melee_cooldown_and_reset() {
        let (mut mgr, tuning, _) = setup();
        let player = Vec3::new(0.0, 2.0, 0.0);
        let id = mgr.spawn(Vec3::new(1.0, 1.8, 0.0), Vec3::ONE, &tuning);
        let mut health = 100;

        assert_eq!(mgr.attack_player(player, &mut health, 0.6, &tuning), 0);
        assert_eq!(mgr.attack_player(player, &mut health, 0.6, &tuning), 15);
        assert_eq!(health, 85);
        assert_eq!(mgr.get(id).unwrap().attack_timer, 0.0);

        // Leaving range forfeits accumulated time
        mgr.attack_player(player, &mut health, 0.9, &tuning);
        mgr.get_mut(id).unwrap().position = Vec3::new(5.0, 1.8, 0.0);
        mgr.attack_player(player, &mut health, 0.1, &tuning);
        assert_eq!(mgr.get(id).unwrap().attack_timer, 0.0);
        mgr.get_mut(id).unwrap().position = Vec3::new(1.0, 1.8, 0.0);
        mgr.attack_player(player, &mut health, 0.5, &tuning);
        assert_eq!(health, 85);
    }

    #[test]
    fn test_melee_clamps_health_at_zero() {
        let (mut mgr, tuning, _) = setup();
        let player = Vec3::new(0.0, 2.0, 0.0);
        mgr.spawn(Vec3::new(0.5, 1.8, 0.0), Vec3::ONE, &tuning);
        let mut health = 10;
        assert_eq!(mgr.attack_player(player, &mut health, 1.0, &tuning), 10);
        assert_eq!(health, 0);
    }

    #[test]
    fn test_hit_test_nearest_living() {
        let (mut mgr, tuning, _) = setup();
        let near = mgr.spawn(Vec3::new(0.0, 2.0, -5.0), Vec3::ONE, &tuning);
        let far = mgr.spawn(Vec3::new(0.0, 2.0, -10.0), Vec3::ONE, &tuning);
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Z);

        let hit = mgr.hit_test(&ray, 0.75).unwrap();
        assert_eq!(hit.id, near);
        assert!((hit.distance - 4.25).abs() < 1e-4);

        // Dead enemies are transparent even before the sweep
        mgr.damage(near, 1000.0);
        assert_eq!(mgr.hit_test(&ray, 0.75).unwrap().id, far);
    }

    #[test]
    fn test_lethal_damage_counts_once() {
        let (mut mgr, tuning, _) = setup();
        let id = mgr.spawn(Vec3::ZERO, Vec3::ONE, &tuning);
        mgr.get_mut(id).unwrap().health = 20.0;

        assert_eq!(mgr.damage(id, 34.0), DamageOutcome::Killed);
        assert_eq!(mgr.damage(id, 34.0), DamageOutcome::Missing);
        assert_eq!(mgr.count(), 0);
        assert_eq!(mgr.sweep_dead(), 1);
        assert_eq!(mgr.sweep_dead(), 0);
        assert!(mgr.enemies.is_empty());
    }

    #[test]
    fn test_dead_enemies_skip_ai_and_melee() {
        let (mut mgr, tuning, mut rng) = setup();
        let player = Vec3::new(0.0, 2.0, 0.0);
        let id = mgr.spawn(Vec3::new(1.0, 1.8, 0.0), Vec3::ONE, &tuning);
        mgr.damage(id, 100.0);

        mgr.update(1.0, player, &tuning, &mut rng);
        let mut health = 100;
        mgr.attack_player(player, &mut health, 2.0, &tuning);
        assert_eq!(health, 100);
        assert_eq!(mgr.enemies[0].position, Vec3::new(1.0, 1.8, 0.0));
    }
}
