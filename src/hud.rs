//! HUD data export
//!
//! Snapshot of everything the overlay shows. Glyph layout and drawing belong
//! to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::sim::{AmmoReserve, GamePhase, GameState};

/// Ammo readout for one weapon slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSlotHud {
    pub name: String,
    pub ammo: u32,
    pub capacity: u32,
    pub partial: u32,
    pub reserve_mags: u32,
    pub selected: bool,
}

impl WeaponSlotHud {
    fn from_reserve(reserve: &AmmoReserve, selected: bool) -> Self {
        Self {
            name: reserve.kind.name().to_string(),
            ammo: reserve.current,
            capacity: reserve.capacity(),
            partial: reserve.partial,
            reserve_mags: reserve.reserve_mags,
            selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub phase: GamePhase,
    pub health: u32,
    pub max_health: u32,
    pub score: u64,
    pub ammo: u32,
    pub reserve_mags: u32,
    pub partial_ammo: u32,
    pub weapon: String,
    pub enemies_left: usize,
    pub slots: Vec<WeaponSlotHud>,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        let current = state.armory.current();
        let slots = state
            .armory
            .slots
            .iter()
            .enumerate()
            .map(|(i, r)| WeaponSlotHud::from_reserve(r, i == state.armory.current))
            .collect();

        Self {
            phase: state.phase,
            health: state.health,
            max_health: state.tuning.player_max_health,
            score: state.score,
            ammo: current.current,
            reserve_mags: current.reserve_mags,
            partial_ammo: current.partial,
            weapon: current.kind.name().to_string(),
            enemies_left: state.enemies.count(),
            slots,
        }
    }

    /// Health as a 0-1 fraction for bar widgets
    pub fn health_fraction(&self) -> f32 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }

    /// One-line text readout
    pub fn status_line(&self) -> String {
        format!(
            "HP {} | Score {} | {} {}/{} (+{} partial, {} mags)",
            self.health,
            self.score,
            self.weapon,
            self.ammo,
            self.slots
                .iter()
                .find(|s| s.selected)
                .map(|s| s.capacity)
                .unwrap_or(0),
            self.partial_ammo,
            self.reserve_mags
        )
    }
}
