//! Weapons and ammunition bookkeeping
//!
//! Each weapon slot tracks three counters: rounds in the loaded magazine, rounds
//! left in the one ejected (partial) magazine, and whole reserve magazines.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Closed set of weapon types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Rifle,
    Single,
    Triple,
    Five,
}

impl WeaponKind {
    /// Health removed from an enemy per hit
    pub fn damage(self) -> f32 {
        match self {
            WeaponKind::Rifle => 34.0,
            WeaponKind::Single => 100.0,
            WeaponKind::Triple => 40.0,
            WeaponKind::Five => 20.0,
        }
    }

    pub fn magazine_size(self) -> u32 {
        match self {
            WeaponKind::Rifle => 30,
            WeaponKind::Single => 5,
            WeaponKind::Triple => 10,
            WeaponKind::Five => 15,
        }
    }

    pub fn tracer_color(self) -> Vec3 {
        match self {
            WeaponKind::Rifle => Vec3::new(1.0, 0.9, 0.3),
            WeaponKind::Single => Vec3::new(1.0, 0.2, 0.2),
            WeaponKind::Triple => Vec3::new(0.2, 1.0, 0.2),
            WeaponKind::Five => Vec3::new(1.0, 1.0, 0.3),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WeaponKind::Rifle => "Rifle",
            WeaponKind::Single => "Single",
            WeaponKind::Triple => "Triple",
            WeaponKind::Five => "Five",
        }
    }
}

/// Ammo counters for one weapon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoReserve {
    pub kind: WeaponKind,
    /// Rounds in the loaded magazine (≤ magazine size)
    pub current: u32,
    /// Rounds left in the ejected magazine (< magazine size)
    pub partial: u32,
    /// Full magazines in reserve
    pub reserve_mags: u32,
}

impl AmmoReserve {
    pub fn new(kind: WeaponKind, current: u32, reserve_mags: u32) -> Self {
        Self {
            kind,
            current: current.min(kind.magazine_size()),
            partial: 0,
            reserve_mags,
        }
    }

    /// Full magazine loaded plus `reserve_mags` spares
    pub fn full(kind: WeaponKind, reserve_mags: u32) -> Self {
        Self::new(kind, kind.magazine_size(), reserve_mags)
    }

    pub fn capacity(&self) -> u32 {
        self.kind.magazine_size()
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Spend one round; false (and no change) when the magazine is empty
    pub fn consume(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn add_reserve_magazine(&mut self) {
        self.reserve_mags += 1;
    }

    /// Top up the loaded magazine from the partial pool, then from at most one
    /// reserve magazine. Returns the number of rounds moved into the magazine.
    ///
    /// Leftover rounds from an opened reserve magazine replace the partial pool.
    pub fn reload(&mut self) -> u32 {
        let capacity = self.capacity();
        let mut needed = capacity.saturating_sub(self.current);
        if needed == 0 {
            return 0;
        }
        let before = self.current;

        let from_partial = self.partial.min(needed);
        self.current += from_partial;
        self.partial -= from_partial;
        needed -= from_partial;

        if needed > 0 && self.reserve_mags > 0 {
            self.reserve_mags -= 1;
            let give = capacity.min(needed);
            self.current += give;
            self.partial = capacity - give;
        }

        self.current - before
    }

    /// Total rounds held across all three counters
    pub fn total_rounds(&self) -> u32 {
        self.current + self.partial + self.reserve_mags * self.capacity()
    }
}

/// Starting weapon sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Loadout {
    /// One rifle, a full magazine and no spares
    #[default]
    Classic,
    /// Three weapons with spare magazines, Five selected
    Arsenal,
}

/// The player's weapon slots and the selected one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armory {
    pub slots: Vec<AmmoReserve>,
    pub current: usize,
}

impl Armory {
    pub fn new(loadout: Loadout) -> Self {
        match loadout {
            Loadout::Classic => Self {
                slots: vec![AmmoReserve::full(WeaponKind::Rifle, 0)],
                current: 0,
            },
            Loadout::Arsenal => Self {
                slots: vec![
                    AmmoReserve::full(WeaponKind::Single, 5),
                    AmmoReserve::full(WeaponKind::Triple, 5),
                    AmmoReserve::full(WeaponKind::Five, 5),
                ],
                current: 2,
            },
        }
    }

    pub fn current(&self) -> &AmmoReserve {
        &self.slots[self.current]
    }

    pub fn current_mut(&mut self) -> &mut AmmoReserve {
        &mut self.slots[self.current]
    }

    pub fn weapon(&self) -> WeaponKind {
        self.current().kind
    }

    /// Select a slot; out-of-range slots are ignored
    pub fn switch(&mut self, slot: usize) -> bool {
        if slot >= self.slots.len() || slot == self.current {
            return false;
        }
        self.current = slot;
        log::debug!("Switched to {}", self.weapon().name());
        true
    }

    pub fn reload_current(&mut self) -> u32 {
        let moved = self.current_mut().reload();
        if moved > 0 {
            let r = self.current();
            log::debug!(
                "Reloaded {} (+{}): {} loaded, {} partial, {} mags",
                r.kind.name(),
                moved,
                r.current,
                r.partial,
                r.reserve_mags
            );
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rifle(current: u32, partial: u32, reserve_mags: u32) -> AmmoReserve {
        AmmoReserve {
            kind: WeaponKind::Rifle,
            current,
            partial,
            reserve_mags,
        }
    }

    #[test]
    fn test_reload_uses_partial_then_one_magazine() {
        let mut r = rifle(10, 5, 2);
        assert_eq!(r.reload(), 20);
        assert_eq!(r.current, 30);
        assert_eq!(r.partial, 15);
        assert_eq!(r.reserve_mags, 1);
    }

    #[test]
    fn test_reload_full_magazine_is_noop() {
        let mut r = rifle(30, 4, 3);
        assert_eq!(r.reload(), 0);
        assert_eq!(r, rifle(30, 4, 3));
    }

    #[test]
    fn test_reload_partial_only() {
        let mut r = rifle(20, 12, 1);
        r.reload();
        assert_eq!(r, rifle(30, 2, 1));
    }

    #[test]
    fn test_reload_empty_magazine_takes_whole_reserve() {
        let mut r = rifle(0, 0, 2);
        r.reload();
        assert_eq!(r, rifle(30, 0, 1));
    }

    #[test]
    fn test_reload_without_reserves_keeps_shortfall() {
        let mut r = rifle(3, 4, 0);
        r.reload();
        assert_eq!(r, rifle(7, 0, 0));
    }

    #[test]
    fn test_consume_never_underflows() {
        let mut r = rifle(1, 0, 0);
        assert!(r.consume());
        assert!(!r.consume());
        assert_eq!(r.current, 0);
    }

    #[test]
    fn test_armory_switch_ignores_bad_slot() {
        let mut armory = Armory::new(Loadout::Arsenal);
        assert_eq!(armory.weapon(), WeaponKind::Five);
        assert!(!armory.switch(7));
        assert!(armory.switch(0));
        assert_eq!(armory.weapon(), WeaponKind::Single);
        assert_eq!(armory.current().current, 5);
    }

    #[test]
    fn test_classic_loadout() {
        let armory = Armory::new(Loadout::Classic);
        assert_eq!(armory.slots.len(), 1);
        assert_eq!(armory.current(), &rifle(30, 0, 0));
        assert_eq!(armory.weapon().damage(), 34.0);
    }

    fn any_kind() -> impl Strategy<Value = WeaponKind> {
        prop_oneof![
            Just(WeaponKind::Rifle),
            Just(WeaponKind::Single),
            Just(WeaponKind::Triple),
            Just(WeaponKind::Five),
        ]
    }

    proptest! {
        #[test]
        fn prop_reload_conserves_rounds(kind in any_kind(), cur in 0u32..40, part in 0u32..40, mags in 0u32..6) {
            let cap = kind.magazine_size();
            let mut r = AmmoReserve { kind, current: cur % (cap + 1), partial: part % cap, reserve_mags: mags };
            let before = r.total_rounds();
            let mags_before = r.reserve_mags;
            r.reload();
            prop_assert_eq!(r.total_rounds(), before);
            prop_assert!(r.current <= cap);
            prop_assert!(r.partial < cap);
            prop_assert!(mags_before - r.reserve_mags <= 1);
        }

        #[test]
        fn prop_fire_and_reload_never_negative(ops in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut r = AmmoReserve::full(WeaponKind::Triple, 2);
            for fire in ops {
                if fire {
                    let was = r.current;
                    let spent = r.consume();
                    prop_assert_eq!(spent, was > 0);
                } else {
                    r.reload();
                }
                prop_assert!(r.current <= r.capacity());
                prop_assert!(r.partial < r.capacity());
            }
        }
    }
}
