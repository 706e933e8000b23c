//! Collision layers: centralised constants для всего проекта.
//!
//! ## Архитектура:
//! - **Layer (битовая маска):** на каком слое находится collider
//! - **Ignore mask:** какие слои raycast пропускает
//!
//! ## Layers:
//! - Layer 1 (0b1 = 1): Default
//! - Layer 2 (0b10 = 2): Player
//! - Layer 3 (0b100 = 4): Enemies / damageable targets
//! - Layer 4 (0b1000 = 8): Terrain (walls, floor, ceiling)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub const LAYER_DEFAULT: u32 = 0b1;
pub const LAYER_PLAYER: u32 = 0b10;
pub const LAYER_ENEMY: u32 = 0b100;
pub const LAYER_TERRAIN: u32 = 0b1000;

/// Набор слоёв (битовая маска)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct CollisionMask(pub u32);

impl CollisionMask {
    pub const DEFAULT: Self = Self(LAYER_DEFAULT);
    pub const PLAYER: Self = Self(LAYER_PLAYER);
    pub const ENEMY: Self = Self(LAYER_ENEMY);
    pub const TERRAIN: Self = Self(LAYER_TERRAIN);

    pub fn intersects(self, other: CollisionMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn union(self, other: CollisionMask) -> Self {
        Self(self.0 | other.0)
    }

    /// Слои, которые видит raycast с этим ignore mask
    pub fn complement(self) -> Self {
        Self(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignore_mask_complement() {
        let ignore = CollisionMask::PLAYER;
        let visible = ignore.complement();

        assert!(!visible.intersects(CollisionMask::PLAYER));
        assert!(visible.intersects(CollisionMask::ENEMY));
        assert!(visible.intersects(CollisionMask::TERRAIN));
    }

    #[test]
    fn test_union() {
        let mask = CollisionMask::PLAYER.union(CollisionMask::TERRAIN);
        assert_eq!(mask.0, LAYER_PLAYER | LAYER_TERRAIN);
        assert!(!mask.intersects(CollisionMask::ENEMY));
    }
}
