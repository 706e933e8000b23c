//! Damage capability: `Damageable` trait + Health

use bevy::ecs::component::Mutable;
use bevy::prelude::*;

/// Результат одного попадания
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Health после попадания (clamped ≥ 0)
    pub remaining: i32,
    /// Попадание перевело entity из живых в мёртвые
    pub died: bool,
}

/// Capability "может получать урон"
///
/// Статический контракт вместо runtime поиска интерфейса: `apply_damage::<T>`
/// находит цель typed query по `T`. Entity без `T` просто не матчится.
pub trait Damageable: Component<Mutability = Mutable> {
    fn is_alive(&self) -> bool;

    fn take_damage(&mut self, amount: i32) -> DamageOutcome;
}

/// Здоровье
///
/// `original` фиксируется при создании (знаменатель health bar).
/// Инвариант: 0 ≤ current после смерти (clamp на переходе в ≤ 0).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: i32,
    pub original: i32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Health {
    pub fn new(original: i32) -> Self {
        Self {
            current: original,
            original,
        }
    }

    /// Доля для health bar (0.0 если original ≤ 0)
    pub fn fraction(&self) -> f32 {
        if self.original <= 0 {
            return 0.0;
        }
        self.current as f32 / self.original as f32
    }
}

impl Damageable for Health {
    fn is_alive(&self) -> bool {
        self.current > 0
    }

    fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        let was_alive = self.is_alive();
        self.current -= amount;

        let died = was_alive && self.current <= 0;
        if self.current <= 0 {
            self.current = 0;
        }

        DamageOutcome {
            remaining: self.current,
            died,
        }
    }
}
