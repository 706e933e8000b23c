//! Tests for Health / Damageable.

#[cfg(test)]
mod tests {
    use super::super::health::*;

    #[test]
    fn test_health_new_captures_original() {
        let health = Health::new(10);
        assert_eq!(health.current, 10);
        assert_eq!(health.original, 10);
        assert_eq!(health.fraction(), 1.0);
    }

    #[test]
    fn test_take_damage_partial() {
        let mut health = Health::new(10);
        let outcome = health.take_damage(4);

        assert_eq!(outcome, DamageOutcome { remaining: 6, died: false });
        assert!(health.is_alive());
        assert!((health.fraction() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_overkill_clamps_and_dies_once() {
        let mut health = Health::new(10);

        // 10 HP, 15 урона → смерть, clamp в 0
        let outcome = health.take_damage(15);
        assert_eq!(outcome, DamageOutcome { remaining: 0, died: true });
        assert_eq!(health.current, 0);

        // Повторный урон по мёртвому: НЕ новая смерть
        let outcome = health.take_damage(5);
        assert!(!outcome.died);
        assert_eq!(health.current, 0);
    }

    #[test]
    fn test_exact_lethal_damage() {
        let mut health = Health::new(10);
        let outcome = health.take_damage(10);

        assert!(outcome.died);
        assert!(!health.is_alive());
    }

    #[test]
    fn test_fraction_with_zero_original() {
        let health = Health::new(0);
        assert_eq!(health.fraction(), 0.0);
    }
}
