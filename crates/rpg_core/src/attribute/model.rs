//! Immutable attribute values.

use crate::level::LevelSystem;

/// A single character stat: continuous progression, the baseline decay pulls
/// toward, and the level system that discretizes it.
///
/// Construction clamps `baseline` into `[0, +∞)`; negative baselines are
/// silently coerced to 0. `progression` is unconstrained here, since only
/// update functions impose baseline-directed bounds.
#[derive(Debug, Clone)]
pub struct Attribute {
    progression: f64,
    baseline: f64,
    level_system: LevelSystem,
}

impl Attribute {
    pub fn new(progression: f64, baseline: f64, level_system: LevelSystem) -> Self {
        Self {
            progression,
            // f64::max also maps a NaN baseline to 0
            baseline: baseline.max(0.0),
            level_system,
        }
    }

    pub fn progression(&self) -> f64 {
        self.progression
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn level_system(&self) -> &LevelSystem {
        &self.level_system
    }

    /// Discrete level for the current progression.
    pub fn current_level(&self) -> i32 {
        self.level_system.level_for(self.progression)
    }

    /// Progression this attribute's level system requires for `level`.
    pub fn progression_at_level(&self, level: i32) -> f64 {
        self.level_system.progression_for(level)
    }

    /// Copy of this attribute with a different progression. Baseline and
    /// level system carry over; this is the only way attribute state moves.
    pub fn with_progression(&self, progression: f64) -> Self {
        Self {
            progression,
            baseline: self.baseline,
            level_system: self.level_system.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_baseline_is_coerced_to_zero() {
        let attribute = Attribute::new(5.0, -3.0, LevelSystem::zeroed());
        assert_eq!(attribute.baseline(), 0.0, "negative baselines are invalid and clamp to 0");
    }

    #[test]
    fn nan_baseline_is_coerced_to_zero() {
        let attribute = Attribute::new(5.0, f64::NAN, LevelSystem::zeroed());
        assert_eq!(attribute.baseline(), 0.0);
    }

    #[test]
    fn progression_is_not_constrained_at_construction() {
        let attribute = Attribute::new(-42.0, 1.0, LevelSystem::zeroed());
        assert_eq!(attribute.progression(), -42.0);
    }

    #[test]
    fn current_level_uses_the_level_system() {
        let attribute = Attribute::new(25.0, 0.0, LevelSystem::linear(10.0, 0.0));
        assert_eq!(attribute.current_level(), 3);
        assert_eq!(attribute.progression_at_level(3), 20.0);
    }

    #[test]
    fn with_progression_keeps_baseline_and_system() {
        let attribute = Attribute::new(25.0, 4.0, LevelSystem::linear(10.0, 0.0));
        let moved = attribute.with_progression(99.0);
        assert_eq!(moved.progression(), 99.0);
        assert_eq!(moved.baseline(), 4.0);
        assert_eq!(moved.current_level(), 10);
        assert_eq!(attribute.progression(), 25.0, "the source attribute must be untouched");
    }
}
