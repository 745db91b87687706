//! Character-wide update batches.
//!
//! A batch maps attribute names to transforms. Batches are built from action
//! lists with last-write-wins semantics per name, or spread uniformly over a
//! character's current attribute set.

use std::fmt;

use fxhash::FxHashMap;

use crate::attribute::{Attribute, ConstantUpdateFn, UpdateFn, UpdateFunctions};

use super::Character;

/// One attribute's transform within a batch update.
#[derive(Clone)]
pub struct UpdateAction {
    attribute: String,
    action: UpdateFn,
}

impl UpdateAction {
    pub fn new(attribute: impl Into<String>, action: UpdateFn) -> Self {
        Self {
            attribute: attribute.into(),
            action,
        }
    }

    /// Name of the attribute this action targets.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Run the transform against one attribute.
    pub fn apply(&self, attribute: &Attribute, step: f64) -> Attribute {
        (self.action)(attribute, step)
    }
}

impl fmt::Debug for UpdateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateAction")
            .field("attribute", &self.attribute)
            .finish_non_exhaustive()
    }
}

/// Batch of per-attribute update actions, keyed by attribute name.
#[derive(Debug, Clone, Default)]
pub struct CharacterUpdate {
    actions: FxHashMap<String, UpdateAction>,
}

impl CharacterUpdate {
    /// Collect actions into a batch. A later action for the same attribute
    /// name replaces an earlier one.
    pub fn from_actions<I>(actions: I) -> Self
    where
        I: IntoIterator<Item = UpdateAction>,
    {
        let mut map = FxHashMap::default();
        for action in actions {
            map.insert(action.attribute.clone(), action);
        }
        Self { actions: map }
    }

    /// One transform applied to every attribute currently on `character`.
    pub fn uniform(character: &Character, action: UpdateFn) -> Self {
        Self::from_actions(
            character
                .attributes()
                .keys()
                .map(|name| UpdateAction::new(name.clone(), action.clone())),
        )
    }

    /// Linear decay at `slope` across every attribute on `character`.
    pub fn linear_decay(character: &Character, slope: f64) -> Self {
        Self::uniform(character, UpdateFunctions::linear_decay(slope))
    }

    /// Quadratic decay over `a·x² + b·x` across every attribute on
    /// `character`.
    pub fn quadratic_decay(character: &Character, a: f64, b: f64) -> Self {
        Self::uniform(character, UpdateFunctions::quadratic_decay(a, b))
    }

    /// Look up the action for an attribute name.
    pub fn action(&self, name: &str) -> Option<&UpdateAction> {
        self.actions.get(name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// One attribute's transform within a constant-step batch.
#[derive(Clone)]
pub struct ConstantUpdateAction {
    attribute: String,
    action: ConstantUpdateFn,
}

impl ConstantUpdateAction {
    pub fn new(attribute: impl Into<String>, action: ConstantUpdateFn) -> Self {
        Self {
            attribute: attribute.into(),
            action,
        }
    }

    /// Name of the attribute this action targets.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Run the transform against one attribute.
    pub fn apply(&self, attribute: &Attribute) -> Attribute {
        (self.action)(attribute)
    }
}

impl fmt::Debug for ConstantUpdateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstantUpdateAction")
            .field("attribute", &self.attribute)
            .finish_non_exhaustive()
    }
}

/// Batch of constant-step update actions, keyed by attribute name.
#[derive(Debug, Clone, Default)]
pub struct ConstantCharacterUpdate {
    actions: FxHashMap<String, ConstantUpdateAction>,
}

impl ConstantCharacterUpdate {
    /// Collect actions into a batch, last write per name wins.
    pub fn from_actions<I>(actions: I) -> Self
    where
        I: IntoIterator<Item = ConstantUpdateAction>,
    {
        let mut map = FxHashMap::default();
        for action in actions {
            map.insert(action.attribute.clone(), action);
        }
        Self { actions: map }
    }

    /// One transform applied to every attribute currently on `character`.
    pub fn uniform(character: &Character, action: ConstantUpdateFn) -> Self {
        Self::from_actions(
            character
                .attributes()
                .keys()
                .map(|name| ConstantUpdateAction::new(name.clone(), action.clone())),
        )
    }

    /// Look up the action for an attribute name.
    pub fn action(&self, name: &str) -> Option<&ConstantUpdateAction> {
        self.actions.get(name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelSystem;

    #[test]
    fn later_actions_overwrite_earlier_ones() {
        let update = CharacterUpdate::from_actions([
            UpdateAction::new("strength", UpdateFunctions::linear_growth(1.0)),
            UpdateAction::new("wisdom", UpdateFunctions::linear_growth(1.0)),
            UpdateAction::new("strength", UpdateFunctions::linear_growth(10.0)),
        ]);
        assert_eq!(update.len(), 2, "duplicate names must collapse to one action");

        let attribute = Attribute::new(0.0, 0.0, LevelSystem::zeroed());
        let action = update.action("strength").unwrap();
        assert_eq!(
            action.apply(&attribute, 1.0).progression(),
            10.0,
            "the action listed last must win"
        );
    }

    #[test]
    fn uniform_covers_every_attribute() {
        let character = Character::from_attributes([
            ("strength".to_string(), Attribute::new(4.0, 0.0, LevelSystem::zeroed())),
            ("wisdom".to_string(), Attribute::new(9.0, 0.0, LevelSystem::zeroed())),
            ("charisma".to_string(), Attribute::new(1.0, 0.0, LevelSystem::zeroed())),
        ]);
        let update = CharacterUpdate::uniform(&character, UpdateFunctions::linear_growth(1.0));
        assert_eq!(update.len(), 3);
        for name in ["strength", "wisdom", "charisma"] {
            assert!(update.action(name).is_some(), "uniform update must cover {}", name);
        }
    }

    #[test]
    fn constant_batch_mirrors_the_stepped_one() {
        let update = ConstantCharacterUpdate::from_actions([
            ConstantUpdateAction::new("strength", UpdateFunctions::constant_linear_growth(2.0, 3.0)),
            ConstantUpdateAction::new("strength", UpdateFunctions::constant_linear_growth(1.0, 1.0)),
        ]);
        assert_eq!(update.len(), 1);

        let attribute = Attribute::new(5.0, 0.0, LevelSystem::zeroed());
        let updated = update.action("strength").unwrap().apply(&attribute);
        assert_eq!(updated.progression(), 6.0, "last bound action wins: 5 + 1·1");
    }

    #[test]
    fn lookup_misses_return_none() {
        let update = CharacterUpdate::default();
        assert!(update.is_empty());
        assert!(update.action("anything").is_none());
    }
}
