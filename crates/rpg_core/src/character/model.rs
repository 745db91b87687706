//! Character attribute collections and the batch update engine.

use fxhash::FxHashMap;
use rayon::prelude::*;

use crate::attribute::Attribute;

use super::update::{CharacterUpdate, ConstantCharacterUpdate};

/// Attribute maps at or below this size are walked sequentially; the rayon
/// fan-out only pays for itself on wide maps.
const PARALLEL_THRESHOLD: usize = 64;

/// Immutable named collection of attributes.
///
/// Updating never mutates: every update call builds a new character, so
/// earlier snapshots stay valid while later ones are derived.
#[derive(Debug, Clone, Default)]
pub struct Character {
    attributes: FxHashMap<String, Attribute>,
}

impl Character {
    /// Character with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from name/attribute pairs.
    pub fn from_attributes<I>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (String, Attribute)>,
    {
        Self {
            attributes: attributes.into_iter().collect(),
        }
    }

    /// Look up an attribute by name. Absent names are not an error.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// The full attribute map.
    pub fn attributes(&self) -> &FxHashMap<String, Attribute> {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Apply a batch update, producing a new character.
    ///
    /// Every attribute with an action in `update` is replaced by the
    /// action's result for `step`; every other attribute carries over
    /// unchanged. Actions naming attributes this character does not have
    /// are skipped. Wide maps fan out over rayon; both paths run the same
    /// per-entry transform, so the result is independent of evaluation
    /// order.
    pub fn update(&self, update: &CharacterUpdate, step: f64) -> Character {
        let apply = |(name, attribute): (&String, &Attribute)| {
            let next = match update.action(name) {
                Some(action) => action.apply(attribute, step),
                None => attribute.clone(),
            };
            (name.clone(), next)
        };

        let attributes: FxHashMap<String, Attribute> =
            if self.attributes.len() > PARALLEL_THRESHOLD {
                self.attributes.par_iter().map(apply).collect()
            } else {
                self.attributes.iter().map(apply).collect()
            };

        Character { attributes }
    }

    /// Apply a constant-step batch update, producing a new character. Same
    /// walk as [`Character::update`] with the step already bound into each
    /// action.
    pub fn update_constant(&self, update: &ConstantCharacterUpdate) -> Character {
        let apply = |(name, attribute): (&String, &Attribute)| {
            let next = match update.action(name) {
                Some(action) => action.apply(attribute),
                None => attribute.clone(),
            };
            (name.clone(), next)
        };

        let attributes: FxHashMap<String, Attribute> =
            if self.attributes.len() > PARALLEL_THRESHOLD {
                self.attributes.par_iter().map(apply).collect()
            } else {
                self.attributes.iter().map(apply).collect()
            };

        Character { attributes }
    }

    /// Linear decay update spanning every attribute currently on this
    /// character.
    pub fn linear_decay_update(&self, slope: f64) -> CharacterUpdate {
        CharacterUpdate::linear_decay(self, slope)
    }

    /// Quadratic decay update spanning every attribute currently on this
    /// character.
    pub fn quadratic_decay_update(&self, a: f64, b: f64) -> CharacterUpdate {
        CharacterUpdate::quadratic_decay(self, a, b)
    }
}

impl FromIterator<(String, Attribute)> for Character {
    fn from_iter<T: IntoIterator<Item = (String, Attribute)>>(iter: T) -> Self {
        Self::from_attributes(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelSystem;

    #[test]
    fn get_returns_none_for_missing_names() {
        let character = Character::new();
        assert!(character.is_empty());
        assert!(character.get("strength").is_none(), "absent attributes are no error");
    }

    #[test]
    fn from_attributes_keeps_all_entries() {
        let character: Character = [
            ("strength".to_string(), Attribute::new(10.0, 1.0, LevelSystem::linear(10.0, 0.0))),
            ("wisdom".to_string(), Attribute::new(30.0, 1.0, LevelSystem::linear(10.0, 0.0))),
        ]
        .into_iter()
        .collect();

        assert_eq!(character.len(), 2);
        assert_eq!(character.get("strength").map(Attribute::progression), Some(10.0));
        assert_eq!(character.get("wisdom").map(Attribute::current_level), Some(4));
    }
}
