//! Serde-facing curve definitions for design data.
//!
//! Hosts keep curve and level parameters in data files; a
//! [`CurveDefinition`] is the typed bridge from those files to
//! [`FunctionPair`]s and [`LevelSystem`]s. Building is total: degenerate
//! parameters keep the NaN semantics of the math layer.
//! [`CurveDefinition::validate`] reports the degeneracies ahead of time so
//! loading tooling can reject bad data with a real error message.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::DefinitionError;
use crate::level::LevelSystem;
use crate::math::{curves, FunctionPair};

fn default_base() -> f64 {
    std::f64::consts::E
}

fn default_coefficient() -> f64 {
    1.0
}

/// Parametric curve shapes as plain data.
///
/// Field defaults follow the conventional shorthand for each family:
/// `offset`, `b` and `c` default to 0, the logarithmic coefficient defaults
/// to 1 and both bases default to *e*.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveDefinition {
    Linear {
        coefficient: f64,
        #[serde(default)]
        offset: f64,
    },
    Quadratic {
        a: f64,
        #[serde(default)]
        b: f64,
        #[serde(default)]
        c: f64,
    },
    Exponential {
        a: f64,
        #[serde(default = "default_base")]
        base: f64,
    },
    Logarithmic {
        #[serde(default = "default_coefficient")]
        a: f64,
        #[serde(default = "default_base")]
        base: f64,
    },
    Power {
        a: f64,
        power: f64,
    },
    Root {
        a: f64,
        root: f64,
    },
}

impl CurveDefinition {
    /// Check for parameters that would make the curve non-invertible.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        for (name, value) in self.parameters() {
            if !value.is_finite() {
                return Err(DefinitionError::NonFinite { name, value });
            }
        }

        match *self {
            Self::Linear { coefficient, .. } if coefficient == 0.0 => {
                Err(DefinitionError::FlatCurve)
            }
            Self::Quadratic { a, b, .. } if a == 0.0 && b == 0.0 => {
                Err(DefinitionError::FlatCurve)
            }
            Self::Exponential { a, base } | Self::Logarithmic { a, base } => {
                if a == 0.0 {
                    Err(DefinitionError::ZeroParameter { name: "a" })
                } else if base == 0.0 || base == 1.0 {
                    Err(DefinitionError::DegenerateBase { base })
                } else {
                    Ok(())
                }
            }
            Self::Power { a, power } => {
                if a == 0.0 {
                    Err(DefinitionError::ZeroParameter { name: "a" })
                } else if power == 0.0 {
                    Err(DefinitionError::ZeroParameter { name: "power" })
                } else {
                    Ok(())
                }
            }
            Self::Root { a, root } => {
                if a == 0.0 {
                    Err(DefinitionError::ZeroParameter { name: "a" })
                } else if root == 0.0 {
                    Err(DefinitionError::ZeroParameter { name: "root" })
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    /// Build the function pair for this definition.
    pub fn pair(&self) -> FunctionPair {
        self.log_build("function pair");
        match *self {
            Self::Linear { coefficient, offset } => curves::linear(coefficient, offset),
            Self::Quadratic { a, b, c } => curves::quadratic(a, b, c),
            Self::Exponential { a, base } => curves::exponential(a, base),
            Self::Logarithmic { a, base } => curves::logarithmic(a, base),
            Self::Power { a, power } => curves::power(a, power),
            Self::Root { a, root } => curves::root(a, root),
        }
    }

    /// Build the level system for this definition. Quadratic definitions
    /// with `a == 0` collapse to the linear system with `step = b` and
    /// `offset = c`; linear definitions use the closed-form system directly.
    pub fn level_system(&self) -> LevelSystem {
        self.log_build("level system");
        match *self {
            Self::Linear { coefficient, offset } => LevelSystem::linear(coefficient, offset),
            Self::Quadratic { a, b, c } => LevelSystem::quadratic(a, b, c),
            Self::Exponential { a, base } => LevelSystem::exponential(a, base),
            Self::Logarithmic { a, base } => LevelSystem::from_pair(&curves::logarithmic(a, base)),
            Self::Power { a, power } => LevelSystem::power(a, power),
            Self::Root { a, root } => LevelSystem::from_pair(&curves::root(a, root)),
        }
    }

    fn log_build(&self, target: &str) {
        match self.validate() {
            Ok(()) => debug!("Building {} from {:?}", target, self),
            Err(err) => warn!("Building {} from degenerate definition {:?}: {}", target, self, err),
        }
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::Linear { coefficient, offset } => {
                vec![("coefficient", coefficient), ("offset", offset)]
            }
            Self::Quadratic { a, b, c } => vec![("a", a), ("b", b), ("c", c)],
            Self::Exponential { a, base } | Self::Logarithmic { a, base } => {
                vec![("a", a), ("base", base)]
            }
            Self::Power { a, power } => vec![("a", a), ("power", power)],
            Self::Root { a, root } => vec![("a", a), ("root", root)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let definition: CurveDefinition =
            serde_json::from_str(r#"{ "kind": "logarithmic" }"#).unwrap();
        assert_eq!(
            definition,
            CurveDefinition::Logarithmic {
                a: 1.0,
                base: std::f64::consts::E
            }
        );

        let definition: CurveDefinition =
            serde_json::from_str(r#"{ "kind": "quadratic", "a": 2.0 }"#).unwrap();
        assert_eq!(definition, CurveDefinition::Quadratic { a: 2.0, b: 0.0, c: 0.0 });
    }

    #[test]
    fn round_trips_through_json() {
        let definition = CurveDefinition::Quadratic { a: 2.0, b: 4.0, c: 5.0 };
        let json = serde_json::to_string(&definition).unwrap();
        let back: CurveDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, definition);
    }

    #[test]
    fn builds_a_working_level_system() {
        let definition: CurveDefinition =
            serde_json::from_str(r#"{ "kind": "quadratic", "a": 2.0, "b": 4.0, "c": 5.0 }"#)
                .unwrap();
        let system = definition.level_system();
        assert_eq!(system.progression_for(2), 11.0);
        assert_eq!(system.level_for(11.0), 2);
    }

    #[test]
    fn builds_a_working_pair() {
        let definition = CurveDefinition::Exponential { a: 2.0, base: 2.0 };
        let pair = definition.pair();
        assert_eq!(pair.value(3.0), 16.0);
        assert!((pair.invert(16.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn validation_flags_degenerate_parameters() {
        assert_eq!(
            CurveDefinition::Linear { coefficient: 0.0, offset: 3.0 }.validate(),
            Err(DefinitionError::FlatCurve)
        );
        assert_eq!(
            CurveDefinition::Quadratic { a: 0.0, b: 0.0, c: 1.0 }.validate(),
            Err(DefinitionError::FlatCurve)
        );
        assert_eq!(
            CurveDefinition::Exponential { a: 1.0, base: 1.0 }.validate(),
            Err(DefinitionError::DegenerateBase { base: 1.0 })
        );
        assert_eq!(
            CurveDefinition::Logarithmic { a: 0.0, base: 10.0 }.validate(),
            Err(DefinitionError::ZeroParameter { name: "a" })
        );
        assert_eq!(
            CurveDefinition::Power { a: 2.0, power: 0.0 }.validate(),
            Err(DefinitionError::ZeroParameter { name: "power" })
        );
        assert_eq!(
            CurveDefinition::Root { a: 0.0, root: 2.0 }.validate(),
            Err(DefinitionError::ZeroParameter { name: "a" })
        );
        assert!(matches!(
            CurveDefinition::Linear { coefficient: f64::NAN, offset: 0.0 }.validate(),
            Err(DefinitionError::NonFinite { name: "coefficient", .. })
        ));
    }

    #[test]
    fn quadratic_with_zero_a_still_validates_as_a_line() {
        let definition = CurveDefinition::Quadratic { a: 0.0, b: 10.0, c: 0.0 };
        assert_eq!(definition.validate(), Ok(()));
        let system = definition.level_system();
        assert_eq!(system.level_for(100.0), 11, "the a = 0 case must behave like linear");
    }

    #[test]
    fn degenerate_definitions_still_build() {
        let definition = CurveDefinition::Exponential { a: 1.0, base: 1.0 };
        let pair = definition.pair();
        assert_eq!(pair.value(5.0), 1.0, "the forward curve is fine, just constant");
        assert!(pair.invert(1.0).is_nan(), "the inverse carries the degeneracy as NaN");
    }
}
