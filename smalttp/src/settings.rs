use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::VariantNames;
use strum_macros::{Display, EnumString, VariantNames};

use crate::error::{RandomizerError, Result};

pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RandomizerSettings {
    pub difficulty: Difficulty,
    pub logic: Logic,
    pub goal: Goal,
    pub variation: Variation,
    pub sm_logic: SmLogic,
    pub morph_placement: MorphPlacement,
    pub item_placement_style: ItemPlacementStyle,
    pub weapons: Weapons,
    pub state: State,
    pub max_attempts: usize,
}

impl Default for RandomizerSettings {
    fn default() -> Self {
        RandomizerSettings {
            difficulty: Difficulty::Normal,
            logic: Logic::NoGlitches,
            goal: Goal::Ganon,
            variation: Variation::None,
            sm_logic: SmLogic::Casual,
            morph_placement: MorphPlacement::Randomized,
            item_placement_style: ItemPlacementStyle::Neutral,
            weapons: Weapons::Randomized,
            state: State::Open,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl RandomizerSettings {
    /// Build settings from option names as typed by a user. Names are matched
    /// case-insensitively; anything unrecognized is a configuration error.
    pub fn from_names(
        difficulty: &str,
        logic: &str,
        goal: &str,
        variation: &str,
        sm_logic: &str,
        morph_placement: &str,
    ) -> Result<Self> {
        Ok(RandomizerSettings {
            difficulty: parse_option("difficulty", difficulty)?,
            logic: parse_option("logic", logic)?,
            goal: parse_option("goal", goal)?,
            variation: parse_option("variation", variation)?,
            sm_logic: parse_option("SM logic", sm_logic)?,
            morph_placement: parse_option("morph placement", morph_placement)?,
            ..RandomizerSettings::default()
        })
    }
}

pub fn parse_option<T: FromStr + VariantNames>(kind: &str, value: &str) -> Result<T> {
    T::from_str(value).map_err(|_| {
        RandomizerError::Configuration(format!(
            "unknown {kind} '{value}' (expected one of: {})",
            T::VARIANTS.join(", ")
        ))
    })
}

#[derive(
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

#[derive(
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Logic {
    NoGlitches,
    OverworldGlitches,
}

#[derive(
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Goal {
    Ganon,
    Pedestal,
}

impl Goal {
    /// Locations that must all be reachable for the seed to be beaten.
    pub fn location_names(self) -> &'static [&'static str] {
        match self {
            Goal::Ganon => &["Ganon", "Mother Brain"],
            Goal::Pedestal => &["Master Sword Pedestal", "Mother Brain"],
        }
    }
}

#[derive(
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Variation {
    None,
    Ohko,
}

#[derive(
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum SmLogic {
    Casual,
    Tournament,
}

#[derive(
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum MorphPlacement {
    Randomized,
    Vanilla,
}

#[derive(
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum ItemPlacementStyle {
    // Every candidate location is equally likely.
    Neutral,
    // Progression items favor regions holding fewer progression items so far.
    Spread,
}

#[derive(
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Weapons {
    Randomized,
    // No swords in the pool; A Link to the Past bosses and barriers take other weapons.
    Swordless,
}

#[derive(
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    VariantNames,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum State {
    Open,
    // Link starts in Hyrule Castle and must finish the escort before leaving it.
    Standard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_case_insensitive() {
        let settings = RandomizerSettings::from_names(
            "normal",
            "NoGlitches",
            "ganon",
            "none",
            "casual",
            "vanilla",
        )
        .unwrap();
        assert_eq!(settings.difficulty, Difficulty::Normal);
        assert_eq!(settings.logic, Logic::NoGlitches);
        assert_eq!(settings.goal, Goal::Ganon);
        assert_eq!(settings.variation, Variation::None);
        assert_eq!(settings.sm_logic, SmLogic::Casual);
        assert_eq!(settings.morph_placement, MorphPlacement::Vanilla);
        assert_eq!(settings.weapons, Weapons::Randomized);
        assert_eq!(settings.state, State::Open);
        assert_eq!(settings.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(
            parse_option::<Weapons>("weapons", "SWORDLESS").unwrap(),
            Weapons::Swordless
        );
        assert_eq!(
            parse_option::<State>("state", "standard").unwrap(),
            State::Standard
        );
    }

    #[test]
    fn test_unknown_logic_is_configuration_error() {
        let err = RandomizerSettings::from_names(
            "normal",
            "MajorGlitches",
            "ganon",
            "none",
            "casual",
            "randomized",
        )
        .unwrap_err();
        match err {
            RandomizerError::Configuration(msg) => {
                assert!(msg.contains("MajorGlitches"));
                assert!(msg.contains("OverworldGlitches"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
