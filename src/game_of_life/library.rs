//! Catalog of well-known patterns, addressable by name

use super::error::LifeError;
use super::Pattern;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad family a catalog pattern belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    StillLife,
    Oscillator,
    Spaceship,
    Generator,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 4] = [
        PatternCategory::StillLife,
        PatternCategory::Oscillator,
        PatternCategory::Spaceship,
        PatternCategory::Generator,
    ];
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PatternCategory::StillLife => "Still Lifes",
            PatternCategory::Oscillator => "Oscillators",
            PatternCategory::Spaceship => "Spaceships",
            PatternCategory::Generator => "Generators",
        };
        f.write_str(label)
    }
}

/// Every pattern in the built-in catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownPattern {
    Block,
    BeeHive,
    Loaf,
    Boat,
    Tub,
    Blinker,
    Toad,
    Beacon,
    Pulsar,
    Pentadecathlon,
    Glider,
    LightweightSpaceship,
    MiddleweightSpaceship,
    HeavyweightSpaceship,
    GosperGliderGun,
}

impl KnownPattern {
    pub const ALL: [KnownPattern; 15] = [
        KnownPattern::Block,
        KnownPattern::BeeHive,
        KnownPattern::Loaf,
        KnownPattern::Boat,
        KnownPattern::Tub,
        KnownPattern::Blinker,
        KnownPattern::Toad,
        KnownPattern::Beacon,
        KnownPattern::Pulsar,
        KnownPattern::Pentadecathlon,
        KnownPattern::Glider,
        KnownPattern::LightweightSpaceship,
        KnownPattern::MiddleweightSpaceship,
        KnownPattern::HeavyweightSpaceship,
        KnownPattern::GosperGliderGun,
    ];

    /// Build the pattern matrix
    pub fn pattern(self) -> Pattern {
        match self {
            KnownPattern::Block => Pattern::block(),
            KnownPattern::BeeHive => Pattern::bee_hive(),
            KnownPattern::Loaf => Pattern::loaf(),
            KnownPattern::Boat => Pattern::boat(),
            KnownPattern::Tub => Pattern::tub(),
            KnownPattern::Blinker => Pattern::blinker(),
            KnownPattern::Toad => Pattern::toad(),
            KnownPattern::Beacon => Pattern::beacon(),
            KnownPattern::Pulsar => Pattern::pulsar(),
            KnownPattern::Pentadecathlon => Pattern::pentadecathlon(),
            KnownPattern::Glider => Pattern::glider(),
            KnownPattern::LightweightSpaceship => Pattern::lightweight_spaceship(),
            KnownPattern::MiddleweightSpaceship => Pattern::middleweight_spaceship(),
            KnownPattern::HeavyweightSpaceship => Pattern::heavyweight_spaceship(),
            KnownPattern::GosperGliderGun => Pattern::gosper_glider_gun(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            KnownPattern::Block => "Block",
            KnownPattern::BeeHive => "Bee Hive",
            KnownPattern::Loaf => "Loaf",
            KnownPattern::Boat => "Boat",
            KnownPattern::Tub => "Tub",
            KnownPattern::Blinker => "Blinker",
            KnownPattern::Toad => "Toad",
            KnownPattern::Beacon => "Beacon",
            KnownPattern::Pulsar => "Pulsar",
            KnownPattern::Pentadecathlon => "Pentadecathlon",
            KnownPattern::Glider => "Glider",
            KnownPattern::LightweightSpaceship => "Lightweight Spaceship",
            KnownPattern::MiddleweightSpaceship => "Middleweight Spaceship",
            KnownPattern::HeavyweightSpaceship => "Heavyweight Spaceship",
            KnownPattern::GosperGliderGun => "Gosper Glider Gun",
        }
    }

    /// Short alternative names accepted by [`FromStr`]
    fn aliases(self) -> &'static [&'static str] {
        match self {
            KnownPattern::BeeHive => &["beehive"],
            KnownPattern::LightweightSpaceship => &["lwss"],
            KnownPattern::MiddleweightSpaceship => &["mwss"],
            KnownPattern::HeavyweightSpaceship => &["hwss"],
            KnownPattern::GosperGliderGun => &["gun", "glider gun"],
            _ => &[],
        }
    }

    pub fn category(self) -> PatternCategory {
        match self {
            KnownPattern::Block
            | KnownPattern::BeeHive
            | KnownPattern::Loaf
            | KnownPattern::Boat
            | KnownPattern::Tub => PatternCategory::StillLife,
            KnownPattern::Blinker
            | KnownPattern::Toad
            | KnownPattern::Beacon
            | KnownPattern::Pulsar
            | KnownPattern::Pentadecathlon => PatternCategory::Oscillator,
            KnownPattern::Glider
            | KnownPattern::LightweightSpaceship
            | KnownPattern::MiddleweightSpaceship
            | KnownPattern::HeavyweightSpaceship => PatternCategory::Spaceship,
            KnownPattern::GosperGliderGun => PatternCategory::Generator,
        }
    }

    /// Number of generations after which the pattern repeats its shape
    pub fn period(self) -> usize {
        match self.category() {
            PatternCategory::StillLife => 1,
            PatternCategory::Spaceship => 4,
            PatternCategory::Generator => 30,
            PatternCategory::Oscillator => match self {
                KnownPattern::Pulsar => 3,
                KnownPattern::Pentadecathlon => 15,
                _ => 2,
            },
        }
    }

    /// Catalog entries of one category, in catalog order
    pub fn in_category(category: PatternCategory) -> impl Iterator<Item = KnownPattern> {
        Self::ALL
            .into_iter()
            .filter(move |known| known.category() == category)
    }
}

impl fmt::Display for KnownPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase, with `-` and `_` read as spaces
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

impl FromStr for KnownPattern {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|known| {
                normalize(known.name()) == wanted || known.aliases().iter().any(|alias| *alias == wanted)
            })
            .ok_or_else(|| LifeError::UnknownPattern(s.to_string()))
    }
}
