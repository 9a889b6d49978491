//! Hero catalog.
//!
//! A hero is a bundle of gameplay modifiers picked before play: how many
//! lives a level attempt starts with, how many hints it may spend, and how
//! revealing those hints are.

use serde::{Deserialize, Serialize};

/// How much a hint is allowed to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintStrength {
    Weak,
    Medium,
    Strong,
}

impl HintStrength {
    pub fn name(&self) -> &'static str {
        match self {
            HintStrength::Weak => "weak",
            HintStrength::Medium => "medium",
            HintStrength::Strong => "strong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub max_lives: u32,
    /// Hints available per level attempt
    pub hints: u32,
    pub hint_strength: HintStrength,
}

static HEROES: &[Hero] = &[
    Hero {
        id: "gaia",
        name: "Gaia",
        description: "The spirit of Earth itself. A balanced hero with steady lives and helpful hints. Perfect for beginners.",
        max_lives: 4,
        hints: 2,
        hint_strength: HintStrength::Medium,
    },
    Hero {
        id: "aether",
        name: "Aether",
        description: "Master of air and wisdom. Fewer lives, but powerful hints guide every decision.",
        max_lives: 3,
        hints: 4,
        hint_strength: HintStrength::Strong,
    },
    Hero {
        id: "solara",
        name: "Solara",
        description: "Fueled by solar energy. High endurance with fewer hints, ideal for steady progress.",
        max_lives: 5,
        hints: 1,
        hint_strength: HintStrength::Weak,
    },
    Hero {
        id: "terros",
        name: "Terros",
        description: "Forged from stone and soil. Extremely durable, but relies on instinct over hints.",
        max_lives: 6,
        hints: 0,
        hint_strength: HintStrength::Weak,
    },
];

pub fn get_all_heroes() -> &'static [Hero] {
    HEROES
}

pub fn get_hero_by_id(id: &str) -> Option<&'static Hero> {
    HEROES.iter().find(|h| h.id == id)
}
