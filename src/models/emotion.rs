use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed mood palette. Entries store the hex code, not the variant, so a
/// row may carry a color outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmotionColor {
    Red,
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Yellow,
    White,
}

impl EmotionColor {
    pub const ALL: [EmotionColor; 8] = [
        EmotionColor::Red,
        EmotionColor::Orange,
        EmotionColor::Yellow,
        EmotionColor::Green,
        EmotionColor::Blue,
        EmotionColor::Purple,
        EmotionColor::Pink,
        EmotionColor::White,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            EmotionColor::Red => "#FF2A6D",
            EmotionColor::Blue => "#05D9E8",
            EmotionColor::Green => "#00FF9D",
            EmotionColor::Purple => "#7700FF",
            EmotionColor::Orange => "#FF9E00",
            EmotionColor::Pink => "#FF00CC",
            EmotionColor::Yellow => "#F2FF00",
            EmotionColor::White => "#E0E0E0",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EmotionColor::Red => "red",
            EmotionColor::Blue => "blue",
            EmotionColor::Green => "green",
            EmotionColor::Purple => "purple",
            EmotionColor::Orange => "orange",
            EmotionColor::Pink => "pink",
            EmotionColor::Yellow => "yellow",
            EmotionColor::White => "white",
        }
    }

    /// Exact match against the stored hex code.
    pub fn from_hex(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.hex() == code)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn vibe(self) -> Vibe {
        match self {
            EmotionColor::Red => Vibe::Intense,
            EmotionColor::Blue => Vibe::Dreamy,
            EmotionColor::Green => Vibe::Growth,
            EmotionColor::Purple => Vibe::Mystic,
            EmotionColor::Orange => Vibe::Creative,
            EmotionColor::Pink => Vibe::Romantic,
            EmotionColor::Yellow => Vibe::Electric,
            EmotionColor::White => Vibe::Stoic,
        }
    }
}

/// Turns user input into the value stored in `emotionColor`: a palette name
/// becomes its hex code, anything else is kept verbatim.
pub fn resolve_color_input(input: &str) -> String {
    EmotionColor::from_name(input)
        .map(|c| c.hex().to_string())
        .unwrap_or_else(|| input.to_string())
}

/// Categorical label of a dominant emotion color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Vibe {
    Intense,
    Dreamy,
    Growth,
    Mystic,
    Creative,
    Romantic,
    Electric,
    Stoic,
    Unknown,
}

impl Vibe {
    pub fn for_color(code: &str) -> Self {
        EmotionColor::from_hex(code)
            .map(EmotionColor::vibe)
            .unwrap_or(Vibe::Unknown)
    }

    pub fn label(self) -> &'static str {
        match self {
            Vibe::Intense => "INTENSE",
            Vibe::Dreamy => "DREAMY",
            Vibe::Growth => "GROWTH",
            Vibe::Mystic => "MYSTIC",
            Vibe::Creative => "CREATIVE",
            Vibe::Romantic => "ROMANTIC",
            Vibe::Electric => "ELECTRIC",
            Vibe::Stoic => "STOIC",
            Vibe::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
