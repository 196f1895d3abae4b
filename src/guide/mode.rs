use bevy::prelude::KeyCode;
use serde::{Deserialize, Serialize};

/// The composition guide drawn over the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionMode {
    #[default]
    Central,
    RuleOfThirds,
    Diagonal,
    GoldenRatio,
}

impl CompositionMode {
    pub fn all() -> &'static [CompositionMode] {
        &[
            CompositionMode::Central,
            CompositionMode::RuleOfThirds,
            CompositionMode::Diagonal,
            CompositionMode::GoldenRatio,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CompositionMode::Central => "Central",
            CompositionMode::RuleOfThirds => "Rule of Thirds",
            CompositionMode::Diagonal => "Diagonal",
            CompositionMode::GoldenRatio => "Golden Ratio",
        }
    }

    /// Keyboard shortcut that selects this mode.
    pub fn shortcut(&self) -> KeyCode {
        match self {
            CompositionMode::Central => KeyCode::Digit1,
            CompositionMode::RuleOfThirds => KeyCode::Digit2,
            CompositionMode::Diagonal => KeyCode::Digit3,
            CompositionMode::GoldenRatio => KeyCode::Digit4,
        }
    }

    pub fn shortcut_label(&self) -> &'static str {
        match self {
            CompositionMode::Central => "1",
            CompositionMode::RuleOfThirds => "2",
            CompositionMode::Diagonal => "3",
            CompositionMode::GoldenRatio => "4",
        }
    }

    /// Stable encoding used for atomic storage in the controller.
    pub(crate) fn to_u8(self) -> u8 {
        match self {
            CompositionMode::Central => 0,
            CompositionMode::RuleOfThirds => 1,
            CompositionMode::Diagonal => 2,
            CompositionMode::GoldenRatio => 3,
        }
    }

    /// Inverse of [`CompositionMode::to_u8`]. Unknown values fall back to `Central`.
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            1 => CompositionMode::RuleOfThirds,
            2 => CompositionMode::Diagonal,
            3 => CompositionMode::GoldenRatio,
            _ => CompositionMode::Central,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_central() {
        assert_eq!(CompositionMode::default(), CompositionMode::Central);
    }

    #[test]
    fn test_all_lists_every_mode_once() {
        let all = CompositionMode::all();
        assert_eq!(all.len(), 4);
        for (i, mode) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(mode));
        }
    }

    #[test]
    fn test_u8_encoding_is_reversible() {
        for mode in CompositionMode::all() {
            assert_eq!(CompositionMode::from_u8(mode.to_u8()), *mode);
        }
    }

    #[test]
    fn test_unknown_u8_falls_back_to_central() {
        assert_eq!(CompositionMode::from_u8(200), CompositionMode::Central);
    }

    #[test]
    fn test_shortcuts_are_distinct() {
        let keys: Vec<KeyCode> = CompositionMode::all().iter().map(|m| m.shortcut()).collect();
        for (i, key) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(key));
        }
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&CompositionMode::RuleOfThirds).unwrap();
        assert_eq!(json, "\"rule_of_thirds\"");
        let parsed: CompositionMode = serde_json::from_str("\"golden_ratio\"").unwrap();
        assert_eq!(parsed, CompositionMode::GoldenRatio);
    }
}
