//! Autotile pattern definitions
//!
//! A pattern names the 13 tiles of one texture that together draw a blob of
//! terrain: four edges, four outer corners, the center and four inner curves.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a pattern
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Duplicate tile {tile} in slots {first:?} and {second:?}")]
    DuplicateTile {
        tile: u32,
        first: PatternSlot,
        second: PatternSlot,
    },
}

/// One of the 13 named positions of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternSlot {
    UpperLeft,
    Upper,
    UpperRight,
    Left,
    Center,
    Right,
    LowerLeft,
    Lower,
    LowerRight,
    CurveUpperLeft,
    CurveUpperRight,
    CurveLowerLeft,
    CurveLowerRight,
}

impl PatternSlot {
    pub const ALL: [PatternSlot; 13] = [
        PatternSlot::UpperLeft,
        PatternSlot::Upper,
        PatternSlot::UpperRight,
        PatternSlot::Left,
        PatternSlot::Center,
        PatternSlot::Right,
        PatternSlot::LowerLeft,
        PatternSlot::Lower,
        PatternSlot::LowerRight,
        PatternSlot::CurveUpperLeft,
        PatternSlot::CurveUpperRight,
        PatternSlot::CurveLowerLeft,
        PatternSlot::CurveLowerRight,
    ];
}

/// Tile indices for every slot, all from the same texture
///
/// Field names follow the `.ati` files the game ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoTilePattern {
    pub upper_left: u32,
    pub upper: u32,
    pub upper_right: u32,
    pub left: u32,
    pub center: u32,
    pub right: u32,
    pub lower_left: u32,
    pub lower: u32,
    pub lower_right: u32,
    pub curve_upper_left: u32,
    pub curve_upper_right: u32,
    pub curve_lower_left: u32,
    pub curve_lower_right: u32,
}

impl AutoTilePattern {
    /// Parse a pattern from JSON and check that no tile is used twice
    pub fn from_json(json: &str) -> Result<Self, PatternError> {
        let pattern: Self =
            serde_json::from_str(json).map_err(|e| PatternError::ParseError(e.to_string()))?;
        pattern.validate()?;
        Ok(pattern)
    }

    /// Reject patterns where two slots share a tile, which would make the
    /// matcher unable to tell them apart
    pub fn validate(&self) -> Result<(), PatternError> {
        for (i, first) in PatternSlot::ALL.iter().enumerate() {
            for second in &PatternSlot::ALL[i + 1..] {
                if self.slot(*first) == self.slot(*second) {
                    return Err(PatternError::DuplicateTile {
                        tile: self.slot(*first),
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
        Ok(())
    }

    /// Tile index stored in `slot`
    pub fn slot(&self, slot: PatternSlot) -> u32 {
        match slot {
            PatternSlot::UpperLeft => self.upper_left,
            PatternSlot::Upper => self.upper,
            PatternSlot::UpperRight => self.upper_right,
            PatternSlot::Left => self.left,
            PatternSlot::Center => self.center,
            PatternSlot::Right => self.right,
            PatternSlot::LowerLeft => self.lower_left,
            PatternSlot::Lower => self.lower,
            PatternSlot::LowerRight => self.lower_right,
            PatternSlot::CurveUpperLeft => self.curve_upper_left,
            PatternSlot::CurveUpperRight => self.curve_upper_right,
            PatternSlot::CurveLowerLeft => self.curve_lower_left,
            PatternSlot::CurveLowerRight => self.curve_lower_right,
        }
    }

    /// Check if `tile` is one of the 13 slot values
    pub fn has_index(&self, tile: u32) -> bool {
        PatternSlot::ALL.iter().any(|s| self.slot(*s) == tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATI: &str = r#"{
        "UpperLeft": 0, "Upper": 1, "UpperRight": 2,
        "Left": 8, "Center": 9, "Right": 10,
        "LowerLeft": 16, "Lower": 17, "LowerRight": 18,
        "CurveUpperLeft": 3, "CurveUpperRight": 4,
        "CurveLowerLeft": 11, "CurveLowerRight": 12
    }"#;

    #[test]
    fn test_parse_ati() {
        let pattern = AutoTilePattern::from_json(ATI).unwrap();

        assert_eq!(pattern.slot(PatternSlot::Center), 9);
        assert_eq!(pattern.slot(PatternSlot::CurveLowerRight), 12);
        assert!(pattern.has_index(17));
        assert!(!pattern.has_index(5));
    }

    #[test]
    fn test_duplicate_tile_rejected() {
        let json = ATI.replace("\"Lower\": 17", "\"Lower\": 9");
        let result = AutoTilePattern::from_json(&json);

        assert!(matches!(
            result,
            Err(PatternError::DuplicateTile {
                tile: 9,
                first: PatternSlot::Center,
                second: PatternSlot::Lower,
            })
        ));
    }

    #[test]
    fn test_missing_slot_is_parse_error() {
        let result = AutoTilePattern::from_json(r#"{ "Center": 1 }"#);
        assert!(matches!(result, Err(PatternError::ParseError(_))));
    }
}
