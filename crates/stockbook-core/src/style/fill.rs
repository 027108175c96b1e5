//! Fill/background style types

use super::Color;

/// Fill style for cell background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillStyle {
    /// No fill (transparent)
    #[default]
    None,

    /// Solid color fill
    Solid { color: Color },

    /// Pattern fill
    Pattern {
        pattern: PatternType,
        foreground: Color,
        background: Color,
    },
}

impl FillStyle {
    /// Create a solid fill with the given color
    pub fn solid(color: Color) -> Self {
        FillStyle::Solid { color }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: PatternType, foreground: Color, background: Color) -> Self {
        FillStyle::Pattern {
            pattern,
            foreground,
            background,
        }
    }

    /// Check if this is a "no fill"
    pub fn is_none(&self) -> bool {
        matches!(self, FillStyle::None)
    }

    /// Check if the fill paints the whole cell in its foreground color
    pub fn is_solid(&self) -> bool {
        matches!(
            self,
            FillStyle::Solid { .. }
                | FillStyle::Pattern {
                    pattern: PatternType::Solid,
                    ..
                }
        )
    }

    /// Foreground color, if the fill has one
    pub fn foreground(&self) -> Option<Color> {
        match self {
            FillStyle::None => None,
            FillStyle::Solid { color } => Some(*color),
            FillStyle::Pattern { foreground, .. } => Some(*foreground),
        }
    }
}

/// Pattern fill types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternType {
    /// No pattern
    #[default]
    None,
    /// Solid (100% foreground)
    Solid,
    /// 50% gray
    MediumGray,
    /// 75% gray
    DarkGray,
    /// 25% gray
    LightGray,
    /// 12.5% gray
    Gray125,
    /// 6.25% gray
    Gray0625,
}
