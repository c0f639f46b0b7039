//! Pixel-density inference from image dimensions.
//!
//! Icon sets ship a base-size asset plus `@2x`/`@3x` variants. The tier is
//! determined by the longer edge only, measured against the 24px base size.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base icon size in pixels. An icon whose longer edge fits within this is
/// the un-suffixed variant.
pub const BASE_SIZE: u32 = 24;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("image dimensions must be positive, got {width}x{height}")]
pub struct InvalidDimensions {
    pub width: u32,
    pub height: u32,
}

/// Density tier of an icon asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Density {
    /// Longer edge fits the base size; no suffix.
    #[default]
    Base,
    /// Longer edge fits twice the base size (`@2x`).
    Double,
    /// Anything larger (`@3x`).
    Triple,
}

impl Density {
    /// Classifies dimensions into a density tier.
    ///
    /// Boundaries are inclusive: exactly 24 is [`Density::Base`], exactly 48
    /// is [`Density::Double`]. Zero dimensions are rejected rather than
    /// coerced; a zero here means a broken image header upstream.
    pub fn from_dimensions(width: u32, height: u32) -> Result<Density, InvalidDimensions> {
        if width == 0 || height == 0 {
            return Err(InvalidDimensions { width, height });
        }
        let size = width.max(height);
        if size <= BASE_SIZE {
            Ok(Density::Base)
        } else if size <= BASE_SIZE * 2 {
            Ok(Density::Double)
        } else {
            Ok(Density::Triple)
        }
    }

    /// Filename suffix for this tier, placed between stem and extension.
    pub fn suffix(self) -> &'static str {
        match self {
            Density::Base => "",
            Density::Double => "@2x",
            Density::Triple => "@3x",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_tier_up_to_base_size() {
        assert_eq!(Density::from_dimensions(24, 10), Ok(Density::Base));
        assert_eq!(Density::from_dimensions(10, 24), Ok(Density::Base));
        assert_eq!(Density::from_dimensions(24, 24), Ok(Density::Base));
        assert_eq!(Density::from_dimensions(1, 1), Ok(Density::Base));
    }

    #[test]
    fn double_tier_up_to_twice_base_size() {
        assert_eq!(Density::from_dimensions(25, 25), Ok(Density::Double));
        assert_eq!(Density::from_dimensions(48, 48), Ok(Density::Double));
        assert_eq!(Density::from_dimensions(10, 48), Ok(Density::Double));
    }

    #[test]
    fn triple_tier_above_twice_base_size() {
        assert_eq!(Density::from_dimensions(49, 1), Ok(Density::Triple));
        assert_eq!(Density::from_dimensions(1, 49), Ok(Density::Triple));
        assert_eq!(Density::from_dimensions(1024, 1024), Ok(Density::Triple));
    }

    #[test]
    fn longer_edge_decides() {
        // Shorter edge is irrelevant at every tier.
        assert_eq!(Density::from_dimensions(24, 1), Ok(Density::Base));
        assert_eq!(Density::from_dimensions(48, 1), Ok(Density::Double));
        assert_eq!(Density::from_dimensions(49, 24), Ok(Density::Triple));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            Density::from_dimensions(0, 24),
            Err(InvalidDimensions {
                width: 0,
                height: 24
            })
        );
        assert_eq!(
            Density::from_dimensions(24, 0),
            Err(InvalidDimensions {
                width: 24,
                height: 0
            })
        );
        assert_eq!(
            Density::from_dimensions(0, 0),
            Err(InvalidDimensions {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn suffixes() {
        assert_eq!(Density::Base.suffix(), "");
        assert_eq!(Density::Double.suffix(), "@2x");
        assert_eq!(Density::Triple.suffix(), "@3x");
    }
}
